//! The open, append-mode log file.
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::SinkError;

/// An open log file with a buffered writer.
///
/// Writers share the file through `&self`; the mutex keeps each line whole.
#[derive(Debug)]
pub(super) struct LogFile {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl LogFile {
    /// Open `path` for appending, creating it if missing.
    ///
    /// On Windows the handle allows other processes to read but not write.
    pub(super) fn open(path: PathBuf) -> Result<Self, SinkError> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt as _;
            const FILE_SHARE_READ: u32 = 0x0000_0001;
            options.share_mode(FILE_SHARE_READ);
        }
        match options.open(&path) {
            Ok(file) => Ok(Self {
                path,
                writer: Mutex::new(BufWriter::new(file)),
            }),
            Err(source) => Err(SinkError::OpenFile { path, source }),
        }
    }

    /// Full path of the file.
    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, as used for retention matching.
    pub(super) fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Append one already terminated line.
    pub(super) fn write_line(&self, line: &str) -> io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line.as_bytes())
    }

    /// Push buffered lines to the operating system.
    pub(super) fn flush(&self) -> Result<(), SinkError> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
            .map_err(|source| SinkError::Flush {
                path: self.path.clone(),
                source,
            })
    }
}

/// Create `dir` and any missing parents.
pub(super) fn ensure_dir(dir: &Path) -> Result<(), SinkError> {
    fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
