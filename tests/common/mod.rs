// Shared helpers for integration tests.
//
// Provides a temporary log directory with a console-silent sink config and
// readers for the files the sink writes.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::Path;

use daylog::SinkConfig;

/// An isolated log directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct LogDir {
    /// Temporary directory receiving the log files.
    pub root: tempfile::TempDir,
}

impl LogDir {
    /// Create a new empty log directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Sink settings writing into this directory with the console switched off.
    pub fn config(&self) -> SinkConfig {
        SinkConfig {
            console: false,
            directory: Some(self.root.path().to_path_buf()),
            ..SinkConfig::default()
        }
    }

    /// Create empty files with the given names.
    pub fn touch(&self, names: &[&str]) {
        for name in names {
            std::fs::write(self.root.path().join(name), "").expect("write placeholder log");
        }
    }

    /// Sorted file names in the directory.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.root.path())
            .expect("read log dir")
            .map(|e| {
                e.expect("dir entry")
                    .file_name()
                    .into_string()
                    .expect("utf-8 file name")
            })
            .collect();
        names.sort();
        names
    }
}

/// Read `path` and return its lines without terminators.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Return `true` if `s` is exactly `[MM.DD.YYYY HH:MM:SS:mmm]`.
pub fn is_timestamp(s: &str) -> bool {
    const LAYOUT: &str = "[dd.dd.dddd dd:dd:dd:ddd]";
    s.len() == LAYOUT.len()
        && s.chars().zip(LAYOUT.chars()).all(|(c, want)| match want {
            'd' => c.is_ascii_digit(),
            other => c == other,
        })
}

/// Split a file line into `(timestamp, thread tag, text)`.
pub fn split_line(line: &str) -> Option<(&str, &str, &str)> {
    let (timestamp, rest) = line.split_at_checked(25)?;
    let rest = rest.strip_prefix(" [")?;
    let (tag, text) = rest.split_once("] ")?;
    Some((timestamp, tag, text))
}
