//! Sink configuration: compile-time defaults with an optional TOML override.
//!
//! The constants below are the settings block of the logger. A
//! [`SinkConfig`] built with [`Default`] reproduces them exactly; a TOML file
//! may override any subset of keys:
//!
//! ```toml
//! console = true
//! file = true
//! console_timestamps = false
//! thread_tags = true
//! flush_interval_ms = 0
//! max_files = 15
//! directory = "logs"
//! prefix = "daylog_"
//! extension = ".log"
//! ```
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::SinkError;

/// Echo every line to standard output.
pub const CONSOLE_ENABLED: bool = true;
/// Append every line to the dated log file.
pub const FILE_ENABLED: bool = true;
/// Prefix console lines with the timestamp (file lines always carry it).
pub const CONSOLE_TIMESTAMPS: bool = false;
/// Prefix console lines with the thread tag (file lines always carry it).
pub const THREAD_TAGS: bool = true;
/// Milliseconds between background flushes; `0` flushes on every write,
/// a negative value never flushes automatically.
pub const FLUSH_INTERVAL_MS: i64 = 0;
/// Maximum number of dated log files kept on disk.
pub const MAX_FILES: usize = 15;
/// File name prefix, followed by the `YYYY-MM-DD` date.
pub const FILE_PREFIX: &str = "daylog_";
/// File name extension, including the dot.
pub const FILE_EXTENSION: &str = ".log";

/// How buffered file output reaches the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPolicy {
    /// Flush after every line.
    EveryWrite,
    /// Flush from a background thread on a fixed period.
    Periodic(Duration),
    /// Flush only on explicit [`LogSink::flush`](crate::LogSink::flush) and teardown.
    Never,
}

impl FlushPolicy {
    /// Derive the policy from an interval in milliseconds.
    #[must_use]
    pub fn from_interval_ms(interval_ms: i64) -> Self {
        match u64::try_from(interval_ms) {
            Ok(0) => Self::EveryWrite,
            Ok(ms) => Self::Periodic(Duration::from_millis(ms)),
            Err(_) => Self::Never,
        }
    }
}

/// Runtime view of the logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinkConfig {
    /// Echo lines to standard output.
    pub console: bool,
    /// Append lines to the dated log file.
    pub file: bool,
    /// Prefix console lines with the timestamp.
    pub console_timestamps: bool,
    /// Prefix console lines with the thread tag.
    pub thread_tags: bool,
    /// Flush interval in milliseconds, see [`FlushPolicy::from_interval_ms`].
    pub flush_interval_ms: i64,
    /// Maximum number of dated files kept on disk.
    pub max_files: usize,
    /// Directory holding the log files; `None` means the working directory.
    pub directory: Option<PathBuf>,
    /// File name prefix.
    pub prefix: String,
    /// File name extension, including the dot.
    pub extension: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            console: CONSOLE_ENABLED,
            file: FILE_ENABLED,
            console_timestamps: CONSOLE_TIMESTAMPS,
            thread_tags: THREAD_TAGS,
            flush_interval_ms: FLUSH_INTERVAL_MS,
            max_files: MAX_FILES,
            directory: None,
            prefix: FILE_PREFIX.to_string(),
            extension: FILE_EXTENSION.to_string(),
        }
    }
}

impl SinkConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, names an unknown
    /// key, or fails [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, SinkError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_toml_file(path: &Path) -> Result<Self, SinkError> {
        let content = std::fs::read_to_string(path).map_err(|source| SinkError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the naming components can form a plain file name.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidConfig`] for an empty extension or a
    /// prefix or extension containing a path separator.
    pub fn validate(&self) -> Result<(), SinkError> {
        if self.extension.is_empty() {
            return Err(SinkError::InvalidConfig(
                "extension must not be empty".to_string(),
            ));
        }
        for (key, value) in [("prefix", &self.prefix), ("extension", &self.extension)] {
            if value.contains(['/', '\\']) {
                return Err(SinkError::InvalidConfig(format!(
                    "{key} must not contain a path separator: {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// The flush policy selected by `flush_interval_ms`.
    #[must_use]
    pub fn flush_policy(&self) -> FlushPolicy {
        FlushPolicy::from_interval_ms(self.flush_interval_ms)
    }

    /// Number of files retention keeps, counting the open one; never less
    /// than one.
    #[must_use]
    pub fn retained_files(&self) -> usize {
        self.max_files.max(1)
    }

    /// Log file name for `date`: `<prefix><YYYY-MM-DD><extension>`.
    #[must_use]
    pub fn file_name_for(&self, date: NaiveDate) -> String {
        format!("{}{}{}", self.prefix, date.format("%Y-%m-%d"), self.extension)
    }
}
