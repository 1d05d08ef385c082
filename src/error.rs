//! Error type for the log sink and its configuration.
//!
//! Library code returns [`SinkError`]; the demo binary converts it to
//! [`anyhow::Error`] at its boundary via the standard `?` operator.
//!
//! Emission itself never fails from the caller's point of view: write-path
//! I/O errors are swallowed and reported through `tracing`. The variants
//! below cover file lifecycle, thread naming, and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`LogSink`](crate::LogSink) and [`SinkConfig`](crate::SinkConfig).
#[derive(Error, Debug)]
pub enum SinkError {
    /// No log directory was configured and the working directory is unavailable.
    #[error("cannot resolve current working directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// The configured log directory could not be made absolute.
    #[error("cannot resolve log directory {}: {source}", .path.display())]
    ResolveDir {
        /// Directory as configured.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configured log directory could not be created.
    #[error("cannot create log directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The dated log file could not be opened for appending.
    #[error("cannot open log file {}: {source}", .path.display())]
    OpenFile {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The log directory could not be listed during retention cleanup.
    #[error("cannot scan log directory {}: {source}", .path.display())]
    ScanDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Buffered lines could not be pushed to the open log file.
    #[error("cannot flush log file {}: {source}", .path.display())]
    Flush {
        /// File whose buffer could not be flushed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An empty thread name was passed to
    /// [`LogSink::set_thread_name`](crate::LogSink::set_thread_name).
    #[error("thread name cannot be set empty")]
    EmptyThreadName,

    /// A file operation was requested while file logging is switched off.
    #[error("file logging is disabled")]
    FileDisabled,

    /// A configuration file could not be read.
    #[error("cannot read config file {}: {source}", .path.display())]
    ReadConfig {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A configuration file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid config value: {0}")]
    InvalidConfig(String),
}
