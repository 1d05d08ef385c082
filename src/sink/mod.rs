//! The log sink: console echo, dated log files, retention, thread tags and
//! background flushing.
//!
//! A [`LogSink`] is meant to exist once per process. The composition root
//! builds it and hands out `&LogSink` (or an `Arc<LogSink>`) to call sites;
//! the type is deliberately not `Clone`.
//!
//! # Concurrency
//!
//! Any number of threads may emit at once. The open file sits behind a
//! read/write lock: emission and flushing take it shared, (re)opening takes
//! it exclusively. Each line is handed to the console and to the file in a
//! single write, so lines from different threads may interleave but never
//! split.
//!
//! # Date rollover
//!
//! The file date is fixed when the file is opened; emission never looks at
//! the calendar. A long-running process calls
//! [`rotate_if_date_changed`](LogSink::rotate_if_date_changed) (for example
//! from a timer) or [`reopen`](LogSink::reopen) to move to a new day's file.

mod clock;
mod file;
mod flusher;
mod format;
mod retention;
mod thread_tag;

use std::fmt;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub(crate) use clock::MockClock;

use crate::config::{FlushPolicy, SinkConfig};
use crate::error::SinkError;
use crate::message::{AsDisplay, Message, Render, render_concatenated, render_spaced};
use file::LogFile;
use flusher::Flusher;
use retention::Scheme;

/// Text written by [`LogSink::separator_line`].
pub const SEPARATOR_LINE: &str = "----------";

/// Slot holding the currently open log file, if any.
#[derive(Debug, Default)]
struct ActiveFile {
    file: RwLock<Option<LogFile>>,
}

impl ActiveFile {
    fn read(&self) -> RwLockReadGuard<'_, Option<LogFile>> {
        self.file.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<LogFile>> {
        self.file.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.read().as_ref().map_or(Ok(()), LogFile::flush)
    }
}

/// Destination of console lines; standard output unless replaced.
type ConsoleWriter = Box<dyn io::Write + Send>;

/// Process-wide line logger writing to standard output and a dated file.
pub struct LogSink {
    config: SinkConfig,
    flush_policy: FlushPolicy,
    clock: Arc<dyn Clock>,
    console: Mutex<ConsoleWriter>,
    /// Absolute log directory, fixed on first successful resolution.
    directory: OnceLock<PathBuf>,
    active: Arc<ActiveFile>,
    flusher: Option<Flusher>,
}

impl LogSink {
    /// Create a sink using the system clock.
    ///
    /// See [`with_clock`](Self::with_clock).
    #[must_use]
    pub fn new(config: SinkConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a sink reading dates and times from `clock`.
    ///
    /// When file logging is enabled, today's file is opened right away. A
    /// failure to create the directory or open the file is reported on the
    /// console and leaves the sink running console-only until the next
    /// successful [`reopen`](Self::reopen). A positive flush interval starts
    /// the background flush thread.
    #[must_use]
    pub fn with_clock(config: SinkConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_console(config, clock, Box::new(io::stdout()))
    }

    /// Create a sink that sends console lines to `console` instead of
    /// standard output.
    ///
    /// Otherwise identical to [`with_clock`](Self::with_clock).
    #[must_use]
    pub fn with_console(
        config: SinkConfig,
        clock: Arc<dyn Clock>,
        console: Box<dyn io::Write + Send>,
    ) -> Self {
        let flush_policy = config.flush_policy();
        let mut sink = Self {
            config,
            flush_policy,
            clock,
            console: Mutex::new(console),
            directory: OnceLock::new(),
            active: Arc::new(ActiveFile::default()),
            flusher: None,
        };
        if !sink.config.file {
            return sink;
        }
        if let Err(e) = sink.reopen() {
            sink.report(&e);
        }
        if let FlushPolicy::Periodic(interval) = flush_policy {
            let active = Arc::clone(&sink.active);
            let tick = move || {
                if let Err(e) = active.flush() {
                    tracing::warn!(error = %e, "periodic flush failed");
                }
            };
            match Flusher::spawn(interval, tick) {
                Ok(flusher) => sink.flusher = Some(flusher),
                Err(e) => tracing::warn!(error = %e, "cannot start flush thread"),
            }
        }
        sink
    }

    /// Settings this sink was built with.
    #[must_use]
    pub const fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// Render `args` back to back and emit the result as one line.
    pub fn emit(&self, args: &[&dyn Render]) {
        self.emit_message(&render_concatenated(args));
    }

    /// Render `args` joined by single spaces and emit the result as one line.
    pub fn emit_spaced(&self, args: &[&dyn Render]) {
        self.emit_message(&render_spaced(args));
    }

    /// Emit an already rendered message as one line.
    pub fn emit_message(&self, message: &Message) {
        self.write_line(message.text());
    }

    /// Emit `format_args!` output as one line.
    pub fn emit_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit_message(&crate::msg!(args));
    }

    /// Emit a visual separator line.
    pub fn separator_line(&self) {
        self.write_line(SEPARATOR_LINE);
    }

    /// Tag of the calling thread, assigning an automatic one on first use.
    #[must_use]
    pub fn thread_name(&self) -> String {
        thread_tag::current()
    }

    /// Set the tag shown for the calling thread.
    ///
    /// An empty `name` is reported as a warning line and leaves the tag
    /// unchanged. Replacing a different tag first emits a
    /// `thread name was <old> now <new>` line under the old tag.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::EmptyThreadName`] if `name` is empty.
    pub fn set_thread_name(&self, name: &str) -> Result<(), SinkError> {
        if name.is_empty() {
            let err = SinkError::EmptyThreadName;
            self.report(&err);
            return Err(err);
        }
        if let Some(previous) = thread_tag::assigned()
            && previous != name
        {
            self.emit_spaced(&[&"thread name was", &previous, &"now", &name]);
        }
        thread_tag::assign(name);
        Ok(())
    }

    /// Push buffered file output to the operating system.
    ///
    /// Does nothing when no file is open.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Flush`] if the buffered data cannot be written.
    pub fn flush(&self) -> Result<(), SinkError> {
        self.active.flush()
    }

    /// Close the current file and open the one for today's date, then
    /// delete the oldest files beyond the retention count.
    ///
    /// Writers are held off while the file is swapped. If opening fails the
    /// sink is left without a file and keeps writing to the console.
    ///
    /// # Errors
    ///
    /// Returns an error if file logging is disabled, the configuration is
    /// invalid, or the directory or file cannot be created. Retention
    /// failures are reported but do not fail the call.
    pub fn reopen(&self) -> Result<PathBuf, SinkError> {
        if !self.config.file {
            return Err(SinkError::FileDisabled);
        }
        let mut slot = self.active.write();
        if let Some(previous) = slot.take()
            && let Err(e) = previous.flush()
        {
            tracing::warn!(error = %e, "cannot flush previous log file");
        }
        self.config.validate()?;
        let dir = self.log_directory()?;
        let name = self.config.file_name_for(self.clock.now().date());
        let file = LogFile::open(dir.join(&name))?;
        let path = file.path().to_path_buf();
        *slot = Some(file);
        drop(slot);
        tracing::debug!(path = %path.display(), "opened log file");

        let scheme = Scheme {
            prefix: &self.config.prefix,
            extension: &self.config.extension,
            current: &name,
        };
        match retention::prune(dir, scheme, self.config.retained_files()) {
            Ok(0) => {}
            Ok(removed) => tracing::debug!(removed, dir = %dir.display(), "pruned old log files"),
            Err(e) => self.report(&e),
        }
        Ok(path)
    }

    /// Reopen if today's file name differs from the open one, or if no file
    /// is open.
    ///
    /// Returns `true` when a new file was opened.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`reopen`](Self::reopen).
    pub fn rotate_if_date_changed(&self) -> Result<bool, SinkError> {
        if !self.config.file {
            return Ok(false);
        }
        let expected = self.config.file_name_for(self.clock.now().date());
        let is_current = self
            .active
            .read()
            .as_ref()
            .is_some_and(|f| f.file_name() == Some(expected.as_str()));
        if is_current {
            return Ok(false);
        }
        self.reopen()?;
        Ok(true)
    }

    /// Path of the open log file, if any.
    #[must_use]
    pub fn current_file_path(&self) -> Option<PathBuf> {
        self.active.read().as_ref().map(|f| f.path().to_path_buf())
    }

    /// Return `true` if lines are currently reaching a log file.
    #[must_use]
    pub fn is_file_open(&self) -> bool {
        self.active.read().is_some()
    }

    /// The log directory, created if missing.
    ///
    /// A relative or absent setting is resolved against the working
    /// directory once; later changes of the working directory do not move
    /// the log files.
    fn log_directory(&self) -> Result<&Path, SinkError> {
        let dir = match self.directory.get() {
            Some(dir) => dir,
            None => {
                let resolved = match &self.config.directory {
                    Some(dir) => std::path::absolute(dir).map_err(|source| SinkError::ResolveDir {
                        path: dir.clone(),
                        source,
                    })?,
                    None => std::env::current_dir().map_err(SinkError::CurrentDir)?,
                };
                self.directory.get_or_init(|| resolved)
            }
        };
        file::ensure_dir(dir)?;
        Ok(dir.as_path())
    }

    /// Report sink misuse or failure through the sink itself.
    fn report(&self, error: &SinkError) {
        tracing::warn!(%error, "log sink error");
        self.emit_spaced(&[&"WARN:", &AsDisplay(error)]);
    }

    fn write_line(&self, text: &str) {
        let timestamp = format::format_timestamp(self.clock.now());
        let tag = thread_tag::current();

        if self.config.console {
            let line = format::console_line(
                self.config.console_timestamps.then_some(timestamp.as_str()),
                self.config.thread_tags.then_some(tag.as_str()),
                text,
            );
            let mut console = self.console.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = console.write_all(line.as_bytes()) {
                tracing::warn!(error = %e, "console write failed");
            }
        }

        if !self.config.file {
            return;
        }
        let slot = self.active.read();
        let Some(file) = slot.as_ref() else {
            return;
        };
        if let Err(e) = file.write_line(&format::file_line(&timestamp, &tag, text)) {
            tracing::warn!(path = %file.path().display(), error = %e, "log file write failed");
        }
        if self.flush_policy == FlushPolicy::EveryWrite
            && let Err(e) = file.flush()
        {
            tracing::warn!(error = %e, "log file flush failed");
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("config", &self.config)
            .field("flush_policy", &self.flush_policy)
            .field("file", &self.current_file_path())
            .finish_non_exhaustive()
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        if let Some(mut flusher) = self.flusher.take() {
            flusher.stop();
        }
        let closing = self.active.write().take();
        if let Some(file) = closing
            && let Err(e) = file.flush()
        {
            tracing::warn!(error = %e, "cannot flush log file on close");
        }
    }
}
