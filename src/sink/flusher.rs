//! Background thread that flushes the log file on a fixed period.
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Stop flag plus the condition variable the flush thread sleeps on.
#[derive(Debug, Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

/// Handle to the periodic flush thread.
///
/// Dropping the handle stops the thread: set the flag, wake it, join it.
#[derive(Debug)]
pub(super) struct Flusher {
    signal: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl Flusher {
    /// Spawn a thread that calls `tick` every `interval` until stopped.
    pub(super) fn spawn<F>(interval: Duration, tick: F) -> std::io::Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let signal = Arc::new(StopSignal::default());
        let thread_signal = Arc::clone(&signal);
        let handle = thread::Builder::new()
            .name("daylog-flush".into())
            .spawn(move || {
                tracing::debug!(?interval, "flush thread started");
                loop {
                    let stopped = thread_signal
                        .stopped
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner);
                    let (stopped, _) = thread_signal
                        .wake
                        .wait_timeout_while(stopped, interval, |stopped| !*stopped)
                        .unwrap_or_else(PoisonError::into_inner);
                    if *stopped {
                        break;
                    }
                    drop(stopped);
                    tick();
                }
                tracing::debug!("flush thread stopped");
            })?;
        Ok(Self {
            signal,
            handle: Some(handle),
        })
    }

    /// Stop and join the thread. Safe to call more than once.
    pub(super) fn stop(&mut self) {
        *self
            .signal
            .stopped
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = true;
        self.signal.wake.notify_all();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("flush thread panicked");
        }
    }
}

impl Drop for Flusher {
    fn drop(&mut self) {
        self.stop();
    }
}
