//! Per-thread display names shown in every emitted line.
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of auto-generated tags; shared by every thread in the process.
static NEXT_AUTO_TAG: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Tag of the current thread, assigned on first use and never cleared.
    static THREAD_TAG: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Tag of the current thread, assigning the next sequential number if the
/// thread has none yet.
pub(super) fn current() -> String {
    THREAD_TAG.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| NEXT_AUTO_TAG.fetch_add(1, Ordering::Relaxed).to_string())
            .clone()
    })
}

/// Tag of the current thread, if one was assigned.
pub(super) fn assigned() -> Option<String> {
    THREAD_TAG.with(|cell| cell.borrow().clone())
}

/// Replace the tag of the current thread.
pub(super) fn assign(name: &str) {
    THREAD_TAG.with(|cell| {
        *cell.borrow_mut() = Some(name.to_string());
    });
}
