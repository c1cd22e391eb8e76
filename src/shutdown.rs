//! Process-wide shutdown coordination.
//! The Ctrl-C handler sets a flag so a running operation can stop at its next
//! chunk boundary and the menu loop exits after it.
//!
//! Notes:
//! - `request()` is safe to call from signal handlers.
//! - `Busy` marks the window in which a filesystem operation runs; prompts are
//!   outside it, so the handler may exit the process directly there.
//! - The handler stores the request before reading `BUSY` and the menu sets
//!   `BUSY` before reading the request; SeqCst makes at least one side see
//!   the other.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);
static BUSY: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

/// Whether a menu operation is currently running.
#[inline]
pub fn is_busy() -> bool {
    BUSY.load(Ordering::SeqCst)
}

/// Guard marking an operation as running until dropped.
pub struct Busy(());

impl Busy {
    pub fn enter() -> Self {
        BUSY.store(true, Ordering::SeqCst);
        Busy(())
    }
}

impl Drop for Busy {
    fn drop(&mut self) {
        BUSY.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_guard_clears_on_drop() {
        {
            let _g = Busy::enter();
            assert!(is_busy());
        }
        assert!(!is_busy());
    }
}
