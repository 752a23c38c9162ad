//! Quit signal - cooperative cancellation checked once per tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raised from outside (e.g. Ctrl-C) to stop the current episode early.
pub trait QuitSignal {
    fn should_quit(&self) -> bool;
}

/// Signal that is never raised.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverQuit;

impl QuitSignal for NeverQuit {
    fn should_quit(&self) -> bool {
        false
    }
}

impl QuitSignal for AtomicBool {
    fn should_quit(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<Q: QuitSignal + ?Sized> QuitSignal for Arc<Q> {
    fn should_quit(&self) -> bool {
        (**self).should_quit()
    }
}

impl<Q: QuitSignal + ?Sized> QuitSignal for &Q {
    fn should_quit(&self) -> bool {
        (**self).should_quit()
    }
}

/// Raises after a fixed number of checks. Test helper, not in the prelude.
#[derive(Debug)]
pub struct QuitAfter {
    remaining: std::cell::Cell<u64>,
}

impl QuitAfter {
    pub fn new(checks: u64) -> Self {
        Self {
            remaining: std::cell::Cell::new(checks),
        }
    }
}

impl QuitSignal for QuitAfter {
    fn should_quit(&self) -> bool {
        let left = self.remaining.get();
        if left == 0 {
            return true;
        }
        self.remaining.set(left - 1);
        false
    }
}
