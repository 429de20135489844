//! Page scroll lock held while an image modal is open.
//!
//! The lock belongs to one rendered document. Any number of holders may
//! acquire it; the page is scrollable again once every guard is gone.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        tracing::trace!(holders = self.holders.get(), "scroll lock acquired");

        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }
}

/// Releases its hold on the scroll lock when dropped.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
        tracing::trace!(holders = self.holders.get(), "scroll lock released");
    }
}
