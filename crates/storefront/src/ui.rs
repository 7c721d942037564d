//! Page-level UI context shared by the modals of one shopper session.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Whether the page behind a modal may scroll.
///
/// Each open modal holds a [`ScrollGuard`]; the page is locked while at
/// least one guard is alive. Guards release on drop, so a modal that goes
/// away by any path (closed, completed, session evicted) frees the page.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock background scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }

    /// CSS class for the `<body>` element.
    #[must_use]
    pub fn body_class(&self) -> &'static str {
        if self.is_locked() {
            "overflow-hidden"
        } else {
            ""
        }
    }
}

/// A held scroll lock. Dropping it releases the lock.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(lock.body_class(), "overflow-hidden");

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(lock.body_class(), "");
    }

    #[test]
    fn test_nested_guards() {
        let lock = ScrollLock::new();
        let cart = lock.acquire();
        let gallery = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(cart);
        assert!(lock.is_locked());
        drop(gallery);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::new();
        let view = lock.clone();
        let _guard = lock.acquire();
        assert!(view.is_locked());
    }

    #[test]
    fn test_released_when_owner_unwinds() {
        let lock = ScrollLock::new();
        let inner = lock.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.acquire();
            panic!("modal blew up");
        });
        assert!(result.is_err());
        assert!(!lock.is_locked());
    }
}
