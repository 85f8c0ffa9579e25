//! Sharing a cipherer or hasher between threads.
//!
//! Instances themselves carry no synchronization. [`Shared`] serializes
//! access through a lock that only it can reach, so no outside code can
//! hold the lock and stall other users.

use core::fmt;

use spin::Mutex;

/// An instance guarded by a private lock.
pub struct Shared<T> {
    inner: Mutex<T>,
}

impl<T> Shared<T> {
    /// Wraps `inner`.
    pub const fn new(inner: T) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Runs `f` with exclusive access to the wrapped instance.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Unwraps the instance.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Shared { ... }")
    }
}
