//! RAII lock guard implementation.

use super::handle::DirLock;
use crate::error::Result;
use std::path::Path;

/// RAII guard for a held [`DirLock`].
///
/// When dropped, the lock is released automatically.
/// If removal fails during drop, a warning is printed but no panic occurs.
#[derive(Debug)]
pub struct DirLockGuard<'a> {
    /// The handle whose lock this guard scopes.
    lock: &'a mut DirLock,

    /// Whether the lock has been released manually.
    released: bool,
}

impl<'a> DirLockGuard<'a> {
    /// Create a new guard over an already-acquired handle.
    pub(super) fn new(lock: &'a mut DirLock) -> Self {
        Self {
            lock,
            released: false,
        }
    }

    /// Path of the marker directory.
    pub fn path(&self) -> &Path {
        self.lock.path()
    }

    /// Manually release the lock.
    ///
    /// This is useful when you want to release before the guard goes out of
    /// scope and handle errors explicitly. After a failed manual release the
    /// drop does not retry; the handle keeps believing it holds, so the
    /// caller can retry with [`DirLock::release`].
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.lock.release()
    }
}

impl Drop for DirLockGuard<'_> {
    fn drop(&mut self) {
        if !self.released
            && let Err(e) = self.lock.release()
        {
            eprintln!(
                "Warning: failed to release lock '{}': {}",
                self.lock.path().display(),
                e
            );
        }
    }
}
