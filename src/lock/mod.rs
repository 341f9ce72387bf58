//! Directory-creation locking.
//!
//! This module implements the mutual exclusion protocol itself:
//! - [`DirLock`] owns a marker path and runs the acquire/release protocol.
//! - [`DirLockGuard`] scopes a held lock to a block and releases on drop.
//!
//! # Lock Markers
//!
//! A lock is a plain directory at the configured path. Presence means
//! locked, absence means unlocked; nothing is written inside it and no
//! owner is recorded. Directory creation is used because it fails atomically
//! when the target already exists on virtually every filesystem, including
//! network shares that lack byte-range or `flock`-style locking. The parent
//! directory of the marker must already exist; intermediate directories are
//! never created.
//!
//! # RAII Guards
//!
//! [`DirLock::guard`] acquires and returns a guard that releases the lock
//! when dropped, on every exit path from the enclosing scope including
//! panics. If release fails during drop, a warning is printed to stderr but
//! the program does not crash.

mod guard;
mod handle;


// Re-export public API
pub use guard::DirLockGuard;
pub use handle::DirLock;
