//! Error types for dirlock operations.
//!
//! Uses thiserror for derive macros. Every failure surfaces to the caller;
//! the only condition absorbed internally is "marker already exists" inside
//! the acquisition retry loop, which drives backoff rather than failure.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Main error type for lock operations.
#[derive(Error, Debug)]
pub enum DirLockError {
    /// The acquisition deadline elapsed while another holder kept the marker
    /// in place. The filesystem is unchanged by the failed call.
    #[error("timed out acquiring lock '{}' after {:?}", .path.display(), .waited)]
    Timeout {
        /// The contested marker path.
        path: PathBuf,
        /// Total wall-clock time spent waiting.
        waited: Duration,
    },

    /// `acquire` was called on a handle that already holds the lock.
    #[error("lock '{}' is already held by this handle", .path.display())]
    AlreadyHeld {
        /// The marker path.
        path: PathBuf,
    },

    /// `release` was called on a handle that does not hold the lock.
    #[error("lock '{}' is not held by this handle", .path.display())]
    NotHeld {
        /// The marker path.
        path: PathBuf,
    },

    /// A filesystem operation failed for a reason other than contention:
    /// missing parent directory, revoked permissions, disk errors.
    #[error("lock I/O failure at '{}': {}", .path.display(), .source)]
    Io {
        /// The marker path.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

impl DirLockError {
    /// The marker path the failed operation was bound to.
    pub fn path(&self) -> &Path {
        match self {
            DirLockError::Timeout { path, .. }
            | DirLockError::AlreadyHeld { path }
            | DirLockError::NotHeld { path }
            | DirLockError::Io { path, .. } => path,
        }
    }
}

/// Result type alias for lock operations.
pub type Result<T> = std::result::Result<T, DirLockError>;
