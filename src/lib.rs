//! Mutual exclusion through directory creation.
//!
//! `dirlock` coordinates independent processes that share a filesystem but
//! cannot rely on native file locking, e.g. because the filesystem is a
//! network share without usable byte-range or `flock` primitives. The lock
//! marker is a plain directory: `mkdir` fails atomically if the target
//! already exists, so exactly one contender can create it, and removing it
//! releases the lock. Presence of the directory is the entire protocol; no
//! metadata and no owner identification are written.
//!
//! This is deliberately not a distributed-consensus lock. There is no quorum,
//! no lease renewal, no fencing token, no reader/writer mode, and no
//! automatic reclamation of markers left behind by crashed holders. There is
//! also no fairness among waiting contenders: each one independently polls,
//! and whoever's `mkdir` lands first wins.
//!
//! # Example
//!
//! ```no_run
//! use dirlock::DirLock;
//! use std::time::Duration;
//!
//! let mut lock = DirLock::new("/shared/jobs/nightly.lock")
//!     .with_retry_interval(Duration::from_millis(50))
//!     .with_timeout(Duration::from_secs(10));
//!
//! {
//!     let _guard = lock.guard()?;
//!     // Exclusive access to the shared resource until the guard drops.
//! }
//! # Ok::<(), dirlock::DirLockError>(())
//! ```
//!
//! Applications that want held markers cleaned up at exit or on a signal can
//! call [`registry::release_all`] from their own exit handlers; the crate
//! installs no handlers itself.

pub mod error;
pub mod lock;
pub mod registry;
pub mod settings;

// Re-export public API
pub use error::{DirLockError, Result};
pub use lock::{DirLock, DirLockGuard};
pub use settings::LockSettings;
