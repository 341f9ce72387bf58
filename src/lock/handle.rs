//! The lock handle and its acquire/release protocol.

use super::guard::DirLockGuard;
use crate::error::{DirLockError, Result};
use crate::registry;
use crate::settings::{self, LockSettings};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// A mutual-exclusion lock coordinated through directory creation.
///
/// A `DirLock` is bound to one marker path. Acquiring creates the directory;
/// releasing removes it. Because `mkdir` fails atomically when the target
/// already exists, at most one handle across all cooperating processes can
/// hold the lock for a given path at any instant. No in-process state takes
/// part in that guarantee: two handles on the same path within one process
/// contend exactly like two separate processes would.
///
/// Construction never touches the filesystem, and a handle can be reused
/// for any number of acquire/release cycles.
#[derive(Debug)]
pub struct DirLock {
    /// Path of the marker directory.
    path: PathBuf,

    /// Sleep between failed acquisition attempts.
    retry_interval: Duration,

    /// Bound on total wait during [`acquire`](Self::acquire); `None` retries
    /// indefinitely.
    timeout: Option<Duration>,

    /// Whether this handle currently believes it holds the lock.
    held: bool,
}

impl DirLock {
    /// Create a handle bound to `path` using the process-wide default
    /// settings (see [`crate::settings`]).
    ///
    /// Does not touch the filesystem; the marker is only created by a later
    /// call to [`acquire`](Self::acquire) or [`try_acquire`](Self::try_acquire).
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_settings(path, &settings::defaults())
    }

    /// Create a handle bound to `path` with explicit settings.
    ///
    /// Bypasses the process-wide defaults entirely, which keeps the
    /// configuration dependency visible and injectable in tests.
    pub fn with_settings<P: Into<PathBuf>>(path: P, settings: &LockSettings) -> Self {
        Self {
            path: path.into(),
            retry_interval: settings.retry_interval,
            timeout: settings.timeout,
            held: false,
        }
    }

    /// Override the sleep between failed acquisition attempts.
    ///
    /// Zero is legal and means busy-poll.
    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    /// Bound the total wait in [`acquire`](Self::acquire).
    ///
    /// A zero timeout still attempts creation once before timing out.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Path of the marker directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this handle currently believes it holds the lock.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Sleep between failed acquisition attempts.
    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Bound on total wait during acquisition, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Block until the lock is obtained or the timeout elapses.
    ///
    /// Repeatedly attempts to create the marker directory. "Already exists"
    /// is the contended case and drives the retry loop: check the deadline,
    /// sleep for the retry interval, try again. The deadline is only checked
    /// after a failed attempt, so a zero timeout still attempts creation
    /// exactly once, and an attempt that lands after the deadline may still
    /// succeed.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The marker was created; this handle now holds the lock.
    /// * `Err(DirLockError::AlreadyHeld)` - This handle already holds the
    ///   lock; nothing was attempted.
    /// * `Err(DirLockError::Timeout)` - The deadline elapsed while another
    ///   holder kept the marker in place. The filesystem is unchanged and
    ///   the handle remains usable.
    /// * `Err(DirLockError::Io)` - Creation failed for any reason other than
    ///   "already exists" (missing parent directory, permissions, disk
    ///   errors). Surfaced immediately, never retried: it signals an
    ///   environment problem the caller must fix.
    pub fn acquire(&mut self) -> Result<()> {
        if self.held {
            return Err(DirLockError::AlreadyHeld {
                path: self.path.clone(),
            });
        }

        let start = Instant::now();
        let deadline = self.timeout.map(|t| start + t);

        loop {
            match fs::create_dir(&self.path) {
                Ok(()) => {
                    self.held = true;
                    registry::register(&self.path);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if let Some(deadline) = deadline
                        && Instant::now() >= deadline
                    {
                        return Err(DirLockError::Timeout {
                            path: self.path.clone(),
                            waited: start.elapsed(),
                        });
                    }
                    thread::sleep(self.retry_interval);
                }
                Err(e) => {
                    return Err(DirLockError::Io {
                        path: self.path.clone(),
                        source: e,
                    });
                }
            }
        }
    }

    /// Attempt a single, non-blocking acquisition.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The marker was created; this handle now holds the lock.
    /// * `Ok(false)` - Another holder has the marker. Nothing slept, nothing
    ///   retried.
    /// * `Err(DirLockError::AlreadyHeld)` - This handle already holds the lock.
    /// * `Err(DirLockError::Io)` - Creation failed for an unrelated reason.
    pub fn try_acquire(&mut self) -> Result<bool> {
        if self.held {
            return Err(DirLockError::AlreadyHeld {
                path: self.path.clone(),
            });
        }

        match fs::create_dir(&self.path) {
            Ok(()) => {
                self.held = true;
                registry::register(&self.path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(DirLockError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Remove the marker, transitioning this handle from held to not-held.
    ///
    /// The not-held check is in-process and defensive: it catches releasing
    /// twice and releasing without acquiring, independent of what is on disk.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The marker was removed; the handle no longer holds.
    /// * `Err(DirLockError::NotHeld)` - This handle does not hold the lock.
    ///   No filesystem interaction is attempted.
    /// * `Err(DirLockError::Io)` - Removal failed, e.g. the marker was
    ///   externally deleted or permissions were revoked mid-hold. That is
    ///   lock corruption and is never swallowed. The handle keeps believing
    ///   it holds, so `release` can be retried.
    pub fn release(&mut self) -> Result<()> {
        if !self.held {
            return Err(DirLockError::NotHeld {
                path: self.path.clone(),
            });
        }

        fs::remove_dir(&self.path).map_err(|e| DirLockError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        self.held = false;
        registry::deregister(&self.path);
        Ok(())
    }

    /// Acquire and scope the held lock to the returned guard.
    ///
    /// Blocks exactly like [`acquire`](Self::acquire). On success the guard
    /// mutably borrows this handle and releases the lock when dropped, on
    /// every exit path from the enclosing scope including panics. If
    /// acquisition fails, no guard is constructed and nothing is released.
    pub fn guard(&mut self) -> Result<DirLockGuard<'_>> {
        self.acquire()?;
        Ok(DirLockGuard::new(self))
    }
}
