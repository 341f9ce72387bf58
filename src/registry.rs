//! In-process registry of held lock markers.
//!
//! Every successful acquisition records its marker path here and every
//! successful release removes it, so a process can always answer "which
//! markers do I currently own" and can bulk-remove them on its way out.
//! The crate installs no signal or exit handlers itself; applications that
//! want cleanup on SIGINT/SIGTERM or at normal exit wire [`release_all`]
//! into their own handlers.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

static ACTIVE_LOCKS: LazyLock<Mutex<HashSet<PathBuf>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

/// Record a marker this process now holds.
pub(crate) fn register(path: &Path) {
    ACTIVE_LOCKS
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .insert(path.to_path_buf());
}

/// Forget a marker this process no longer holds.
pub(crate) fn deregister(path: &Path) {
    ACTIVE_LOCKS
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .remove(path);
}

/// Marker paths this process currently holds, in no particular order.
pub fn active_locks() -> Vec<PathBuf> {
    ACTIVE_LOCKS
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .iter()
        .cloned()
        .collect()
}

/// Best-effort removal of every registered marker.
///
/// Returns how many markers were actually removed. The registry is emptied
/// either way, and surviving [`DirLock`](crate::DirLock) handles are not
/// consulted: they still believe they hold. That is acceptable for the
/// intended use, which is an exit path (atexit-style hook or a signal
/// handler installed by the application) where no handle runs afterwards.
pub fn release_all() -> usize {
    let mut locks = ACTIVE_LOCKS
        .lock()
        .unwrap_or_else(|poison| poison.into_inner());

    let mut removed = 0;
    for path in locks.drain() {
        if fs::remove_dir(&path).is_ok() {
            removed += 1;
        }
    }
    removed
}
