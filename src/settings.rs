//! Process-wide lock configuration.
//!
//! A [`DirLock`](crate::DirLock) built with `DirLock::new` snapshots the
//! process-wide defaults at construction time; [`set_defaults`] changes what
//! future handles see without touching existing ones. Tests, and applications
//! that prefer explicit wiring over globals, can bypass the shared state
//! entirely via `DirLock::with_settings`.

use std::sync::{LazyLock, Mutex};
use std::time::Duration;

/// Sleep between failed acquisition attempts when nothing else is configured.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for lock acquisition behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockSettings {
    /// Sleep between failed acquisition attempts. Zero means busy-poll.
    pub retry_interval: Duration,

    /// Bound on total wait during acquisition. `None` retries indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for LockSettings {
    fn default() -> Self {
        Self {
            retry_interval: DEFAULT_RETRY_INTERVAL,
            timeout: None,
        }
    }
}

static DEFAULTS: LazyLock<Mutex<LockSettings>> =
    LazyLock::new(|| Mutex::new(LockSettings::default()));

/// Snapshot of the current process-wide default settings.
pub fn defaults() -> LockSettings {
    *DEFAULTS.lock().unwrap_or_else(|poison| poison.into_inner())
}

/// Replace the process-wide default settings.
///
/// Only handles constructed afterwards observe the change; existing handles
/// keep the settings they were built with.
pub fn set_defaults(settings: LockSettings) {
    *DEFAULTS.lock().unwrap_or_else(|poison| poison.into_inner()) = settings;
}
