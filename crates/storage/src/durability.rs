//! Durability mode for buffering backends.
//!
//! Defines when a backend that holds writes in memory pushes them to disk.

use serde::{Deserialize, Serialize};

/// Pending writes that trigger a flush under the default mode.
pub const DEFAULT_MAX_PENDING_WRITES: usize = 64;

/// Durability mode for settings writes.
///
/// # Mode Comparison
///
/// | Mode | Disk write | Use Case |
/// |------|------------|----------|
/// | None | only on explicit `flush()` | Tests, scratch stores |
/// | Batched | every N mutations | Default |
/// | Strict | every mutation | Credentials, small critical settings |
///
/// Inside a batch, automatic writes are held back and issued once when the
/// outermost batch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DurabilityMode {
    /// Never write automatically.
    ///
    /// Unflushed data is lost when the store is dropped.
    None,

    /// Write the settings file after every mutation.
    Strict,

    /// Write once `max_pending_writes` mutations have accumulated.
    Batched {
        /// Mutations allowed to pile up before a write
        #[serde(default = "default_max_pending_writes")]
        max_pending_writes: usize,
    },
}

fn default_max_pending_writes() -> usize {
    DEFAULT_MAX_PENDING_WRITES
}

impl DurabilityMode {
    /// Whether this mode ever writes without an explicit flush.
    ///
    /// Returns false for None mode, true for all others.
    pub fn writes_automatically(&self) -> bool {
        !matches!(self, DurabilityMode::None)
    }

    /// Whether `pending` buffered mutations call for a write now.
    pub fn should_flush(&self, pending: usize) -> bool {
        match self {
            DurabilityMode::None => false,
            DurabilityMode::Strict => pending > 0,
            DurabilityMode::Batched { max_pending_writes } => {
                pending > 0 && pending >= (*max_pending_writes).max(1)
            }
        }
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::None => "No automatic writes (explicit flush only)",
            DurabilityMode::Strict => "Write on every mutation (safest, slowest)",
            DurabilityMode::Batched { .. } => "Write every N mutations (balanced)",
        }
    }
}

impl Default for DurabilityMode {
    fn default() -> Self {
        DurabilityMode::Batched {
            max_pending_writes: DEFAULT_MAX_PENDING_WRITES,
        }
    }
}
