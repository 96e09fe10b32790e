//! Configuration types for profile-merge.

use serde::{Deserialize, Serialize};

/// How the merged profile replaces the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Write a temp file next to the target, fsync, then rename over it (default, safest).
    #[default]
    Atomic,
    /// Truncate and rewrite the target directly.
    InPlace,
}
