//! Config struct definition.

use super::types::WriteMode;
use serde::{Deserialize, Serialize};

/// Merge configuration.
///
/// ```yaml
/// overrides:
///   - "settings:build_type=Release"
///   - "tool_requires:cmake/3.27.1"
/// write_mode: atomic
/// backup: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override directives applied before the command-line ones.
    pub overrides: Vec<String>,

    /// How the merged profile is written.
    pub write_mode: WriteMode,

    /// Keep a copy of the original profile at `<profile>.bak`.
    pub backup: bool,
}
