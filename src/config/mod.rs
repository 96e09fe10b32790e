//! Merge configuration for profile-merge.
//!
//! An optional YAML file (passed with `--config`) that carries overrides shared
//! across invocations and controls how the merged profile is written back.
//! Unknown fields are ignored and every field has a default.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::WriteMode;
