//! In-memory profile store for sectioned, INI-like build profiles.
//!
//! A profile is an ordered set of sections. The implicit default section
//! (empty name) holds everything that precedes the first `[section]` header
//! and always exists. Each section keeps its `key=value` settings in first-seen
//! order and, separately, the bare lines (`include(...)`, `pkg/1.0`) that
//! carry no `=`.
//!
//! The pipeline is `parse` -> mutate (see `crate::overrides`) -> `serialize`.

mod entry;
mod model;
mod parser;
mod render;

#[cfg(test)]
mod tests;

pub use entry::Entry;
pub use model::{DEFAULT_SECTION, Profile, Section};
pub use parser::parse;
pub use render::serialize;
