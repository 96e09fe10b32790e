//! Command implementation for profile-merge.
//!
//! There is a single command: merge the overrides into the profile and write
//! the result. `run` is the entry point called from `main`.

mod merge;


pub use merge::run;
