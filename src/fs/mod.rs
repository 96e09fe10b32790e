//! Filesystem utilities for profile-merge.
//!
//! The profile is read once, fully, and written back only after the merge has
//! succeeded. The default write path is atomic.

pub mod atomic;
mod profile_io;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
pub use profile_io::{backup_file, backup_path, read_profile, write_in_place};
