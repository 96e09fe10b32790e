//! Exit code constants for profile-merge.
//!
//! - 0: Success
//! - 1: Usage error (missing profile path, bad config file)
//! - 2: Invalid command-line flags (reported by clap itself)
//! - 3: I/O failure (profile unreadable or unwritable)
//! - 4: Malformed override directive

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: missing arguments or an invalid merge configuration.
pub const USAGE_ERROR: i32 = 1;

/// Reading or writing a file failed.
pub const IO_FAILURE: i32 = 3;

/// An override directive cannot be applied as written.
pub const MALFORMED_OVERRIDE: i32 = 4;
