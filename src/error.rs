//! Error types for profile-merge.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for profile-merge operations.
///
/// Every variant maps to an exit code. Errors are raised before anything is
/// written, so a failed run leaves the profile untouched.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Required arguments are missing.
    #[error("{0}")]
    Usage(String),

    /// An override directive cannot be applied as written.
    #[error("malformed override '{directive}': {reason}")]
    MalformedOverride { directive: String, reason: String },

    /// The merge configuration file could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(String),
}

impl MergeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::Usage(_) => exit_codes::USAGE_ERROR,
            MergeError::Config(_) => exit_codes::USAGE_ERROR,
            MergeError::MalformedOverride { .. } => exit_codes::MALFORMED_OVERRIDE,
            MergeError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for profile-merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_has_correct_exit_code() {
        let err = MergeError::Usage("no profile path provided".to_string());
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn config_error_is_a_usage_error() {
        let err = MergeError::Config("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn malformed_override_has_correct_exit_code() {
        let err = MergeError::MalformedOverride {
            directive: "compiler=gcc".to_string(),
            reason: "missing section".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::MALFORMED_OVERRIDE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = MergeError::Io("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MergeError::MalformedOverride {
            directive: "compiler=gcc".to_string(),
            reason: "expected 'section:key=value' or 'section:value'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed override 'compiler=gcc': expected 'section:key=value' or 'section:value'"
        );

        let err = MergeError::Config("overrides[0] has no section".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: overrides[0] has no section"
        );
    }
}
