//! Error types for `faqforge`.
//!
//! Two kinds of failure exist in this tool and they are kept strictly
//! apart: batch-fatal errors (the source directory cannot be read, the
//! output directory cannot be created) surface through the enums here,
//! while per-file problems are recorded as [`SkipReason`] entries inside
//! the batch report and never abort a run.
//!
//! [`SkipReason`]: crate::compiler::SkipReason

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `faqforge` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution. Skipped files do not affect the exit code;
    /// they are data in the batch report.
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid groups file, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Batch-fatal compile error (source directory unreadable,
    /// output directory unusable)
    pub const COMPILE_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `faqforge` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum FaqForgeError {
    /// Groups configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Batch-fatal compiler error
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FaqForgeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Compile(_) => ExitCode::COMPILE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Groups configuration loading and validation errors.
///
/// The groups file maps navigation groups to a display title and the
/// category ids that belong to them; these errors cover every failure
/// mode between opening that file and producing a validated
/// [`GroupsConfig`](crate::config::GroupsConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Groups file not found or unreadable
    #[error("cannot read groups file {path}: {source}")]
    Unreadable {
        /// Path to the groups file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the groups file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// A group declares an empty display title
    #[error("group '{group}' has an empty title")]
    EmptyTitle {
        /// Name of the offending group
        group: String,
    },

    /// A group has no member categories
    #[error("group '{group}' has no members")]
    NoMembers {
        /// Name of the offending group
        group: String,
    },

    /// The same category id is claimed by two groups
    #[error("category '{category}' appears in both '{first}' and '{second}'")]
    DuplicateMember {
        /// The category id claimed twice
        category: String,
        /// First group claiming it
        first: String,
        /// Second group claiming it
        second: String,
    },
}

// ============================================================================
// Compiler Errors (batch-fatal only)
// ============================================================================

/// Batch-fatal compiler errors.
///
/// Only directory-level failures live here. Anything scoped to a single
/// source file is reported as a skip in the batch result instead.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The source directory cannot be enumerated at all
    #[error("cannot read source directory {path}: {source}")]
    SourceDir {
        /// Path to the source directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output directory cannot be created or is not writable
    #[error("cannot use output directory {path}: {source}")]
    OutputDir {
        /// Path to the output directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A compilation worker task panicked or was cancelled
    #[error("compilation task failed: {0}")]
    TaskFailed(String),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `faqforge` operations.
pub type Result<T> = std::result::Result<T, FaqForgeError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::COMPILE_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: FaqForgeError = ConfigError::EmptyTitle {
            group: "face".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_compile_error_exit_code() {
        let err: FaqForgeError = CompileError::SourceDir {
            path: PathBuf::from("/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::COMPILE_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: FaqForgeError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_duplicate_member_display() {
        let err = ConfigError::DuplicateMember {
            category: "rhinoplasty".to_string(),
            first: "face".to_string(),
            second: "popular".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rhinoplasty"));
        assert!(msg.contains("face"));
        assert!(msg.contains("popular"));
    }

    #[test]
    fn test_source_dir_error_display() {
        let err = CompileError::SourceDir {
            path: PathBuf::from("/srv/faq"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/srv/faq"));
        assert!(err.to_string().contains("denied"));
    }
}
