//! Error types and exit codes for recetario
//!
//! Exit codes:
//! - 0: Success (including "not found" query results)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing catalog, undecodable catalog)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or undecodable catalog (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during recetario operations
#[derive(Error, Debug)]
pub enum RecetarioError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("catalog not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("could not decode {path:?} with any supported encoding (tried: {tried})")]
    EncodingUnsupported { path: PathBuf, tried: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RecetarioError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RecetarioError::UnknownFormat(_) | RecetarioError::UsageError(_) => ExitCode::Usage,

            RecetarioError::CatalogNotFound { .. }
            | RecetarioError::EncodingUnsupported { .. } => ExitCode::Data,

            RecetarioError::Io(_) | RecetarioError::Json(_) | RecetarioError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RecetarioError::UnknownFormat(_) => "unknown_format",
            RecetarioError::UsageError(_) => "usage_error",
            RecetarioError::CatalogNotFound { .. } => "catalog_not_found",
            RecetarioError::EncodingUnsupported { .. } => "encoding_unsupported",
            RecetarioError::Io(_) => "io_error",
            RecetarioError::Json(_) => "json_error",
            RecetarioError::Other(_) => "other",
        }
    }
}

/// Result type alias for recetario operations
pub type Result<T> = std::result::Result<T, RecetarioError>;
