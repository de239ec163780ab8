//! Error types for barlog
//!
//! Centralized error handling using thiserror. Per-line parse problems
//! are deliberately not here: they are recoverable values carried by
//! the parser, not errors that propagate.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur in barlog
#[derive(Debug, Error)]
pub enum BarlogError {
    /// Root directory missing or unreadable
    #[error("Invalid root directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// Bad file discovery pattern built from the config
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for barlog operations
pub type Result<T> = std::result::Result<T, BarlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_root_error() {
        let err = BarlogError::InvalidRoot(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Invalid root directory: /no/such/dir");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BarlogError = io_err.into();
        assert!(matches!(err, BarlogError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: BarlogError = json_err.into();
        assert!(matches!(err, BarlogError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }
        assert!(returns_ok().is_ok());
    }
}
