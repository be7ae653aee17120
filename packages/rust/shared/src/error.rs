//! Error types for docsnip.
//!
//! Library crates use [`DocsnipError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all docsnip operations.
#[derive(Debug, thiserror::Error)]
pub enum DocsnipError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Failure inside one of the markdown extraction stages.
    ///
    /// Never reaches callers of the public extraction operations; those
    /// report it to a diagnostic sink and fall back to a default value.
    #[error("parse error in {stage}: {message}")]
    Parse { stage: &'static str, message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input rejected before any parsing happened (size limits and the like).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocsnipError>;

impl DocsnipError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error attributed to the named extraction stage.
    pub fn parse(stage: &'static str, msg: impl Into<String>) -> Self {
        Self::Parse {
            stage,
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = DocsnipError::config("bad value for max_document_bytes");
        assert_eq!(
            err.to_string(),
            "config error: bad value for max_document_bytes"
        );

        let err = DocsnipError::parse("extract", "fence offset 12 is not a char boundary");
        assert_eq!(
            err.to_string(),
            "parse error in extract: fence offset 12 is not a char boundary"
        );

        let err = DocsnipError::validation("document is 2048 bytes, limit is 1024");
        assert!(err.to_string().contains("limit is 1024"));
    }
}
