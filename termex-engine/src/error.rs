//! Layered error types

use termex_core::{AnnotatorError, CoreError};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// The annotator failed; forwarded unchanged
    #[error(transparent)]
    Annotator(#[from] AnnotatorError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Parallel execution error
    #[error("parallel execution failed: {0}")]
    Parallel(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_core_error_conversion() {
        let err: EngineError = CoreError::InvalidTermLength(0).into();
        assert!(matches!(err, EngineError::Core(_)));
        assert!(err.to_string().starts_with("core algorithm error"));
    }

    #[test]
    fn test_annotator_error_is_transparent() {
        let err: EngineError = AnnotatorError::new("model missing").into();
        assert_eq!(err.to_string(), "annotator failure: model missing");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("model missing".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: EngineError = io.into();
        assert_eq!(err.to_string(), "I/O error: no such file");
    }
}
