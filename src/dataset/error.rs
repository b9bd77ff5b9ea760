//! Dataset loading error types

use thiserror::Error;

use super::types::StudentId;

/// Errors that can occur while fetching or parsing the dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local dataset file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The payload is not a valid dataset document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two students share an identifier
    #[error("Duplicate student id: {0}")]
    DuplicateStudentId(StudentId),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Result type alias for dataset operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::DuplicateStudentId(7);
        assert_eq!(err.to_string(), "Duplicate student id: 7");

        let err = LoadError::Status(404);
        assert_eq!(err.to_string(), "Unexpected HTTP status 404");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let load_err: LoadError = io_err.into();
        assert!(matches!(load_err, LoadError::Io(_)));
    }
}
