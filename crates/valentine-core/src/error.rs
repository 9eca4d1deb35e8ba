//! Error types for the Valentine greeting

use thiserror::Error;

/// Main error type for greeting state operations
#[derive(Error, Debug)]
pub enum GreetingError {
    /// Hug strength outside the slider range
    #[error("Hug strength out of range: {0} (expected 1..=10)")]
    HugStrengthOutOfRange(i64),

    /// Slider value that is not an integer
    #[error("Invalid hug strength: {0:?}")]
    InvalidHugStrength(String),

    /// Star marker index with no matching nickname
    #[error("Unknown nickname index: {0}")]
    UnknownNickname(usize),

    /// Config file contents could not be decoded
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GreetingError {
    fn from(err: serde_json::Error) -> Self {
        GreetingError::Config(err.to_string())
    }
}

/// Result type alias using GreetingError
pub type GreetingResult<T> = Result<T, GreetingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GreetingError::HugStrengthOutOfRange(11);
        assert_eq!(
            format!("{}", err),
            "Hug strength out of range: 11 (expected 1..=10)"
        );

        let err = GreetingError::UnknownNickname(7);
        assert_eq!(format!("{}", err), "Unknown nickname index: 7");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GreetingError = io_err.into();
        assert!(matches!(err, GreetingError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: GreetingError = json_err.into();
        assert!(matches!(err, GreetingError::Config(_)));
    }
}
