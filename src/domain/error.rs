use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    UnsupportedFormat(String),
    MalformedInput(String),
    FileTooLarge { size: u64, limit: u64 },
    IoError(String),
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            AppError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            AppError::FileTooLarge { size, limit } => {
                write!(f, "File too large: {} bytes (limit {} bytes)", size, limit)
            }
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl AppError {
    /// Text shown to the person who uploaded the file.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedFormat(_) => {
                "Please select a valid Excel file (.xlsx, .xls, or .csv)".to_string()
            }
            AppError::MalformedInput(msg) => format!("Could not read the file: {}", msg),
            AppError::FileTooLarge { limit, .. } => {
                format!("File size must be less than {}MB", limit / (1024 * 1024))
            }
            AppError::IoError(msg) => format!("Failed to read the uploaded file: {}", msg),
            AppError::ConfigError(msg) => format!("Importer is misconfigured: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_size_limit() {
        let err = AppError::FileTooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert_eq!(err.user_message(), "File size must be less than 10MB");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::IoError(ref msg) if msg == "gone"));
    }
}
