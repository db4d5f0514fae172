//! Custom error types for object extraction

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Extraction error types
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error
    IoError(io::Error),
    /// Image decode or encode failure
    ImageError(image::ImageError),
    /// Manifest serialization failure
    JsonError(serde_json::Error),
    /// Room source image does not exist
    MissingSourceImage(PathBuf),
    /// Malformed extraction table
    InvalidTable(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtractError::ImageError(e) => write!(f, "Image error: {}", e),
            ExtractError::JsonError(e) => write!(f, "JSON error: {}", e),
            ExtractError::MissingSourceImage(path) => write!(f, "Source image not found: {}", path.display()),
            ExtractError::InvalidTable(msg) => write!(f, "Invalid extraction table: {}", msg),
            ExtractError::GenericError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            ExtractError::ImageError(e) => Some(e),
            ExtractError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

impl From<image::ImageError> for ExtractError {
    fn from(error: image::ImageError) -> Self {
        ExtractError::ImageError(error)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(error: serde_json::Error) -> Self {
        ExtractError::JsonError(error)
    }
}

impl From<String> for ExtractError {
    fn from(msg: String) -> Self {
        ExtractError::GenericError(msg)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
