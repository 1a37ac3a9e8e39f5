//! Unified error types for the popup application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error creating or scanning the asset folder
    AssetFolder(String),
    /// Error creating or running a window
    Ui(String),
    /// Panic caught at the top level
    Unexpected(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::AssetFolder(msg) => write!(f, "Asset folder error: {}", msg),
            AppError::Ui(msg) => write!(f, "Window error: {}", msg),
            AppError::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::AssetFolder(err.to_string())
    }
}

impl From<slint::PlatformError> for AppError {
    fn from(err: slint::PlatformError) -> Self {
        AppError::Ui(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
