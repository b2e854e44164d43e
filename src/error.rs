//! Error types shared by every part of the labelling tool

use std::path::PathBuf;
use thiserror::Error;

/// Result type for label operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a user action
#[derive(Error, Debug)]
pub enum Error {
    /// One or more form fields failed validation
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// The image file could not be read while encoding its payload
    #[error("Failed to encode image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image file is not in a format we can decode
    #[error("Failed to load image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// A stored payload is not valid base64
    #[error("Invalid image payload: {0}")]
    Payload(#[from] base64::DecodeError),

    /// Connection or statement failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system error (export targets, data directories)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Short title used for dialogs, mirroring the error category
    pub fn title(&self) -> &'static str {
        match self {
            Error::Validation(_) => "Validation Error",
            Error::ImageRead { .. } | Error::ImageDecode(_) | Error::Payload(_) => "File Error",
            Error::Database(_) => "Database Error",
            Error::Io(_) | Error::Json(_) | Error::Csv(_) => "Export Error",
            Error::Config(_) => "Configuration Error",
        }
    }
}
