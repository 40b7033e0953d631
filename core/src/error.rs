//! Error type shared by every pipeline stage.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while building a panorama pack.
///
/// No stage recovers from any of these; they propagate to the caller and end
/// the run.
#[derive(Error, Debug)]
pub enum PanoramaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Imagery provider rejected the {side} request with HTTP {status}")]
    Provider {
        side: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode image: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image: {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to serialize pack metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Failed to create HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Expected {expected} source images, found {found}")]
    MissingImages { expected: usize, found: usize },

    #[error("Invalid pack name '{0}'")]
    InvalidPackName(String),

    #[error("Config error at {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl PanoramaError {
    /// Wrap an IO error with the path it happened at.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn encode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PanoramaError>;
