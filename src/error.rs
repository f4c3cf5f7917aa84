use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaneError {
    /// Malformed input frame: wrong channel count, zero or mismatched dimensions.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaneError>;
