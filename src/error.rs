//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, and JSON errors, and provides semantic variants
//! for argument validation and crop failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Screenshot not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Could not load image: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not write image: {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Unknown screenshot type: {kind}. Available: {available}")]
    UnknownScreenshotType { kind: String, available: String },

    #[error(
        "Crop box for {name} ({left},{top} {width}x{height}) lies outside the {image_width}x{image_height} image"
    )]
    InvalidCropBox {
        name: String,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
