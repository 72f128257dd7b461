//! Error types for screenshot framing

use std::path::PathBuf;

use thiserror::Error;

use crate::device::DeviceClass;

/// Result type alias for framing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading assets, rendering or saving
#[derive(Error, Debug)]
pub enum Error {
    /// An input screenshot could not be decoded (the batch skips it)
    #[error("Failed to decode screenshot {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Device artwork is missing or undecodable
    #[error("Missing {class} bezel artwork at {path}: {source}")]
    MissingBezel {
        class: DeviceClass,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No font face matches the configured name
    #[error("Font '{0}' could not be resolved")]
    FontNotFound(String),

    /// A font file was found but could not be read
    #[error("Failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A font file was found but is not a usable face
    #[error("Font file {path} is not a valid font face")]
    InvalidFont { path: PathBuf },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config JSON could not be parsed or produced
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Destination directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered screenshot could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Two screenshots map to the same output file
    #[error("Output {path} was already written for another screenshot")]
    OutputCollision { path: PathBuf },

    /// The platform has no documents (or home) directory
    #[error("Could not determine the documents directory")]
    NoDocumentsDir,
}

impl Error {
    /// Whether the batch can carry on past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Decode { .. } | Error::Write { .. } | Error::OutputCollision { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let decode = Error::Decode {
            path: PathBuf::from("a.png"),
            source: image::ImageError::IoError(std::io::Error::other("bad")),
        };
        assert!(decode.is_recoverable());
        assert!(Error::OutputCollision { path: PathBuf::from("a.png") }.is_recoverable());
        assert!(!Error::FontNotFound("Nope".into()).is_recoverable());
        assert!(!Error::Config("scale".into()).is_recoverable());
    }

    #[test]
    fn test_messages_name_the_asset() {
        let err = Error::MissingBezel {
            class: DeviceClass::Tablet,
            path: PathBuf::from("Devices/pad.png"),
            source: image::ImageError::IoError(std::io::Error::other("gone")),
        };
        let msg = err.to_string();
        assert!(msg.contains("tablet"));
        assert!(msg.contains("Devices/pad.png"));
    }
}
