use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from any stage of a conversion.
///
/// Every variant is fatal: the conversion aborts and no partial output is written.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Source missing, unreadable, or not a recognizable image format.
    #[error("cannot decode image {path}: {source}")]
    Decode {
        /// Path (or `<memory>`) of the source.
        path: String,
        /// Underlying decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Image decoded to zero width or height.
    #[error("invalid image dimensions: {width}×{height}")]
    InvalidImage {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Rejected render configuration (width, ramp, multipliers).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Destination could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file missing or not valid TOML.
    #[error("configuration file {}: {reason}", path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
}

impl CoreError {
    /// Wrap any decoder error for `path`.
    pub fn decode<E>(path: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CoreError::decode("missing.png", io);
        assert!(err.to_string().contains("missing.png"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_image_message_has_dimensions() {
        let err = CoreError::InvalidImage {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "invalid image dimensions: 0×4");
    }
}
