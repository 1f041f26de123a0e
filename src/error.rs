use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdPhotoError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No source image selected")]
    NoSourceSelected,

    #[error("Image read error: {0}")]
    ImageReadError(String),

    #[error("Background segmentation is not available")]
    SegmentationUnavailable,

    #[error("Background segmentation failed: {0}")]
    SegmentationFailed(String),

    #[error("Face detection model unavailable: {0}")]
    DetectionModelUnavailable(String),

    #[error("Encode or write error: {0}")]
    EncodeWriteError(String),

    #[error("Unknown failure: {0}")]
    UnknownFailure(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generates factory methods for [`IdPhotoError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl IdPhotoError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a configuration error.
    config => ConfigError,
    /// Create an image read error.
    image_read => ImageReadError,
    /// Create a segmentation failure.
    segmentation => SegmentationFailed,
    /// Create a detection-model-unavailable error.
    detection_model => DetectionModelUnavailable,
    /// Create an encode/write error.
    encode_write => EncodeWriteError,
    /// Create an unknown failure.
    unknown => UnknownFailure,
}

impl From<serde_yml::Error> for IdPhotoError {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IdPhotoError>;
