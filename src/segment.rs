use image::{RgbImage, RgbaImage};

/// Pluggable background segmentation backend.
///
/// Given an opaque source image, produces a foreground image with a
/// per-pixel alpha channel and the same dimensions. Injected into the
/// pipeline as an optional capability; when absent, requests that ask for
/// background replacement fail with `SegmentationUnavailable`.
pub trait BackgroundSegmenter: Send + Sync {
    /// Extract the foreground of `image` with per-pixel transparency.
    fn segment(&self, image: &RgbImage) -> crate::error::Result<RgbaImage>;
}
