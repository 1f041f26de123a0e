// Single-request pipeline: decode -> background -> detect -> compose -> encode.

use std::path::PathBuf;

use image::imageops::{self, FilterType};
use tracing::{info, warn};

use crate::compose::geometry::{center_fill_crop, face_anchored_crop};
use crate::compose::{CompositionParams, background, border, jpeg};
use crate::config::job::BackgroundChoice;
use crate::detect::{FaceDetector, primary_face};
use crate::error::IdPhotoError;
use crate::output::resolve_output_path;
use crate::segment::BackgroundSegmenter;
use crate::spec::PhotoSpec;

/// One photo to turn into an ID photo. Immutable, scoped to a single run.
#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    pub source_path: PathBuf,
    pub spec: &'static PhotoSpec,
    pub remove_background: bool,
    pub background: BackgroundChoice,
    pub add_border: bool,
}

/// Successful outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct ProcessedPhoto {
    pub output_path: PathBuf,
    /// Final encoded width in pixels (target width, plus border if added).
    pub width: u32,
    /// Final encoded height in pixels.
    pub height: u32,
    /// True when no face was detected and the centered fallback crop was
    /// used. Callers should surface this as a warning.
    pub fallback_used: bool,
}

/// The face-anchored composition pipeline.
///
/// Holds the collaborating engines and the composition constants. All
/// state is immutable after construction, so one pipeline can serve
/// concurrent runs; each `process` call is itself synchronous and
/// single-threaded, completing every stage before the next begins.
pub struct Pipeline {
    detector: Box<dyn FaceDetector>,
    segmenter: Option<Box<dyn BackgroundSegmenter>>,
    params: CompositionParams,
    jpeg_quality: u8,
}

impl Pipeline {
    /// Create a pipeline with the given face detector, no segmentation
    /// capability, and default composition constants.
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Pipeline {
            detector,
            segmenter: None,
            params: CompositionParams::default(),
            jpeg_quality: 95,
        }
    }

    /// Attach a background segmentation capability.
    pub fn with_segmenter(mut self, segmenter: Box<dyn BackgroundSegmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Override the composition constants.
    pub fn with_params(mut self, params: CompositionParams) -> Self {
        self.params = params;
        self
    }

    /// Override the JPEG output quality (default 95).
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Run the full pipeline for one request.
    ///
    /// Stages run in a fixed order with no retries: source check, decode,
    /// optional background replacement, face detection, composition (or
    /// centered fallback), resampling, optional border, encode, write.
    /// Any collaborator failure aborts the run with a typed error; the
    /// output is encoded fully in memory before the single write, so a
    /// failed run leaves no partial file on disk.
    pub fn process(&self, request: &ProcessingRequest) -> crate::error::Result<ProcessedPhoto> {
        if request.source_path.as_os_str().is_empty() {
            return Err(IdPhotoError::NoSourceSelected);
        }

        info!(source = %request.source_path.display(), spec = request.spec.name, "processing photo");

        let decoded = image::open(&request.source_path)
            .map_err(|e| IdPhotoError::image_read(e.to_string()))?;
        let mut photo = decoded.to_rgb8();

        // Background replacement runs strictly before detection and
        // cropping: compositing changes pixel content at the subject's
        // silhouette edge.
        let mut background_name = None;
        if request.remove_background {
            let Some(segmenter) = self.segmenter.as_ref() else {
                return Err(IdPhotoError::SegmentationUnavailable);
            };
            let (rgb, name) = request.background.color().ok_or_else(|| {
                IdPhotoError::config("Background removal requested without a replacement color")
            })?;
            info!(color = name, "replacing background");
            let foreground = segmenter.segment(&photo)?;
            if foreground.dimensions() != photo.dimensions() {
                return Err(IdPhotoError::segmentation(format!(
                    "segmenter returned {}x{} for a {}x{} image",
                    foreground.width(),
                    foreground.height(),
                    photo.width(),
                    photo.height()
                )));
            }
            photo = background::composite_over(&foreground, rgb);
            background_name = Some(name);
        }

        let (width, height) = photo.dimensions();
        let gray = imageops::grayscale(&photo);
        let faces = self.detector.detect(gray.as_raw(), width, height);

        let aspect = request.spec.aspect_ratio();
        let (crop, fallback_used) = match primary_face(&faces) {
            Some(face) => {
                info!(count = faces.len(), "composing around the largest detected face");
                (
                    face_anchored_crop(face, aspect, width, height, &self.params),
                    false,
                )
            }
            None => {
                warn!("no face detected; falling back to a centered crop");
                (center_fill_crop(width, height, aspect), true)
            }
        };

        let (x, y, w, h) = crop.to_pixel_box();
        if w == 0 || h == 0 {
            return Err(IdPhotoError::unknown(format!(
                "crop region collapsed to {w}x{h} pixels"
            )));
        }
        let cropped = imageops::crop_imm(&photo, x, y, w, h).to_image();
        let mut composed = imageops::resize(
            &cropped,
            request.spec.width,
            request.spec.height,
            FilterType::Lanczos3,
        );

        // Border is the last transform before encoding; earlier would
        // shift the declared print pixel size.
        if request.add_border {
            composed = border::add_border(&composed, self.params.border_width_px);
        }

        let output_path = resolve_output_path(&request.source_path, request.spec, background_name);
        let bytes = jpeg::encode_jpeg_with_dpi(&composed, self.jpeg_quality, request.spec.dpi)?;
        std::fs::write(&output_path, bytes).map_err(|e| {
            IdPhotoError::encode_write(format!("{}: {e}", output_path.display()))
        })?;

        info!(output = %output_path.display(), "photo written");

        Ok(ProcessedPhoto {
            output_path,
            width: composed.width(),
            height: composed.height(),
            fallback_used,
        })
    }
}
