use std::path::Path;

use crate::detect::{FaceBox, FaceDetector};
use crate::error::IdPhotoError;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// Loads the model file at construction; a missing or unreadable model is
/// reported as [`IdPhotoError::DetectionModelUnavailable`] rather than at
/// first detection.
pub struct SeetaDetector {
    model: rustface::Model,
}

impl SeetaDetector {
    /// Load a SeetaFace model from `model_path`.
    pub fn from_file(model_path: &Path) -> crate::error::Result<Self> {
        let data = std::fs::read(model_path).map_err(|e| {
            IdPhotoError::detection_model(format!("{}: {e}", model_path.display()))
        })?;
        let model = rustface::read_model(std::io::Cursor::new(data)).map_err(|e| {
            IdPhotoError::detection_model(format!("{}: {e}", model_path.display()))
        })?;
        Ok(Self { model })
    }
}

impl FaceDetector for SeetaDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBox> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(80);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                // SeetaFace can report boxes starting slightly off-image.
                let x = bbox.x().max(0) as u32;
                let y = bbox.y().max(0) as u32;
                if bbox.width() == 0 || bbox.height() == 0 {
                    return None;
                }
                Some(FaceBox {
                    x,
                    y,
                    width: bbox.width(),
                    height: bbox.height(),
                })
            })
            .collect()
    }
}
