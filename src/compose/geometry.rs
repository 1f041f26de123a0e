// Pure crop-rectangle calculations: face box + target aspect -> crop rect.

use crate::compose::CompositionParams;
use crate::detect::FaceBox;

/// Crop region within the source image, in fractional pixel coordinates.
/// Invariants: `x1 < x2`, `y1 < y2`, all bounds within the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CropRect {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Integer pixel box `(x, y, width, height)`, truncating each bound.
    pub fn to_pixel_box(&self) -> (u32, u32, u32, u32) {
        let x1 = self.x1 as u32;
        let y1 = self.y1 as u32;
        let x2 = self.x2 as u32;
        let y2 = self.y2 as u32;
        (x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }
}

/// Derive the crop rectangle that frames a detected face for an ID photo.
///
/// The head (face box plus an allowance of `hair_factor` above it for hair)
/// is placed so it occupies `head_height_ratio` of the crop height with
/// `head_top_margin_ratio` of margin above it, horizontally centered on the
/// face. The crop is clamped to the image by truncation, never by
/// rescaling: a face close to an image edge can therefore yield a crop
/// whose aspect ratio deviates from `target_aspect`. That distortion is
/// accepted and not corrected further.
///
/// # Arguments
/// * `face`          - Detected face box in source pixels
/// * `target_aspect` - Output aspect ratio (width / height)
/// * `image_width`   - Source image width in pixels
/// * `image_height`  - Source image height in pixels
/// * `params`        - Composition constants
pub fn face_anchored_crop(
    face: &FaceBox,
    target_aspect: f64,
    image_width: u32,
    image_height: u32,
    params: &CompositionParams,
) -> CropRect {
    let head_fill = 1.0 - params.head_top_margin_ratio - (1.0 - params.head_height_ratio);
    debug_assert!(head_fill > 0.0);

    let face_y = f64::from(face.y);
    let face_h = f64::from(face.height);

    let head_top_y = face_y - face_h * params.hair_factor;
    let head_height = face_h * (1.0 + params.hair_factor);

    let crop_height = head_height / head_fill;
    let crop_width = crop_height * target_aspect;

    let face_center_x = f64::from(face.x) + f64::from(face.width) / 2.0;
    let x1 = (face_center_x - crop_width / 2.0).max(0.0);
    let y1 = (head_top_y - crop_height * params.head_top_margin_ratio).max(0.0);

    let x2 = (x1 + crop_width).min(f64::from(image_width));
    let y2 = (y1 + crop_height).min(f64::from(image_height));

    CropRect { x1, y1, x2, y2 }
}

/// Centered aspect-fill crop of the full image, used when no face was
/// detected. Keeps the largest centered region with the target aspect
/// ratio, discarding content at the long edge.
pub fn center_fill_crop(image_width: u32, image_height: u32, target_aspect: f64) -> CropRect {
    let w = f64::from(image_width);
    let h = f64::from(image_height);

    let (crop_w, crop_h) = if w / h > target_aspect {
        // Source is wider than the target: constrain by height.
        (h * target_aspect, h)
    } else {
        // Source is taller than (or matches) the target: constrain by width.
        (w, w / target_aspect)
    };

    let x1 = (w - crop_w) / 2.0;
    let y1 = (h - crop_h) / 2.0;

    CropRect {
        x1,
        y1,
        x2: x1 + crop_w,
        y2: y1 + crop_h,
    }
}
