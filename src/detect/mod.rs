#[cfg(feature = "rustface")]
pub mod rustface_backend;

/// Bounding box of a detected face in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceBox {
    /// X coordinate of the top-left corner.
    pub x: u32,
    /// Y coordinate of the top-left corner.
    pub y: u32,
    /// Width of the box (> 0).
    pub width: u32,
    /// Height of the box (> 0).
    pub height: u32,
}

impl FaceBox {
    /// Box area in pixels, used for primary-face selection.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Pluggable face detection backend.
///
/// Implement this trait to provide a custom detector (ONNX, OpenCV, etc.)
/// and inject it at pipeline construction. The pipeline never mutates the
/// returned boxes.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in a row-major grayscale buffer of `width` × `height` bytes.
    /// May return an empty vector; no ordering is guaranteed.
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceBox>;
}

/// Select the face to compose around: maximum area, ties broken by
/// enumeration order (first wins).
pub fn primary_face(faces: &[FaceBox]) -> Option<&FaceBox> {
    let mut best: Option<&FaceBox> = None;
    for face in faces {
        match best {
            Some(b) if face.area() <= b.area() => {}
            _ => best = Some(face),
        }
    }
    best
}
