pub mod background;
pub mod border;
pub mod geometry;
pub mod jpeg;

/// Fixed composition policy. Tunable constants, not request input; safe to
/// share read-only across concurrent pipeline runs.
#[derive(Debug, Clone, Copy)]
pub struct CompositionParams {
    /// Fraction of the face-box height assumed to be hair above the box.
    pub hair_factor: f64,
    /// Fraction of the crop height the head should occupy.
    pub head_height_ratio: f64,
    /// Fraction of the crop height left as margin above the head.
    pub head_top_margin_ratio: f64,
    /// Width of the optional printed border in pixels.
    pub border_width_px: u32,
}

impl Default for CompositionParams {
    fn default() -> Self {
        CompositionParams {
            hair_factor: 0.25,
            head_height_ratio: 0.7,
            head_top_margin_ratio: 0.1,
            border_width_px: 10,
        }
    }
}
