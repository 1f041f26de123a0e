// Fixed catalog of ID photo print specifications.

/// A named print size: output pixel dimensions, DPI metadata, and the
/// filename suffix appended to the source stem.
///
/// Adding a catalog entry must not change existing names, sizes, or
/// suffixes; callers rely on them being stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSpec {
    /// ASCII lookup name, also used in job files (e.g. `"1inch"`).
    pub name: &'static str,
    /// Display name as shown to users (e.g. `"1寸"`).
    pub display_name: &'static str,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// DPI metadata written into the JPEG (x, y).
    pub dpi: (u32, u32),
    /// Filename suffix (e.g. `"_1inch"`).
    pub suffix: &'static str,
}

/// The three supported print sizes, all at 300 DPI.
pub const CATALOG: [PhotoSpec; 3] = [
    PhotoSpec {
        name: "1inch",
        display_name: "1寸",
        width: 295,
        height: 413,
        dpi: (300, 300),
        suffix: "_1inch",
    },
    PhotoSpec {
        name: "small2inch",
        display_name: "小二寸",
        width: 390,
        height: 567,
        dpi: (300, 300),
        suffix: "_small2inch",
    },
    PhotoSpec {
        name: "2inch",
        display_name: "二寸",
        width: 413,
        height: 626,
        dpi: (300, 300),
        suffix: "_2inch",
    },
];

impl PhotoSpec {
    /// Look up a spec by its ASCII name or display name.
    pub fn by_name(name: &str) -> Option<&'static PhotoSpec> {
        let name = name.trim();
        CATALOG
            .iter()
            .find(|s| s.name == name || s.display_name == name)
    }

    /// Output aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}
