// Deterministic output naming: source path + spec + background -> .jpg path.

use std::path::{Path, PathBuf};

use crate::spec::PhotoSpec;

/// Derive the output path for a processed photo:
/// `<dir>/<stem><suffix>[_<bgName>_bg].jpg`.
///
/// Pure and deterministic: identical inputs always yield the same path.
/// There is no existence check or uniquification; an existing file at the
/// returned path is silently overwritten. The border option is
/// deliberately not encoded in the name.
///
/// # Arguments
/// * `source`     - Source image path
/// * `spec`       - Chosen print specification (provides the suffix)
/// * `background` - Symbolic background name when replacement was applied
pub fn resolve_output_path(source: &Path, spec: &PhotoSpec, background: Option<&str>) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}{}", spec.suffix);
    if let Some(bg) = background {
        name.push_str(&format!("_{bg}_bg"));
    }
    name.push_str(".jpg");

    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
