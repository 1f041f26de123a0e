use std::path::Path;

use id_photo_maker::output::resolve_output_path;
use id_photo_maker::spec::PhotoSpec;

fn spec(name: &str) -> &'static PhotoSpec {
    PhotoSpec::by_name(name).expect("catalog spec")
}

// ============================================================
// Output path resolution
// ============================================================

#[test]
fn test_basic_suffix_replaces_extension() {
    let path = resolve_output_path(Path::new("/photos/me.png"), spec("1inch"), None);
    assert_eq!(path, Path::new("/photos/me_1inch.jpg"));
}

#[test]
fn test_background_name_is_encoded() {
    let path = resolve_output_path(Path::new("/photos/me.jpg"), spec("2inch"), Some("blue"));
    assert_eq!(path, Path::new("/photos/me_2inch_blue_bg.jpg"));
}

#[test]
fn test_custom_background_name() {
    let path = resolve_output_path(Path::new("a/b/shot.tiff"), spec("small2inch"), Some("custom"));
    assert_eq!(path, Path::new("a/b/shot_small2inch_custom_bg.jpg"));
}

#[test]
fn test_resolver_is_deterministic() {
    let a = resolve_output_path(Path::new("/p/me.bmp"), spec("1inch"), Some("red"));
    let b = resolve_output_path(Path::new("/p/me.bmp"), spec("1inch"), Some("red"));
    assert_eq!(a, b);
}

#[test]
fn test_relative_path_without_directory() {
    let path = resolve_output_path(Path::new("me.jpg"), spec("1inch"), None);
    assert_eq!(path, Path::new("me_1inch.jpg"));
}

#[test]
fn test_stem_with_inner_dots() {
    let path = resolve_output_path(Path::new("/p/me.v2.jpg"), spec("1inch"), None);
    assert_eq!(path, Path::new("/p/me.v2_1inch.jpg"));
}
