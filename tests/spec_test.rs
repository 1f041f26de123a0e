use id_photo_maker::spec::{CATALOG, PhotoSpec};

// ============================================================
// Photo specification catalog
// ============================================================

#[test]
fn test_catalog_is_the_published_contract() {
    // These sizes and suffixes are public contract: adding a spec must not
    // change them.
    let expected = [
        ("1inch", 295, 413, "_1inch"),
        ("small2inch", 390, 567, "_small2inch"),
        ("2inch", 413, 626, "_2inch"),
    ];
    assert_eq!(CATALOG.len(), expected.len());
    for (spec, (name, w, h, suffix)) in CATALOG.iter().zip(expected) {
        assert_eq!(spec.name, name);
        assert_eq!((spec.width, spec.height), (w, h));
        assert_eq!(spec.suffix, suffix);
        assert_eq!(spec.dpi, (300, 300));
    }
}

#[test]
fn test_lookup_by_ascii_name() {
    let spec = PhotoSpec::by_name("small2inch").expect("should resolve");
    assert_eq!((spec.width, spec.height), (390, 567));
}

#[test]
fn test_lookup_by_display_name() {
    let spec = PhotoSpec::by_name("1寸").expect("should resolve");
    assert_eq!(spec.name, "1inch");
    let spec = PhotoSpec::by_name("小二寸").expect("should resolve");
    assert_eq!(spec.name, "small2inch");
}

#[test]
fn test_lookup_trims_whitespace() {
    assert!(PhotoSpec::by_name(" 2inch ").is_some());
}

#[test]
fn test_lookup_unknown_is_none() {
    assert!(PhotoSpec::by_name("passport").is_none());
}

#[test]
fn test_aspect_ratio() {
    let spec = PhotoSpec::by_name("1inch").expect("should resolve");
    assert!((spec.aspect_ratio() - 295.0 / 413.0).abs() < 1e-12);
}
