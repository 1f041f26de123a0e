use image::{Rgb, Rgba, RgbaImage};

use id_photo_maker::compose::background::composite_over;
use id_photo_maker::compose::border::add_border;

// ============================================================
// 1. Background compositor
// ============================================================

#[test]
fn test_opaque_foreground_passes_through_unchanged() {
    let mut fg = RgbaImage::new(4, 3);
    for (x, y, p) in fg.enumerate_pixels_mut() {
        *p = Rgba([(x * 40) as u8, (y * 70) as u8, 200, 255]);
    }

    let out = composite_over(&fg, [67, 142, 219]);
    assert_eq!(out.dimensions(), (4, 3));
    for (x, y, p) in out.enumerate_pixels() {
        let src = fg.get_pixel(x, y).0;
        assert_eq!(p.0, [src[0], src[1], src[2]], "pixel ({x},{y}) changed");
    }
}

#[test]
fn test_transparent_pixels_become_exactly_the_background() {
    let fg = RgbaImage::from_pixel(5, 5, Rgba([10, 20, 30, 0]));
    let out = composite_over(&fg, [67, 142, 219]);
    for p in out.pixels() {
        assert_eq!(p.0, [67, 142, 219]);
    }
}

#[test]
fn test_partial_alpha_blends_with_rounding() {
    let fg = RgbaImage::from_pixel(1, 1, Rgba([200, 200, 200, 128]));
    let out = composite_over(&fg, [100, 0, 255]);
    // (200*128 + bg*127 + 127) / 255 per channel.
    assert_eq!(out.get_pixel(0, 0).0, [150, 100, 227]);
}

#[test]
fn test_compositing_preserves_dimensions() {
    let fg = RgbaImage::new(123, 45);
    let out = composite_over(&fg, [255, 255, 255]);
    assert_eq!(out.dimensions(), (123, 45));
}

// ============================================================
// 2. Border compositor
// ============================================================

#[test]
fn test_border_expands_canvas_by_twice_the_width() {
    let photo = image::RgbImage::from_pixel(295, 413, Rgb([50, 60, 70]));
    let out = add_border(&photo, 10);
    assert_eq!(out.dimensions(), (315, 433));
}

#[test]
fn test_border_margin_is_white_and_content_is_anchored() {
    let mut photo = image::RgbImage::from_pixel(20, 30, Rgb([50, 60, 70]));
    photo.put_pixel(0, 0, Rgb([1, 2, 3]));
    photo.put_pixel(19, 29, Rgb([4, 5, 6]));

    let out = add_border(&photo, 10);

    // Margin corners are white.
    assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(39, 49).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(5, 25).0, [255, 255, 255]);

    // Content pasted at (10, 10).
    assert_eq!(out.get_pixel(10, 10).0, [1, 2, 3]);
    assert_eq!(out.get_pixel(29, 39).0, [4, 5, 6]);
    assert_eq!(out.get_pixel(15, 15).0, [50, 60, 70]);
}

#[test]
fn test_zero_border_is_identity_sized() {
    let photo = image::RgbImage::from_pixel(10, 10, Rgb([9, 9, 9]));
    let out = add_border(&photo, 0);
    assert_eq!(out.dimensions(), (10, 10));
    assert_eq!(out.get_pixel(5, 5).0, [9, 9, 9]);
}
