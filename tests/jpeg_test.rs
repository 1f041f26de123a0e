use image::{Rgb, RgbImage};

use id_photo_maker::compose::jpeg::encode_jpeg_with_dpi;

/// Extract `(units, x_density, y_density)` from the JFIF APP0 segment.
fn jfif_density(jpeg: &[u8]) -> Option<(u8, u16, u16)> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "missing SOI");
    let mut pos = 2;
    while pos + 4 <= jpeg.len() && jpeg[pos] == 0xFF {
        let marker = jpeg[pos + 1];
        if marker == 0xDA {
            break;
        }
        let len = usize::from(u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]));
        let seg = &jpeg[pos + 2..];
        if marker == 0xE0 && len >= 14 && &seg[2..7] == b"JFIF\0" {
            return Some((
                seg[9],
                u16::from_be_bytes([seg[10], seg[11]]),
                u16::from_be_bytes([seg[12], seg[13]]),
            ));
        }
        pos += 2 + len;
    }
    None
}

// ============================================================
// JPEG encoding with DPI metadata
// ============================================================

#[test]
fn test_encoded_jpeg_carries_dpi_density() {
    let img = RgbImage::from_pixel(16, 16, Rgb([200, 30, 30]));
    let bytes = encode_jpeg_with_dpi(&img, 95, (300, 300)).expect("encode");

    let (units, x, y) = jfif_density(&bytes).expect("JFIF APP0 present");
    assert_eq!(units, 1, "density units must be dots per inch");
    assert_eq!((x, y), (300, 300));
}

#[test]
fn test_encoded_jpeg_decodes_to_same_dimensions() {
    let img = RgbImage::from_pixel(295, 413, Rgb([10, 200, 10]));
    let bytes = encode_jpeg_with_dpi(&img, 95, (300, 300)).expect("encode");

    let decoded = image::load_from_memory(&bytes).expect("decode");
    assert_eq!(decoded.width(), 295);
    assert_eq!(decoded.height(), 413);
}

#[test]
fn test_asymmetric_density_is_preserved() {
    let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
    let bytes = encode_jpeg_with_dpi(&img, 80, (300, 600)).expect("encode");
    let (_, x, y) = jfif_density(&bytes).expect("JFIF APP0 present");
    assert_eq!((x, y), (300, 600));
}

#[test]
fn test_quality_out_of_range_is_rejected() {
    let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
    assert!(encode_jpeg_with_dpi(&img, 0, (300, 300)).is_err());
    assert!(encode_jpeg_with_dpi(&img, 101, (300, 300)).is_err());
}

#[test]
fn test_zero_dpi_is_rejected() {
    let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
    assert!(encode_jpeg_with_dpi(&img, 95, (0, 300)).is_err());
}
