// JPEG encoding with print-resolution (DPI) metadata.

use std::io::Cursor;

use image::RgbImage;

use crate::error::IdPhotoError;

/// Encode an RGB image as JPEG at the given quality, with the JFIF density
/// fields set to `dpi` in dots per inch.
///
/// The `image` crate's JPEG encoder does not expose the JFIF density
/// fields, so the APP0 segment is patched at the byte level after
/// encoding (or inserted if the encoder did not emit one).
///
/// # Arguments
/// * `photo`   - Image to encode
/// * `quality` - JPEG quality (1-100)
/// * `dpi`     - Dots-per-inch metadata (x, y)
pub fn encode_jpeg_with_dpi(
    photo: &RgbImage,
    quality: u8,
    dpi: (u32, u32),
) -> crate::error::Result<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(IdPhotoError::encode_write(format!(
            "JPEG quality must be 1-100, got {quality}"
        )));
    }

    let mut buf = Cursor::new(Vec::new());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
    photo
        .write_with_encoder(encoder)
        .map_err(|e| IdPhotoError::encode_write(e.to_string()))?;

    let mut bytes = buf.into_inner();
    set_jfif_density(&mut bytes, dpi)?;
    Ok(bytes)
}

/// JFIF APP0 density unit for dots per inch.
const DENSITY_DPI: u8 = 1;

/// Set the JFIF APP0 density of an encoded JPEG to `dpi` in inch units.
///
/// Walks the marker segments after SOI; if a `JFIF\0` APP0 is present its
/// unit/density bytes are rewritten in place, otherwise a fresh APP0 is
/// inserted directly after SOI.
fn set_jfif_density(jpeg: &mut Vec<u8>, dpi: (u32, u32)) -> crate::error::Result<()> {
    if jpeg.len() < 4 || jpeg[0] != 0xFF || jpeg[1] != 0xD8 {
        return Err(IdPhotoError::encode_write(
            "encoder produced data without a JPEG SOI marker",
        ));
    }

    let x_density = density_u16(dpi.0)?;
    let y_density = density_u16(dpi.1)?;

    let mut pos = 2;
    while pos + 4 <= jpeg.len() && jpeg[pos] == 0xFF {
        let marker = jpeg[pos + 1];
        // SOS: entropy-coded data follows, no more headers to inspect.
        if marker == 0xDA {
            break;
        }
        let len = usize::from(u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]));
        let segment = &mut jpeg[pos + 2..];
        if marker == 0xE0 && len >= 14 && segment[2..7] == *b"JFIF\0" {
            // units at +9, X density at +10..12, Y density at +12..14
            segment[9] = DENSITY_DPI;
            segment[10..12].copy_from_slice(&x_density.to_be_bytes());
            segment[12..14].copy_from_slice(&y_density.to_be_bytes());
            return Ok(());
        }
        pos += 2 + len;
    }

    // No JFIF APP0 emitted: insert one after SOI.
    let mut app0 = [0u8; 18];
    app0[0] = 0xFF;
    app0[1] = 0xE0;
    app0[2..4].copy_from_slice(&16u16.to_be_bytes());
    app0[4..9].copy_from_slice(b"JFIF\0");
    app0[9] = 1; // version 1.1
    app0[10] = 1;
    app0[11] = DENSITY_DPI;
    app0[12..14].copy_from_slice(&x_density.to_be_bytes());
    app0[14..16].copy_from_slice(&y_density.to_be_bytes());

    let mut with_app0 = Vec::with_capacity(jpeg.len() + app0.len());
    with_app0.extend_from_slice(&jpeg[..2]);
    with_app0.extend_from_slice(&app0);
    with_app0.extend_from_slice(&jpeg[2..]);
    *jpeg = with_app0;
    Ok(())
}

fn density_u16(dpi: u32) -> crate::error::Result<u16> {
    u16::try_from(dpi)
        .ok()
        .filter(|&d| d > 0)
        .ok_or_else(|| IdPhotoError::encode_write(format!("DPI out of JFIF range: {dpi}")))
}
