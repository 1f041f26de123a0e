// Printed border: pad the final crop with a solid white margin.

use image::{Rgb, RgbImage, imageops};

const BORDER_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Paste `photo` at `(border_width, border_width)` onto a white canvas of
/// `(w + 2*border_width, h + 2*border_width)`.
///
/// Must be the last transform before encoding: applying it earlier would
/// change the declared print pixel size and break the DPI contract.
pub fn add_border(photo: &RgbImage, border_width: u32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        photo.width() + 2 * border_width,
        photo.height() + 2 * border_width,
        BORDER_COLOR,
    );
    imageops::replace(
        &mut canvas,
        photo,
        i64::from(border_width),
        i64::from(border_width),
    );
    canvas
}
