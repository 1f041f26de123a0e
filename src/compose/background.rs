// Alpha compositing: foreground with transparency over a solid color.

use image::{Rgb, RgbImage, RgbaImage};

/// Composite a foreground with a per-pixel alpha channel over a solid
/// background color, producing an opaque image of the same dimensions.
///
/// Each channel is blended as `(alpha*fg + (255-alpha)*bg)` with rounding,
/// so fully opaque pixels pass through unchanged and fully transparent
/// pixels become exactly the background color.
pub fn composite_over(foreground: &RgbaImage, background: [u8; 3]) -> RgbImage {
    let mut out = RgbImage::new(foreground.width(), foreground.height());

    for (x, y, pixel) in foreground.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let a = u16::from(a);
        let inv = 255 - a;

        let blend = |fg: u8, bg: u8| -> u8 {
            ((u16::from(fg) * a + u16::from(bg) * inv + 127) / 255) as u8
        };

        out.put_pixel(
            x,
            y,
            Rgb([
                blend(r, background[0]),
                blend(g, background[1]),
                blend(b, background[2]),
            ]),
        );
    }

    out
}
