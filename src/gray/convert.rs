use image::DynamicImage;

use super::GrayBuffer;

// ITU-R 601 luma weights in 16.16 fixed point, applied to 16-bit-scaled
// components. 19595 + 38470 + 7471 == 65536.
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

/// Convert a decoded image into a luminance plane of identical extent.
/// The source is never mutated; a 0-sized source yields a 0-sized plane.
pub fn to_grayscale(src: &DynamicImage) -> GrayBuffer {
    let rgb = src.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut gray = GrayBuffer::new(width, height);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (r, g, b) = (
            u32::from(r) * 0x101,
            u32::from(g) * 0x101,
            u32::from(b) * 0x101,
        );
        let luma = (LUMA_R * r + LUMA_G * g + LUMA_B * b + (1 << 15)) >> 24;
        gray.set(x, y, luma as i32);
    }
    gray
}
