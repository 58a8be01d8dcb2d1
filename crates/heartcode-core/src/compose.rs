//! Layer composition — alpha overlay, mask blending, flattening, borders.

use image::{GrayImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Alpha-composite `top` over `base` in place.
///
/// Pixels of `top` falling outside `base` are ignored. The base is
/// treated as opaque, so the result stays fully opaque.
pub fn alpha_over(base: &mut RgbaImage, top: &RgbaImage) {
    for (x, y, pixel) in top.enumerate_pixels() {
        if x < base.width() && y < base.height() {
            let alpha = f32::from(pixel[3]) / 255.0;
            if alpha > 0.99 {
                base.put_pixel(x, y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(x, y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(x, y, blended);
            }
        }
    }
}

/// Blend `ink` and `background` through an 8-bit mask: 255 selects ink,
/// 0 selects background, intermediate values interpolate linearly.
///
/// All three images must share dimensions.
pub fn mask_blend(ink: &RgbImage, background: &RgbImage, mask: &GrayImage) -> RgbImage {
    debug_assert_eq!(ink.dimensions(), background.dimensions());
    debug_assert_eq!(ink.dimensions(), mask.dimensions());

    let mut out = RgbImage::new(ink.width(), ink.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let m = u16::from(mask.get_pixel(x, y)[0]);
        let a = ink.get_pixel(x, y);
        let b = background.get_pixel(x, y);
        *pixel = Rgb([
            lerp_u8(a[0], b[0], m),
            lerp_u8(a[1], b[1], m),
            lerp_u8(a[2], b[2], m),
        ]);
    }
    out
}

/// Flatten an RGBA image onto an opaque background color using its own
/// alpha channel.
pub fn flatten(img: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let mut out = RgbImage::new(img.width(), img.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let p = img.get_pixel(x, y);
        let a = u16::from(p[3]);
        *pixel = Rgb([
            lerp_u8(p[0], background[0], a),
            lerp_u8(p[1], background[1], a),
            lerp_u8(p[2], background[2], a),
        ]);
    }
    out
}

/// Center `inner` in a canvas grown by `border` pixels on every side,
/// filled with a solid color.
pub fn with_border(inner: &RgbImage, border: u32, color: Rgb<u8>) -> RgbImage {
    let mut out = RgbImage::from_pixel(
        inner.width() + 2 * border,
        inner.height() + 2 * border,
        color,
    );
    image::imageops::replace(&mut out, inner, i64::from(border), i64::from(border));
    out
}

/// Integer lerp: `top` weighted by `m / 255`, `bottom` by the remainder.
fn lerp_u8(top: u8, bottom: u8, m: u16) -> u8 {
    ((u16::from(top) * m + u16::from(bottom) * (255 - m)) / 255) as u8
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (f32::from(fg[0]) * alpha + f32::from(bg[0]) * inv) as u8,
        (f32::from(fg[1]) * alpha + f32::from(bg[1]) * inv) as u8,
        (f32::from(fg[2]) * alpha + f32::from(bg[2]) * inv) as u8,
        255,
    ])
}
