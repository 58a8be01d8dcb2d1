//! Threshold-based recoloring of the heart's ink layer.
//!
//! Where the scaled QR bitmap is dark the fill color is darkened by a
//! fixed factor, so the modules stay legible inside the heart. The
//! threshold and factor are load-bearing for scannability.

use image::{GrayImage, Rgb, RgbImage};
use tracing::debug;

/// Luminance below which a QR pixel counts as dark.
pub const DARK_THRESHOLD: u8 = 128;

/// Channel multiplier applied to ink under dark QR modules.
pub const DARKEN_FACTOR: f64 = 0.3;

/// Shade one ink pixel against the QR luminance at the same position.
///
/// Dark pixels (luma strictly below the threshold) darken every channel
/// by `factor` with truncation toward zero; light pixels pass through
/// unchanged.
pub fn shade(ink: Rgb<u8>, luma: u8, threshold: u8, factor: f64) -> Rgb<u8> {
    if luma < threshold {
        Rgb([
            (f64::from(ink[0]) * factor) as u8,
            (f64::from(ink[1]) * factor) as u8,
            (f64::from(ink[2]) * factor) as u8,
        ])
    } else {
        ink
    }
}

/// Build the ink layer for a QR bitmap: a flat `fill` image darkened
/// wherever the QR is dark.
pub fn ink_layer(qr: &GrayImage, fill: Rgb<u8>, threshold: u8, factor: f64) -> RgbImage {
    debug!(
        w = qr.width(),
        h = qr.height(),
        threshold,
        factor,
        "Building shaded ink layer"
    );
    let mut out = RgbImage::new(qr.width(), qr.height());
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = shade(fill, qr.get_pixel(x, y)[0], threshold, factor);
    }
    out
}
