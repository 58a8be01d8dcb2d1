//! Square resizing with Lanczos3 filtering.
//!
//! The rasterized QR is an integer multiple of the module size and almost
//! never matches the composite canvas exactly, so it is stretched to an
//! exact square before styling.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};
use tracing::debug;

/// Resize an image buffer to an exact `size`×`size` square.
///
/// Uses Lanczos3 filtering for high-quality rescaling and returns the
/// input unchanged if it is already the target size.
pub fn resize_square<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    size: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    if img.width() == size && img.height() == size {
        debug!(size, "Image already at target size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w = img.width(),
        orig_h = img.height(),
        size,
        "Resizing image to exact square"
    );

    imageops::resize(img, size, size, FilterType::Lanczos3)
}
