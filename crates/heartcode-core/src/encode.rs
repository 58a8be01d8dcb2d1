//! QR encoding and module rasterization.
//!
//! Version selection, masking, and error correction are delegated to the
//! `qrcode` crate; this module decides the version policy and paints the
//! module matrix into an image buffer at a configurable module size,
//! quiet-zone width, and color pair.

use image::{GrayImage, ImageBuffer, Luma, Pixel, RgbImage};
use qrcode::{EcLevel, QrCode, Version};
use tracing::debug;

use crate::Result;
use crate::color::Color;

/// Version (symbol size) selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSpec {
    /// Smallest version that fits the payload.
    Auto,
    /// Smallest version that fits, but never below the given one. A
    /// larger symbol buys extra redundancy for decorative overlays.
    AtLeast(i16),
    /// Exactly the given version; encoding fails if the payload does not
    /// fit at the requested error-correction level.
    Exact(i16),
}

/// Encoding and rasterization options.
#[derive(Debug, Clone)]
pub struct QrOptions {
    /// Error-correction level. Defaults to `H`: heart styling destroys
    /// modules, and the redundancy is what keeps the result scannable.
    pub ec_level: EcLevel,
    /// Version selection policy.
    pub version: VersionSpec,
    /// Square pixel size of one module.
    pub module_px: u32,
    /// Quiet-zone width in modules on each side.
    pub border_modules: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::H,
            version: VersionSpec::Auto,
            module_px: 10,
            border_modules: 4,
        }
    }
}

impl QrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ec_level(mut self, ec_level: EcLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    pub fn with_version(mut self, version: VersionSpec) -> Self {
        self.version = version;
        self
    }

    /// Panics if `module_px` is zero.
    pub fn with_module_px(mut self, module_px: u32) -> Self {
        assert!(module_px >= 1, "module_px must be at least 1");
        self.module_px = module_px;
        self
    }

    pub fn with_border_modules(mut self, border_modules: u32) -> Self {
        self.border_modules = border_modules;
        self
    }
}

/// Encode `text` according to the version policy.
///
/// Payloads are never truncated; capacity overflow surfaces as
/// [`crate::Error::Encode`].
pub fn encode(text: &str, opts: &QrOptions) -> Result<QrCode> {
    let code = match opts.version {
        VersionSpec::Auto => QrCode::with_error_correction_level(text, opts.ec_level)?,
        VersionSpec::Exact(v) => QrCode::with_version(text, Version::Normal(v), opts.ec_level)?,
        VersionSpec::AtLeast(min) => {
            let auto = QrCode::with_error_correction_level(text, opts.ec_level)?;
            if version_number(auto.version()) >= min {
                auto
            } else {
                QrCode::with_version(text, Version::Normal(min), opts.ec_level)?
            }
        }
    };
    debug!(
        version = version_number(code.version()),
        modules = code.width(),
        "Encoded QR payload"
    );
    Ok(code)
}

/// Encode and rasterize as a black-on-white grayscale bitmap.
pub fn render_gray(text: &str, opts: &QrOptions) -> Result<GrayImage> {
    let code = encode(text, opts)?;
    Ok(render_modules(&code, opts, Luma([0u8]), Luma([255u8])))
}

/// Encode and rasterize with arbitrary dark/light colors.
pub fn render_rgb(text: &str, opts: &QrOptions, dark: Color, light: Color) -> Result<RgbImage> {
    let code = encode(text, opts)?;
    Ok(render_modules(&code, opts, dark.to_rgb(), light.to_rgb()))
}

/// Paint the module matrix, quiet zone included, one `module_px` square
/// per module.
fn render_modules<P>(
    code: &QrCode,
    opts: &QrOptions,
    dark: P,
    light: P,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let modules = code.width() as u32;
    let scale = opts.module_px;
    let dim = (modules + 2 * opts.border_modules) * scale;
    let mut img = ImageBuffer::from_pixel(dim, dim, light);

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let x0 = (opts.border_modules + (i as u32) % modules) * scale;
            let y0 = (opts.border_modules + (i as u32) / modules) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, dark);
                }
            }
        }
    }
    img
}

fn version_number(version: Version) -> i16 {
    match version {
        Version::Normal(n) | Version::Micro(n) => n,
    }
}
