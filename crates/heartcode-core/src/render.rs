//! The two composition variants: heart-masked and outline-overlay.
//!
//! Both start from a freshly encoded QR code, scale it to the working
//! canvas, and apply heart styling. The masked variant clips the code to
//! a filled heart; the outlined variant keeps the full code scannable
//! and draws a translucent heart on top.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::info;

use crate::color::Color;
use crate::encode::{self, QrOptions, VersionSpec};
use crate::{
    DEFAULT_BORDER, DEFAULT_DPI, DEFAULT_SIZE, Error, Result, compose, heart, recolor, resize,
    save,
};

/// Styling for the heart-masked variant.
///
/// Defaults mirror the reference artwork: a red heart on white, 400 px
/// working canvas, 20 px border, 2° curve sampling, 300 DPI output.
#[derive(Debug, Clone)]
pub struct MaskedStyle {
    /// Edge length in pixels of the working canvas, before the border.
    pub size: u32,
    /// Border width in pixels added on every side.
    pub border: u32,
    /// Heart fill color.
    pub fill: Color,
    /// Color outside the heart and in the border.
    pub background: Color,
    /// Angular sampling step of the heart curve, in degrees (1–120).
    pub step_deg: u32,
    /// Resolution stamped into the PNG.
    pub dpi: u32,
}

impl Default for MaskedStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            border: DEFAULT_BORDER,
            fill: Color::RED,
            background: Color::WHITE,
            step_deg: 2,
            dpi: DEFAULT_DPI,
        }
    }
}

impl MaskedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_step_deg(mut self, step_deg: u32) -> Self {
        self.step_deg = step_deg;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidStyle("size must be at least 1 pixel".into()));
        }
        validate_step(self.step_deg)?;
        validate_dpi(self.dpi)
    }
}

/// Styling for the outline-overlay variant.
///
/// Defaults mirror the reference artwork: deep pink modules and stroke,
/// 400 px canvas, 8 px stroke at alpha 180, 1° curve sampling.
#[derive(Debug, Clone)]
pub struct OutlinedStyle {
    /// Edge length in pixels of the output square.
    pub size: u32,
    /// Color of the dark QR modules.
    pub qr_dark: Color,
    /// Color of the light modules, also used to flatten the overlay.
    pub background: Color,
    /// Stroke color of the heart outline.
    pub stroke: Color,
    /// Stroke opacity, 0 (invisible) to 255 (opaque).
    pub stroke_alpha: u8,
    /// Stroke width in pixels.
    pub stroke_width: u32,
    /// Angular sampling step of the heart curve, in degrees (1–120).
    pub step_deg: u32,
    /// Resolution stamped into the PNG.
    pub dpi: u32,
}

impl Default for OutlinedStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            qr_dark: Color::DEEP_PINK,
            background: Color::WHITE,
            stroke: Color::DEEP_PINK,
            stroke_alpha: 180,
            stroke_width: 8,
            step_deg: 1,
            dpi: DEFAULT_DPI,
        }
    }
}

impl OutlinedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_qr_dark(mut self, qr_dark: Color) -> Self {
        self.qr_dark = qr_dark;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_stroke_alpha(mut self, stroke_alpha: u8) -> Self {
        self.stroke_alpha = stroke_alpha;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_step_deg(mut self, step_deg: u32) -> Self {
        self.step_deg = step_deg;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidStyle("size must be at least 1 pixel".into()));
        }
        if self.stroke_width == 0 {
            return Err(Error::InvalidStyle("stroke_width must be at least 1 pixel".into()));
        }
        validate_step(self.step_deg)?;
        validate_dpi(self.dpi)
    }
}

fn validate_step(step_deg: u32) -> Result<()> {
    if !(1..=120).contains(&step_deg) {
        return Err(Error::InvalidStyle(format!(
            "step_deg must be between 1 and 120 degrees, got {step_deg}"
        )));
    }
    Ok(())
}

fn validate_dpi(dpi: u32) -> Result<()> {
    if dpi == 0 {
        return Err(Error::InvalidStyle("dpi must be at least 1".into()));
    }
    Ok(())
}

/// Render the heart-masked variant: the QR pattern fills a heart shape.
///
/// The payload is encoded at the highest error-correction level, scaled
/// to the working canvas, and recolored into an ink layer (fill color,
/// darkened under dark modules). The heart mask then selects ink inside
/// the curve and background outside, and the result is centered in a
/// bordered canvas.
///
/// Masking discards every module outside the heart. The high EC level is
/// what keeps the output scannable at all; low-contrast fill/background
/// pairs may still defeat real scanners.
pub fn masked(url: &str, style: &MaskedStyle) -> Result<RgbImage> {
    style.validate()?;
    info!(url, size = style.size, "Rendering heart-masked QR");

    let opts = QrOptions::default();
    let qr = encode::render_gray(url, &opts)?;
    let qr = resize::resize_square(&qr, style.size);

    let mask = heart::heart_mask(style.size, style.step_deg);
    let ink = recolor::ink_layer(
        &qr,
        style.fill.to_rgb(),
        recolor::DARK_THRESHOLD,
        recolor::DARKEN_FACTOR,
    );
    let background = RgbImage::from_pixel(style.size, style.size, style.background.to_rgb());

    let composite = compose::mask_blend(&ink, &background, &mask);
    Ok(compose::with_border(&composite, style.border, style.background.to_rgb()))
}

/// Render the heart-masked variant and write it to `path` as PNG.
///
/// Returns the rendered image for further use.
pub fn masked_to_file<P: AsRef<Path>>(url: &str, path: P, style: &MaskedStyle) -> Result<RgbImage> {
    let img = masked(url, style)?;
    save::write_png(&img, path.as_ref(), style.dpi)?;
    info!(path = %path.as_ref().display(), "Wrote heart-masked QR");
    Ok(img)
}

/// Render the outline-overlay variant: a full QR code with a translucent
/// heart stroked on top.
///
/// The code is rendered in `qr_dark` on `background` with a version
/// floor of 3 for redundancy headroom, scaled to the canvas, overlaid
/// with the stroke, and flattened back to opaque RGB.
pub fn outlined(url: &str, style: &OutlinedStyle) -> Result<RgbImage> {
    style.validate()?;
    info!(url, size = style.size, "Rendering heart-outlined QR");

    let opts = QrOptions::default()
        .with_version(VersionSpec::AtLeast(3))
        .with_module_px(8);
    let qr = encode::render_rgb(url, &opts, style.qr_dark, style.background)?;
    let qr = resize::resize_square(&qr, style.size);

    let mut canvas = DynamicImage::ImageRgb8(qr).into_rgba8();
    let overlay = heart::heart_stroke(
        style.size,
        style.step_deg,
        style.stroke_width,
        style.stroke.to_rgba(style.stroke_alpha),
    );
    compose::alpha_over(&mut canvas, &overlay);
    Ok(compose::flatten(&canvas, style.background.to_rgb()))
}

/// Render the outline-overlay variant and write it to `path` as PNG.
///
/// Returns the rendered image for further use.
pub fn outlined_to_file<P: AsRef<Path>>(
    url: &str,
    path: P,
    style: &OutlinedStyle,
) -> Result<RgbImage> {
    let img = outlined(url, style)?;
    save::write_png(&img, path.as_ref(), style.dpi)?;
    info!(path = %path.as_ref().display(), "Wrote heart-outlined QR");
    Ok(img)
}
