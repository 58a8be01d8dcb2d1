//! Heart-styled QR code image generation.
//!
//! Encodes a payload as a QR code and composites it with a heart motif:
//! either clipped to a filled heart silhouette ([`render::masked`]) or
//! overlaid with a translucent heart outline ([`render::outlined`]).
//! Output is written as PNG with print-resolution metadata.

pub mod color;
pub mod compose;
pub mod encode;
pub mod heart;
pub mod recolor;
pub mod render;
pub mod resize;
pub mod save;

// Re-exports for convenience
pub use color::Color;
pub use encode::{QrOptions, VersionSpec};
pub use render::{
    MaskedStyle, OutlinedStyle, masked, masked_to_file, outlined, outlined_to_file,
};

/// Default edge length in pixels of the composited square, before borders.
pub const DEFAULT_SIZE: u32 = 400;

/// Default border width in pixels around the heart-masked variant.
pub const DEFAULT_BORDER: u32 = 20;

/// Default resolution stamped into the output PNG for print fidelity.
pub const DEFAULT_DPI: u32 = 300;

/// Errors that can occur while generating a styled QR image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for heartcode operations.
pub type Result<T> = std::result::Result<T, Error>;
