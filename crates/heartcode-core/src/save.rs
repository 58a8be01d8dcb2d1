//! PNG output with physical-resolution metadata.
//!
//! The `image` PNG encoder does not expose the pHYs chunk, so files are
//! written with the `png` crate directly (the codec `image` itself
//! delegates to), with pixel density derived from the requested DPI.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::Result;

const METERS_PER_INCH: f64 = 0.0254;

/// Write an RGB image as an 8-bit PNG with a pHYs resolution chunk.
///
/// DPI is stored as pixels per meter, so 300 DPI becomes 11811 px/m.
/// A partially written file is left behind on error.
pub fn write_png(img: &RgbImage, path: &Path, dpi: u32) -> Result<()> {
    let pixels_per_meter = (f64::from(dpi) / METERS_PER_INCH).round() as u32;
    debug!(
        path = %path.display(),
        w = img.width(),
        h = img.height(),
        dpi,
        pixels_per_meter,
        "Writing PNG"
    );

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb};

    #[test]
    fn writes_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = RgbImage::from_pixel(40, 40, Rgb([255, 20, 147]));
        write_png(&img, &path, 300).unwrap();

        let disk = image::open(&path).unwrap();
        assert_eq!(disk.dimensions(), (40, 40));
        assert_eq!(disk.to_rgb8().get_pixel(7, 7), &Rgb([255, 20, 147]));
    }

    #[test]
    fn embeds_phys_chunk_at_300_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dpi.png");
        let img = RgbImage::new(8, 8);
        write_png(&img, &path, 300).unwrap();

        // 300 DPI -> round(300 / 0.0254) = 11811 px/m = 0x00002E23,
        // stored big-endian for both axes plus the meter unit flag.
        let bytes = std::fs::read(&path).unwrap();
        let expected = [
            b'p', b'H', b'Y', b's',
            0x00, 0x00, 0x2E, 0x23,
            0x00, 0x00, 0x2E, 0x23,
            0x01,
        ];
        assert!(
            bytes.windows(expected.len()).any(|w| w == expected),
            "pHYs chunk missing or wrong"
        );
    }

    #[test]
    fn writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(16, 16, Rgb([76, 0, 0]));
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        write_png(&img, &a, 300).unwrap();
        write_png(&img, &b, 300).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn fails_on_unwritable_path() {
        let img = RgbImage::new(4, 4);
        let err = write_png(&img, Path::new("/nonexistent-dir/out.png"), 300).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
