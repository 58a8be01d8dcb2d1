//! Built-in style presets mirroring the reference artwork set.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use heartcode_core::{Color, MaskedStyle, OutlinedStyle, Result};

/// Optional style overrides applied on top of a preset.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub fill: Option<Color>,
    pub background: Option<Color>,
    pub size: Option<u32>,
    pub border: Option<u32>,
}

/// The rendering presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Hot-pink heart-masked code on white
    Heart,
    /// Full code with a deep-pink heart outline (scans most reliably)
    Outline,
    /// Red heart on a rose-tinted background
    Red,
    /// Deep-pink heart on a lavender-blush background
    Pink,
}

impl Preset {
    pub fn all() -> [Preset; 4] {
        [Preset::Heart, Preset::Outline, Preset::Red, Preset::Pink]
    }

    /// Output filename for the preset.
    pub fn filename(self) -> &'static str {
        match self {
            Preset::Heart => "heart_shaped_qr.png",
            Preset::Outline => "heart_outline_qr.png",
            Preset::Red => "red_heart_qr.png",
            Preset::Pink => "pink_heart_qr.png",
        }
    }

    /// Fill and background colors the preset was designed with.
    fn palette(self) -> (Color, Color) {
        match self {
            Preset::Heart => (Color::HOT_PINK, Color::WHITE),
            Preset::Outline => (Color::DEEP_PINK, Color::WHITE),
            Preset::Red => (Color::RED, Color::rgb(255, 228, 230)),
            Preset::Pink => (Color::DEEP_PINK, Color::rgb(255, 240, 245)),
        }
    }

    /// Render the preset for `url` and write it to `path`.
    pub fn generate(self, url: &str, path: &Path, overrides: &Overrides) -> Result<()> {
        let (fill, background) = self.palette();
        let background = overrides.background.unwrap_or(background);

        match self {
            Preset::Outline => {
                let mut style = OutlinedStyle::default().with_background(background);
                if let Some(size) = overrides.size {
                    style = style.with_size(size);
                }
                heartcode_core::outlined_to_file(url, path, &style)?;
            }
            Preset::Heart | Preset::Red | Preset::Pink => {
                let mut style = MaskedStyle::default()
                    .with_fill(overrides.fill.unwrap_or(fill))
                    .with_background(background);
                if let Some(size) = overrides.size {
                    style = style.with_size(size);
                }
                if let Some(border) = overrides.border {
                    style = style.with_border(border);
                }
                heartcode_core::masked_to_file(url, path, &style)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Heart => "heart",
            Preset::Outline => "outline",
            Preset::Red => "red",
            Preset::Pink => "pink",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_a_distinct_filename() {
        let mut names: Vec<_> = Preset::all().iter().map(|p| p.filename()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn palettes_match_reference_artwork() {
        assert_eq!(Preset::Heart.palette(), (Color::HOT_PINK, Color::WHITE));
        assert_eq!(Preset::Red.palette().1, Color::rgb(255, 228, 230));
        assert_eq!(Preset::Pink.palette().1, Color::rgb(255, 240, 245));
    }

    #[test]
    fn generate_writes_every_preset() {
        let dir = tempfile::tempdir().unwrap();
        for preset in Preset::all() {
            let path = dir.path().join(preset.filename());
            preset
                .generate("https://example.com/", &path, &Overrides::default())
                .unwrap();
            assert!(path.exists(), "{preset} missing");
        }
    }
}
