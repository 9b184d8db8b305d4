use std::fmt;

use crate::consts::SCRIPT_EXTENSION;
use crate::error::{ImgSkillError, Result};
use crate::io::image_io::sanitize_name;

/// 8-bit RGB color of a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    /// Hex notation understood by the scripting host, e.g. `#FF0000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// One decoded pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSample {
    pub column: u32,
    /// Grows downward from the top edge.
    pub row: u32,
    pub color: Rgb,
    /// 0 is fully transparent.
    pub opacity: u8,
}

impl PixelSample {
    pub fn is_visible(&self) -> bool {
        self.opacity != 0
    }
}

/// A decoded source image.
///
/// Samples are stored in a flat row-major arena indexed by
/// `row * width + column`, one per cell, transparent cells included.
#[derive(Clone, Debug)]
pub struct ImageModel {
    name: String,
    width: u32,
    height: u32,
    samples: Vec<PixelSample>,
}

impl ImageModel {
    /// Build a model from straight RGBA8 data (4 bytes per pixel, row-major).
    pub fn from_rgba(name: String, width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImgSkillError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImgSkillError::Validation {
                field: "rgba",
                value: rgba.len().to_string(),
                reason: "buffer length does not match width * height * 4",
            });
        }

        let samples = rgba
            .chunks_exact(4)
            .enumerate()
            .map(|(i, px)| PixelSample {
                column: (i % width as usize) as u32,
                row: (i / width as usize) as u32,
                color: Rgb::new(px[0], px[1], px[2]),
                opacity: px[3],
            })
            .collect();

        Ok(Self {
            name,
            width,
            height,
            samples,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[PixelSample] {
        &self.samples
    }

    pub fn sample(&self, column: u32, row: u32) -> Option<&PixelSample> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.samples
            .get(row as usize * self.width as usize + column as usize)
    }

    /// Number of samples with non-zero opacity.
    pub fn visible_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_visible()).count()
    }

    /// Same image under a new name, sanitized like a source filename.
    /// A name that sanitizes to nothing leaves the current one in place.
    pub fn renamed(mut self, name: &str) -> Self {
        let name = sanitize_name(name);
        if !name.is_empty() {
            self.name = name;
        }
        self
    }

    /// Suggested name of the generated document, `<name>.yml`.
    pub fn output_filename(&self) -> String {
        format!("{}.{}", self.name, SCRIPT_EXTENSION)
    }
}
