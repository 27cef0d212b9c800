//! In-memory image and pixel-map output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use prism_math::Color;
use thiserror::Error;

/// Errors from image access and encoding.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Expected a whole number of {width}-pixel rows, got {len} pixels")]
    RowLength { width: u32, len: usize },

    #[error("A {width}x{height} image cannot hold {len} bytes")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

/// A width x height grid of colors in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, ImageError> {
        if x >= self.width || y >= self.height {
            return Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, ImageError> {
        Ok(self.pixels[self.index(x, y)?])
    }

    /// Overwrite the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), ImageError> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Overwrite whole rows starting at `first_row` with row-major `pixels`.
    pub fn set_rows(&mut self, first_row: u32, pixels: &[Color]) -> Result<(), ImageError> {
        let width = self.width as usize;
        if width == 0 || pixels.len() % width != 0 {
            return Err(ImageError::RowLength {
                width: self.width,
                len: pixels.len(),
            });
        }
        if pixels.is_empty() {
            return Ok(());
        }

        let rows = (pixels.len() / width) as u32;
        let start = self.index(0, first_row)?;
        self.index(0, first_row + rows - 1)?;

        self.pixels[start..start + pixels.len()].copy_from_slice(pixels);
        Ok(())
    }

    /// Iterate over rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Write the image as a plain-text P3 pixel map.
    ///
    /// Header `P3`, `<width> <height>`, `255`, then one line per row of
    /// space-separated `R G B` triplets.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for row in self.rows() {
            let mut line = String::with_capacity(row.len() * 12);
            for (i, color) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                let [r, g, b] = color.to_rgb8();
                line.push_str(&format!("{r} {g} {b}"));
            }
            writeln!(writer, "{line}")?;
        }

        Ok(())
    }

    /// Convert to an 8-bit RGB buffer of the `image` crate.
    pub fn to_rgb_image(&self) -> Result<image::RgbImage, ImageError> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        let len = bytes.len();
        image::RgbImage::from_raw(self.width, self.height, bytes).ok_or(ImageError::BufferSize {
            width: self.width,
            height: self.height,
            len,
        })
    }

    /// Save to disk. `.ppm` files are written as P3 text; any other
    /// extension is encoded by the `image` crate.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ImageError> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let mut writer = BufWriter::new(File::create(path)?);
            self.write_ppm(&mut writer)?;
            writer.flush()?;
        } else {
            self.to_rgb_image()?.save(path)?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
