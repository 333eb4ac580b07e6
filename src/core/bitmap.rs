use crate::error::{CounterError, Result};
use crate::traits::ImageSurface;

use super::color::Color;
use super::font::BitmapFont;

/// Pixel count of a `width` x `height` buffer, computed without `u32` overflow
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Row-major index of (x, y) in a buffer `width` pixels wide
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Palette-indexed pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// One palette index per pixel, row-major
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Create a bitmap with every pixel transparent
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Color::TRANSPARENT; pixel_count(width, height)],
            width,
            height,
        }
    }

    /// Parse an image literal.
    ///
    /// One row per non-empty line, pixels separated by whitespace or packed
    /// together. `.` is transparent, a hex digit is a palette index.
    pub fn from_art(art: &str) -> Result<Self> {
        let mut rows: Vec<Vec<Color>> = Vec::new();

        for line in art.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_index = rows.len();
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '.' => Ok(Color::TRANSPARENT),
                    _ => Color::from_hex_digit(c).ok_or_else(|| CounterError::InvalidPixel {
                        row: row_index,
                        found: c.to_string(),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(CounterError::RaggedImage {
                        row: row_index,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len() as u32);

        Ok(Self {
            pixels: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Render back to an image literal, one row per line
    pub fn to_art(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.to_art_char()));
            out.push('\n');
        }
        out
    }

    /// Pixel at (x, y), `None` outside the bitmap
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|idx| self.pixels[idx])
    }

    /// Set a pixel, ignoring writes outside the bitmap
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color;
        }
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(pixel_index(self.width, x as u32, y as u32))
    }

    /// Copy `src` onto this bitmap, clipping at the edges
    fn blit(&mut self, src: &Bitmap, x: i32, y: i32, transparent: bool) {
        for sy in 0..src.height as i32 {
            for sx in 0..src.width as i32 {
                let color = src.pixels[pixel_index(src.width, sx as u32, sy as u32)];
                if transparent && color.is_transparent() {
                    continue;
                }
                self.set_pixel(x + sx, y + sy, color);
            }
        }
    }

    /// Iterate rows of pixels
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks panics on 0, an empty bitmap has no rows anyway
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Number of pixels that are not the key color
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Raw palette indices
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Palette indices as bytes, one per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Expand to packed RGB using the palette
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb()).collect()
    }

    /// Get bitmap dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl ImageSurface for Bitmap {
    fn create(width: u32, height: u32) -> Self {
        Bitmap::new(width, height)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn draw_opaque(&mut self, src: &Self, x: i32, y: i32) {
        self.blit(src, x, y, false);
    }

    fn draw_transparent(&mut self, src: &Self, x: i32, y: i32) {
        self.blit(src, x, y, true);
    }

    fn print(&mut self, text: &str, x: i32, y: i32, color: Color, font: &BitmapFont) {
        let advance = font.glyph_width as i32;
        for (i, c) in text.chars().enumerate() {
            let cell_x = x + i as i32 * advance;
            font.for_each_pixel(c, |gx, gy| {
                self.set_pixel(cell_x + gx as i32, y + gy as i32, color);
            });
        }
    }
}
