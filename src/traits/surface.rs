use crate::core::{BitmapFont, Color};

/// Image surface abstraction - the bitmap operations a widget draws with
pub trait ImageSurface {
    /// Allocate a blank surface, every pixel set to the transparent key color
    fn create(width: u32, height: u32) -> Self
    where
        Self: Sized;

    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Fill the whole surface with a color
    fn fill(&mut self, color: Color);

    /// Copy `src` with its top-left corner at (x, y), key color included
    fn draw_opaque(&mut self, src: &Self, x: i32, y: i32);

    /// Copy `src` with its top-left corner at (x, y), skipping key-color pixels
    fn draw_transparent(&mut self, src: &Self, x: i32, y: i32);

    /// Print text with its top-left corner at (x, y) using a fixed-width font
    fn print(&mut self, text: &str, x: i32, y: i32, color: Color, font: &BitmapFont);
}
