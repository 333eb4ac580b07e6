use crate::core::BitmapFont;
use crate::traits::ImageSurface;

/// Width and height of a piece of counter content, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Footprint of a line of text in `font`
    pub fn of_text(text: &str, font: &BitmapFont) -> Self {
        Self::new(font.text_width(text), font.glyph_height)
    }
}

/// What a counter shows in front of its value
#[derive(Debug, Clone, PartialEq)]
pub enum Label<I> {
    Text(String),
    Icon(I),
}

impl<I: ImageSurface> Label<I> {
    pub fn text(text: impl Into<String>) -> Self {
        Label::Text(text.into())
    }

    pub fn icon(image: I) -> Self {
        Label::Icon(image)
    }

    /// Size the label occupies in the content row
    pub fn footprint(&self, font: &BitmapFont) -> Footprint {
        match self {
            Label::Text(text) => Footprint::of_text(text, font),
            Label::Icon(image) => Footprint::new(image.width(), image.height()),
        }
    }
}
