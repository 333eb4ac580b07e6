//! Counter layout.
//!
//! Canvas size is resolved per axis: an explicit size wins, then the
//! background image's size, then the content size plus padding.

use crate::core::{BitmapFont, Color};
use crate::traits::ImageSurface;

use super::label::{Footprint, Label};

/// Gap between the label and the value
pub const SPACING: u32 = 2;
/// Extra width and height around content-derived canvases
pub const PADDING: u32 = 4;
/// Text color when none is configured
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

/// Optional configuration captured when a counter is created
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions<I> {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub text_color: Option<Color>,
    pub outline_color: Option<Color>,
    pub background_color: Option<Color>,
    pub background_image: Option<I>,
}

impl<I> Default for LayoutOptions<I> {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            text_color: None,
            outline_color: None,
            background_color: None,
            background_image: None,
        }
    }
}

impl<I> LayoutOptions<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn outline(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn background_image(mut self, image: I) -> Self {
        self.background_image = Some(image);
        self
    }

    pub fn resolved_text_color(&self) -> Color {
        self.text_color.unwrap_or(DEFAULT_TEXT_COLOR)
    }
}

/// Which rule decided a canvas dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSource {
    Explicit,
    BackgroundImage,
    #[default]
    Content,
}

/// Geometry of one counter render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedLayout {
    pub label: Footprint,
    pub value: Footprint,
    /// Label, spacing and value side by side
    pub content: Footprint,
    pub width: u32,
    pub height: u32,
    pub width_source: SizeSource,
    pub height_source: SizeSource,
    /// Top-left of the content box, floor-centred in the canvas
    pub content_x: i32,
    pub content_y: i32,
}

impl ResolvedLayout {
    /// Left edge of the value text
    pub fn value_x(&self) -> i32 {
        self.content_x + (self.label.width + SPACING) as i32
    }
}

/// Compute the layout for `label` followed by `value_text`
pub fn resolve<I: ImageSurface>(
    label: &Label<I>,
    value_text: &str,
    options: &LayoutOptions<I>,
    font: &BitmapFont,
) -> ResolvedLayout {
    let label_fp = label.footprint(font);
    let value_fp = Footprint::of_text(value_text, font);

    let content = Footprint::new(
        label_fp.width + SPACING + value_fp.width,
        label_fp.height.max(font.glyph_height),
    );

    let background = options
        .background_image
        .as_ref()
        .map(|img| (img.width(), img.height()));

    let (width, width_source) =
        resolve_axis(options.width, background.map(|b| b.0), content.width);
    let (height, height_source) =
        resolve_axis(options.height, background.map(|b| b.1), content.height);

    ResolvedLayout {
        label: label_fp,
        value: value_fp,
        content,
        width,
        height,
        width_source,
        height_source,
        content_x: centre_offset(width, content.width),
        content_y: centre_offset(height, content.height),
    }
}

fn resolve_axis(explicit: Option<u32>, background: Option<u32>, content: u32) -> (u32, SizeSource) {
    match (explicit, background) {
        (Some(size), _) => (size, SizeSource::Explicit),
        (None, Some(size)) => (size, SizeSource::BackgroundImage),
        (None, None) => (content + PADDING, SizeSource::Content),
    }
}

/// Offset that centres `inner` in `outer`, rounded towards negative infinity
fn centre_offset(outer: u32, inner: u32) -> i32 {
    (outer as i32 - inner as i32).div_euclid(2)
}
