use std::sync::OnceLock;

use glam::Vec2;
use log::{debug, info};

use crate::core::{BitmapFont, Color};
use crate::traits::{ImageSurface, SceneMetrics, Sprite, SpriteFlag, SpriteHost, SpriteKind};

use super::label::Label;
use super::layout::{resolve, LayoutOptions, ResolvedLayout};

/// Draw order of counter sprites, above default-depth sprites
pub const COUNTER_Z: i32 = 100;
/// Anchor y when none is configured
pub const DEFAULT_Y: f32 = 10.0;

/// Diagonal offsets stamped in the outline color before the main text
const OUTLINE_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Sprite kind shared by every counter in the process
pub fn counter_kind() -> SpriteKind {
    static KIND: OnceLock<SpriteKind> = OnceLock::new();
    *KIND.get_or_init(SpriteKind::create)
}

/// A labeled numeric counter displayed as a sprite.
///
/// The counter owns its sprite: the sprite's bitmap always shows the current
/// value, and dropping the counter destroys the sprite.
pub struct Counter<S: Sprite> {
    sprite: S,
    label: Label<S::Image>,
    value: i32,
    options: LayoutOptions<S::Image>,
    font: BitmapFont,
    layout: ResolvedLayout,
}

impl<S: Sprite> Counter<S> {
    /// Create the counter's sprite, draw it and place it
    pub fn new<H>(
        host: &mut H,
        label: Label<S::Image>,
        value: i32,
        options: LayoutOptions<S::Image>,
    ) -> Self
    where
        H: SpriteHost<Sprite = S> + SceneMetrics,
    {
        let mut sprite = host.create_sprite(<H::Image as ImageSurface>::create(1, 1), counter_kind());
        sprite.set_flag(SpriteFlag::Ghost, true);
        sprite.set_z(COUNTER_Z);

        let mut counter = Self {
            sprite,
            label,
            value,
            options,
            font: BitmapFont::font5(),
            layout: ResolvedLayout::default(),
        };
        counter.redraw();

        let position = Vec2::new(
            counter
                .options
                .x
                .unwrap_or(host.screen_width() as f32 / 2.0),
            counter.options.y.unwrap_or(DEFAULT_Y),
        );
        counter.sprite.set_position(position);

        info!(
            "counter created at ({}, {}) size {}x{}",
            position.x, position.y, counter.layout.width, counter.layout.height
        );
        counter
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Show `value`, redrawing only if it changed
    pub fn set_value(&mut self, value: i32) {
        if self.value != value {
            self.value = value;
            self.redraw();
        }
    }

    /// Add `delta` to the value, saturating at the `i32` bounds
    pub fn change_value_by(&mut self, delta: i32) {
        self.set_value(self.value.saturating_add(delta));
    }

    pub fn label(&self) -> &Label<S::Image> {
        &self.label
    }

    pub fn options(&self) -> &LayoutOptions<S::Image> {
        &self.options
    }

    pub fn sprite(&self) -> &S {
        &self.sprite
    }

    /// Geometry of the most recent render
    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Destroy the counter and release its sprite
    pub fn dispose(self) {
        drop(self);
    }

    fn redraw(&mut self) {
        let value_text = self.value.to_string();
        let layout = resolve(&self.label, &value_text, &self.options, &self.font);

        let mut canvas = <S::Image as ImageSurface>::create(layout.width, layout.height);
        if let Some(background) = &self.options.background_image {
            canvas.draw_opaque(background, 0, 0);
        } else if let Some(color) = self.options.background_color {
            canvas.fill(color);
        }

        let text_color = self.options.resolved_text_color();
        let outline = self.options.outline_color;

        match &self.label {
            Label::Text(text) => print_with_outline(
                &mut canvas,
                text,
                layout.content_x,
                layout.content_y,
                text_color,
                outline,
                &self.font,
            ),
            Label::Icon(icon) => canvas.draw_transparent(icon, layout.content_x, layout.content_y),
        }

        print_with_outline(
            &mut canvas,
            &value_text,
            layout.value_x(),
            layout.content_y,
            text_color,
            outline,
            &self.font,
        );

        debug!(
            "counter redraw value={} canvas={}x{} ({:?}/{:?})",
            self.value, layout.width, layout.height, layout.width_source, layout.height_source
        );

        self.sprite.set_image(canvas);
        self.layout = layout;
    }
}

impl<S: Sprite> Drop for Counter<S> {
    fn drop(&mut self) {
        info!("counter released, last value {}", self.value);
        self.sprite.destroy();
    }
}

/// Print `text`, first stamping it diagonally in `outline` when one is set
pub fn print_with_outline<I: ImageSurface>(
    canvas: &mut I,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    outline: Option<Color>,
    font: &BitmapFont,
) {
    if let Some(outline) = outline {
        for (dx, dy) in OUTLINE_OFFSETS {
            canvas.print(text, x + dx, y + dy, outline, font);
        }
    }
    canvas.print(text, x, y, color, font);
}
