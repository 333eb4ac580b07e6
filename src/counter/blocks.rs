//! Block-editor entry points.
//!
//! Thin wrappers that package loose optional arguments into
//! [`LayoutOptions`] and tolerate a missing counter.

use crate::core::Color;
use crate::traits::{SceneMetrics, Sprite, SpriteHost};

use super::label::Label;
use super::layout::LayoutOptions;
use super::widget::Counter;

/// Image type of the sprites a host creates
pub type SpriteImage<H> = <<H as SpriteHost>::Sprite as Sprite>::Image;

/// Create a counter labelled with `text`
#[allow(clippy::too_many_arguments)]
pub fn create_text_counter<H>(
    host: &mut H,
    text: &str,
    value: i32,
    x: Option<f32>,
    y: Option<f32>,
    width: Option<u32>,
    height: Option<u32>,
    text_color: Option<Color>,
    outline_color: Option<Color>,
    bg_color: Option<Color>,
    bg_image: Option<SpriteImage<H>>,
) -> Counter<H::Sprite>
where
    H: SpriteHost + SceneMetrics,
{
    let options = LayoutOptions {
        x,
        y,
        width,
        height,
        text_color,
        outline_color,
        background_color: bg_color,
        background_image: bg_image,
    };
    Counter::new(host, Label::Text(text.to_string()), value, options)
}

/// Create a counter labelled with an icon image
#[allow(clippy::too_many_arguments)]
pub fn create_image_counter<H>(
    host: &mut H,
    icon: SpriteImage<H>,
    value: i32,
    x: Option<f32>,
    y: Option<f32>,
    width: Option<u32>,
    height: Option<u32>,
    text_color: Option<Color>,
    outline_color: Option<Color>,
    bg_color: Option<Color>,
    bg_image: Option<SpriteImage<H>>,
) -> Counter<H::Sprite>
where
    H: SpriteHost + SceneMetrics,
{
    let options = LayoutOptions {
        x,
        y,
        width,
        height,
        text_color,
        outline_color,
        background_color: bg_color,
        background_image: bg_image,
    };
    Counter::new(host, Label::Icon(icon), value, options)
}

/// Set a counter's value; does nothing without a counter
pub fn set_counter_value<S: Sprite>(counter: Option<&mut Counter<S>>, value: i32) {
    if let Some(counter) = counter {
        counter.set_value(value);
    }
}

/// Change a counter's value by `amount`; does nothing without a counter
pub fn change_counter_value<S: Sprite>(counter: Option<&mut Counter<S>>, amount: i32) {
    if let Some(counter) = counter {
        counter.change_value_by(amount);
    }
}
