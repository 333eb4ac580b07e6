mod blocks;
mod label;
mod layout;
mod widget;

pub use blocks::{
    change_counter_value, create_image_counter, create_text_counter, set_counter_value,
    SpriteImage,
};
pub use label::{Footprint, Label};
pub use layout::{
    resolve, LayoutOptions, ResolvedLayout, SizeSource, DEFAULT_TEXT_COLOR, PADDING, SPACING,
};
pub use widget::{counter_kind, print_with_outline, Counter, COUNTER_Z, DEFAULT_Y};
