pub mod cli;
pub mod config;
pub mod core;
pub mod counter;
pub mod demo;
pub mod display;
pub mod error;
pub mod traits;

pub use counter::{
    change_counter_value, create_image_counter, create_text_counter, set_counter_value, Counter,
    Label, LayoutOptions,
};
pub use error::{CounterError, Result};
