mod bitmap;
mod color;
mod font;
mod scene;

pub use bitmap::Bitmap;
pub use color::{Color, PALETTE, PALETTE_SIZE};
pub use font::BitmapFont;
pub use scene::{Scene, SpriteHandle, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
