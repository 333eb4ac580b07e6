pub mod scene;
pub mod sprite;
pub mod surface;

pub use scene::*;
pub use sprite::*;
pub use surface::*;
