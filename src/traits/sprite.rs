use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec2;

use super::surface::ImageSurface;

static NEXT_KIND: AtomicU32 = AtomicU32::new(1);

/// Sprite category tag used by hosts for kind/overlap filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKind(u32);

impl SpriteKind {
    /// Allocate a kind that no other call in this process will return
    pub fn create() -> Self {
        Self(NEXT_KIND.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Sprite behaviour flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteFlag {
    /// No collisions or overlap events
    Ghost,
    /// Not drawn by the host
    Invisible,
}

impl SpriteFlag {
    pub(crate) fn bit(self) -> u32 {
        match self {
            SpriteFlag::Ghost => 1 << 0,
            SpriteFlag::Invisible => 1 << 1,
        }
    }
}

/// A positionable, depth-ordered on-screen object owned by whoever created it
pub trait Sprite {
    type Image: ImageSurface;

    fn set_flag(&mut self, flag: SpriteFlag, on: bool);

    /// Draw order - higher values are drawn on top
    fn set_z(&mut self, z: i32);

    /// Replace the displayed bitmap
    fn set_image(&mut self, image: Self::Image);

    /// Move the sprite anchor to `position`
    fn set_position(&mut self, position: Vec2);

    /// Release the sprite from the host
    fn destroy(&mut self);
}

/// Sprite host - creates sprites managed by the host render loop
pub trait SpriteHost {
    type Image: ImageSurface;
    type Sprite: Sprite<Image = Self::Image>;

    fn create_sprite(&mut self, image: Self::Image, kind: SpriteKind) -> Self::Sprite;
}
