use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use log::trace;

use crate::traits::{ImageSurface, SceneMetrics, Sprite, SpriteFlag, SpriteHost, SpriteKind};

use super::bitmap::Bitmap;
use super::color::Color;

/// Default screen size of the reference host
pub const DEFAULT_SCREEN_WIDTH: u32 = 160;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 120;

#[derive(Debug, Clone)]
struct SpriteEntry {
    id: u32,
    kind: SpriteKind,
    image: Bitmap,
    position: Vec2,
    z: i32,
    flags: u32,
}

#[derive(Debug, Default)]
struct SpriteStore {
    /// Live sprites in creation order
    sprites: Vec<SpriteEntry>,
    next_id: u32,
}

impl SpriteStore {
    fn get_mut(&mut self, id: u32) -> Option<&mut SpriteEntry> {
        self.sprites.iter_mut().find(|s| s.id == id)
    }

    fn get(&self, id: u32) -> Option<&SpriteEntry> {
        self.sprites.iter().find(|s| s.id == id)
    }
}

/// In-memory sprite host - owns the sprite list and composes frames
pub struct Scene {
    width: u32,
    height: u32,
    background: Color,
    store: Rc<RefCell<SpriteStore>>,
}

impl Scene {
    /// Create an empty scene with a transparent background
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::TRANSPARENT,
            store: Rc::new(RefCell::new(SpriteStore::default())),
        }
    }

    /// Set the color the screen is cleared to before sprites are drawn
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Number of live sprites
    pub fn sprite_count(&self) -> usize {
        self.store.borrow().sprites.len()
    }

    /// Number of live sprites of `kind`
    pub fn count_of_kind(&self, kind: SpriteKind) -> usize {
        self.store
            .borrow()
            .sprites
            .iter()
            .filter(|s| s.kind == kind)
            .count()
    }

    /// Compose all visible sprites onto a fresh screen bitmap.
    ///
    /// Sprites are drawn in ascending z, ties in creation order, each centred
    /// on its position with key-color transparency.
    pub fn render(&self) -> Bitmap {
        let mut screen = Bitmap::new(self.width, self.height);
        screen.fill(self.background);

        let store = self.store.borrow();
        let mut order: Vec<&SpriteEntry> = store
            .sprites
            .iter()
            .filter(|s| s.flags & SpriteFlag::Invisible.bit() == 0)
            .collect();
        order.sort_by_key(|s| s.z);

        for sprite in order {
            let (x, y) = top_left(sprite.position, &sprite.image);
            trace!("compose sprite {} at ({}, {}) z={}", sprite.id, x, y, sprite.z);
            screen.draw_transparent(&sprite.image, x, y);
        }

        screen
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    }
}

/// Top-left pixel of a bitmap centred on `position`
fn top_left(position: Vec2, image: &Bitmap) -> (i32, i32) {
    let half = Vec2::new(image.width() as f32, image.height() as f32) / 2.0;
    let corner = (position - half).floor();
    (corner.x as i32, corner.y as i32)
}

impl SceneMetrics for Scene {
    fn screen_width(&self) -> u32 {
        self.width
    }

    fn screen_height(&self) -> u32 {
        self.height
    }
}

impl SpriteHost for Scene {
    type Image = Bitmap;
    type Sprite = SpriteHandle;

    fn create_sprite(&mut self, image: Bitmap, kind: SpriteKind) -> SpriteHandle {
        let mut store = self.store.borrow_mut();
        let id = store.next_id;
        store.next_id += 1;
        store.sprites.push(SpriteEntry {
            id,
            kind,
            image,
            position: Vec2::ZERO,
            z: 0,
            flags: 0,
        });

        SpriteHandle {
            id,
            store: Rc::downgrade(&self.store),
        }
    }
}

/// Handle to a sprite living in a [`Scene`].
///
/// Operations on a destroyed sprite, or one whose scene is gone, do nothing.
#[derive(Debug)]
pub struct SpriteHandle {
    id: u32,
    store: Weak<RefCell<SpriteStore>>,
}

impl SpriteHandle {
    fn with_entry<R>(&self, f: impl FnOnce(&SpriteEntry) -> R) -> Option<R> {
        let rc = self.store.upgrade()?;
        let store = rc.borrow();
        store.get(self.id).map(f)
    }

    fn update(&self, f: impl FnOnce(&mut SpriteEntry)) {
        if let Some(store) = self.store.upgrade() {
            if let Some(entry) = store.borrow_mut().get_mut(self.id) {
                f(entry);
            }
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether the sprite is still registered with its scene
    pub fn is_alive(&self) -> bool {
        self.with_entry(|_| ()).is_some()
    }

    /// Copy of the current bitmap
    pub fn image(&self) -> Option<Bitmap> {
        self.with_entry(|s| s.image.clone())
    }

    pub fn position(&self) -> Option<Vec2> {
        self.with_entry(|s| s.position)
    }

    pub fn z(&self) -> Option<i32> {
        self.with_entry(|s| s.z)
    }

    pub fn kind(&self) -> Option<SpriteKind> {
        self.with_entry(|s| s.kind)
    }

    pub fn has_flag(&self, flag: SpriteFlag) -> bool {
        self.with_entry(|s| s.flags & flag.bit() != 0)
            .unwrap_or(false)
    }
}

impl Sprite for SpriteHandle {
    type Image = Bitmap;

    fn set_flag(&mut self, flag: SpriteFlag, on: bool) {
        self.update(|s| {
            if on {
                s.flags |= flag.bit();
            } else {
                s.flags &= !flag.bit();
            }
        });
    }

    fn set_z(&mut self, z: i32) {
        self.update(|s| s.z = z);
    }

    fn set_image(&mut self, image: Bitmap) {
        self.update(|s| s.image = image);
    }

    fn set_position(&mut self, position: Vec2) {
        self.update(|s| s.position = position);
    }

    fn destroy(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.borrow_mut().sprites.retain(|s| s.id != self.id);
        }
    }
}
