use glam::Vec2;
use sprite_counter::config::{CounterConfig, SceneConfig};
use sprite_counter::core::{Bitmap, Color, Scene};
use sprite_counter::counter::{counter_kind, Counter, Label, LayoutOptions};
use sprite_counter::traits::{ImageSurface, Sprite, SpriteFlag, SpriteHost, SpriteKind};

// ============================================================================
// Counters in a live scene
// ============================================================================

#[test]
fn test_counter_sprite_state() {
    let mut scene = Scene::new(160, 120);
    let counter = Counter::new(&mut scene, Label::text("Score:"), 0, LayoutOptions::new());

    let sprite = counter.sprite();
    assert!(sprite.is_alive());
    assert!(sprite.has_flag(SpriteFlag::Ghost));
    assert_eq!(sprite.z(), Some(100));
    assert_eq!(sprite.kind(), Some(counter_kind()));
    assert_eq!(sprite.position(), Some(Vec2::new(80.0, 10.0)));
    assert_eq!(sprite.image().map(|i| i.dimensions()), Some((48, 9)));
}

#[test]
fn test_rendered_text_pixels() {
    let mut scene = Scene::new(160, 120);
    let counter = Counter::new(&mut scene, Label::text("Score:"), 0, LayoutOptions::new());

    let image = counter.sprite().image().unwrap();
    // 'S' top row is .xxxx starting at the content origin (2, 2)
    assert_eq!(image.get_pixel(2, 2), Some(Color::TRANSPARENT));
    assert_eq!(image.get_pixel(3, 2), Some(Color::WHITE));
    assert_eq!(image.get_pixel(6, 2), Some(Color::WHITE));
    // padding stays clear
    assert_eq!(image.get_pixel(0, 0), Some(Color::TRANSPARENT));

    // sprite centred on (80, 10): top-left (56, 5)
    let frame = scene.render();
    assert_eq!(frame.get_pixel(56 + 3, 5 + 2), Some(Color::WHITE));
    assert_eq!(frame.get_pixel(56 + 2, 5 + 2), Some(Color::TRANSPARENT));
}

#[test]
fn test_outline_pixels_surround_text() {
    let mut scene = Scene::new(64, 32);
    let options = LayoutOptions::new().outline(Color::BLACK);
    let counter = Counter::new(&mut scene, Label::text("."), 1, options);

    let image = counter.sprite().image().unwrap();
    // '.' lights glyph pixel (2, 4); content origin is (2, 2)
    assert_eq!(image.get_pixel(4, 6), Some(Color::WHITE));
    for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
        assert_eq!(image.get_pixel(4 + dx, 6 + dy), Some(Color::BLACK));
    }
}

#[test]
fn test_background_color_and_value_change() {
    let mut scene = Scene::new(64, 32);
    let options = LayoutOptions::new().background_color(Color::BLUE);
    let mut counter = Counter::new(&mut scene, Label::text("A"), 1, options);

    let before = counter.sprite().image().unwrap();
    assert_eq!(before.get_pixel(0, 0), Some(Color::BLUE));

    counter.set_value(10);
    let after = counter.sprite().image().unwrap();
    assert_eq!(after.dimensions(), (6 + 2 + 12 + 4, 9));
    assert_ne!(before, after);
}

#[test]
fn test_background_image_copied_opaque() {
    let mut scene = Scene::new(64, 32);
    let mut panel = Bitmap::new(40, 20);
    panel.fill(Color::RED);
    panel.set_pixel(0, 0, Color::TRANSPARENT);

    let options = LayoutOptions::new().background_image(panel);
    let counter = Counter::new(&mut scene, Label::text("Score:"), 0, options);

    let image = counter.sprite().image().unwrap();
    assert_eq!(image.dimensions(), (40, 20));
    assert_eq!(image.get_pixel(0, 0), Some(Color::TRANSPARENT));
    assert_eq!(image.get_pixel(39, 19), Some(Color::RED));
}

#[test]
fn test_icon_transparency() {
    let mut scene = Scene::new(64, 32);
    let icon = Bitmap::from_art("2.2\n.2.").unwrap();
    let options = LayoutOptions::new().background_color(Color::BLUE);
    let counter = Counter::new(&mut scene, Label::icon(icon), 0, options);

    let image = counter.sprite().image().unwrap();
    // content 3+2+6 = 11 x 5 in a 15x9 canvas, origin (2, 2)
    assert_eq!(image.dimensions(), (15, 9));
    assert_eq!(image.get_pixel(2, 2), Some(Color::RED));
    assert_eq!(image.get_pixel(3, 2), Some(Color::BLUE));
    assert_eq!(image.get_pixel(3, 3), Some(Color::RED));
}

// ============================================================================
// Scene composition
// ============================================================================

#[test]
fn test_counter_drawn_above_default_sprites() {
    let mut scene = Scene::new(32, 32).with_background(Color::BLUE);

    let mut block = Bitmap::new(32, 32);
    block.fill(Color::RED);
    let mut sprite = scene.create_sprite(block, SpriteKind::create());
    sprite.set_position(Vec2::new(16.0, 16.0));

    let options = LayoutOptions::new().at(16.0, 16.0).background_color(Color::YELLOW);
    let _counter = Counter::new(&mut scene, Label::text("A"), 0, options);

    let frame = scene.render();
    assert_eq!(frame.get_pixel(16, 16), Some(Color::YELLOW));
    assert_eq!(frame.get_pixel(0, 0), Some(Color::RED));
}

#[test]
fn test_z_ties_keep_creation_order() {
    let mut scene = Scene::new(4, 4);
    let mut first = Bitmap::new(4, 4);
    first.fill(Color::RED);
    let mut second = Bitmap::new(4, 4);
    second.fill(Color::WHITE);

    let mut a = scene.create_sprite(first, SpriteKind::create());
    a.set_position(Vec2::new(2.0, 2.0));
    let mut b = scene.create_sprite(second, SpriteKind::create());
    b.set_position(Vec2::new(2.0, 2.0));

    assert_eq!(scene.render().get_pixel(1, 1), Some(Color::WHITE));

    a.set_z(1);
    assert_eq!(scene.render().get_pixel(1, 1), Some(Color::RED));
}

#[test]
fn test_invisible_sprites_skipped() {
    let mut scene = Scene::new(4, 4);
    let mut image = Bitmap::new(4, 4);
    image.fill(Color::RED);
    let mut sprite = scene.create_sprite(image, SpriteKind::create());
    sprite.set_position(Vec2::new(2.0, 2.0));
    sprite.set_flag(SpriteFlag::Invisible, true);

    assert_eq!(scene.render().painted_count(), 0);
}

#[test]
fn test_disposed_counter_leaves_scene() {
    let mut scene = Scene::new(64, 32);
    let kind = counter_kind();
    let before = scene.count_of_kind(kind);

    let counter = Counter::new(&mut scene, Label::text("A"), 0, LayoutOptions::new());
    assert_eq!(scene.count_of_kind(kind), before + 1);
    assert!(scene.render().painted_count() > 0);

    counter.dispose();
    assert_eq!(scene.count_of_kind(kind), before);
    assert_eq!(scene.render().painted_count(), 0);
}

// ============================================================================
// Config driven scenes
// ============================================================================

#[test]
fn test_config_matches_builder() {
    let json = r#"{
        "screen_width": 100, "screen_height": 50,
        "counters": [ { "label": { "text": "Lv" }, "value": 4, "x": 30, "y": 20,
                        "text_color": 5, "outline_color": 15 } ]
    }"#;
    let config = SceneConfig::from_json(json).unwrap();
    let mut scene = config.build_scene().unwrap();
    let from_config = config.counters[0].spawn(&mut scene).unwrap();

    let options = LayoutOptions::new()
        .at(30.0, 20.0)
        .text_color(Color::YELLOW)
        .outline(Color::BLACK);
    let from_builder = Counter::new(&mut scene, Label::text("Lv"), 4, options);

    assert_eq!(from_config.layout(), from_builder.layout());
    assert_eq!(from_config.sprite().image(), from_builder.sprite().image());
    assert_eq!(from_config.sprite().position(), Some(Vec2::new(30.0, 20.0)));
}

#[test]
fn test_config_icon_counter() {
    let mut config = CounterConfig::icon("55\n55", 0);
    config.step = 2;
    let mut scene = Scene::default();
    let mut counter = config.spawn(&mut scene).unwrap();

    counter.change_value_by(config.step);
    assert_eq!(counter.value(), 2);
    assert_eq!(counter.sprite().image().unwrap().width(), 2 + 2 + 6 + 4);
}
