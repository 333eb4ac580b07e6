//! JSON scene description used by the demo binary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Bitmap, Color, Scene, SpriteHandle, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use crate::counter::{Counter, Label, LayoutOptions};
use crate::error::{CounterError, Result};

/// Counter label: `{ "text": "Score:" }` or `{ "icon": "<image literal>" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelConfig {
    Text(String),
    Icon(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    pub label: LabelConfig,
    #[serde(default)]
    pub value: i32,
    /// Delta applied on every demo step
    #[serde(default)]
    pub step: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<u8>,
    /// Image literal drawn behind the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl CounterConfig {
    pub fn text(text: &str, value: i32) -> Self {
        Self::with_label(LabelConfig::Text(text.to_string()), value)
    }

    pub fn icon(art: &str, value: i32) -> Self {
        Self::with_label(LabelConfig::Icon(art.to_string()), value)
    }

    fn with_label(label: LabelConfig, value: i32) -> Self {
        Self {
            label,
            value,
            step: 0,
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

    pub fn label(&self) -> Result<Label<Bitmap>> {
        Ok(match &self.label {
            LabelConfig::Text(text) => Label::Text(text.clone()),
            LabelConfig::Icon(art) => Label::Icon(Bitmap::from_art(art)?),
        })
    }

    pub fn options(&self) -> Result<LayoutOptions<Bitmap>> {
        Ok(LayoutOptions {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            text_color: color(self.text_color)?,
            outline_color: color(self.outline_color)?,
            background_color: color(self.background_color)?,
            background_image: self
                .background_image
                .as_deref()
                .map(Bitmap::from_art)
                .transpose()?,
        })
    }

    /// Create the described counter in `scene`
    pub fn spawn(&self, scene: &mut Scene) -> Result<Counter<SpriteHandle>> {
        Ok(Counter::new(scene, self.label()?, self.value, self.options()?))
    }
}

fn color(index: Option<u8>) -> Result<Option<Color>> {
    index.map(Color::try_from).transpose()
}

fn default_screen_width() -> u32 {
    DEFAULT_SCREEN_WIDTH
}

fn default_screen_height() -> u32 {
    DEFAULT_SCREEN_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_screen_width")]
    pub screen_width: u32,
    #[serde(default = "default_screen_height")]
    pub screen_height: u32,
    /// Palette index the screen is cleared to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<u8>,
    #[serde(default)]
    pub counters: Vec<CounterConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            background: None,
            counters: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CounterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Empty scene with the configured screen size and background
    pub fn build_scene(&self) -> Result<Scene> {
        let scene = Scene::new(self.screen_width, self.screen_height);
        Ok(match color(self.background)? {
            Some(background) => scene.with_background(background),
            None => scene,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_counter() {
        let config = SceneConfig::from_json(r#"{ "counters": [ { "label": { "text": "Hi" } } ] }"#)
            .unwrap();
        assert_eq!(config.screen_width, 160);
        assert_eq!(config.screen_height, 120);
        assert_eq!(config.counters.len(), 1);
        assert_eq!(config.counters[0], CounterConfig::text("Hi", 0));
    }

    #[test]
    fn parses_icon_and_colors() {
        let json = r#"{
            "screen_width": 64, "screen_height": 32, "background": 9,
            "counters": [ {
                "label": { "icon": ".2.\n222" },
                "value": 3, "step": -1, "outline_color": 15,
                "background_image": "11\n11"
            } ]
        }"#;
        let config = SceneConfig::from_json(json).unwrap();
        let counter = &config.counters[0];

        assert_eq!(counter.step, -1);
        assert!(matches!(counter.label().unwrap(), Label::Icon(ref img) if img.dimensions() == (3, 2)));

        let options = counter.options().unwrap();
        assert_eq!(options.outline_color, Some(Color::BLACK));
        assert_eq!(options.background_image.map(|b| b.dimensions()), Some((2, 2)));
    }

    #[test]
    fn rejects_bad_palette_index() {
        let mut counter = CounterConfig::text("X", 0);
        counter.text_color = Some(20);
        assert!(matches!(counter.options(), Err(CounterError::InvalidColor(20))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SceneConfig::from_json("{ \"counters\": 3 }"),
            Err(CounterError::Config(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
