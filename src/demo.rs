//! Built-in scene shown when the binary runs without a config file.

use crate::config::{CounterConfig, SceneConfig};

const HEART: &str = "
    . 2 2 . 2 2 .
    2 2 2 2 2 2 2
    2 2 2 2 2 2 2
    . 2 2 2 2 2 .
    . . 2 2 2 . .
    . . . 2 . . .
";

const COIN: &str = "
    . 5 5 5 .
    5 5 4 5 5
    5 5 4 5 5
    5 5 4 5 5
    . 5 5 5 .
";

const PANEL: &str = "
    c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b b c
    c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c c
";

/// Score at the top, lives bottom left, coins on a panel bottom right
pub fn demo_config() -> SceneConfig {
    let mut score = CounterConfig::text("Score:", 0);
    score.step = 10;
    score.outline_color = Some(15);

    let mut lives = CounterConfig::icon(HEART, 3);
    lives.step = -1;
    lives.x = Some(24.0);
    lives.y = Some(108.0);
    lives.background_color = Some(15);

    let mut coins = CounterConfig::icon(COIN, 0);
    coins.step = 1;
    coins.x = Some(136.0);
    coins.y = Some(108.0);
    coins.text_color = Some(5);
    coins.background_image = Some(PANEL.to_string());

    SceneConfig {
        background: Some(8),
        counters: vec![score, lives, coins],
        ..SceneConfig::default()
    }
}
