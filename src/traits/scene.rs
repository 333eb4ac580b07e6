/// Scene metrics - screen dimensions used for default placement
pub trait SceneMetrics {
    /// Screen width in pixels
    fn screen_width(&self) -> u32;

    /// Screen height in pixels
    fn screen_height(&self) -> u32;
}
