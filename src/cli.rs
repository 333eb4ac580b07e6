// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sprite-counter")]
#[command(about = "Render labeled sprite counters into a frame", long_about = None)]
pub struct Cli {
    /// JSON scene description; the built-in demo scene is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Apply each counter's step this many times before rendering
    #[arg(short, long, default_value_t = 0)]
    pub steps: u32,

    /// Write the frame as a PPM image instead of printing text art
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write raw palette indices as a PGM image instead of an RGB PPM
    #[arg(long, default_value_t = false)]
    pub indexed: bool,

    /// Pixel scale for PPM output
    #[arg(long, default_value_t = 1)]
    pub scale: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["sprite-counter"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.steps, 0);
        assert_eq!(cli.scale, 1);
        assert!(!cli.indexed);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::parse_from([
            "sprite-counter", "--config", "hud.json", "--steps", "3", "-o", "out.ppm", "--scale", "4",
            "--indexed",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("hud.json")));
        assert_eq!(cli.steps, 3);
        assert_eq!(cli.output, Some(PathBuf::from("out.ppm")));
        assert_eq!(cli.scale, 4);
        assert!(cli.indexed);
    }
}
