use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sprite_counter::cli::Cli;
use sprite_counter::config::SceneConfig;
use sprite_counter::counter::change_counter_value;
use sprite_counter::{demo, display};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene from {}", path.display()))?,
        None => demo::demo_config(),
    };

    let mut scene = config.build_scene()?;
    let mut counters = Vec::with_capacity(config.counters.len());
    for (i, counter_config) in config.counters.iter().enumerate() {
        let counter = counter_config
            .spawn(&mut scene)
            .with_context(|| format!("building counter {}", i))?;
        counters.push((counter, counter_config.step));
    }

    for _ in 0..cli.steps {
        for (counter, step) in counters.iter_mut() {
            change_counter_value(Some(counter), *step);
        }
    }

    let frame = scene.render();
    info!(
        "rendered {} counters into {}x{} frame",
        counters.len(),
        frame.dimensions().0,
        frame.dimensions().1
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            if cli.indexed {
                display::write_indexed_pgm(&frame, &mut out)?;
            } else {
                display::write_ppm(&frame, cli.scale, &mut out)?;
            }
            out.flush()?;
            info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            display::write_text(&frame, &mut out)?;
        }
    }

    Ok(())
}
