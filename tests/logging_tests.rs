use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use sprite_counter::core::Scene;
use sprite_counter::counter::{Counter, Label, LayoutOptions};

/// Logger that keeps every record in memory
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn logged_at(level: Level, needle: &str) -> bool {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .any(|(l, msg)| *l == level && msg.contains(needle))
}

// ============================================================================
// Lifecycle log levels
// ============================================================================

#[test]
fn test_creation_and_release_logged_at_info() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut scene = Scene::default();
    let mut counter = Counter::new(&mut scene, Label::text("Score:"), 0, LayoutOptions::new());
    assert!(logged_at(Level::Info, "counter created"));

    counter.set_value(5);
    assert!(logged_at(Level::Debug, "counter redraw value=5"));

    counter.dispose();
    assert!(logged_at(Level::Info, "counter released, last value 5"));
}
