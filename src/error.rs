use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("palette index {0} is out of range (0-15)")]
    InvalidColor(u8),
    #[error("image literal row {row}: invalid pixel {found:?}")]
    InvalidPixel { row: usize, found: String },
    #[error("image literal row {row} has {found} pixels, expected {expected}")]
    RaggedImage { row: usize, expected: usize, found: usize },
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CounterError>;
