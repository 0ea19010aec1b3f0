pub mod tuning;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse tuning.ron: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize tuning: {0}")]
    Serialize(#[from] ron::Error),
}
