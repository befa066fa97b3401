use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("size pair {first}/{second} does not sum to 100")]
    InvalidSizePair { first: u8, second: u8 },
    #[error("failed to read layout settings from {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse layout settings in {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("notifier capacity {capacity} is outside 1..={max}")]
    InvalidNotifierCapacity { capacity: usize, max: usize },
    #[error("environment override {name}={value:?} is not valid")]
    InvalidEnvOverride { name: String, value: String },
}
