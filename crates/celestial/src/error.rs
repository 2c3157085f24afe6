use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading `celestial.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid options: {0}")]
    Invalid(#[from] toml::de::Error),

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
}
