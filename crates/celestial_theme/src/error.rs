use thiserror::Error;

/// Errors raised while loading or saving a theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
