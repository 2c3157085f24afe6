//! Runtime options (`celestial.toml`)

use std::fs;
use std::path::Path;

use celestial_icons::IconConfig;
use celestial_overlay::OverlayConfig;
use celestial_theme::ThemeConfiguration;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File looked up when a directory is given to [`CelestialOptions::load`]
pub const CONFIG_FILE_NAME: &str = "celestial.toml";

/// Components registered when `global-components` is on, without prefix
pub const COMPONENTS: [&str; 6] = ["Button", "Input", "Card", "Icon", "Modal", "Toast"];

/// Top-level options
///
/// ```toml
/// global-components = true
/// component-prefix = "C"
///
/// [theme]
/// framework = "tailwind"
/// mode = "auto"
///
/// [icons]
/// provider = "material"
///
/// [overlay]
/// grace-period-ms = 300
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CelestialOptions {
    pub theme: ThemeConfiguration,
    pub icons: IconConfig,
    pub overlay: OverlayConfig,
    pub global_components: bool,
    pub component_prefix: String,
}

impl Default for CelestialOptions {
    fn default() -> Self {
        Self {
            theme: ThemeConfiguration::default(),
            icons: IconConfig::default(),
            overlay: OverlayConfig::default(),
            global_components: true,
            component_prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "C".to_string()
}

impl CelestialOptions {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a file, or from `celestial.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        let options = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?;

        tracing::debug!("CelestialOptions::load - {}", config_path.display());
        Ok(options)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Names to register globally, e.g. `CButton`; empty when global
    /// registration is off
    pub fn component_names(&self) -> Vec<String> {
        if !self.global_components {
            return Vec::new();
        }
        COMPONENTS
            .iter()
            .map(|name| format!("{}{name}", self.component_prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_prefixed_components() {
        let options = CelestialOptions::default();
        assert_eq!(options.component_names()[0], "CButton");
        assert_eq!(options.component_names().len(), COMPONENTS.len());
    }

    #[test]
    fn global_registration_can_be_disabled() {
        let options = CelestialOptions::from_toml_str("global-components = false").unwrap();
        assert!(options.component_names().is_empty());
    }

    #[test]
    fn mistyped_values_are_rejected() {
        let err = CelestialOptions::from_toml_str("[overlay]\ngrace-period-ms = \"slow\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
