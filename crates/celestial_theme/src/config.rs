//! Theme configuration: framework, color mode and token overrides

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::tokens::TokenTree;

/// Which CSS naming convention the projected properties follow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Utility-class frameworks (Tailwind style palette variables)
    #[default]
    #[serde(rename = "tailwind", alias = "utility")]
    Utility,
    /// Preprocessor variable sets (SCSS style)
    #[serde(rename = "scss", alias = "preprocessor")]
    Preprocessor,
    /// Material Design system color roles
    Material,
    /// Plain CSS custom properties plus grid helpers
    #[serde(rename = "css", alias = "plain")]
    Plain,
    /// Anything unrecognized; only the base properties are emitted
    #[serde(other)]
    Unknown,
}

impl Framework {
    pub fn all() -> &'static [Framework] {
        &[
            Framework::Utility,
            Framework::Preprocessor,
            Framework::Material,
            Framework::Plain,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Framework::Utility => "tailwind",
            Framework::Preprocessor => "scss",
            Framework::Material => "material",
            Framework::Plain => "css",
            Framework::Unknown => "unknown",
        }
    }

    /// Parse a framework name, accepting both config ids and aliases
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tailwind" | "utility" => Framework::Utility,
            "scss" | "preprocessor" => Framework::Preprocessor,
            "material" => Framework::Material,
            "css" | "plain" => Framework::Plain,
            _ => Framework::Unknown,
        }
    }

    /// Class put on the document root while this framework is active
    pub fn marker_class(&self) -> Option<String> {
        match self {
            Framework::Unknown => None,
            known => Some(format!("cui-{}", known.id())),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Requested color mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
    /// Follow the host's color scheme preference
    Auto,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::Auto => "auto",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            "auto" | "system" => Some(ColorMode::Auto),
            _ => None,
        }
    }

    /// Effective scheme for this mode. `Auto` without a known host
    /// preference falls back to light.
    pub fn scheme(&self, prefers_dark: Option<bool>) -> ColorScheme {
        match self {
            ColorMode::Light => ColorScheme::Light,
            ColorMode::Dark => ColorScheme::Dark,
            ColorMode::Auto => match prefers_dark {
                Some(true) => ColorScheme::Dark,
                _ => ColorScheme::Light,
            },
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scheme actually in effect after resolving [`ColorMode::Auto`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    pub fn marker_class(&self) -> String {
        format!("cui-{}", self.as_str())
    }
}

impl From<ColorScheme> for ColorMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ColorMode::Light,
            ColorScheme::Dark => ColorMode::Dark,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to resolve a theme
///
/// ```toml
/// framework = "material"
/// mode = "auto"
///
/// [tokens.colors.primary]
/// 500 = "#ff0000"
///
/// [custom-properties]
/// "--app-header-height" = "64px"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ThemeConfiguration {
    pub framework: Framework,
    pub mode: ColorMode,
    /// Partial token tree merged over the built-in tokens
    pub tokens: TokenTree,
    /// Extra properties published verbatim after the projected ones
    pub custom_properties: IndexMap<String, String>,
}

impl ThemeConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tokens(mut self, tokens: TokenTree) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn custom_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_properties.insert(name.into(), value.into());
        self
    }
}

/// Partial update for [`ThemeConfiguration`]. Present fields replace the
/// current ones wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ThemePatch {
    pub framework: Option<Framework>,
    pub mode: Option<ColorMode>,
    pub tokens: Option<TokenTree>,
    pub custom_properties: Option<IndexMap<String, String>>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn tokens(mut self, tokens: TokenTree) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn custom_properties(mut self, properties: IndexMap<String, String>) -> Self {
        self.custom_properties = Some(properties);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply_to(self, config: &mut ThemeConfiguration) {
        if let Some(framework) = self.framework {
            config.framework = framework;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(tokens) = self.tokens {
            config.tokens = tokens;
        }
        if let Some(properties) = self.custom_properties {
            config.custom_properties = properties;
        }
    }
}
