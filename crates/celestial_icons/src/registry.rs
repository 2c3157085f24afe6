//! Runtime icon configuration

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assets::ProviderAssets;
use crate::mappings::icon_name;
use crate::provider::IconProvider;

/// How glyphs are rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    #[default]
    Font,
    Svg,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IconConfig {
    pub provider: IconProvider,
    /// Class prefix, e.g. `far` instead of FontAwesome's default `fas`
    pub prefix: Option<String>,
    pub format: IconFormat,
    /// Name -> markup for application supplied icons
    pub custom_icons: IndexMap<String, String>,
}

/// Outcome of resolving a semantic icon name
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedIcon {
    Glyph {
        provider: IconProvider,
        format: IconFormat,
        name: String,
        class: String,
    },
    /// Markup registered with [`IconRegistry::add_custom_icon`]
    Custom(String),
}

impl ResolvedIcon {
    pub fn glyph_name(&self) -> Option<&str> {
        match self {
            ResolvedIcon::Glyph { name, .. } => Some(name.as_str()),
            ResolvedIcon::Custom(_) => None,
        }
    }
}

/// Active icon provider plus application supplied icons
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    config: IconConfig,
}

impl IconRegistry {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    pub fn provider(&self) -> IconProvider {
        self.config.provider
    }

    /// Switch providers. Returns the assets the host should load for the new
    /// provider.
    pub fn set_provider(&mut self, provider: IconProvider) -> ProviderAssets {
        tracing::debug!(
            "IconRegistry::set_provider - {} -> {}",
            self.config.provider,
            provider
        );
        self.config.provider = provider;
        self.assets()
    }

    pub fn set_format(&mut self, format: IconFormat) {
        self.config.format = format;
    }

    pub fn set_prefix(&mut self, prefix: Option<String>) {
        self.config.prefix = prefix;
    }

    /// Register or replace custom markup for `name`
    pub fn add_custom_icon(&mut self, name: impl Into<String>, markup: impl Into<String>) {
        let name = name.into();
        tracing::trace!("IconRegistry::add_custom_icon - {}", name);
        self.config.custom_icons.insert(name, markup.into());
    }

    pub fn remove_custom_icon(&mut self, name: &str) -> Option<String> {
        self.config.custom_icons.shift_remove(name)
    }

    pub fn assets(&self) -> ProviderAssets {
        ProviderAssets::for_provider(self.config.provider)
    }

    /// Resolve `name` for the active provider. Custom markup registered under
    /// the same name takes precedence over the provider's glyph.
    pub fn resolve(&self, name: &str) -> ResolvedIcon {
        if let Some(markup) = self.config.custom_icons.get(name) {
            return ResolvedIcon::Custom(markup.clone());
        }

        let provider = self.config.provider;
        let glyph = icon_name(name, provider);
        ResolvedIcon::Glyph {
            provider,
            format: self.config.format,
            name: glyph.to_string(),
            class: self.class_for(glyph),
        }
    }

    fn class_for(&self, glyph: &str) -> String {
        let provider = self.config.provider;
        let prefix = self
            .config
            .prefix
            .as_deref()
            .or(ProviderAssets::for_provider(provider).default_prefix);

        match provider {
            IconProvider::FontAwesome => format!("{} fa-{glyph}", prefix.unwrap_or("fas")),
            // Material glyphs are ligatures; the name is the element's text
            IconProvider::Material => prefix.unwrap_or("material-icons").to_string(),
            IconProvider::Heroicons | IconProvider::Lucide => {
                format!("{}-{glyph}", prefix.unwrap_or(provider.id()))
            }
            IconProvider::Custom => format!("cui-icon--{glyph}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_awesome_classes_use_prefix() {
        let mut registry = IconRegistry::default();
        assert_eq!(
            registry.resolve("settings"),
            ResolvedIcon::Glyph {
                provider: IconProvider::FontAwesome,
                format: IconFormat::Font,
                name: "cog".into(),
                class: "fas fa-cog".into(),
            }
        );

        registry.set_prefix(Some("far".into()));
        match registry.resolve("heart") {
            ResolvedIcon::Glyph { class, .. } => assert_eq!(class, "far fa-heart"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn material_uses_ligature_class() {
        let mut registry = IconRegistry::default();
        let assets = registry.set_provider(IconProvider::Material);
        assert_eq!(assets.font_family, Some("Material Icons"));

        match registry.resolve("chevron-up") {
            ResolvedIcon::Glyph { name, class, .. } => {
                assert_eq!(name, "keyboard_arrow_up");
                assert_eq!(class, "material-icons");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn custom_markup_wins() {
        let mut registry = IconRegistry::default();
        registry.add_custom_icon("logo", "<svg/>");
        registry.add_custom_icon("star", "<svg id=\"star\"/>");

        assert_eq!(registry.resolve("logo"), ResolvedIcon::Custom("<svg/>".into()));
        assert_eq!(registry.resolve("star").glyph_name(), None);

        assert!(registry.remove_custom_icon("star").is_some());
        assert_eq!(registry.resolve("star").glyph_name(), Some("star"));
    }
}
