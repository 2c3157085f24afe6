//! Semantic icon names and their per-provider glyphs

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::provider::IconProvider;

/// Glyph names for one semantic icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconMapping {
    pub name: &'static str,
    pub font_awesome: &'static str,
    pub material: &'static str,
    pub heroicons: &'static str,
    pub lucide: &'static str,
}

impl IconMapping {
    /// Glyph for `provider`; custom icons have no table column
    pub fn glyph(&self, provider: IconProvider) -> Option<&'static str> {
        match provider {
            IconProvider::FontAwesome => Some(self.font_awesome),
            IconProvider::Material => Some(self.material),
            IconProvider::Heroicons => Some(self.heroicons),
            IconProvider::Lucide => Some(self.lucide),
            IconProvider::Custom => None,
        }
    }
}

const fn icon(
    name: &'static str,
    font_awesome: &'static str,
    material: &'static str,
    heroicons: &'static str,
    lucide: &'static str,
) -> IconMapping {
    IconMapping {
        name,
        font_awesome,
        material,
        heroicons,
        lucide,
    }
}

/// Every known semantic icon, grouped loosely by purpose
pub static ICONS: &[IconMapping] = &[
    // Navigation
    icon("chevron-left", "chevron-left", "chevron_left", "chevron-left", "chevron-left"),
    icon("chevron-right", "chevron-right", "chevron_right", "chevron-right", "chevron-right"),
    icon("chevron-up", "chevron-up", "keyboard_arrow_up", "chevron-up", "chevron-up"),
    icon("chevron-down", "chevron-down", "keyboard_arrow_down", "chevron-down", "chevron-down"),
    // Actions
    icon("plus", "plus", "add", "plus", "plus"),
    icon("minus", "minus", "remove", "minus", "minus"),
    icon("times", "times", "close", "x-mark", "x"),
    icon("check", "check", "check", "check", "check"),
    // Status
    icon("check-circle", "check-circle", "check_circle", "check-circle", "check-circle"),
    icon("exclamation-circle", "exclamation-circle", "error", "exclamation-circle", "alert-circle"),
    icon("exclamation-triangle", "exclamation-triangle", "warning", "exclamation-triangle", "alert-triangle"),
    icon("info-circle", "info-circle", "info", "information-circle", "info"),
    // Common
    icon("search", "search", "search", "magnifying-glass", "search"),
    icon("heart", "heart", "favorite", "heart", "heart"),
    icon("star", "star", "star", "star", "star"),
    icon("home", "home", "home", "home", "home"),
    icon("user", "user", "person", "user", "user"),
    icon("settings", "cog", "settings", "cog-6-tooth", "settings"),
    icon("menu", "bars", "menu", "bars-3", "menu"),
    // Loading
    icon("spinner", "spinner", "refresh", "arrow-path", "loader-2"),
    // Media
    icon("play", "play", "play_arrow", "play", "play"),
    icon("pause", "pause", "pause", "pause", "pause"),
    icon("stop", "stop", "stop", "stop", "square"),
];

fn index() -> &'static FxHashMap<&'static str, &'static IconMapping> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static IconMapping>> = OnceLock::new();
    INDEX.get_or_init(|| ICONS.iter().map(|mapping| (mapping.name, mapping)).collect())
}

pub fn lookup(name: &str) -> Option<&'static IconMapping> {
    index().get(name).copied()
}

/// Glyph name for `name` under `provider`, or `name` itself when the table
/// has no entry
pub fn icon_name(name: &str, provider: IconProvider) -> &str {
    lookup(name)
        .and_then(|mapping| mapping.glyph(provider))
        .unwrap_or(name)
}

/// Whether the table knows `name`. Rows cover every provider, so for
/// `Custom` this is plain table membership too.
pub fn has_icon(name: &str, provider: IconProvider) -> bool {
    lookup(name).is_some_and(|mapping| {
        provider == IconProvider::Custom || mapping.glyph(provider).is_some()
    })
}

/// Semantic names in table order
pub fn available_icons() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|mapping| mapping.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        assert_eq!(index().len(), ICONS.len());
    }

    #[test]
    fn glyph_lookup_by_provider() {
        let times = lookup("times").unwrap();
        assert_eq!(times.glyph(IconProvider::Heroicons), Some("x-mark"));
        assert_eq!(times.glyph(IconProvider::Lucide), Some("x"));
        assert_eq!(times.glyph(IconProvider::Custom), None);
    }
}
