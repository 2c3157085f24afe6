//! Token resolution: base tokens, scheme overlay and user overrides

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{ColorScheme, ThemeConfiguration};
use crate::tokens::{base_tokens, dark_tokens, TokenTree};

/// Returned by [`ResolvedTokens::color`] for unknown paths
pub const FALLBACK_COLOR: &str = "#000000";

/// Layers token trees into a flat, resolved token set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeResolver {
    base: TokenTree,
    dark: TokenTree,
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(base_tokens(), dark_tokens())
    }
}

impl ThemeResolver {
    /// Resolver with custom base tokens and dark scheme overrides
    pub fn new(base: TokenTree, dark: TokenTree) -> Self {
        Self { base, dark }
    }

    pub fn base(&self) -> &TokenTree {
        &self.base
    }

    pub fn dark(&self) -> &TokenTree {
        &self.dark
    }

    /// Resolve `config` against the built-in tokens.
    ///
    /// Layering order is base, then the dark overlay when the effective
    /// scheme is dark, then `config.tokens`. User overrides always win.
    pub fn resolve(&self, config: &ThemeConfiguration, prefers_dark: Option<bool>) -> ResolvedTokens {
        let scheme = config.mode.scheme(prefers_dark);
        let mut tree = self.base.clone();
        if scheme.is_dark() {
            tree.merge(&self.dark);
        }
        tree.merge(&config.tokens);

        tracing::trace!(
            "ThemeResolver::resolve - mode={} scheme={} overrides={}",
            config.mode,
            scheme,
            config.tokens.len()
        );

        ResolvedTokens {
            scheme,
            values: tree.flatten(),
        }
    }
}

/// Flat view of a resolved theme, keyed by dotted path
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedTokens {
    scheme: ColorScheme,
    values: IndexMap<String, String>,
}

impl ResolvedTokens {
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.values.get(path).map(String::as_str)
    }

    /// Color by path below `colors`, e.g. `primary.500` or `text.primary`
    pub fn color(&self, path: &str) -> &str {
        self.get(&format!("colors.{path}")).unwrap_or(FALLBACK_COLOR)
    }

    /// Any token by category and key, e.g. `("spacing", "4")`. Empty when
    /// the token does not exist.
    pub fn token(&self, category: &str, key: &str) -> &str {
        self.get(&format!("{category}.{key}")).unwrap_or("")
    }

    /// Direct leaf children of `group`, such as the shades of a palette
    pub fn children<'a>(&'a self, group: &str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let prefix = format!("{group}.");
        self.values.iter().filter_map(move |(path, value)| {
            let key = path.strip_prefix(&prefix)?;
            (!key.contains('.')).then_some((key, value.as_str()))
        })
    }

    /// Shade -> color for a palette such as `primary`
    pub fn shades<'a>(&'a self, palette: &str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.children(&format!("colors.{palette}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(path, value)| (path.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;

    #[test]
    fn color_and_token_fallbacks() {
        let tokens = ThemeResolver::default().resolve(&ThemeConfiguration::default(), None);
        assert_eq!(tokens.color("primary.500"), "#3b82f6");
        assert_eq!(tokens.color("primary.950"), FALLBACK_COLOR);
        assert_eq!(tokens.token("spacing", "4"), "1rem");
        assert_eq!(tokens.token("spacing", "7"), "");
    }

    #[test]
    fn children_lists_direct_leaves_only() {
        let tokens = ThemeResolver::default().resolve(&ThemeConfiguration::default(), None);
        let shades: Vec<&str> = tokens.shades("primary").map(|(key, _)| key).collect();
        assert_eq!(shades.len(), 10);
        assert_eq!(shades[0], "50");
        assert_eq!(tokens.shades("primary").nth(5), Some(("500", "#3b82f6")));
        assert_eq!(tokens.children("colors").count(), 0);
    }

    #[test]
    fn dark_scheme_applies_overlay() {
        let config = ThemeConfiguration::new().mode(ColorMode::Dark);
        let tokens = ThemeResolver::default().resolve(&config, Some(false));
        assert_eq!(tokens.scheme(), ColorScheme::Dark);
        assert_eq!(tokens.color("background.primary"), "#111827");
        assert_eq!(tokens.color("primary.500"), "#3b82f6");
    }
}
