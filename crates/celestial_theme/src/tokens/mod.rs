//! Design token trees
//!
//! A token tree is a nested, ordered map whose leaves are string values:
//! colors, lengths, font stacks, shadow lists. Themes are built by layering
//! partial trees over the built-in base with [`TokenTree::merge`], then
//! flattened into dotted paths such as `colors.primary.500`.

mod base;

pub use base::{base_tokens, dark_tokens, SHADE_STEPS};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A leaf value or a nested group
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    Value(String),
    Group(TokenTree),
}

impl TokenNode {
    pub fn as_value(&self) -> Option<&str> {
        match self {
            TokenNode::Value(value) => Some(value.as_str()),
            TokenNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenTree> {
        match self {
            TokenNode::Group(group) => Some(group),
            TokenNode::Value(_) => None,
        }
    }
}

impl From<&str> for TokenNode {
    fn from(value: &str) -> Self {
        TokenNode::Value(value.to_string())
    }
}

impl From<String> for TokenNode {
    fn from(value: String) -> Self {
        TokenNode::Value(value)
    }
}

impl From<TokenTree> for TokenNode {
    fn from(group: TokenTree) -> Self {
        TokenNode::Group(group)
    }
}

/// Shape accepted from config files: numbers and booleans become strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Group(IndexMap<String, RawNode>),
}

impl From<RawNode> for TokenNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Text(text) => TokenNode::Value(text),
            RawNode::Integer(number) => TokenNode::Value(number.to_string()),
            RawNode::Float(number) => TokenNode::Value(number.to_string()),
            RawNode::Bool(flag) => TokenNode::Value(flag.to_string()),
            RawNode::Group(entries) => TokenNode::Group(TokenTree(
                entries
                    .into_iter()
                    .map(|(key, node)| (key, TokenNode::from(node)))
                    .collect(),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for TokenNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawNode::deserialize(deserializer).map(TokenNode::from)
    }
}

/// Ordered tree of design tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTree(IndexMap<String, TokenNode>);

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<TokenNode>) {
        self.0.insert(key.into(), node.into());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, node: impl Into<TokenNode>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.0.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Look up a node by dotted path
    pub fn get(&self, path: &str) -> Option<&TokenNode> {
        let mut segments = path.split('.');
        let mut node = self.0.get(segments.next()?)?;
        for segment in segments {
            node = node.as_group()?.0.get(segment)?;
        }
        Some(node)
    }

    pub fn value(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_value()
    }

    pub fn group(&self, path: &str) -> Option<&TokenTree> {
        self.get(path)?.as_group()
    }

    /// Layer `overrides` on top of this tree.
    ///
    /// Groups present on both sides merge key by key, recursively. Anything
    /// else in `overrides` replaces the existing node wholesale, including a
    /// leaf replacing a group and the reverse.
    pub fn merge(&mut self, overrides: &TokenTree) {
        for (key, node) in &overrides.0 {
            if let (Some(TokenNode::Group(base)), TokenNode::Group(over)) =
                (self.0.get_mut(key), node)
            {
                base.merge(over);
                continue;
            }
            self.0.insert(key.clone(), node.clone());
        }
    }

    /// Copy with `overrides` merged in
    pub fn merged(&self, overrides: &TokenTree) -> TokenTree {
        let mut tree = self.clone();
        tree.merge(overrides);
        tree
    }

    /// Dotted path -> value, in tree order
    pub fn flatten(&self) -> IndexMap<String, String> {
        let mut out = IndexMap::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut IndexMap<String, String>) {
        for (key, node) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match node {
                TokenNode::Value(value) => {
                    out.insert(path, value.clone());
                }
                TokenNode::Group(group) => group.flatten_into(&path, out),
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for TokenTree
where
    K: Into<String>,
    V: Into<TokenNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TokenTree(
            iter.into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenTree {
        TokenTree::new()
            .with(
                "colors",
                TokenTree::new()
                    .with("primary", TokenTree::from_iter([("500", "#3b82f6"), ("900", "#1e3a8a")]))
                    .with("accent", "#f97316"),
            )
            .with("spacing", TokenTree::from_iter([("1", "0.25rem")]))
    }

    #[test]
    fn merge_overrides_leaves_and_keeps_siblings() {
        let mut tree = sample();
        let overrides = TokenTree::new().with(
            "colors",
            TokenTree::new().with("primary", TokenTree::from_iter([("500", "#ff0000")])),
        );

        tree.merge(&overrides);

        assert_eq!(tree.value("colors.primary.500"), Some("#ff0000"));
        assert_eq!(tree.value("colors.primary.900"), Some("#1e3a8a"));
        assert_eq!(tree.value("colors.accent"), Some("#f97316"));
        assert_eq!(tree.value("spacing.1"), Some("0.25rem"));
    }

    #[test]
    fn merge_replaces_mismatched_shapes_wholesale() {
        let mut tree = sample();
        tree.merge(&TokenTree::new().with("spacing", "none"));
        tree.merge(
            &TokenTree::new().with("colors", TokenTree::new().with("accent", TokenTree::new())),
        );

        assert_eq!(tree.value("spacing"), Some("none"));
        assert_eq!(tree.group("colors.accent"), Some(&TokenTree::new()));
    }

    #[test]
    fn flatten_produces_dotted_paths_in_order() {
        let flat = sample().flatten();
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["colors.primary.500", "colors.primary.900", "colors.accent", "spacing.1"]
        );
    }

    #[test]
    fn numbers_from_config_become_strings() {
        let tree: TokenTree = toml::from_str(
            r#"
            [typography.font-weight]
            bold = 700
            [typography.line-height]
            normal = 1.5
            "#,
        )
        .unwrap();

        assert_eq!(tree.value("typography.font-weight.bold"), Some("700"));
        assert_eq!(tree.value("typography.line-height.normal"), Some("1.5"));
    }

    #[test]
    fn missing_paths_return_none() {
        let tree = sample();
        assert_eq!(tree.get(""), None);
        assert_eq!(tree.value("colors.primary"), None);
        assert_eq!(tree.value("colors.accent.500"), None);
    }
}
