use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon glyph source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconProvider {
    #[default]
    #[serde(alias = "font-awesome")]
    FontAwesome,
    Material,
    Heroicons,
    Lucide,
    /// Application supplied markup, no name table
    Custom,
}

impl IconProvider {
    pub fn all() -> &'static [IconProvider] {
        &[
            IconProvider::FontAwesome,
            IconProvider::Material,
            IconProvider::Heroicons,
            IconProvider::Lucide,
            IconProvider::Custom,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            IconProvider::FontAwesome => "fontawesome",
            IconProvider::Material => "material",
            IconProvider::Heroicons => "heroicons",
            IconProvider::Lucide => "lucide",
            IconProvider::Custom => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fontawesome" | "font-awesome" | "fa" => Some(IconProvider::FontAwesome),
            "material" | "material-icons" => Some(IconProvider::Material),
            "heroicons" => Some(IconProvider::Heroicons),
            "lucide" => Some(IconProvider::Lucide),
            "custom" => Some(IconProvider::Custom),
            _ => None,
        }
    }

    /// Whether glyphs come from an icon font rather than SVG components
    pub fn is_font(&self) -> bool {
        matches!(self, IconProvider::FontAwesome | IconProvider::Material)
    }
}

impl fmt::Display for IconProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
