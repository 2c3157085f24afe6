//! Celestial UI theming
//!
//! Themes start from a built-in set of design tokens (colors, typography,
//! spacing, radii and shadows). A [`ThemeConfiguration`] picks the color
//! mode, the CSS framework convention and any token overrides; the
//! [`ThemeResolver`] layers these into [`ResolvedTokens`], and [`project`]
//! turns them into CSS custom properties.
//!
//! # Quick Start
//!
//! ```
//! use celestial_theme::{project, ColorMode, Framework, ThemeConfiguration, ThemeResolver};
//!
//! let config = ThemeConfiguration::new()
//!     .framework(Framework::Material)
//!     .mode(ColorMode::Dark);
//!
//! let tokens = ThemeResolver::default().resolve(&config, None);
//! let properties = project(&tokens, config.framework);
//!
//! assert_eq!(tokens.color("background.primary"), "#111827");
//! assert!(properties.contains_key("--md-sys-color-on-primary-container"));
//! ```
//!
//! For a long-lived theme that follows the host's dark mode preference and
//! publishes into a style registry, see [`ThemeManager`].

pub mod classes;
pub mod config;
pub mod error;
pub mod projection;
pub mod resolve;
pub mod scheme;
pub mod state;
pub mod tokens;

pub use classes::{component_classes, Breakpoint, ComponentState};
pub use config::{ColorMode, ColorScheme, Framework, ThemeConfiguration, ThemePatch};
pub use error::ThemeError;
pub use projection::{
    material_role, plain_property_name, project, to_css, StyleProperties, GRID_COLUMNS,
    MATERIAL_ROLES, UTILITY_PALETTES,
};
pub use resolve::{ResolvedTokens, ThemeResolver, FALLBACK_COLOR};
pub use scheme::{
    detect_system_preference, watch_system_preference, ColorSchemeSource, NoSchemeSource,
    SchemeCallback, SchemeSignal, SchemeWatch, SubscriptionId,
};
pub use state::{
    custom_properties, ListenerId, SharedStyleRegistry, StyleRegistry, StyleUpdate, ThemeChange,
    ThemeListener, ThemeManager,
};
pub use tokens::{base_tokens, dark_tokens, TokenNode, TokenTree, SHADE_STEPS};
