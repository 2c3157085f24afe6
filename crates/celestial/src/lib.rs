//! Celestial UI core
//!
//! One entry point for the three state managers:
//!
//! - [`overlay`]: stacked modals and toasts with settlement handles
//! - [`theme`]: design tokens, light/dark resolution, CSS variable projection
//! - [`icons`]: semantic icon names mapped onto icon libraries
//!
//! Nothing here is global. [`Celestial::install`] builds the managers from
//! [`CelestialOptions`] and the host passes them to whatever needs them.
//!
//! ```
//! use std::sync::Arc;
//! use celestial::prelude::*;
//!
//! let options = CelestialOptions::from_toml_str(
//!     r#"
//!     [theme]
//!     framework = "material"
//!     mode = "dark"
//!     "#,
//! )
//! .unwrap();
//!
//! let registry = SharedStyleRegistry::new();
//! let mut ui = Celestial::install(options, Arc::new(NoSchemeSource), registry.clone());
//!
//! let _toast = ui.overlays.success("Saved");
//! assert!(registry.has_class("cui-dark"));
//! assert_eq!(ui.icons.resolve("times").glyph_name(), Some("times"));
//! ```

mod error;
mod options;

pub use celestial_icons as icons;
pub use celestial_overlay as overlay;
pub use celestial_theme as theme;

pub use error::ConfigError;
pub use options::{CelestialOptions, COMPONENTS, CONFIG_FILE_NAME};

use std::fmt;
use std::sync::Arc;

use celestial_icons::IconRegistry;
use celestial_overlay::{Clock, OverlayManager};
use celestial_theme::{ColorSchemeSource, StyleRegistry, ThemeManager};

/// The installed managers
pub struct Celestial {
    pub overlays: OverlayManager,
    pub theme: ThemeManager,
    pub icons: IconRegistry,
    components: Vec<String>,
}

impl Celestial {
    /// Build every manager from `options`. The theme is resolved and
    /// published to `registry` immediately.
    pub fn install(
        options: CelestialOptions,
        scheme: Arc<dyn ColorSchemeSource>,
        registry: impl StyleRegistry + 'static,
    ) -> Self {
        let components = options.component_names();
        let overlays = OverlayManager::new(options.overlay);
        Self::assemble(options.theme, options.icons, overlays, scheme, registry, components)
    }

    /// Like [`install`](Self::install) with an explicit overlay clock
    pub fn install_with_clock(
        options: CelestialOptions,
        clock: Arc<dyn Clock>,
        scheme: Arc<dyn ColorSchemeSource>,
        registry: impl StyleRegistry + 'static,
    ) -> Self {
        let components = options.component_names();
        let overlays = OverlayManager::with_clock(options.overlay, clock);
        Self::assemble(options.theme, options.icons, overlays, scheme, registry, components)
    }

    fn assemble(
        theme: celestial_theme::ThemeConfiguration,
        icons: celestial_icons::IconConfig,
        overlays: OverlayManager,
        scheme: Arc<dyn ColorSchemeSource>,
        registry: impl StyleRegistry + 'static,
        components: Vec<String>,
    ) -> Self {
        tracing::debug!(
            "Celestial::install - framework={} icons={} components={}",
            theme.framework,
            icons.provider,
            components.len()
        );
        Self {
            overlays,
            theme: ThemeManager::new(theme, scheme, registry),
            icons: IconRegistry::new(icons),
            components,
        }
    }

    /// Globally registered component names
    pub fn components(&self) -> &[String] {
        &self.components
    }
}

impl fmt::Debug for Celestial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Celestial")
            .field("overlays", &self.overlays)
            .field("theme", &self.theme)
            .field("icons", &self.icons)
            .field("components", &self.components)
            .finish()
    }
}

pub mod prelude {
    pub use crate::{Celestial, CelestialOptions, ConfigError};

    pub use celestial_icons::{icon_name, IconProvider, IconRegistry, ResolvedIcon};
    pub use celestial_overlay::{
        AlertOptions, CancelReason, ConfirmOptions, ModalOptions, OverlayConfig, OverlayHandle,
        OverlayId, OverlayManager, PromptOptions, Settlement, ToastOptions, ToastPosition, Tone,
    };
    pub use celestial_theme::{
        project, ColorMode, ColorScheme, Framework, NoSchemeSource, SchemeSignal,
        SharedStyleRegistry, ThemeConfiguration, ThemeManager, ThemePatch, ThemeResolver,
    };
}
