//! Theme manager
//!
//! [`ThemeManager`] owns the active [`ThemeConfiguration`], resolves it
//! whenever something changes and publishes the projected properties to a
//! [`StyleRegistry`], the stand-in for the document root's style. It is an
//! ordinary value: wrap it in `Arc<Mutex<_>>` to share it and to follow the
//! host's color scheme with [`ThemeManager::watch_system`].

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use indexmap::IndexMap;

use crate::config::{ColorMode, ColorScheme, Framework, ThemeConfiguration, ThemePatch};
use crate::projection::{project, StyleProperties};
use crate::resolve::{ResolvedTokens, ThemeResolver};
use crate::scheme::{self, ColorSchemeSource, SchemeWatch};

/// One publication to the style registry
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleUpdate {
    pub properties: StyleProperties,
    /// Properties from the previous publication that are no longer set
    pub removed_properties: Vec<String>,
    /// Marker classes that must be present on the root
    pub classes: Vec<String>,
    /// Marker classes from other schemes or frameworks that must be removed
    pub removed_classes: Vec<String>,
}

/// Receiver of resolved theme output. Implementations must drop
/// `removed_properties` as well as set `properties`.
pub trait StyleRegistry: Send {
    fn publish(&mut self, update: &StyleUpdate);
}

#[derive(Debug, Default)]
struct RegistryState {
    properties: StyleProperties,
    classes: Vec<String>,
    publish_count: usize,
}

/// In-memory registry that tracks properties like a root element's inline
/// style. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct SharedStyleRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl SharedStyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&RegistryState) -> R) -> R {
        f(&self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.with_state(|state| state.properties.get(name).cloned())
    }

    pub fn properties(&self) -> StyleProperties {
        self.with_state(|state| state.properties.clone())
    }

    pub fn classes(&self) -> Vec<String> {
        self.with_state(|state| state.classes.clone())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.with_state(|state| state.classes.iter().any(|c| c == class))
    }

    pub fn publish_count(&self) -> usize {
        self.with_state(|state| state.publish_count)
    }
}

impl StyleRegistry for SharedStyleRegistry {
    fn publish(&mut self, update: &StyleUpdate) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        for name in &update.removed_properties {
            state.properties.shift_remove(name);
        }
        for (name, value) in &update.properties {
            state.properties.insert(name.clone(), value.clone());
        }
        state
            .classes
            .retain(|class| !update.removed_classes.contains(class));
        for class in &update.classes {
            if !state.classes.contains(class) {
                state.classes.push(class.clone());
            }
        }
        state.publish_count += 1;
    }
}

/// Snapshot handed to change listeners
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub config: ThemeConfiguration,
    pub tokens: ResolvedTokens,
    pub properties: StyleProperties,
}

impl ThemeChange {
    pub fn scheme(&self) -> ColorScheme {
        self.tokens.scheme()
    }
}

/// Change listener. Runs while the manager is mutably borrowed, so it must
/// not call back into the same manager.
pub type ThemeListener = Box<dyn Fn(&ThemeChange) + Send + Sync>;

/// Handle for removing a listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

fn all_marker_classes() -> Vec<String> {
    let mut classes = vec![
        ColorScheme::Light.marker_class(),
        ColorScheme::Dark.marker_class(),
    ];
    classes.extend(Framework::all().iter().filter_map(Framework::marker_class));
    classes
}

/// Owns the active theme and keeps the style registry in sync with it
pub struct ThemeManager {
    resolver: ThemeResolver,
    config: ThemeConfiguration,
    source: Arc<dyn ColorSchemeSource>,
    registry: Box<dyn StyleRegistry>,
    listeners: Vec<(ListenerId, ThemeListener)>,
    next_listener: u64,
    tokens: ResolvedTokens,
    properties: StyleProperties,
}

impl ThemeManager {
    /// Create a manager and publish the initial theme
    pub fn new(
        config: ThemeConfiguration,
        source: Arc<dyn ColorSchemeSource>,
        registry: impl StyleRegistry + 'static,
    ) -> Self {
        Self::with_resolver(ThemeResolver::default(), config, source, registry)
    }

    pub fn with_resolver(
        resolver: ThemeResolver,
        config: ThemeConfiguration,
        source: Arc<dyn ColorSchemeSource>,
        registry: impl StyleRegistry + 'static,
    ) -> Self {
        let mut manager = Self {
            resolver,
            config,
            source,
            registry: Box::new(registry),
            listeners: Vec::new(),
            next_listener: 0,
            tokens: ResolvedTokens::default(),
            properties: StyleProperties::new(),
        };
        manager.refresh();
        manager
    }

    pub fn config(&self) -> &ThemeConfiguration {
        &self.config
    }

    pub fn tokens(&self) -> &ResolvedTokens {
        &self.tokens
    }

    /// Properties from the last publication, custom properties included
    pub fn properties(&self) -> &StyleProperties {
        &self.properties
    }

    pub fn scheme(&self) -> ColorScheme {
        self.tokens.scheme()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    /// Replace the whole configuration
    pub fn set_configuration(&mut self, config: ThemeConfiguration) {
        self.config = config;
        self.refresh();
    }

    /// Update only the fields present in `patch`
    pub fn set_theme(&mut self, patch: ThemePatch) {
        if patch.is_empty() {
            return;
        }
        patch.apply_to(&mut self.config);
        self.refresh();
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        tracing::debug!(
            "ThemeManager::set_mode - {} -> {}",
            self.config.mode,
            mode
        );
        self.config.mode = mode;
        self.refresh();
    }

    /// Flip the effective scheme. An `auto` mode becomes the explicit
    /// opposite of what is currently shown.
    pub fn toggle_mode(&mut self) {
        let next = self.scheme().toggle();
        self.set_mode(next.into());
    }

    pub fn set_framework(&mut self, framework: Framework) {
        tracing::debug!(
            "ThemeManager::set_framework - {} -> {}",
            self.config.framework,
            framework
        );
        self.config.framework = framework;
        self.refresh();
    }

    pub fn detect_system_preference(&self) -> ColorScheme {
        scheme::detect_system_preference(self.source.as_ref())
    }

    /// React to a host preference change. Only `auto` mode re-resolves;
    /// returns whether the theme was republished.
    pub fn handle_system_preference(&mut self, prefers_dark: bool) -> bool {
        if self.config.mode != ColorMode::Auto {
            tracing::trace!(
                "ThemeManager::handle_system_preference - ignored, mode={}",
                self.config.mode
            );
            return false;
        }
        self.apply(Some(prefers_dark));
        true
    }

    /// Re-resolve with the source's current preference and publish
    pub fn refresh(&mut self) {
        let prefers_dark = self.source.prefers_dark();
        self.apply(prefers_dark);
    }

    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&ThemeChange) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Follow the host's preference for as long as the returned watch lives.
    /// The subscription holds only a weak reference to the manager.
    ///
    /// The source must not be updated while the same thread holds the
    /// manager's lock.
    pub fn watch_system(manager: &Arc<Mutex<ThemeManager>>) -> SchemeWatch {
        let source = Arc::clone(
            &manager
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .source,
        );
        let weak = Arc::downgrade(manager);
        scheme::watch_system_preference(source, move |prefers_dark| {
            if let Some(manager) = weak.upgrade() {
                manager
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .handle_system_preference(prefers_dark);
            }
        })
    }

    fn apply(&mut self, prefers_dark: Option<bool>) {
        let tokens = self.resolver.resolve(&self.config, prefers_dark);
        let mut properties = project(&tokens, self.config.framework);
        for (name, value) in &self.config.custom_properties {
            properties.insert(name.clone(), value.clone());
        }

        let mut classes = vec![tokens.scheme().marker_class()];
        classes.extend(self.config.framework.marker_class());
        let removed_classes = all_marker_classes()
            .into_iter()
            .filter(|class| !classes.contains(class))
            .collect();

        let removed_properties = self
            .properties
            .keys()
            .filter(|name| !properties.contains_key(*name))
            .cloned()
            .collect();

        let update = StyleUpdate {
            properties,
            removed_properties,
            classes,
            removed_classes,
        };
        self.registry.publish(&update);

        tracing::debug!(
            "ThemeManager::apply - framework={} scheme={} properties={} removed={}",
            self.config.framework,
            tokens.scheme(),
            update.properties.len(),
            update.removed_properties.len()
        );

        self.tokens = tokens;
        self.properties = update.properties;

        if self.listeners.is_empty() {
            return;
        }
        let change = ThemeChange {
            config: self.config.clone(),
            tokens: self.tokens.clone(),
            properties: self.properties.clone(),
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("config", &self.config)
            .field("scheme", &self.scheme())
            .field("properties", &self.properties.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Custom properties as an ordered map, for callers building configs by hand
pub fn custom_properties<I, K, V>(entries: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
