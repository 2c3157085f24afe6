//! Provider-neutral icon names
//!
//! Components refer to icons by semantic name (`chevron-left`, `times`,
//! `spinner`). This crate maps those names onto the glyph names of the
//! supported icon libraries and describes what each library needs loaded.
//!
//! ```
//! use celestial_icons::{icon_name, IconProvider};
//!
//! assert_eq!(icon_name("chevron-left", IconProvider::Material), "chevron_left");
//! assert_eq!(icon_name("times", IconProvider::Lucide), "x");
//! assert_eq!(icon_name("not-a-real-icon", IconProvider::Material), "not-a-real-icon");
//! ```

mod assets;
mod mappings;
mod provider;
mod registry;

pub use assets::ProviderAssets;
pub use mappings::{available_icons, has_icon, icon_name, lookup, IconMapping, ICONS};
pub use provider::IconProvider;
pub use registry::{IconConfig, IconFormat, IconRegistry, ResolvedIcon};
