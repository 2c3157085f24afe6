use crate::provider::IconProvider;

/// What a loader needs to make a provider's glyphs available
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderAssets {
    pub stylesheets: &'static [&'static str],
    /// Font family to probe before glyphs render
    pub font_family: Option<&'static str>,
    pub default_prefix: Option<&'static str>,
}

impl ProviderAssets {
    pub const NONE: ProviderAssets = ProviderAssets {
        stylesheets: &[],
        font_family: None,
        default_prefix: None,
    };

    pub fn for_provider(provider: IconProvider) -> Self {
        match provider {
            IconProvider::FontAwesome => ProviderAssets {
                stylesheets: &[
                    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
                ],
                font_family: Some("Font Awesome 6 Free"),
                default_prefix: Some("fas"),
            },
            IconProvider::Material => ProviderAssets {
                stylesheets: &[
                    "https://fonts.googleapis.com/icon?family=Material+Icons",
                    "https://fonts.googleapis.com/icon?family=Material+Icons+Outlined",
                ],
                font_family: Some("Material Icons"),
                default_prefix: None,
            },
            IconProvider::Heroicons | IconProvider::Lucide | IconProvider::Custom => Self::NONE,
        }
    }

    /// Font check string, e.g. `16px "Material Icons"`
    pub fn font_probe(&self) -> Option<String> {
        self.font_family.map(|family| format!("16px \"{family}\""))
    }

    pub fn needs_loading(&self) -> bool {
        !self.stylesheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_providers_have_assets() {
        let fa = ProviderAssets::for_provider(IconProvider::FontAwesome);
        assert!(fa.needs_loading());
        assert_eq!(fa.default_prefix, Some("fas"));
        assert_eq!(fa.font_probe().as_deref(), Some("16px \"Font Awesome 6 Free\""));

        let material = ProviderAssets::for_provider(IconProvider::Material);
        assert_eq!(material.stylesheets.len(), 2);
    }

    #[test]
    fn svg_providers_need_nothing() {
        for provider in [IconProvider::Heroicons, IconProvider::Lucide, IconProvider::Custom] {
            let assets = ProviderAssets::for_provider(provider);
            assert_eq!(assets, ProviderAssets::NONE);
            assert_eq!(assets.font_probe(), None);
        }
    }
}
