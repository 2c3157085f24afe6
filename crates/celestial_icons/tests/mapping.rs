use celestial_icons::{
    available_icons, has_icon, icon_name, IconConfig, IconFormat, IconProvider, IconRegistry,
    ResolvedIcon, ICONS,
};
use pretty_assertions::assert_eq;

#[test]
fn maps_known_names_per_provider() {
    let cases = [
        ("chevron-left", IconProvider::Material, "chevron_left"),
        ("chevron-down", IconProvider::Material, "keyboard_arrow_down"),
        ("times", IconProvider::FontAwesome, "times"),
        ("times", IconProvider::Heroicons, "x-mark"),
        ("exclamation-circle", IconProvider::Lucide, "alert-circle"),
        ("info-circle", IconProvider::Heroicons, "information-circle"),
        ("search", IconProvider::Heroicons, "magnifying-glass"),
        ("settings", IconProvider::FontAwesome, "cog"),
        ("menu", IconProvider::Heroicons, "bars-3"),
        ("spinner", IconProvider::Lucide, "loader-2"),
        ("play", IconProvider::Material, "play_arrow"),
        ("stop", IconProvider::Lucide, "square"),
    ];
    for (name, provider, expected) in cases {
        assert_eq!(icon_name(name, provider), expected, "{name} / {provider}");
    }
}

#[test]
fn unknown_names_and_custom_provider_fall_back_to_identity() {
    for provider in IconProvider::all() {
        assert_eq!(icon_name("not-a-real-icon", *provider), "not-a-real-icon");
    }
    assert_eq!(icon_name("times", IconProvider::Custom), "times");
}

#[test]
fn availability_comes_from_the_table() {
    assert!(has_icon("heart", IconProvider::Material));
    assert!(has_icon("heart", IconProvider::Custom));
    assert!(!has_icon("not-a-real-icon", IconProvider::FontAwesome));

    let names: Vec<&str> = available_icons().collect();
    assert_eq!(names.len(), ICONS.len());
    assert_eq!(names.first(), Some(&"chevron-left"));
    assert_eq!(names.last(), Some(&"stop"));
}

#[test]
fn registry_loads_from_config() {
    let config: IconConfig = toml::from_str(
        r#"
        provider = "lucide"
        format = "svg"

        [custom-icons]
        brand = "<svg viewBox='0 0 24 24'/>"
        "#,
    )
    .unwrap();
    let registry = IconRegistry::new(config);

    assert!(!registry.assets().needs_loading());
    assert_eq!(
        registry.resolve("times"),
        ResolvedIcon::Glyph {
            provider: IconProvider::Lucide,
            format: IconFormat::Svg,
            name: "x".into(),
            class: "lucide-x".into(),
        }
    );
    assert_eq!(
        registry.resolve("brand"),
        ResolvedIcon::Custom("<svg viewBox='0 0 24 24'/>".into())
    );
}

#[test]
fn provider_names_parse_leniently() {
    assert_eq!(IconProvider::from_name("Font-Awesome"), Some(IconProvider::FontAwesome));
    assert_eq!(IconProvider::from_name("lucide"), Some(IconProvider::Lucide));
    assert_eq!(IconProvider::from_name("feather"), None);
}
