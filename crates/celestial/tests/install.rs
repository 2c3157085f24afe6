use std::fs;
use std::sync::Arc;
use std::time::Duration;

use celestial::overlay::ManualClock;
use celestial::prelude::*;
use celestial::CONFIG_FILE_NAME;
use pretty_assertions::assert_eq;

const OPTIONS: &str = r##"
component-prefix = "Cui"

[theme]
framework = "scss"
mode = "auto"

[theme.tokens.colors.primary]
500 = "#ff0000"

[icons]
provider = "material"

[overlay]
grace-period-ms = 150
base-z-index = 2000
"##;

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("celestial-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn install_wires_every_section() {
    let options = CelestialOptions::from_toml_str(OPTIONS).unwrap();
    let clock = ManualClock::new();
    let registry = SharedStyleRegistry::new();
    let mut ui = Celestial::install_with_clock(
        options,
        Arc::new(clock.clone()),
        Arc::new(SchemeSignal::new(Some(true))),
        registry.clone(),
    );

    assert_eq!(ui.components()[0], "CuiButton");
    assert_eq!(ui.theme.scheme(), ColorScheme::Dark);
    assert_eq!(
        registry.property("--cui-scss-primary").as_deref(),
        Some("#ff0000")
    );
    assert_eq!(ui.icons.resolve("times").glyph_name(), Some("close"));

    let modal = ui.overlays.open(ModalOptions::new().title("Hi"));
    assert_eq!(ui.overlays.z_index_of(modal.id()), Some(2000));
    ui.overlays.close(&modal.id().clone(), None);
    clock.advance(Duration::from_millis(150));
    assert_eq!(ui.overlays.tick(), 1);
}

#[test]
fn load_reads_file_or_directory() {
    let dir = scratch_dir("load");
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, OPTIONS).unwrap();

    let from_dir = CelestialOptions::load(&dir).unwrap();
    let from_file = CelestialOptions::load(&path).unwrap();
    assert_eq!(from_dir, from_file);
    assert_eq!(from_dir.theme.framework, Framework::Preprocessor);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_reports_path_on_failure() {
    let dir = scratch_dir("missing");
    let err = CelestialOptions::load(&dir.join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("nope.toml"));

    let broken = dir.join(CONFIG_FILE_NAME);
    fs::write(&broken, "[theme\n").unwrap();
    let err = CelestialOptions::load(&dir).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn options_round_trip_through_toml() {
    let options = CelestialOptions::from_toml_str(OPTIONS).unwrap();
    let text = options.to_toml().unwrap();
    assert_eq!(CelestialOptions::from_toml_str(&text).unwrap(), options);
}
