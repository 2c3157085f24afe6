//! Celestial CLI
//!
//! - `celestial theme` prints the projected `:root` custom properties for a
//!   theme configuration
//! - `celestial icons` prints provider glyph names for semantic icon names

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use celestial::icons::{available_icons, icon_name, IconProvider};
use celestial::theme::{project, to_css, ColorMode, Framework, ThemeResolver};
use celestial::CelestialOptions;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Theme and icon tooling for Celestial UI
#[derive(Parser, Debug)]
#[command(name = "celestial")]
#[command(about = "Theme and icon tooling for Celestial UI")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the CSS custom properties for a theme
    Theme {
        /// celestial.toml, or a directory containing one
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the framework (tailwind, scss, material, css)
        #[arg(short, long)]
        framework: Option<String>,

        /// Override the color mode (light, dark, auto)
        #[arg(short, long)]
        mode: Option<String>,

        /// Resolve `auto` as if the host prefers a dark scheme
        #[arg(long)]
        prefers_dark: bool,

        /// CSS selector for the rule
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Map semantic icon names to a provider's glyph names
    Icons {
        /// fontawesome, material, heroicons, lucide or custom
        #[arg(short, long, default_value = "fontawesome")]
        provider: String,

        /// Names to map; all known icons when empty
        names: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Theme {
            config,
            framework,
            mode,
            prefers_dark,
            selector,
        } => print_theme(
            config.as_deref(),
            framework.as_deref(),
            mode.as_deref(),
            prefers_dark,
            &selector,
        ),
        Commands::Icons { provider, names } => print_icons(&provider, &names),
    }
}

fn print_theme(
    config: Option<&Path>,
    framework: Option<&str>,
    mode: Option<&str>,
    prefers_dark: bool,
    selector: &str,
) -> Result<()> {
    let options = match config {
        Some(path) => CelestialOptions::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => CelestialOptions::default(),
    };
    let mut theme = options.theme;

    if let Some(name) = framework {
        theme.framework = Framework::from_name(name);
        if theme.framework == Framework::Unknown {
            tracing::warn!("unknown framework '{}', emitting base properties only", name);
        }
    }
    if let Some(name) = mode {
        match ColorMode::from_name(name) {
            Some(mode) => theme.mode = mode,
            None => bail!("unknown color mode '{name}' (expected light, dark or auto)"),
        }
    }

    let tokens = ThemeResolver::default().resolve(&theme, Some(prefers_dark));
    let mut properties = project(&tokens, theme.framework);
    properties.extend(theme.custom_properties);

    tracing::debug!(
        "theme: framework={} scheme={} properties={}",
        theme.framework,
        tokens.scheme(),
        properties.len()
    );
    print!("{}", to_css(&properties, selector));
    Ok(())
}

fn print_icons(provider: &str, names: &[String]) -> Result<()> {
    let Some(provider) = IconProvider::from_name(provider) else {
        bail!("unknown icon provider '{provider}'");
    };

    if names.is_empty() {
        for name in available_icons() {
            println!("{name} -> {}", icon_name(name, provider));
        }
    } else {
        for name in names {
            println!("{name} -> {}", icon_name(name, provider));
        }
    }
    Ok(())
}
