//! Projection of resolved tokens onto framework specific CSS custom properties

use indexmap::IndexMap;

use crate::config::Framework;
use crate::resolve::ResolvedTokens;
use crate::tokens::SHADE_STEPS;

/// Property name -> value, in emission order
pub type StyleProperties = IndexMap<String, String>;

/// Palettes exposed as utility color variables
pub const UTILITY_PALETTES: [&str; 6] = [
    "primary",
    "secondary",
    "success",
    "warning",
    "error",
    "neutral",
];

/// Grid column counts exposed by the plain projection
pub const GRID_COLUMNS: [u8; 6] = [1, 2, 3, 4, 6, 12];

const PREPROCESSOR_VARIABLES: [(&str, &str); 20] = [
    ("primary", "colors.primary.500"),
    ("secondary", "colors.secondary.500"),
    ("success", "colors.success.500"),
    ("warning", "colors.warning.500"),
    ("error", "colors.error.500"),
    ("font-family-base", "typography.font-family.sans"),
    ("font-size-base", "typography.font-size.base"),
    ("font-weight-normal", "typography.font-weight.normal"),
    ("font-weight-bold", "typography.font-weight.bold"),
    ("spacing-xs", "spacing.1"),
    ("spacing-sm", "spacing.2"),
    ("spacing-md", "spacing.4"),
    ("spacing-lg", "spacing.6"),
    ("spacing-xl", "spacing.8"),
    ("border-radius-sm", "border-radius.sm"),
    ("border-radius-base", "border-radius.base"),
    ("border-radius-lg", "border-radius.lg"),
    ("shadow-sm", "shadows.sm"),
    ("shadow-base", "shadows.base"),
    ("shadow-lg", "shadows.lg"),
];

/// Material system color roles and the token each one reads
pub const MATERIAL_ROLES: [(&str, &str); 18] = [
    ("primary", "colors.primary.500"),
    ("on-primary", "colors.text.inverse"),
    ("primary-container", "colors.primary.100"),
    ("on-primary-container", "colors.primary.900"),
    ("secondary", "colors.secondary.500"),
    ("on-secondary", "colors.text.inverse"),
    ("secondary-container", "colors.secondary.100"),
    ("on-secondary-container", "colors.secondary.900"),
    ("surface", "colors.surface.primary"),
    ("on-surface", "colors.text.primary"),
    ("surface-variant", "colors.surface.secondary"),
    ("on-surface-variant", "colors.text.secondary"),
    ("background", "colors.background.primary"),
    ("on-background", "colors.text.primary"),
    ("error", "colors.error.500"),
    ("on-error", "colors.text.inverse"),
    ("error-container", "colors.error.100"),
    ("on-error-container", "colors.error.900"),
];

/// `colors.primary.500` -> `--cui-colors-primary-500`
pub fn plain_property_name(path: &str) -> String {
    format!("--cui-{}", path.replace('.', "-"))
}

/// Token path a Material role reads from
pub fn material_role(role: &str) -> Option<&'static str> {
    MATERIAL_ROLES
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, path)| *path)
}

/// Project `tokens` into custom properties for `framework`.
///
/// Every framework gets one `--cui-*` property per token. The framework
/// specific set follows; tokens missing from the resolved set are skipped.
pub fn project(tokens: &ResolvedTokens, framework: Framework) -> StyleProperties {
    let mut properties: StyleProperties = tokens
        .iter()
        .map(|(path, value)| (plain_property_name(path), value.to_string()))
        .collect();

    match framework {
        Framework::Utility => project_utility(tokens, &mut properties),
        Framework::Preprocessor => {
            project_table(tokens, "--cui-scss-", &PREPROCESSOR_VARIABLES, &mut properties)
        }
        Framework::Material => {
            project_table(tokens, "--md-sys-color-", &MATERIAL_ROLES, &mut properties)
        }
        Framework::Plain => project_grid(&mut properties),
        Framework::Unknown => {}
    }

    tracing::trace!(
        "projection::project - {} -> {} properties",
        framework,
        properties.len()
    );
    properties
}

fn project_utility(tokens: &ResolvedTokens, properties: &mut StyleProperties) {
    for palette in UTILITY_PALETTES {
        for shade in SHADE_STEPS {
            if let Some(value) = tokens.get(&format!("colors.{palette}.{shade}")) {
                properties.insert(format!("--tw-color-{palette}-{shade}"), value.to_string());
            }
        }
    }
}

fn project_table(
    tokens: &ResolvedTokens,
    prefix: &str,
    table: &[(&str, &str)],
    properties: &mut StyleProperties,
) {
    for (name, path) in table {
        if let Some(value) = tokens.get(path) {
            properties.insert(format!("{prefix}{name}"), value.to_string());
        }
    }
}

fn project_grid(properties: &mut StyleProperties) {
    for columns in GRID_COLUMNS {
        properties.insert(
            format!("--cui-grid-cols-{columns}"),
            format!("repeat({columns}, minmax(0, 1fr))"),
        );
    }
}

/// Render properties as a CSS rule for `selector`
pub fn to_css(properties: &StyleProperties, selector: &str) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in properties {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str("}\n");
    css
}
