//! Built-in token set

use super::TokenTree;

/// Shade keys shared by every color palette, lightest first
pub const SHADE_STEPS: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

const PRIMARY: [&str; 10] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a",
];
const SECONDARY: [&str; 10] = [
    "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
    "#6b21a8", "#581c87",
];
const SUCCESS: [&str; 10] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d",
];
const WARNING: [&str; 10] = [
    "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f",
];
const ERROR: [&str; 10] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d",
];
const NEUTRAL: [&str; 10] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827",
];

/// A single box shadow layer, rendered as CSS
#[derive(Clone, Copy, Debug)]
struct Shadow {
    offset_y: i32,
    blur: i32,
    spread: i32,
    alpha: f32,
}

impl Shadow {
    const fn new(offset_y: i32, blur: i32, spread: i32, alpha: f32) -> Self {
        Self {
            offset_y,
            blur,
            spread,
            alpha,
        }
    }

    fn css(&self) -> String {
        let spread = if self.spread == 0 {
            "0".to_string()
        } else {
            format!("{}px", self.spread)
        };
        format!(
            "0 {}px {}px {} rgb(0 0 0 / {})",
            self.offset_y, self.blur, spread, self.alpha
        )
    }
}

fn shadows(alphas: [f32; 5]) -> TokenTree {
    let layers = [
        ("sm", Shadow::new(1, 2, 0, alphas[0])),
        ("base", Shadow::new(1, 3, 0, alphas[1])),
        ("md", Shadow::new(4, 6, -1, alphas[2])),
        ("lg", Shadow::new(10, 15, -3, alphas[3])),
        ("xl", Shadow::new(20, 25, -5, alphas[4])),
    ];
    layers
        .iter()
        .map(|(key, shadow)| (*key, shadow.css()))
        .collect()
}

fn palette(shades: [&str; 10]) -> TokenTree {
    SHADE_STEPS.into_iter().zip(shades).collect()
}

fn leaves(pairs: &[(&str, &str)]) -> TokenTree {
    pairs.iter().copied().collect()
}

/// Light scheme tokens every theme starts from
pub fn base_tokens() -> TokenTree {
    let colors = TokenTree::new()
        .with("primary", palette(PRIMARY))
        .with("secondary", palette(SECONDARY))
        .with("success", palette(SUCCESS))
        .with("warning", palette(WARNING))
        .with("error", palette(ERROR))
        .with("neutral", palette(NEUTRAL))
        .with(
            "background",
            leaves(&[("primary", "#ffffff"), ("secondary", "#f9fafb")]),
        )
        .with(
            "surface",
            leaves(&[("primary", "#ffffff"), ("secondary", "#f3f4f6")]),
        )
        .with(
            "text",
            leaves(&[
                ("primary", "#111827"),
                ("secondary", "#4b5563"),
                ("disabled", "#9ca3af"),
                ("inverse", "#ffffff"),
            ]),
        )
        .with(
            "border",
            leaves(&[
                ("primary", "#e5e7eb"),
                ("secondary", "#d1d5db"),
                ("focus", "#3b82f6"),
            ]),
        );

    let typography = TokenTree::new()
        .with(
            "font-family",
            leaves(&[
                ("sans", "Inter, ui-sans-serif, system-ui, sans-serif"),
                ("serif", "ui-serif, Georgia, Cambria, serif"),
                ("mono", "ui-monospace, SFMono-Regular, Menlo, monospace"),
            ]),
        )
        .with(
            "font-size",
            leaves(&[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("base", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
            ]),
        )
        .with(
            "font-weight",
            leaves(&[
                ("light", "300"),
                ("normal", "400"),
                ("medium", "500"),
                ("semibold", "600"),
                ("bold", "700"),
            ]),
        )
        .with(
            "line-height",
            leaves(&[("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")]),
        );

    let spacing = leaves(&[
        ("0", "0"),
        ("1", "0.25rem"),
        ("2", "0.5rem"),
        ("3", "0.75rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("8", "2rem"),
        ("10", "2.5rem"),
        ("12", "3rem"),
        ("16", "4rem"),
    ]);

    let radius = leaves(&[
        ("none", "0"),
        ("sm", "0.125rem"),
        ("base", "0.25rem"),
        ("md", "0.375rem"),
        ("lg", "0.5rem"),
        ("xl", "0.75rem"),
        ("full", "9999px"),
    ]);

    TokenTree::new()
        .with("colors", colors)
        .with("typography", typography)
        .with("spacing", spacing)
        .with("border-radius", radius)
        .with("shadows", shadows([0.05, 0.1, 0.1, 0.1, 0.1]))
}

/// Overrides applied on top of [`base_tokens`] when the dark scheme is active
pub fn dark_tokens() -> TokenTree {
    let colors = TokenTree::new()
        .with(
            "background",
            leaves(&[("primary", "#111827"), ("secondary", "#1f2937")]),
        )
        .with(
            "surface",
            leaves(&[("primary", "#1f2937"), ("secondary", "#374151")]),
        )
        .with(
            "text",
            leaves(&[
                ("primary", "#f9fafb"),
                ("secondary", "#d1d5db"),
                ("disabled", "#6b7280"),
                ("inverse", "#111827"),
            ]),
        )
        .with(
            "border",
            leaves(&[
                ("primary", "#374151"),
                ("secondary", "#4b5563"),
                ("focus", "#60a5fa"),
            ]),
        );

    TokenTree::new()
        .with("colors", colors)
        .with("shadows", shadows([0.2, 0.3, 0.3, 0.3, 0.3]))
}
