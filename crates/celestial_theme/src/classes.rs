//! Component class names and responsive breakpoints

use serde::{Deserialize, Serialize};

/// Visual state a component class list is derived from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComponentState<'a> {
    pub variant: Option<&'a str>,
    pub size: Option<&'a str>,
    pub disabled: bool,
    pub loading: bool,
}

impl<'a> ComponentState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: &'a str) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: &'a str) -> Self {
        self.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// BEM style classes: `cui-button`, `cui-button--primary`, `cui-button--lg`,
/// `cui-button--disabled`, `cui-button--loading`
pub fn component_classes(component: &str, state: &ComponentState<'_>) -> Vec<String> {
    let block = format!("cui-{component}");
    let mut classes = Vec::with_capacity(5);
    if let Some(variant) = state.variant {
        classes.push(format!("{block}--{variant}"));
    }
    if let Some(size) = state.size {
        classes.push(format!("{block}--{size}"));
    }
    if state.disabled {
        classes.push(format!("{block}--disabled"));
    }
    if state.loading {
        classes.push(format!("{block}--loading"));
    }
    classes.insert(0, block);
    classes
}

/// Responsive breakpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn all() -> &'static [Breakpoint] {
        &[
            Breakpoint::Xs,
            Breakpoint::Sm,
            Breakpoint::Md,
            Breakpoint::Lg,
            Breakpoint::Xl,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Minimum viewport width in pixels
    pub fn min_width_px(&self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
        }
    }

    pub fn min_width(&self) -> String {
        format!("{}px", self.min_width_px())
    }

    /// Largest breakpoint whose minimum width fits `width_px`
    pub fn for_width(width_px: u32) -> Breakpoint {
        Self::all()
            .iter()
            .rev()
            .copied()
            .find(|bp| width_px >= bp.min_width_px())
            .unwrap_or(Breakpoint::Xs)
    }

    /// `@media (min-width: 768px)`
    pub fn media_query(&self) -> String {
        format!("@media (min-width: {})", self.min_width())
    }
}
