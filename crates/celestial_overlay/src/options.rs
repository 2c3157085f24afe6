//! Request options for modals and toasts

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::OverlayId;

/// Default toast lifetime before auto-dismiss
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Default modal width hint
pub const DEFAULT_MAX_WIDTH: &str = "500px";

/// Width hint used by the confirm/alert/prompt presets
pub const DIALOG_MAX_WIDTH: &str = "400px";

/// Semantic tone carried for styling (toast type, dialog accent)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }
}

/// Screen anchor for a toast stack
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Every anchor, in container render order
    pub fn all() -> &'static [ToastPosition] {
        const POSITIONS: [ToastPosition; 6] = [
            ToastPosition::TopLeft,
            ToastPosition::TopCenter,
            ToastPosition::TopRight,
            ToastPosition::BottomLeft,
            ToastPosition::BottomCenter,
            ToastPosition::BottomRight,
        ];
        &POSITIONS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }

    /// Modifier class for the container holding toasts at this anchor
    pub fn container_class(self) -> String {
        format!("cui-toast-container--{}", self.as_str())
    }
}

/// Dialog preset descriptor handed to the rendering layer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "preset", rename_all = "lowercase")]
pub enum DialogPreset {
    Confirm {
        message: String,
        confirm_text: String,
        cancel_text: String,
        tone: Tone,
    },
    Alert {
        message: String,
        button_text: String,
        tone: Tone,
    },
    Prompt {
        message: String,
        placeholder: Option<String>,
        default_value: Option<String>,
        confirm_text: String,
        cancel_text: String,
        required: bool,
    },
}

/// Fields of a modal request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModalOptions {
    pub title: Option<String>,
    pub message: Option<String>,
    /// Name of the component the renderer should mount
    pub component: Option<String>,
    /// Props forwarded to the component, never read by the manager
    pub props: Map<String, Value>,
    pub persistent: bool,
    pub fullscreen: bool,
    pub scrollable: bool,
    pub close_on_escape: bool,
    pub close_on_click_outside: bool,
    pub max_width: String,
    pub dialog: Option<DialogPreset>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            component: None,
            props: Map::new(),
            persistent: false,
            fullscreen: false,
            scrollable: false,
            close_on_escape: true,
            close_on_click_outside: true,
            max_width: DEFAULT_MAX_WIDTH.to_string(),
            dialog: None,
        }
    }
}

impl ModalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    pub fn close_on_click_outside(mut self, close: bool) -> Self {
        self.close_on_click_outside = close;
        self
    }

    pub fn max_width(mut self, width: impl Into<String>) -> Self {
        self.max_width = width.into();
        self
    }
}

/// Options for [`OverlayManager::confirm`](crate::OverlayManager::confirm)
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub message: String,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub tone: Tone,
    pub persistent: bool,
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            confirm_text: None,
            cancel_text: None,
            tone: Tone::Info,
            persistent: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub(crate) fn into_modal(self) -> ModalOptions {
        ModalOptions {
            title: Some(self.title.unwrap_or_else(|| "Confirm".to_string())),
            message: Some(self.message.clone()),
            persistent: self.persistent,
            close_on_click_outside: !self.persistent,
            max_width: DIALOG_MAX_WIDTH.to_string(),
            dialog: Some(DialogPreset::Confirm {
                message: self.message,
                confirm_text: self.confirm_text.unwrap_or_else(|| "Confirm".to_string()),
                cancel_text: self.cancel_text.unwrap_or_else(|| "Cancel".to_string()),
                tone: self.tone,
            }),
            ..ModalOptions::default()
        }
    }
}

/// Options for [`OverlayManager::alert`](crate::OverlayManager::alert)
#[derive(Clone, Debug, PartialEq)]
pub struct AlertOptions {
    pub title: Option<String>,
    pub message: String,
    pub button_text: Option<String>,
    pub tone: Tone,
}

impl AlertOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            button_text: None,
            tone: Tone::Info,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub(crate) fn into_modal(self) -> ModalOptions {
        ModalOptions {
            title: Some(self.title.unwrap_or_else(|| "Alert".to_string())),
            message: Some(self.message.clone()),
            max_width: DIALOG_MAX_WIDTH.to_string(),
            dialog: Some(DialogPreset::Alert {
                message: self.message,
                button_text: self.button_text.unwrap_or_else(|| "OK".to_string()),
                tone: self.tone,
            }),
            ..ModalOptions::default()
        }
    }
}

/// Options for [`OverlayManager::prompt`](crate::OverlayManager::prompt)
#[derive(Clone, Debug, PartialEq)]
pub struct PromptOptions {
    pub title: Option<String>,
    pub message: String,
    pub placeholder: Option<String>,
    pub default_value: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub required: bool,
}

impl PromptOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            placeholder: None,
            default_value: None,
            confirm_text: None,
            cancel_text: None,
            required: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub(crate) fn into_modal(self) -> ModalOptions {
        ModalOptions {
            title: Some(self.title.unwrap_or_else(|| "Input Required".to_string())),
            message: Some(self.message.clone()),
            max_width: DIALOG_MAX_WIDTH.to_string(),
            dialog: Some(DialogPreset::Prompt {
                message: self.message,
                placeholder: self.placeholder,
                default_value: self.default_value,
                confirm_text: self.confirm_text.unwrap_or_else(|| "OK".to_string()),
                cancel_text: self.cancel_text.unwrap_or_else(|| "Cancel".to_string()),
                required: self.required,
            }),
            ..ModalOptions::default()
        }
    }
}

/// Fields of a toast request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToastOptions {
    /// Caller id; reshowing a visible toast with the same id replaces it
    pub id: Option<OverlayId>,
    pub message: String,
    pub title: Option<String>,
    pub tone: Tone,
    /// Zero disables auto-dismiss
    pub duration: Duration,
    pub persistent: bool,
    pub position: ToastPosition,
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
            title: None,
            tone: Tone::Info,
            duration: DEFAULT_TOAST_DURATION,
            persistent: false,
            position: ToastPosition::TopRight,
        }
    }

    pub fn id(mut self, id: impl Into<OverlayId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Whether this toast schedules an auto-dismiss timer
    pub fn auto_dismisses(&self) -> bool {
        !self.persistent && !self.duration.is_zero()
    }
}

impl From<&str> for ToastOptions {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ToastOptions {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Shallow field update applied by [`OverlayManager::update`](crate::OverlayManager::update).
///
/// Fields that do not exist on the target kind are ignored. Identity,
/// creation order and settlement are never touched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub props: Option<Map<String, Value>>,
    pub persistent: Option<bool>,
    pub fullscreen: Option<bool>,
    pub scrollable: Option<bool>,
    pub close_on_escape: Option<bool>,
    pub close_on_click_outside: Option<bool>,
    pub max_width: Option<String>,
    pub tone: Option<Tone>,
    pub duration: Option<Duration>,
    pub position: Option<ToastPosition>,
}

impl OverlayPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Props are merged key-wise into the existing map
    pub fn props(mut self, props: Map<String, Value>) -> Self {
        self.props = Some(props);
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = Some(fullscreen);
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = Some(scrollable);
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = Some(close);
        self
    }

    pub fn close_on_click_outside(mut self, close: bool) -> Self {
        self.close_on_click_outside = Some(close);
        self
    }

    pub fn max_width(mut self, width: impl Into<String>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub(crate) fn apply_to_modal(self, modal: &mut ModalOptions) {
        if let Some(title) = self.title {
            modal.title = Some(title);
        }
        if let Some(message) = self.message {
            modal.message = Some(message);
        }
        if let Some(props) = self.props {
            modal.props.extend(props);
        }
        if let Some(persistent) = self.persistent {
            modal.persistent = persistent;
        }
        if let Some(fullscreen) = self.fullscreen {
            modal.fullscreen = fullscreen;
        }
        if let Some(scrollable) = self.scrollable {
            modal.scrollable = scrollable;
        }
        if let Some(close) = self.close_on_escape {
            modal.close_on_escape = close;
        }
        if let Some(close) = self.close_on_click_outside {
            modal.close_on_click_outside = close;
        }
        if let Some(width) = self.max_width {
            modal.max_width = width;
        }
    }

    pub(crate) fn apply_to_toast(self, toast: &mut ToastOptions) {
        if let Some(title) = self.title {
            toast.title = Some(title);
        }
        if let Some(message) = self.message {
            toast.message = message;
        }
        if let Some(persistent) = self.persistent {
            toast.persistent = persistent;
        }
        if let Some(tone) = self.tone {
            toast.tone = tone;
        }
        if let Some(duration) = self.duration {
            toast.duration = duration;
        }
        if let Some(position) = self.position {
            toast.position = position;
        }
    }
}

/// Manager policy constants, loadable from the `[overlay]` table of a config file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OverlayConfig {
    /// Exit-transition window between `visible = false` and purge
    pub grace_period_ms: u64,
    pub base_z_index: u32,
    pub z_index_step: u32,
}

impl OverlayConfig {
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            grace_period_ms: 300,
            base_z_index: 1000,
            z_index_step: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_message_converts_to_info_toast() {
        let toast = ToastOptions::from("Saved");
        assert_eq!(toast.message, "Saved");
        assert_eq!(toast.tone, Tone::Info);
        assert_eq!(toast.position, ToastPosition::TopRight);
        assert_eq!(toast.duration, DEFAULT_TOAST_DURATION);
        assert!(toast.auto_dismisses());
    }

    #[test]
    fn zero_duration_or_persistent_disables_auto_dismiss() {
        assert!(!ToastOptions::new("a").duration_ms(0).auto_dismisses());
        assert!(!ToastOptions::new("b").persistent(true).auto_dismisses());
    }

    #[test]
    fn container_classes_follow_position() {
        assert_eq!(
            ToastPosition::BottomCenter.container_class(),
            "cui-toast-container--bottom-center"
        );
        assert_eq!(ToastPosition::all().len(), 6);
    }

    #[test]
    fn confirm_preset_defaults() {
        let modal = ConfirmOptions::new("Delete file?").into_modal();
        assert_eq!(modal.title.as_deref(), Some("Confirm"));
        assert_eq!(modal.max_width, DIALOG_MAX_WIDTH);
        assert!(modal.close_on_escape);
        assert!(matches!(
            modal.dialog,
            Some(DialogPreset::Confirm { ref confirm_text, .. }) if confirm_text == "Confirm"
        ));
    }

    #[test]
    fn persistent_confirm_ignores_backdrop() {
        let modal = ConfirmOptions::new("Really?").persistent(true).into_modal();
        assert!(modal.persistent);
        assert!(!modal.close_on_click_outside);
    }

    #[test]
    fn patch_merges_props_and_ignores_toast_fields_on_modal() {
        let mut modal = ModalOptions::new().prop("a", 1);
        let mut props = Map::new();
        props.insert("b".into(), Value::from(2));

        OverlayPatch::new()
            .props(props)
            .position(ToastPosition::BottomLeft)
            .max_width("720px")
            .apply_to_modal(&mut modal);

        assert_eq!(modal.props.get("a"), Some(&Value::from(1)));
        assert_eq!(modal.props.get("b"), Some(&Value::from(2)));
        assert_eq!(modal.max_width, "720px");
    }

    #[test]
    fn config_reads_kebab_case_keys() {
        let config: OverlayConfig = toml::from_str("grace-period-ms = 150\n").unwrap();
        assert_eq!(config.grace_period(), Duration::from_millis(150));
        assert_eq!(config.base_z_index, 1000);
    }
}
