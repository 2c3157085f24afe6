//! Celestial Overlay Stack
//!
//! State manager for stacked modal dialogs and transient toast
//! notifications.
//!
//! # Overview
//!
//! - **Registry**: one ordered list of overlay entries; order is paint order
//! - **Settlement**: every request returns an [`OverlayHandle`] that settles
//!   exactly once, either resolved with a caller value or cancelled
//! - **Two-phase removal**: closing hides and settles an entry, a later
//!   [`OverlayManager::tick`] purges it after the exit-transition window
//! - **Timers**: toast auto-dismiss and purge deadlines come from an injected
//!   [`Clock`]; the host calls `tick` (see [`OverlayManager::next_deadline`])
//!
//! # Quick Start
//!
//! ```rust
//! use celestial_overlay::{ConfirmOptions, OverlayConfig, OverlayManager};
//! use serde_json::Value;
//!
//! let mut overlays = OverlayManager::new(OverlayConfig::default());
//!
//! let mut answer = overlays.confirm(ConfirmOptions::new("Discard changes?"));
//! let _toast = overlays.success("Draft saved");
//!
//! // The renderer relays the user's click on "Confirm".
//! overlays.close(&answer.id().clone(), Some(Value::Bool(true)));
//! assert_eq!(answer.try_result(), Some(true));
//! ```

mod clock;
mod id;
mod manager;
mod options;
mod settlement;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::OverlayId;
pub use manager::{OverlayEntry, OverlayKind, OverlayManager, OverlayPayload};
pub use options::{
    AlertOptions, ConfirmOptions, DialogPreset, ModalOptions, OverlayConfig, OverlayPatch,
    PromptOptions, ToastOptions, ToastPosition, Tone, DEFAULT_MAX_WIDTH, DEFAULT_TOAST_DURATION,
    DIALOG_MAX_WIDTH,
};
pub use settlement::{CancelReason, OverlayHandle, OverlayResult, Settlement, SettlementOutput};
