//! Overlay identifiers

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque identifier of an overlay request.
///
/// Generated ids look like `modal-3` or `toast-7` and come from a single
/// monotonic counter owned by the manager, so they are never reused. Toasts
/// may also carry a caller-chosen id to support replace-on-reshow.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(String);

impl OverlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub(crate) fn generated(prefix: &str, counter: u64) -> Self {
        Self(format!("{prefix}-{counter}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OverlayId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OverlayId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for OverlayId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OverlayId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
