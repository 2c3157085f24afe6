//! Overlay stack manager
//!
//! Owns the ordered registry of modal and toast requests. Entries are kept in
//! creation order, which is also paint order: the stacking index of an entry
//! is its position in the registry and its z-index is derived from that.
//!
//! Removal is two-phase. Closing flips `visible` off and settles the entry
//! immediately; the entry itself stays in the registry for the configured
//! grace period so the renderer can play an exit transition, and is purged
//! by a later [`OverlayManager::tick`].

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::id::OverlayId;
use crate::options::{
    AlertOptions, ConfirmOptions, ModalOptions, OverlayConfig, OverlayPatch, PromptOptions, Tone,
    ToastOptions, ToastPosition,
};
use crate::settlement::{
    settle_channel, CancelReason, OverlayHandle, OverlayResult, Settlement, Settler,
};

/// Discriminator for [`OverlayEntry`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Modal,
    Toast,
}

/// Kind-specific request data, passed through to the renderer untouched
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayPayload {
    Modal(ModalOptions),
    Toast(ToastOptions),
}

/// A tracked overlay request
pub struct OverlayEntry {
    id: OverlayId,
    seq: u64,
    visible: bool,
    payload: OverlayPayload,
    settler: Option<Settler>,
}

impl OverlayEntry {
    fn new(id: OverlayId, seq: u64, payload: OverlayPayload, settler: Settler) -> Self {
        Self {
            id,
            seq,
            visible: true,
            payload,
            settler: Some(settler),
        }
    }

    pub fn id(&self) -> &OverlayId {
        &self.id
    }

    /// Monotonic creation order
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn kind(&self) -> OverlayKind {
        match self.payload {
            OverlayPayload::Modal(_) => OverlayKind::Modal,
            OverlayPayload::Toast(_) => OverlayKind::Toast,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_settled(&self) -> bool {
        self.settler.is_none()
    }

    pub fn payload(&self) -> &OverlayPayload {
        &self.payload
    }

    pub fn as_modal(&self) -> Option<&ModalOptions> {
        match &self.payload {
            OverlayPayload::Modal(modal) => Some(modal),
            OverlayPayload::Toast(_) => None,
        }
    }

    pub fn as_toast(&self) -> Option<&ToastOptions> {
        match &self.payload {
            OverlayPayload::Toast(toast) => Some(toast),
            OverlayPayload::Modal(_) => None,
        }
    }

    pub fn persistent(&self) -> bool {
        match &self.payload {
            OverlayPayload::Modal(modal) => modal.persistent,
            OverlayPayload::Toast(toast) => toast.persistent,
        }
    }

    fn is_visible_modal(&self) -> bool {
        self.visible && self.kind() == OverlayKind::Modal
    }

    /// Returns false when the slot was already spent
    fn settle(&mut self, outcome: OverlayResult) -> bool {
        match self.settler.take() {
            Some(settler) => {
                settler(outcome);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for OverlayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayEntry")
            .field("id", &self.id)
            .field("seq", &self.seq)
            .field("visible", &self.visible)
            .field("settled", &self.is_settled())
            .field("payload", &self.payload)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeferredAction {
    Purge,
    AutoDismiss,
}

/// Scheduled action keyed by entry sequence, never by id: a toast reshown
/// under the same id must not be purged by its predecessor's timer.
#[derive(Clone, Copy, Debug)]
struct Deferred {
    due: Instant,
    scheduled: Instant,
    seq: u64,
    action: DeferredAction,
}

/// Registry of active modals and toasts.
///
/// Construct one per application and hand it to whatever needs to open
/// overlays. All operations are total: unknown ids are ignored.
pub struct OverlayManager {
    config: OverlayConfig,
    clock: Arc<dyn Clock>,
    entries: Vec<OverlayEntry>,
    deferred: Vec<Deferred>,
    counter: u64,
    paused_at: Option<Instant>,
}

impl OverlayManager {
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: OverlayConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            entries: Vec::new(),
            deferred: Vec::new(),
            counter: 0,
            paused_at: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    // ========== Modals ==========

    /// Open a modal; the handle resolves with the value passed to `close`
    pub fn open(&mut self, options: ModalOptions) -> OverlayHandle<OverlayResult> {
        let (settler, rx) = settle_channel(|outcome| outcome);
        let id = self.push_modal(options, settler);
        OverlayHandle::new(id, rx)
    }

    /// Yes/no dialog. Any cancellation settles as `false`.
    pub fn confirm(&mut self, options: ConfirmOptions) -> OverlayHandle<bool> {
        let (settler, rx) = settle_channel(|outcome| match outcome {
            Settlement::Resolved(value) => value.as_bool().unwrap_or(false),
            Settlement::Cancelled(_) => false,
        });
        let id = self.push_modal(options.into_modal(), settler);
        OverlayHandle::new(id, rx)
    }

    /// Acknowledge-only dialog
    pub fn alert(&mut self, options: AlertOptions) -> OverlayHandle<()> {
        let (settler, rx) = settle_channel(|_| ());
        let id = self.push_modal(options.into_modal(), settler);
        OverlayHandle::new(id, rx)
    }

    /// Text input dialog. Cancellation or a null result settles as `None`.
    pub fn prompt(&mut self, options: PromptOptions) -> OverlayHandle<Option<String>> {
        let (settler, rx) = settle_channel(|outcome| match outcome {
            Settlement::Resolved(Value::String(text)) => Some(text),
            Settlement::Resolved(Value::Null) | Settlement::Cancelled(_) => None,
            Settlement::Resolved(other) => Some(other.to_string()),
        });
        let id = self.push_modal(options.into_modal(), settler);
        OverlayHandle::new(id, rx)
    }

    fn push_modal(&mut self, options: ModalOptions, settler: Settler) -> OverlayId {
        let (seq, id) = self.generate_id("modal");
        self.entries.push(OverlayEntry::new(
            id.clone(),
            seq,
            OverlayPayload::Modal(options),
            settler,
        ));
        tracing::debug!("OverlayManager::open - {} at depth {}", id, self.entries.len() - 1);
        id
    }

    // ========== Toasts ==========

    /// Show a toast from a message or full options.
    ///
    /// Reusing the id of a tracked toast replaces it in place of stacking a
    /// duplicate; the replaced toast settles as cancelled.
    pub fn show(&mut self, options: impl Into<ToastOptions>) -> OverlayHandle<OverlayResult> {
        let mut options = options.into();

        let (seq, id) = match options.id.take() {
            Some(id) if self.holds_modal(&id) => {
                tracing::warn!(
                    "OverlayManager::show - toast id {} belongs to a modal, generating a fresh one",
                    id
                );
                self.generate_id("toast")
            }
            Some(id) => {
                self.replace_toast(&id);
                (self.next_seq(), id)
            }
            None => self.generate_id("toast"),
        };
        options.id = Some(id.clone());

        let auto_dismiss = options.auto_dismisses().then_some(options.duration);
        let (settler, rx) = settle_channel(|outcome| outcome);
        self.entries.push(OverlayEntry::new(
            id.clone(),
            seq,
            OverlayPayload::Toast(options),
            settler,
        ));
        if let Some(duration) = auto_dismiss {
            self.schedule(seq, duration, DeferredAction::AutoDismiss);
        }
        tracing::debug!("OverlayManager::show - {} (auto-dismiss {:?})", id, auto_dismiss);

        OverlayHandle::new(id, rx)
    }

    pub fn success(&mut self, options: impl Into<ToastOptions>) -> OverlayHandle<OverlayResult> {
        self.show(options.into().tone(Tone::Success))
    }

    pub fn error(&mut self, options: impl Into<ToastOptions>) -> OverlayHandle<OverlayResult> {
        self.show(options.into().tone(Tone::Error))
    }

    pub fn warning(&mut self, options: impl Into<ToastOptions>) -> OverlayHandle<OverlayResult> {
        self.show(options.into().tone(Tone::Warning))
    }

    pub fn info(&mut self, options: impl Into<ToastOptions>) -> OverlayHandle<OverlayResult> {
        self.show(options.into().tone(Tone::Info))
    }

    fn holds_modal(&self, id: &OverlayId) -> bool {
        self.entries
            .iter()
            .any(|entry| &entry.id == id && entry.kind() == OverlayKind::Modal)
    }

    fn replace_toast(&mut self, id: &OverlayId) {
        let Some(pos) = self.entries.iter().position(|entry| &entry.id == id) else {
            return;
        };
        let mut previous = self.entries.remove(pos);
        previous.settle(Settlement::Cancelled(CancelReason::Replaced));
        let seq = previous.seq;
        self.deferred.retain(|deferred| deferred.seq != seq);
        tracing::debug!("OverlayManager::show - replacing {}", id);
    }

    // ========== Dismissal ==========

    /// Close an entry and settle it with `result`.
    ///
    /// Without a result a modal settles as cancelled and a toast resolves
    /// with `null`. Unknown or already closing ids are ignored.
    pub fn close(&mut self, id: &OverlayId, result: Option<Value>) {
        let Some(index) = self.index_of(id) else {
            tracing::trace!("OverlayManager::close - unknown id {}", id);
            return;
        };
        let outcome = match (result, self.entries[index].kind()) {
            (Some(value), _) => Settlement::Resolved(value),
            (None, OverlayKind::Modal) => Settlement::Cancelled(CancelReason::Dismissed),
            (None, OverlayKind::Toast) => Settlement::Resolved(Value::Null),
        };
        self.close_at(index, outcome);
    }

    /// Close the topmost visible modal. Toasts are never "top".
    pub fn close_top(&mut self, result: Option<Value>) -> Option<OverlayId> {
        let index = self.entries.iter().rposition(OverlayEntry::is_visible_modal)?;
        let id = self.entries[index].id.clone();
        self.close(&id, result);
        Some(id)
    }

    /// Cancel every visible entry; returns how many were closed
    pub fn close_all(&mut self) -> usize {
        self.close_matching(|_| true)
    }

    /// Cancel every visible toast and leave modals alone
    pub fn clear_toasts(&mut self) -> usize {
        self.close_matching(|entry| entry.kind() == OverlayKind::Toast)
    }

    fn close_matching(&mut self, filter: impl Fn(&OverlayEntry) -> bool) -> usize {
        let targets: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.visible && filter(entry))
            .map(|(index, _)| index)
            .collect();
        for &index in &targets {
            self.close_at(index, Settlement::Cancelled(CancelReason::ClosedAll));
        }
        if !targets.is_empty() {
            tracing::debug!("OverlayManager - closed {} overlays at once", targets.len());
        }
        targets.len()
    }

    fn close_at(&mut self, index: usize, outcome: OverlayResult) -> bool {
        let grace = self.config.grace_period();
        let entry = &mut self.entries[index];
        if !entry.visible {
            return false;
        }
        entry.visible = false;
        entry.settle(outcome);
        let seq = entry.seq;
        tracing::debug!("OverlayManager::close - {} (purge in {:?})", entry.id, grace);

        self.deferred
            .retain(|deferred| !(deferred.seq == seq && deferred.action == DeferredAction::AutoDismiss));
        self.schedule(seq, grace, DeferredAction::Purge);
        true
    }

    // ========== Input policy ==========

    /// Escape closes the topmost visible modal that allows it
    pub fn handle_escape(&mut self) -> Option<OverlayId> {
        let index = self.entries.iter().rposition(|entry| {
            entry.is_visible_modal() && entry.as_modal().is_some_and(|modal| modal.close_on_escape)
        })?;
        let id = self.entries[index].id.clone();
        self.close_at(index, Settlement::Cancelled(CancelReason::Escape));
        Some(id)
    }

    /// Relay a raw key name from the renderer; returns whether it was consumed
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" | "Esc" => self.handle_escape().is_some(),
            _ => false,
        }
    }

    /// Backdrop click on a modal; ignored for persistent modals
    pub fn handle_backdrop_click(&mut self, id: &OverlayId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let entry = &self.entries[index];
        let closable = entry.is_visible_modal()
            && !entry.persistent()
            && entry
                .as_modal()
                .is_some_and(|modal| modal.close_on_click_outside);
        closable && self.close_at(index, Settlement::Cancelled(CancelReason::Backdrop))
    }

    // ========== Updates ==========

    /// Shallow-merge new field values into an entry
    ///
    /// A new toast `duration` restarts the countdown from now; a zero
    /// duration stops it.
    pub fn update(&mut self, id: &OverlayId, patch: OverlayPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let rearm = patch.duration.is_some();
        let entry = &mut self.entries[index];
        let (seq, visible) = (entry.seq, entry.visible);
        let countdown = match &mut entry.payload {
            OverlayPayload::Modal(modal) => {
                patch.apply_to_modal(modal);
                return true;
            }
            OverlayPayload::Toast(toast) => {
                patch.apply_to_toast(toast);
                toast.auto_dismisses().then_some(toast.duration)
            }
        };

        if rearm && visible {
            self.deferred.retain(|deferred| {
                !(deferred.seq == seq && deferred.action == DeferredAction::AutoDismiss)
            });
            if let Some(duration) = countdown {
                self.schedule(seq, duration, DeferredAction::AutoDismiss);
            }
            tracing::trace!("OverlayManager::update - {} countdown {:?}", id, countdown);
        }
        true
    }

    // ========== Timers ==========

    /// Fire every deferred action that is due; returns how many took effect
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let paused = self.paused_at.is_some();

        let mut due = Vec::new();
        self.deferred.retain(|deferred| {
            let fire = deferred.due <= now
                && !(paused && deferred.action == DeferredAction::AutoDismiss);
            if fire {
                due.push(*deferred);
            }
            !fire
        });
        due.sort_by_key(|deferred| (deferred.due, deferred.seq));

        let mut fired = 0;
        for deferred in due {
            let Some(index) = self.entries.iter().position(|entry| entry.seq == deferred.seq)
            else {
                continue;
            };
            match deferred.action {
                DeferredAction::Purge => {
                    if !self.entries[index].visible {
                        let entry = self.entries.remove(index);
                        tracing::trace!("OverlayManager::tick - purged {}", entry.id);
                        fired += 1;
                    }
                }
                DeferredAction::AutoDismiss => {
                    if !self.entries[index].persistent()
                        && self.close_at(index, Settlement::Cancelled(CancelReason::Timeout))
                    {
                        fired += 1;
                    }
                }
            }
        }
        fired
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        let paused = self.paused_at.is_some();
        self.deferred
            .iter()
            .filter(|deferred| !(paused && deferred.action == DeferredAction::AutoDismiss))
            .map(|deferred| deferred.due)
            .min()
    }

    /// Stop toast auto-dismiss countdowns (hover, window blur)
    pub fn pause_timers(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(self.clock.now());
        }
    }

    /// Resume countdowns. Each deadline moves back by the part of the pause
    /// it actually spent waiting: toasts shown mid-pause only lose the time
    /// since they were shown.
    pub fn resume_timers(&mut self) {
        let Some(paused_at) = self.paused_at.take() else {
            return;
        };
        let now = self.clock.now();
        for deferred in &mut self.deferred {
            if deferred.action == DeferredAction::AutoDismiss {
                let waiting_since = deferred.scheduled.max(paused_at);
                deferred.due += now.saturating_duration_since(waiting_since);
            }
        }
        tracing::trace!(
            "OverlayManager::resume_timers - paused for {:?}",
            now.saturating_duration_since(paused_at)
        );
    }

    pub fn timers_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Number of scheduled purge/auto-dismiss actions
    pub fn pending_timers(&self) -> usize {
        self.deferred.len()
    }

    fn schedule(&mut self, seq: u64, delay: Duration, action: DeferredAction) {
        let now = self.clock.now();
        self.deferred.push(Deferred {
            due: now + delay,
            scheduled: now,
            seq,
            action,
        });
    }

    // ========== Queries ==========

    /// The whole registry in stacking order, exiting entries included
    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn get(&self, id: &OverlayId) -> Option<&OverlayEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn list_visible(&self) -> Vec<&OverlayEntry> {
        self.entries.iter().filter(|entry| entry.visible).collect()
    }

    pub fn visible_modals(&self) -> Vec<&OverlayEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_visible_modal())
            .collect()
    }

    /// Toasts anchored at `position`, including ones still animating out
    pub fn toasts_by_position(&self, position: ToastPosition) -> Vec<&OverlayEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.as_toast().is_some_and(|toast| toast.position == position))
            .collect()
    }

    pub fn has_visible(&self) -> bool {
        self.entries.iter().any(|entry| entry.visible)
    }

    pub fn has_visible_modals(&self) -> bool {
        self.entries.iter().any(OverlayEntry::is_visible_modal)
    }

    /// Position of the entry in the registry
    pub fn stack_index_of(&self, id: &OverlayId) -> Option<usize> {
        self.index_of(id)
    }

    /// `base + index * step`
    pub fn z_index_of(&self, id: &OverlayId) -> Option<u32> {
        let index = u32::try_from(self.index_of(id)?).unwrap_or(u32::MAX);
        Some(
            self.config
                .base_z_index
                .saturating_add(index.saturating_mul(self.config.z_index_step)),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: &OverlayId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    fn next_seq(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Next `prefix-N` id not already held by an entry. Caller-chosen toast
    /// ids may look generated, so taken counter values are skipped.
    fn generate_id(&mut self, prefix: &str) -> (u64, OverlayId) {
        loop {
            let seq = self.next_seq();
            let id = OverlayId::generated(prefix, seq);
            if self.index_of(&id).is_none() {
                return (seq, id);
            }
            tracing::trace!("OverlayManager - {} is taken, skipping", id);
        }
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl fmt::Debug for OverlayManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayManager")
            .field("config", &self.config)
            .field("entries", &self.entries)
            .field("pending_timers", &self.deferred.len())
            .field("paused", &self.paused_at.is_some())
            .finish()
    }
}
