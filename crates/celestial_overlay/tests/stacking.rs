//! Modal stacking, settlement and two-phase removal

use std::sync::Arc;
use std::time::Duration;

use celestial_overlay::{
    AlertOptions, CancelReason, ConfirmOptions, ManualClock, ModalOptions, OverlayConfig,
    OverlayId, OverlayManager, OverlayPatch, PromptOptions, Settlement,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn manager() -> (OverlayManager, ManualClock) {
    let clock = ManualClock::new();
    let overlays = OverlayManager::with_clock(OverlayConfig::default(), Arc::new(clock.clone()));
    (overlays, clock)
}

const GRACE: Duration = Duration::from_millis(300);

#[test]
fn stacking_order_follows_open_order() {
    let (mut overlays, _clock) = manager();
    let handles: Vec<_> = (0..4).map(|_| overlays.open(ModalOptions::new())).collect();

    let indices: Vec<usize> = handles
        .iter()
        .map(|h| overlays.stack_index_of(h.id()).unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);

    let z: Vec<u32> = handles
        .iter()
        .map(|h| overlays.z_index_of(h.id()).unwrap())
        .collect();
    assert_eq!(z, vec![1000, 1010, 1020, 1030]);
}

#[test]
fn ids_and_creation_order_are_never_reused() {
    let (mut overlays, clock) = manager();
    let first = overlays.open(ModalOptions::new());
    let first_id = first.id().clone();
    let first_seq = overlays.get(&first_id).unwrap().seq();

    overlays.close(&first_id, None);
    clock.advance(GRACE);
    overlays.tick();
    assert!(overlays.is_empty());

    let second = overlays.open(ModalOptions::new());
    assert_ne!(second.id(), &first_id);
    assert!(overlays.get(second.id()).unwrap().seq() > first_seq);
}

#[test]
fn close_settles_and_purges_after_grace_window() {
    let (mut overlays, clock) = manager();
    let mut handle = overlays.open(ModalOptions::new().title("Settings"));
    let id = handle.id().clone();

    overlays.close(&id, Some(json!({ "saved": true })));

    let entry = overlays.get(&id).unwrap();
    assert!(!entry.is_visible());
    assert!(entry.is_settled());
    assert!(!overlays.has_visible());
    assert_eq!(
        handle.try_result(),
        Some(Settlement::Resolved(json!({ "saved": true })))
    );

    clock.advance(GRACE - Duration::from_millis(1));
    assert_eq!(overlays.tick(), 0);
    assert_eq!(overlays.len(), 1);

    clock.advance(Duration::from_millis(1));
    assert_eq!(overlays.tick(), 1);
    assert!(overlays.is_empty());
}

#[test]
fn close_without_result_cancels_a_modal() {
    let (mut overlays, _clock) = manager();
    let mut handle = overlays.open(ModalOptions::new());
    overlays.close(&handle.id().clone(), None);
    assert_eq!(
        handle.try_result(),
        Some(Settlement::Cancelled(CancelReason::Dismissed))
    );
}

#[test]
fn close_is_idempotent_and_first_settlement_wins() {
    let (mut overlays, clock) = manager();
    let mut handle = overlays.open(ModalOptions::new());
    let id = handle.id().clone();

    overlays.close(&id, Some(Value::from(1)));
    overlays.close(&id, Some(Value::from(2)));

    assert_eq!(overlays.pending_timers(), 1);
    assert_eq!(handle.try_result(), Some(Settlement::Resolved(Value::from(1))));

    clock.advance(GRACE);
    assert_eq!(overlays.tick(), 1);
    assert_eq!(overlays.tick(), 0);
}

#[test]
fn unknown_ids_are_ignored() {
    let (mut overlays, _clock) = manager();
    let _handle = overlays.open(ModalOptions::new());
    let ghost = OverlayId::new("modal-999");

    overlays.close(&ghost, None);
    assert!(!overlays.update(&ghost, OverlayPatch::new().title("x")));
    assert!(!overlays.handle_backdrop_click(&ghost));
    assert_eq!(overlays.stack_index_of(&ghost), None);
    assert_eq!(overlays.list_visible().len(), 1);
    assert_eq!(overlays.pending_timers(), 0);
}

#[test]
fn close_all_cancels_every_visible_entry_once() {
    let (mut overlays, clock) = manager();
    let mut modal = overlays.open(ModalOptions::new());
    let mut confirm = overlays.confirm(ConfirmOptions::new("Leave?"));
    let mut toast = overlays.show("Uploading");

    assert_eq!(overlays.close_all(), 3);
    assert_eq!(overlays.close_all(), 0);

    assert_eq!(
        modal.try_result(),
        Some(Settlement::Cancelled(CancelReason::ClosedAll))
    );
    assert_eq!(confirm.try_result(), Some(false));
    assert_eq!(
        toast.try_result(),
        Some(Settlement::Cancelled(CancelReason::ClosedAll))
    );

    clock.advance(GRACE);
    overlays.tick();
    assert!(overlays.is_empty());
}

#[test]
fn close_top_targets_the_highest_visible_modal() {
    let (mut overlays, _clock) = manager();
    let mut lower = overlays.open(ModalOptions::new());
    let mut upper = overlays.open(ModalOptions::new());
    let _toast = overlays.show("Not a modal");

    let closed = overlays.close_top(None);

    assert_eq!(closed.as_ref(), Some(upper.id()));
    assert!(upper.is_settled());
    assert!(!lower.is_settled());
    assert_eq!(overlays.close_top(None).as_ref(), Some(lower.id()));
    assert_eq!(overlays.close_top(None), None);
    assert!(overlays.has_visible());
}

#[test]
fn escape_closes_only_the_topmost_eligible_modal() {
    let (mut overlays, _clock) = manager();
    let mut first = overlays.open(ModalOptions::new().close_on_escape(true));
    let mut second = overlays.open(ModalOptions::new().close_on_escape(true));

    assert!(overlays.handle_key("Escape"));

    assert_eq!(
        second.try_result(),
        Some(Settlement::Cancelled(CancelReason::Escape))
    );
    assert_eq!(first.try_result(), None);
    assert!(overlays.get(first.id()).unwrap().is_visible());
}

#[test]
fn escape_skips_modals_that_opt_out() {
    let (mut overlays, _clock) = manager();
    let mut eligible = overlays.open(ModalOptions::new());
    let mut locked = overlays.open(ModalOptions::new().close_on_escape(false));

    assert_eq!(overlays.handle_escape().as_ref(), Some(eligible.id()));
    assert!(eligible.is_settled());
    assert!(!locked.is_settled());

    assert_eq!(overlays.handle_escape(), None);
    assert!(!overlays.handle_key("Enter"));
}

#[test]
fn backdrop_click_respects_persistence() {
    let (mut overlays, _clock) = manager();
    let mut pinned = overlays.open(ModalOptions::new().persistent(true));
    let mut loose = overlays.open(ModalOptions::new());

    assert!(!overlays.handle_backdrop_click(&pinned.id().clone()));
    assert!(overlays.handle_backdrop_click(&loose.id().clone()));

    assert_eq!(pinned.try_result(), None);
    assert_eq!(
        loose.try_result(),
        Some(Settlement::Cancelled(CancelReason::Backdrop))
    );
}

#[test]
fn update_merges_fields_but_keeps_identity() {
    let (mut overlays, _clock) = manager();
    let mut handle = overlays.open(ModalOptions::new().title("Draft").prop("step", 1));
    let id = handle.id().clone();
    let seq = overlays.get(&id).unwrap().seq();

    let mut props = serde_json::Map::new();
    props.insert("step".into(), Value::from(2));
    assert!(overlays.update(&id, OverlayPatch::new().title("Review").props(props)));

    let entry = overlays.get(&id).unwrap();
    let modal = entry.as_modal().unwrap();
    assert_eq!(modal.title.as_deref(), Some("Review"));
    assert_eq!(modal.props.get("step"), Some(&Value::from(2)));
    assert_eq!(entry.seq(), seq);
    assert_eq!(overlays.stack_index_of(&id), Some(0));
    assert_eq!(handle.try_result(), None);

    assert!(overlays.update(&id, OverlayPatch::new().fullscreen(true).scrollable(true)));
    let modal = overlays.get(&id).and_then(|entry| entry.as_modal()).unwrap();
    assert!(modal.fullscreen && modal.scrollable);
    assert_eq!(modal.title.as_deref(), Some("Review"));
}

#[test]
fn confirm_settles_with_boolean() {
    let (mut overlays, _clock) = manager();
    let mut yes = overlays.confirm(ConfirmOptions::new("Apply?"));
    let mut escaped = overlays.confirm(ConfirmOptions::new("Really?"));

    overlays.handle_escape();
    overlays.close(&yes.id().clone(), Some(Value::Bool(true)));

    assert_eq!(yes.try_result(), Some(true));
    assert_eq!(escaped.try_result(), Some(false));
}

#[test]
fn prompt_settles_with_text_or_none() {
    let (mut overlays, _clock) = manager();
    let mut named = overlays.prompt(PromptOptions::new("Name?").default_value("untitled"));
    let mut dismissed = overlays.prompt(PromptOptions::new("Tag?"));

    overlays.close(&dismissed.id().clone(), None);
    overlays.close(&named.id().clone(), Some(Value::from("report")));

    assert_eq!(named.try_result(), Some(Some("report".to_string())));
    assert_eq!(dismissed.try_result(), Some(None));
}

#[test]
fn alert_settles_on_any_close() {
    let (mut overlays, _clock) = manager();
    let mut alert = overlays.alert(AlertOptions::new("Disk almost full"));
    assert_eq!(alert.try_result(), None);
    overlays.handle_escape();
    assert_eq!(alert.try_result(), Some(()));
}

#[test]
fn dropping_the_manager_abandons_pending_handles() {
    let (mut overlays, _clock) = manager();
    let mut open = overlays.open(ModalOptions::new());
    let mut confirm = overlays.confirm(ConfirmOptions::new("Quit?"));
    drop(overlays);

    assert_eq!(
        open.try_result(),
        Some(Settlement::Cancelled(CancelReason::Dropped))
    );
    assert_eq!(confirm.try_result(), Some(false));
}

#[tokio::test]
async fn handles_can_be_awaited() {
    let (mut overlays, _clock) = manager();
    let confirm = overlays.confirm(ConfirmOptions::new("Continue?"));
    let id = confirm.id().clone();

    overlays.close(&id, Some(Value::Bool(true)));

    assert!(confirm.await);
}
