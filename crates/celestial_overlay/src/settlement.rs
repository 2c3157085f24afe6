//! One-shot settlement of overlay outcomes
//!
//! Every overlay owns exactly one settler. Taking it out of the entry is the
//! single pending -> settled transition; any later close finds the slot
//! empty and does nothing, so the first settlement always wins.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde_json::Value;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::id::OverlayId;

/// Why an overlay ended without an affirmative result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// `close` without a result
    Dismissed,
    /// Escape key relayed by the renderer
    Escape,
    /// Click on the modal backdrop
    Backdrop,
    /// Toast auto-dismiss timer
    Timeout,
    /// `close_all` / `clear_toasts`
    ClosedAll,
    /// A toast reshown under the same id
    Replaced,
    /// The manager went away before the overlay settled
    Dropped,
}

/// Outcome of an overlay request
#[derive(Clone, Debug, PartialEq)]
pub enum Settlement<T> {
    Resolved(T),
    Cancelled(CancelReason),
}

impl<T> Settlement<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Settlement::Resolved(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Settlement::Cancelled(_))
    }

    pub fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            Settlement::Resolved(_) => None,
            Settlement::Cancelled(reason) => Some(*reason),
        }
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Settlement::Resolved(value) => Some(value),
            Settlement::Cancelled(_) => None,
        }
    }
}

/// Settlement of a generic modal or toast
pub type OverlayResult = Settlement<Value>;

/// Handle output types with a defined value for an overlay that can no
/// longer settle.
pub trait SettlementOutput: Sized {
    fn abandoned() -> Self;
}

impl SettlementOutput for OverlayResult {
    fn abandoned() -> Self {
        Settlement::Cancelled(CancelReason::Dropped)
    }
}

impl SettlementOutput for bool {
    fn abandoned() -> Self {
        false
    }
}

impl SettlementOutput for () {
    fn abandoned() -> Self {}
}

impl SettlementOutput for Option<String> {
    fn abandoned() -> Self {
        None
    }
}

pub(crate) type Settler = Box<dyn FnOnce(OverlayResult) + Send>;

/// Build a settler that maps the raw outcome into the handle's output type
pub(crate) fn settle_channel<T, F>(map: F) -> (Settler, oneshot::Receiver<T>)
where
    T: Send + 'static,
    F: FnOnce(OverlayResult) -> T + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let settler: Settler = Box::new(move |outcome| {
        // Receiver dropped means nobody is waiting; nothing to report.
        let _ = tx.send(map(outcome));
    });
    (settler, rx)
}

/// Caller side of an overlay request.
///
/// Poll it without blocking through [`try_result`](Self::try_result) or
/// `.await` it.
#[derive(Debug)]
#[must_use = "dropping the handle discards the overlay's outcome"]
pub struct OverlayHandle<T> {
    id: OverlayId,
    rx: oneshot::Receiver<T>,
    settled: Option<T>,
}

impl<T: SettlementOutput> OverlayHandle<T> {
    pub(crate) fn new(id: OverlayId, rx: oneshot::Receiver<T>) -> Self {
        Self {
            id,
            rx,
            settled: None,
        }
    }

    pub fn id(&self) -> &OverlayId {
        &self.id
    }

    /// Settled value, or `None` while still pending
    pub fn try_result(&mut self) -> Option<T>
    where
        T: Clone,
    {
        if self.settled.is_none() {
            match self.rx.try_recv() {
                Ok(value) => self.settled = Some(value),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Closed) => self.settled = Some(T::abandoned()),
            }
        }
        self.settled.clone()
    }

    pub fn is_settled(&mut self) -> bool
    where
        T: Clone,
    {
        self.try_result().is_some()
    }
}

impl<T: SettlementOutput + Unpin> Future for OverlayHandle<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        if let Some(value) = this.settled.take() {
            return Poll::Ready(value);
        }
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(value),
            Poll::Ready(Err(_)) => Poll::Ready(T::abandoned()),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_send_reaches_the_handle() {
        let (settler, rx) = settle_channel(|outcome| outcome);
        let mut handle = OverlayHandle::new(OverlayId::new("modal-1"), rx);
        assert_eq!(handle.try_result(), None);

        settler(Settlement::Resolved(Value::from("ok")));

        assert_eq!(handle.try_result(), Some(Settlement::Resolved(Value::from("ok"))));
        // Repeated reads return the cached value.
        assert_eq!(handle.try_result(), Some(Settlement::Resolved(Value::from("ok"))));
    }

    #[test]
    fn dropped_settler_reports_abandoned_value() {
        let (settler, rx) = settle_channel(|outcome: OverlayResult| outcome.is_resolved());
        let mut handle: OverlayHandle<bool> = OverlayHandle::new(OverlayId::new("modal-2"), rx);
        drop(settler);
        assert_eq!(handle.try_result(), Some(false));
    }

    #[tokio::test]
    async fn handle_resolves_as_future() {
        let (settler, rx) = settle_channel(|outcome| outcome);
        let handle = OverlayHandle::new(OverlayId::new("toast-1"), rx);
        settler(Settlement::Cancelled(CancelReason::Timeout));
        assert_eq!(handle.await, Settlement::Cancelled(CancelReason::Timeout));
    }
}
