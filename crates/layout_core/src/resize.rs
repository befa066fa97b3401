//! Resize notification stream shared between the host window and layout
//! components.

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::domain::Viewport;

pub const DEFAULT_NOTIFIER_CAPACITY: usize = 64;
/// Largest capacity accepted from settings.
pub const MAX_NOTIFIER_CAPACITY: usize = 4096;

#[derive(Debug, Clone)]
pub struct ResizeNotifier {
    tx: broadcast::Sender<Viewport>,
}

impl ResizeNotifier {
    /// `capacity` is clamped to `1..=MAX_NOTIFIER_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.clamp(1, MAX_NOTIFIER_CAPACITY));
        Self { tx }
    }

    /// Returns how many subscribers received the event.
    pub fn notify(&self, viewport: Viewport) -> usize {
        match self.tx.send(viewport) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!(?viewport, "resize dropped, no subscribers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> ResizeSubscription {
        ResizeSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ResizeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFIER_CAPACITY)
    }
}

/// Live subscription to a [`ResizeNotifier`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct ResizeSubscription {
    rx: broadcast::Receiver<Viewport>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drained {
    /// Newest pending viewport, if any arrived since the last drain.
    Pending(Option<Viewport>),
    /// Notifier is gone; `Option` holds anything received before it closed.
    Closed(Option<Viewport>),
}

impl ResizeSubscription {
    /// Pulls every queued event without blocking and keeps only the newest.
    pub fn drain_latest(&mut self) -> Drained {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(viewport) => latest = Some(viewport),
                Err(TryRecvError::Empty) => return Drained::Pending(latest),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "resize subscription lagged");
                }
                Err(TryRecvError::Closed) => return Drained::Closed(latest),
            }
        }
    }

    /// Waits for the next viewport. `None` once the notifier is gone.
    pub async fn recv(&mut self) -> Option<Viewport> {
        loop {
            match self.rx.recv().await {
                Ok(viewport) => return Some(viewport),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "resize subscription lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/resize_tests.rs"]
mod tests;
