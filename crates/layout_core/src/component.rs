//! The layout component: owns the current [`LayoutState`], recomputes it from
//! resize events and publishes it to the view layer.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::{
    sync::watch,
    task::{AbortHandle, JoinHandle},
};

use crate::{
    compute::{compute_layout_with, LayoutPresets},
    domain::{LayoutState, Viewport},
    resize::{Drained, ResizeNotifier, ResizeSubscription},
};

pub struct LayoutComponent {
    presets: LayoutPresets,
    state: Arc<watch::Sender<LayoutState>>,
    subscription: Option<ResizeSubscription>,
    listener: Option<ListenerGuard>,
}

impl LayoutComponent {
    pub fn new(presets: LayoutPresets) -> Self {
        let initial = LayoutState {
            split_disabled: presets.split_disabled,
            ..LayoutState::default()
        };
        let (state, _) = watch::channel(initial);
        Self {
            presets,
            state: Arc::new(state),
            subscription: None,
            listener: None,
        }
    }

    /// Computes the layout for `viewport` and starts listening for resizes.
    pub fn init(&mut self, notifier: &ResizeNotifier, viewport: Viewport) {
        apply(&self.state, &self.presets, viewport, None);
        if self.subscription.replace(notifier.subscribe()).is_some() {
            tracing::debug!("layout component re-initialised, previous subscription released");
        }
    }

    /// Handles pending resize events on the caller's event loop. Returns
    /// `true` if the published state changed.
    pub fn poll(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        let latest = match subscription.drain_latest() {
            Drained::Pending(latest) => latest,
            Drained::Closed(latest) => {
                tracing::info!("resize notifier closed, keeping last layout");
                self.subscription = None;
                latest
            }
        };
        match latest {
            Some(viewport) => apply(&self.state, &self.presets, viewport, None),
            None => false,
        }
    }

    /// Recomputes on a tokio task instead of [`poll`](Self::poll). The task
    /// stops when the returned handle is dropped, on [`destroy`](Self::destroy)
    /// or when the component itself is dropped. A second call replaces the
    /// previous listener.
    pub fn spawn(&mut self, notifier: &ResizeNotifier) -> ListenerHandle {
        if let Some(previous) = self.listener.take() {
            previous.stop();
        }

        let mut subscription = notifier.subscribe();
        let state = Arc::clone(&self.state);
        let live = Arc::new(AtomicBool::new(true));
        let task_live = Arc::clone(&live);
        let presets = self.presets;
        let task = tokio::spawn(async move {
            while let Some(viewport) = subscription.recv().await {
                apply(&state, &presets, viewport, Some(&*task_live));
            }
            tracing::info!("resize notifier closed, listener exiting");
        });

        let guard = ListenerGuard {
            live,
            state: Arc::clone(&self.state),
            abort: task.abort_handle(),
        };
        self.listener = Some(guard.clone());
        ListenerHandle {
            guard,
            task: Some(task),
        }
    }

    /// Releases every resize subscription. Once this returns, later resizes
    /// leave the state alone.
    pub fn destroy(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("layout component unsubscribed");
        }
        if let Some(listener) = self.listener.take() {
            listener.stop();
            tracing::debug!("layout listener stopped");
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
            || self
                .listener
                .as_ref()
                .is_some_and(ListenerGuard::is_live)
    }

    pub fn state(&self) -> LayoutState {
        *self.state.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<LayoutState> {
        self.state.subscribe()
    }

    pub fn presets(&self) -> &LayoutPresets {
        &self.presets
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new(LayoutPresets::default())
    }
}

impl Drop for LayoutComponent {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Writes the recomputed state only when it differs, so watchers and
/// [`LayoutComponent::poll`] agree on what counts as a change. A listener whose
/// `live` flag is cleared never writes.
fn apply(
    state: &watch::Sender<LayoutState>,
    presets: &LayoutPresets,
    viewport: Viewport,
    live: Option<&AtomicBool>,
) -> bool {
    let next = compute_layout_with(viewport, presets);
    let mut previous = None;
    let changed = state.send_if_modified(|current| {
        if live.is_some_and(|live| !live.load(Ordering::Acquire)) {
            return false;
        }
        previous = Some(*current);
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
    let Some(previous) = previous else {
        return false;
    };
    tracing::debug!(
        width = viewport.width,
        height = viewport.height,
        content = ?next.content_split_direction,
        changed,
        "layout recomputed"
    );
    if previous.orientation() != next.orientation() {
        tracing::info!(
            from = ?previous.orientation(),
            to = ?next.orientation(),
            "layout orientation changed"
        );
    }
    changed
}

#[derive(Clone)]
struct ListenerGuard {
    live: Arc<AtomicBool>,
    state: Arc<watch::Sender<LayoutState>>,
    abort: AbortHandle,
}

impl ListenerGuard {
    // Clearing the flag under the watch lock orders it after any write the
    // task is in the middle of.
    fn stop(&self) {
        self.state.send_if_modified(|_| {
            self.live.store(false, Ordering::Release);
            false
        });
        self.abort.abort();
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire) && !self.abort.is_finished()
    }
}

/// Background listener started by [`LayoutComponent::spawn`].
pub struct ListenerHandle {
    guard: ListenerGuard,
    task: Option<JoinHandle<()>>,
}

impl ListenerHandle {
    pub fn stop(mut self) {
        self.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    fn abort(&mut self) {
        if self.task.take().is_some() {
            self.guard.stop();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
#[path = "tests/component_tests.rs"]
mod tests;
