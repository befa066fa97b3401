//! Viewport-driven split layout: domain types, the pure recomputation, the
//! resize notifier and the component that ties them together.

pub mod component;
pub mod compute;
pub mod config;
pub mod domain;
pub mod error;
pub mod resize;

pub use component::{LayoutComponent, ListenerHandle};
pub use compute::{compute_layout, compute_layout_with, LayoutPresets, OrientationPreset};
pub use config::{load_settings, load_settings_from, Settings};
pub use domain::{LayoutState, Orientation, SizePair, SplitDirection, Viewport};
pub use error::LayoutError;
pub use resize::{Drained, ResizeNotifier, ResizeSubscription, MAX_NOTIFIER_CAPACITY};
