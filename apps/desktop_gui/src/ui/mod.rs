//! UI layer for desktop GUI: app shell and split panels.

pub mod app;
pub mod panels;

pub use app::{LayoutApp, StartupConfig};
