//! Controller layer: turns window geometry into resize notifications.

pub mod resize;
