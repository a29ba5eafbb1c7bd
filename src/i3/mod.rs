//! i3 / sway specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, speaking the
//! i3-ipc protocol over the window manager's Unix socket.  sway implements
//! the same protocol, so the backend works for both.
//!
//! Nothing outside this module should reference i3 directly.

pub mod wire;
pub mod wm;
