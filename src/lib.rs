//! **i3cmds** — a catalog of i3/sway commands for the current session.
//!
//! The catalog lists workspace renames, container and workspace moves,
//! layout, split and focus commands, with the live workspace and output
//! names filled in.  Piped into a launcher such as dmenu, it turns the
//! window manager's command language into a pick list.
//!
//! # Architecture
//!
//! The crate is organised around two traits:
//!
//! * [`traits::WindowManager`] — the read-only queries for workspaces and
//!   outputs, so the catalog is not coupled to a specific IPC client.
//! * [`traits::CommandSink`] — where generated lines go (a writer, a
//!   `Vec<String>`, ...).
//!
//! [`catalog`] builds the lines, using [`sanitize`] to quote names.  The
//! concrete i3-ipc backend lives in [`i3`].

pub mod catalog;
pub mod command;
pub mod config;
pub mod i3;
pub mod sanitize;
pub mod traits;
