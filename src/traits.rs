//! Seams that keep the catalog independent of where names come from and
//! where lines go.
//!
//! * [`WindowManager`] answers "which workspaces / outputs exist?".  The i3
//!   backend lives in [`crate::i3`]; tests use in-memory mocks.
//! * [`CommandSink`] receives each generated command line.  Writers and
//!   `Vec<String>` are supported out of the box.

use crate::command::{OutputInfo, WorkspaceInfo};
use std::io::Write;

/// Read-only view of a running window manager.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return the current workspaces, in the order the window manager
    /// reports them.
    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, Self::Error>;

    /// Return the outputs the window manager knows about.
    fn outputs(&self) -> Result<Vec<OutputInfo>, Self::Error>;
}

/// Destination for generated command lines.
///
/// `line` never contains the terminating newline; sinks that write to a
/// stream add it themselves.  Lines arrive in emission order and must not
/// be reordered.
pub trait CommandSink {
    /// The error type produced by this sink.
    type Error: std::error::Error + Send + 'static;

    /// Append one command line.
    fn emit(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Collect lines in memory.
impl CommandSink for Vec<String> {
    type Error = std::convert::Infallible;

    fn emit(&mut self, line: &str) -> Result<(), Self::Error> {
        self.push(line.to_string());
        Ok(())
    }
}

/// A [`CommandSink`] that writes newline-terminated lines to any
/// [`Write`] implementation (stdout, a file, a byte buffer, ...).
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CommandSink for WriterSink<W> {
    type Error = std::io::Error;

    fn emit(&mut self, line: &str) -> Result<(), Self::Error> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }
}
