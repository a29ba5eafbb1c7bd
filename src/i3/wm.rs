//! [`WindowManager`] implementation backed by i3 IPC.
//!
//! Communicates directly with i3 (or sway) through the socket named by
//! `$I3SOCK` / `$SWAYSOCK`, without spawning `i3 --get-socketpath` or
//! `i3-msg`.

use super::wire::{read_frame, write_frame, MessageType, WireError};
use crate::command::{OutputInfo, WorkspaceInfo};
use crate::traits::WindowManager;
use log::debug;
use serde::Deserialize;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

/// i3-backed window manager.
///
/// No connection is kept open; each query is one short-lived
/// request/reply exchange.
#[derive(Debug, Clone, Default)]
pub struct I3Wm {
    socket: Option<PathBuf>,
}

/// Errors that can occur when talking to i3.
#[derive(Debug, thiserror::Error)]
pub enum I3WmError {
    /// No socket is known or nobody is listening on it.
    #[error("i3 unavailable: {0}")]
    Unavailable(String),
    /// The connection broke during the exchange.
    #[error("i3 IPC I/O error: {0}")]
    Io(#[source] std::io::Error),
    /// The peer does not speak i3-ipc as expected.
    #[error("i3 IPC protocol error: {0}")]
    Protocol(String),
    /// The reply payload does not describe the expected records.
    #[error("i3 IPC parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<WireError> for I3WmError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::Io(e) => I3WmError::Io(e),
            other => I3WmError::Protocol(other.to_string()),
        }
    }
}

impl I3Wm {
    /// Create a handle that finds the socket through the environment on
    /// every request.
    pub fn new() -> Self {
        Self { socket: None }
    }

    /// Create a handle that always talks to `path`.
    pub fn with_socket(path: impl AsRef<Path>) -> Self {
        Self {
            socket: Some(path.as_ref().to_path_buf()),
        }
    }

    fn socket_path(&self) -> Result<PathBuf, I3WmError> {
        match &self.socket {
            Some(path) => Ok(path.clone()),
            None => socket_path_from_env(),
        }
    }

    /// Send `kind` with an empty payload and return the reply payload.
    fn request(&self, kind: MessageType) -> Result<Vec<u8>, I3WmError> {
        let path = self.socket_path()?;
        let mut stream = UnixStream::connect(&path).map_err(|e| {
            I3WmError::Unavailable(format!("connect to {}: {}", path.display(), e))
        })?;

        write_frame(&mut stream, kind.code(), &[])?;
        let reply = read_frame(&mut stream)?;
        if reply.kind != kind.code() {
            return Err(I3WmError::Protocol(format!(
                "expected reply type {}, got {}",
                kind.code(),
                reply.kind
            )));
        }
        debug!("{:?}: {} byte reply", kind, reply.payload.len());
        Ok(reply.payload)
    }
}

/// Resolve the IPC socket from `$I3SOCK`, falling back to `$SWAYSOCK`.
fn socket_path_from_env() -> Result<PathBuf, I3WmError> {
    ["I3SOCK", "SWAYSOCK"]
        .iter()
        .filter_map(|var| std::env::var_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| I3WmError::Unavailable("neither I3SOCK nor SWAYSOCK is set".into()))
}

//  Minimal serde structs for the JSON we care about

/// Subset of one `GET_WORKSPACES` record.
#[derive(Deserialize)]
struct WorkspaceJson {
    name: String,
}

/// Subset of one `GET_OUTPUTS` record.
#[derive(Deserialize)]
struct OutputJson {
    name: String,
    #[serde(default = "active_by_default")]
    active: bool,
}

fn active_by_default() -> bool {
    true
}

fn parse_workspaces(payload: &[u8]) -> Result<Vec<WorkspaceInfo>, I3WmError> {
    let records: Vec<WorkspaceJson> = serde_json::from_slice(payload)?;
    Ok(records
        .into_iter()
        .map(|w| WorkspaceInfo { name: w.name })
        .collect())
}

fn parse_outputs(payload: &[u8]) -> Result<Vec<OutputInfo>, I3WmError> {
    let records: Vec<OutputJson> = serde_json::from_slice(payload)?;
    Ok(records
        .into_iter()
        .map(|o| OutputInfo {
            name: o.name,
            active: o.active,
        })
        .collect())
}

//  WindowManager implementation

impl WindowManager for I3Wm {
    type Error = I3WmError;

    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, Self::Error> {
        let payload = self.request(MessageType::GetWorkspaces)?;
        parse_workspaces(&payload)
    }

    fn outputs(&self) -> Result<Vec<OutputInfo>, Self::Error> {
        let payload = self.request(MessageType::GetOutputs)?;
        parse_outputs(&payload)
    }
}

//  Tests
