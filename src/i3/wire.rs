//! Framing for the i3-ipc protocol.
//!
//! # Wire format
//!
//! Requests and replies share one layout:
//!
//! | Bytes  | Content                                   |
//! |--------|-------------------------------------------|
//! | 0..6   | magic string `i3-ipc`                     |
//! | 6..10  | payload length, `u32`, native byte order  |
//! | 10..14 | message type, `u32`, native byte order    |
//! | 14..   | payload (JSON for replies)                |
//!
//! A reply carries the same message type as the request it answers.

use std::io::{Read, Write};

/// Magic prefix of every frame.
pub const MAGIC: &[u8; 6] = b"i3-ipc";

/// Size of the fixed frame header.
pub const HEADER_LEN: usize = MAGIC.len() + 4 + 4;

/// Upper bound on accepted reply payloads.
pub const MAX_PAYLOAD: usize = 64 * 1024 * 1024;

/// Request types used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageType {
    GetWorkspaces = 1,
    GetOutputs = 3,
}

impl MessageType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// One decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw message type.
    pub kind: u32,
    pub payload: Vec<u8>,
}

/// Errors produced while encoding or decoding frames.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad magic: {0:?}")]
    BadMagic([u8; 6]),
    #[error("payload of {0} bytes exceeds limit")]
    PayloadTooLarge(usize),
}

/// Build a complete frame for `kind` carrying `payload`.
pub fn encode_frame(kind: u32, payload: &[u8]) -> Result<Vec<u8>, WireError> {
    if payload.len() > MAX_PAYLOAD {
        return Err(WireError::PayloadTooLarge(payload.len()));
    }
    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    frame.extend_from_slice(&kind.to_ne_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Encode and write one frame.
pub fn write_frame<W: Write>(writer: &mut W, kind: u32, payload: &[u8]) -> Result<(), WireError> {
    let frame = encode_frame(kind, payload)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}

/// Read exactly one frame.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Frame, WireError> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;

    let mut magic = [0u8; 6];
    magic.copy_from_slice(&header[..6]);
    if &magic != MAGIC {
        return Err(WireError::BadMagic(magic));
    }

    let mut word = [0u8; 4];
    word.copy_from_slice(&header[6..10]);
    let len = u32::from_ne_bytes(word) as usize;
    word.copy_from_slice(&header[10..14]);
    let kind = u32::from_ne_bytes(word);

    if len > MAX_PAYLOAD {
        return Err(WireError::PayloadTooLarge(len));
    }
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(Frame { kind, payload })
}
