//! Byte cursors for ZDO payloads.
//!
//! Every ZDO payload starts with a one-byte transaction sequence number,
//! followed by the cluster-specific fields:
//! ```text
//! ┌──────────┬──────────────────────────┐
//! │  zdoSeq  │   cluster fields         │
//! │  1 byte  │   up to 255 bytes        │
//! └──────────┴──────────────────────────┘
//! ```

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::protocol::address::{from_wire, to_wire};

/// Maximum encodable ZDO payload, sequence number included.
pub const MAX_ZDO_PAYLOAD: usize = 256;

/// Bounds-checked reader over a received payload.
///
/// Unlike a bare [`Buf`], every read checks the remaining length first and
/// reports [`FrameError::Incomplete`] instead of panicking.
#[derive(Debug)]
pub struct FrameReader {
    buf: Bytes,
}

impl FrameReader {
    /// Creates a reader positioned at the first byte of `data`.
    #[must_use]
    pub const fn new(data: Bytes) -> Self {
        Self { buf: data }
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Returns true if unread bytes are left.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.buf.has_remaining()
    }

    fn ensure(&self, needed: usize) -> std::result::Result<(), FrameError> {
        if self.buf.remaining() < needed {
            return Err(FrameError::Incomplete {
                expected: needed,
                got: self.buf.remaining(),
            });
        }
        Ok(())
    }

    /// Reads one byte.
    pub fn u8(&mut self) -> std::result::Result<u8, FrameError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// Reads a little-endian 16-bit integer.
    pub fn u16_le(&mut self) -> std::result::Result<u16, FrameError> {
        self.ensure(2)?;
        Ok(self.buf.get_u16_le())
    }

    /// Reads `len` bytes and returns them as a display-order hex string.
    pub fn hex_reversed(&mut self, len: usize) -> std::result::Result<String, FrameError> {
        self.ensure(len)?;
        let bytes = self.buf.split_to(len);
        Ok(from_wire(&bytes))
    }
}

/// Growable writer for an outgoing payload, capped at [`MAX_ZDO_PAYLOAD`].
#[derive(Debug)]
pub struct FrameWriter {
    buf: BytesMut,
}

impl Default for FrameWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameWriter {
    /// Creates an empty writer with room for a full payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(MAX_ZDO_PAYLOAD),
        }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends one byte.
    pub fn u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Appends a little-endian 16-bit integer.
    pub fn u16_le(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    /// Appends a display-order hex field in wire order.
    pub fn hex_reversed(&mut self, field: &'static str, value: &str, width: usize) -> Result<()> {
        let bytes = to_wire(field, value, width)?;
        self.buf.put_slice(&bytes);
        Ok(())
    }

    /// Finalizes the payload, trimmed to exactly the bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::TooLarge`] if more than [`MAX_ZDO_PAYLOAD`]
    /// bytes were written.
    pub fn finish(self) -> std::result::Result<Bytes, FrameError> {
        if self.buf.len() > MAX_ZDO_PAYLOAD {
            return Err(FrameError::TooLarge {
                size: self.buf.len(),
                max: MAX_ZDO_PAYLOAD,
            });
        }
        Ok(self.buf.freeze())
    }
}
