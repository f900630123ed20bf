//! Checked wire reader with cursor tracking.

use std::str;

use crate::WireError;

/// Reads wire primitives from a byte slice, tracking a cursor position.
///
/// Every read is bounds-checked and returns a [`WireError`] instead of
/// panicking, so the reader can be driven directly by untrusted input.
///
/// # Example
///
/// ```
/// use chatcodec_wire::Reader;
///
/// let data = [0x96, 0x01, 0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.varint().unwrap(), 150);
/// assert_eq!(reader.fixed64().unwrap(), 42);
/// assert!(reader.is_done());
/// ```
pub struct Reader<'a> {
    buf: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader over the given byte slice.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, x: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.x
    }

    /// True when the cursor has reached the end of the buffer.
    pub fn is_done(&self) -> bool {
        self.x >= self.buf.len()
    }

    /// Bytes consumed since the given earlier cursor position.
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.buf[start..self.x]
    }

    /// Reads a base-128 varint.
    ///
    /// Fails with [`WireError::MalformedVarint`] if the buffer ends before a
    /// byte with a clear continuation bit, or if no such byte appears within
    /// 10 bytes (the most a 64-bit value can occupy).
    pub fn varint(&mut self) -> Result<u64, WireError> {
        let mut value: u64 = 0;
        let mut shift = 0u32;
        for i in 0..10 {
            let Some(&byte) = self.buf.get(self.x + i) else {
                return Err(WireError::MalformedVarint);
            };
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                self.x += i + 1;
                return Ok(value);
            }
            shift += 7;
        }
        Err(WireError::MalformedVarint)
    }

    /// Reads exactly 8 bytes as a little-endian unsigned integer.
    pub fn fixed64(&mut self) -> Result<u64, WireError> {
        let bytes = self.bytes(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    /// Reads exactly 4 bytes as a little-endian unsigned integer.
    pub fn fixed32(&mut self) -> Result<u32, WireError> {
        let bytes = self.bytes(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(raw))
    }

    /// Reads `len` raw bytes, failing with [`WireError::UnexpectedEof`] if
    /// fewer remain.
    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        if len > self.remaining() {
            return Err(WireError::UnexpectedEof);
        }
        let start = self.x;
        self.x += len;
        Ok(&self.buf[start..self.x])
    }

    /// Reads a varint length prefix followed by that many raw bytes.
    pub fn length_delimited(&mut self) -> Result<&'a [u8], WireError> {
        let len = self.varint()?;
        if len > self.remaining() as u64 {
            return Err(WireError::UnexpectedEof);
        }
        self.bytes(len as usize)
    }

    /// Reads a length-delimited run and validates it as UTF-8 text.
    pub fn utf8_length_delimited(&mut self) -> Result<&'a str, WireError> {
        let bytes = self.length_delimited()?;
        str::from_utf8(bytes).map_err(|_| WireError::InvalidUtf8)
    }

    /// Reads a raw field tag varint.
    pub fn tag(&mut self) -> Result<u64, WireError> {
        self.varint()
    }

    /// Reads the next tag without advancing the cursor.
    pub fn peek_tag(&self) -> Result<u64, WireError> {
        let mut probe = Reader {
            buf: self.buf,
            x: self.x,
        };
        probe.varint()
    }
}
