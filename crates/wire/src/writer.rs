//! Wire writer over an auto-growing buffer.

use crate::{Tag, WireType};

/// Writes wire primitives into an auto-growing byte buffer.
///
/// Writes are infallible; [`flush`](Writer::flush) hands the accumulated
/// bytes to the caller and resets the writer for reuse.
///
/// # Example
///
/// ```
/// use chatcodec_wire::{WireType, Writer};
///
/// let mut writer = Writer::new();
/// writer.tag(2, WireType::Fixed64);
/// writer.fixed64(42);
/// assert_eq!(writer.flush(), vec![0x11, 42, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub struct Writer {
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing has been written since the last flush.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends raw bytes verbatim.
    pub fn raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a base-128 varint, 7 bits per byte, low group first.
    pub fn varint(&mut self, mut value: u64) {
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                self.buf.push(byte);
                return;
            }
            self.buf.push(byte | 0x80);
        }
    }

    /// Writes exactly 8 little-endian bytes.
    pub fn fixed64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes exactly 4 little-endian bytes.
    pub fn fixed32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes the tag for `field_number` with the given wire type.
    pub fn tag(&mut self, field_number: u32, wire_type: WireType) {
        self.varint(Tag::new(field_number, wire_type).to_raw());
    }

    /// Writes a varint length prefix followed by the raw bytes.
    pub fn length_delimited(&mut self, bytes: &[u8]) {
        self.varint(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
    }

    /// Returns the accumulated bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}
