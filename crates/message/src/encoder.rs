//! Chat message encoder.

use chatcodec_wire::{WireType, Writer};

use crate::message::{FIELD_CHANNEL_ID, FIELD_CONTENT, FIELD_KIND, FIELD_SENDER_ID};
use crate::{ChatMessage, MessageError, MessageKind};

/// Encodes [`ChatMessage`] values into their tagged-field wire form.
///
/// Output is deterministic: known fields are emitted in ascending
/// field-number order with default values omitted, then unknown fields in
/// first-encountered order, each replayed from its originally captured bytes.
///
/// UTF-8 validity of `content` is enforced at the type level by `String`, so
/// the encode-time validation the wire contract calls for holds by
/// construction; [`MessageError::InvalidUtf8`] is reserved for a future
/// byte-typed content representation.
pub struct ChatMessageEncoder {
    writer: Writer,
}

impl Default for ChatMessageEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatMessageEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `msg` into a fresh buffer of exactly `msg.byte_size()` bytes.
    pub fn encode(&mut self, msg: &ChatMessage) -> Result<Vec<u8>, MessageError> {
        if msg.kind != MessageKind::default() {
            self.writer.tag(FIELD_KIND, WireType::Varint);
            self.writer.varint(msg.kind.to_raw());
        }
        if msg.channel_id != 0 {
            self.writer.tag(FIELD_CHANNEL_ID, WireType::Fixed64);
            self.writer.fixed64(msg.channel_id);
        }
        if msg.sender_id != 0 {
            self.writer.tag(FIELD_SENDER_ID, WireType::Fixed64);
            self.writer.fixed64(msg.sender_id);
        }
        if !msg.content.is_empty() {
            self.writer.tag(FIELD_CONTENT, WireType::LengthDelimited);
            self.writer.length_delimited(msg.content.as_bytes());
        }
        for field in &msg.unknown_fields {
            self.writer.raw(&field.bytes);
        }
        Ok(self.writer.flush())
    }
}
