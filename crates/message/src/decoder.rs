//! Chat message decoder.

use chatcodec_wire::{Reader, WireType};

use crate::message::{FIELD_CHANNEL_ID, FIELD_CONTENT, FIELD_KIND, FIELD_SENDER_ID};
use crate::{ChatMessage, MessageError, MessageKind, UnknownField};

/// Maximum nesting depth accepted while skipping unknown group fields.
const MAX_GROUP_DEPTH: usize = 64;

/// Decodes tagged-field wire buffers into [`ChatMessage`] values.
///
/// A single forward pass over the buffer. A zero tag or a tag with the
/// end-group wire type terminates decoding successfully — the historical
/// format reserves that marker as an end-of-message sentinel, and rejecting
/// it would change which buffers are accepted. Repeated known fields follow
/// last-value-wins. Any failure discards the partially built message.
pub struct ChatMessageDecoder;

impl Default for ChatMessageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatMessageDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `buf` into a message.
    pub fn decode(&self, buf: &[u8]) -> Result<ChatMessage, MessageError> {
        let mut reader = Reader::new(buf);
        let mut msg = ChatMessage::new();
        while !reader.is_done() {
            let start = reader.position();
            let raw_tag = reader.tag()?;
            let wire_bits = (raw_tag & 0x7) as u8;
            if raw_tag == 0 || wire_bits == WireType::EndGroup as u8 {
                // End-of-message sentinel; bytes past it are not ours.
                break;
            }
            let field_number = (raw_tag >> 3) as u32;
            let Some(wire_type) = WireType::from_raw(wire_bits) else {
                return Err(MessageError::InvalidWireType(wire_bits));
            };
            match (field_number, wire_type) {
                (FIELD_KIND, WireType::Varint) => {
                    let raw = reader.varint()?;
                    msg.kind = MessageKind::from_raw(raw)
                        .ok_or(MessageError::InvalidEnumValue(raw))?;
                }
                (FIELD_CHANNEL_ID, WireType::Fixed64) => {
                    msg.channel_id = reader.fixed64()?;
                }
                (FIELD_SENDER_ID, WireType::Fixed64) => {
                    msg.sender_id = reader.fixed64()?;
                }
                (FIELD_CONTENT, WireType::LengthDelimited) => {
                    msg.content = reader.utf8_length_delimited()?.to_owned();
                }
                // Unknown field number, or a known one under an unexpected
                // wire type: capture the whole run raw, tag included.
                _ => {
                    skip_payload(&mut reader, wire_type, 0)?;
                    msg.unknown_fields.push(UnknownField {
                        field_number,
                        bytes: reader.since(start).to_vec(),
                    });
                }
            }
        }
        Ok(msg)
    }
}

/// Advances the reader past one payload of the given wire type without
/// interpreting it. Callers dispose of end-group tags before dispatching
/// here.
fn skip_payload(
    reader: &mut Reader<'_>,
    wire_type: WireType,
    depth: usize,
) -> Result<(), MessageError> {
    match wire_type {
        WireType::Varint => {
            reader.varint()?;
        }
        WireType::Fixed64 => {
            reader.fixed64()?;
        }
        WireType::LengthDelimited => {
            reader.length_delimited()?;
        }
        WireType::Fixed32 => {
            reader.fixed32()?;
        }
        WireType::StartGroup => skip_group(reader, depth + 1)?,
        WireType::EndGroup => {}
    }
    Ok(())
}

/// Consumes tags until the matching end-group tag, recursing into nested
/// groups. A group left open at the end of the buffer is truncated input.
fn skip_group(reader: &mut Reader<'_>, depth: usize) -> Result<(), MessageError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(MessageError::InvalidWireType(WireType::StartGroup as u8));
    }
    loop {
        if reader.is_done() {
            return Err(MessageError::TruncatedInput);
        }
        let raw_tag = reader.tag()?;
        let wire_bits = (raw_tag & 0x7) as u8;
        if wire_bits == WireType::EndGroup as u8 {
            return Ok(());
        }
        let Some(wire_type) = WireType::from_raw(wire_bits) else {
            return Err(MessageError::InvalidWireType(wire_bits));
        };
        skip_payload(reader, wire_type, depth)?;
    }
}
