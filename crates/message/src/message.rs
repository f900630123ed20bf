//! The chat stream message record.

use chatcodec_wire::{length_delimited_size, tag_size, varint_size};

use crate::{MessageKind, UnknownField};

/// Field numbers are part of the wire contract and must never be reordered
/// or reused.
pub(crate) const FIELD_KIND: u32 = 1;
pub(crate) const FIELD_CHANNEL_ID: u32 = 2;
pub(crate) const FIELD_SENDER_ID: u32 = 3;
pub(crate) const FIELD_CONTENT: u32 = 4;

/// A chat stream message.
///
/// Field presence is value-based: a field is encoded iff it differs from its
/// zero value, so "explicitly set to zero" and "never set" are the same state
/// on the wire. That is a format limitation carried deliberately for
/// compatibility, not an invitation to add presence flags.
///
/// Fields captured from newer or foreign schema versions survive a
/// decode → re-encode round trip verbatim via `unknown_fields`.
///
/// # Example
///
/// ```
/// use chatcodec_message::{decode, encode, ChatMessage};
///
/// let mut msg = ChatMessage::new();
/// msg.channel_id = 42;
/// msg.sender_id = 7;
/// msg.content = "hello".to_owned();
///
/// let data = encode(&msg).unwrap();
/// assert_eq!(data.len(), msg.byte_size());
/// assert_eq!(decode(&data).unwrap(), msg);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message kind; field 1, varint.
    pub kind: MessageKind,
    /// Channel identifier; field 2, fixed64. Zero means unset.
    pub channel_id: u64,
    /// Sender identifier; field 3, fixed64. Zero means unset.
    pub sender_id: u64,
    /// Message text; field 4, length-delimited UTF-8. Empty means unset.
    pub content: String,
    /// Unrecognized fields in first-encountered order.
    pub unknown_fields: Vec<UnknownField>,
}

impl ChatMessage {
    /// Creates a message with every field at its default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its default and drops captured unknown fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field holds its default value and no unknown fields
    /// were captured. Such a message encodes to an empty buffer.
    pub fn is_default(&self) -> bool {
        self.kind == MessageKind::default()
            && self.channel_id == 0
            && self.sender_id == 0
            && self.content.is_empty()
            && self.unknown_fields.is_empty()
    }

    /// Merges `src` into `self`.
    ///
    /// Each known field of `src` overwrites the corresponding field of `self`
    /// iff it is non-default; a default field in `src` is indistinguishable
    /// from "not provided" and never clears anything. Unknown fields are
    /// concatenated onto `self`'s list without deduplication — without a
    /// schema there is no way to tell whether two entries for the same field
    /// number are the same field.
    ///
    /// Never fails: both messages are assumed to already hold valid values.
    pub fn merge_from(&mut self, src: &ChatMessage) {
        if src.kind != MessageKind::default() {
            self.kind = src.kind;
        }
        if src.channel_id != 0 {
            self.channel_id = src.channel_id;
        }
        if src.sender_id != 0 {
            self.sender_id = src.sender_id;
        }
        if !src.content.is_empty() {
            self.content.clone_from(&src.content);
        }
        self.unknown_fields.extend(src.unknown_fields.iter().cloned());
    }

    /// Exact encoded length in bytes, without materializing the buffer.
    ///
    /// Always equals `encode(self).len()`.
    pub fn byte_size(&self) -> usize {
        let mut size = 0;
        if self.kind != MessageKind::default() {
            size += tag_size(FIELD_KIND) + varint_size(self.kind.to_raw());
        }
        if self.channel_id != 0 {
            size += tag_size(FIELD_CHANNEL_ID) + 8;
        }
        if self.sender_id != 0 {
            size += tag_size(FIELD_SENDER_ID) + 8;
        }
        if !self.content.is_empty() {
            size += tag_size(FIELD_CONTENT) + length_delimited_size(self.content.len());
        }
        size + self
            .unknown_fields
            .iter()
            .map(|field| field.bytes.len())
            .sum::<usize>()
    }
}
