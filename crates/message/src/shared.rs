//! Convenience wrappers for chat message encode/decode.

use crate::{ChatMessage, ChatMessageDecoder, ChatMessageEncoder, MessageError};

/// Encodes `msg` into its wire form.
pub fn encode(msg: &ChatMessage) -> Result<Vec<u8>, MessageError> {
    let mut encoder = ChatMessageEncoder::new();
    encoder.encode(msg)
}

/// Decodes a wire buffer into a [`ChatMessage`].
pub fn decode(buf: &[u8]) -> Result<ChatMessage, MessageError> {
    let decoder = ChatMessageDecoder::new();
    decoder.decode(buf)
}
