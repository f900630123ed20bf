use chatcodec_wire::WireError;
use thiserror::Error;

/// Error type for chat message encoding/decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// A varint did not terminate within 10 bytes, or the buffer ended
    /// mid-varint.
    #[error("malformed varint")]
    MalformedVarint,
    /// The buffer ended before a field's payload could be fully read.
    #[error("truncated input")]
    TruncatedInput,
    /// The `kind` field decoded to an integer with no matching variant.
    #[error("invalid enum value {0}")]
    InvalidEnumValue(u64),
    /// The `content` field holds bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in content")]
    InvalidUtf8,
    /// A tag carried one of the reserved wire-type values 6 or 7, or unknown
    /// groups nested past the supported depth.
    #[error("invalid wire type {0}")]
    InvalidWireType(u8),
}

impl From<WireError> for MessageError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::MalformedVarint => MessageError::MalformedVarint,
            WireError::UnexpectedEof => MessageError::TruncatedInput,
            WireError::InvalidUtf8 => MessageError::InvalidUtf8,
        }
    }
}
