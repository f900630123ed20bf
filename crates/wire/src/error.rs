use thiserror::Error;

/// Error type for wire primitive reads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A varint did not terminate within 10 bytes, or the buffer ended
    /// mid-varint.
    #[error("malformed varint")]
    MalformedVarint,
    /// The buffer ended before a fixed-width or length-delimited value could
    /// be fully read.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A length-delimited run declared as text is not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
