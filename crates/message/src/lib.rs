//! Chat stream message codec.
//!
//! Defines the [`ChatMessage`] record and its wire codec: deterministic
//! encode, single-pass decode, value-based merge, and exact size
//! computation, built on the schema-independent primitives in
//! `chatcodec-wire`.
//!
//! The field mapping is fixed for wire compatibility: `kind = 1` (varint,
//! closed enum), `channel_id = 2` (fixed64), `sender_id = 3` (fixed64),
//! `content = 4` (length-delimited UTF-8). Fields from newer or foreign
//! schema versions are retained opaquely and replayed verbatim on re-encode.
//!
//! # Example
//!
//! ```
//! use chatcodec_message::{decode, encode, ChatMessage};
//!
//! let mut msg = ChatMessage::new();
//! msg.channel_id = 42;
//! msg.content = "hello".to_owned();
//!
//! let data = encode(&msg).unwrap();
//! assert_eq!(data.len(), msg.byte_size());
//!
//! let decoded = decode(&data).unwrap();
//! assert_eq!(decoded, msg);
//! ```

mod decoder;
mod encoder;
mod error;
mod kind;
mod message;
mod shared;
mod unknown;

pub use decoder::ChatMessageDecoder;
pub use encoder::ChatMessageEncoder;
pub use error::MessageError;
pub use kind::MessageKind;
pub use message::ChatMessage;
pub use shared::{decode, encode};
pub use unknown::UnknownField;
