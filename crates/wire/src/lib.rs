//! Tagged-field wire primitives for chatcodec.
//!
//! This crate implements the schema-independent layer of the wire format:
//! varint-packed field tags, base-128 varints, little-endian fixed-width
//! integers, and length-delimited byte runs. It never looks at field
//! semantics — everything here operates on `(tag, payload)` shape alone,
//! which is what lets schema-bearing callers capture and re-emit fields they
//! do not recognize.
//!
//! # Overview
//!
//! - [`Reader`] - checked, cursor-tracking reads from a byte slice
//! - [`Writer`] - infallible writes into an auto-growing buffer
//! - [`Tag`] / [`WireType`] - field tag packing and classification
//! - [`varint_size`] / [`tag_size`] / [`length_delimited_size`] - exact
//!   encoded lengths without encoding
//!
//! # Example
//!
//! ```
//! use chatcodec_wire::{Reader, WireType, Writer};
//!
//! let mut writer = Writer::new();
//! writer.tag(4, WireType::LengthDelimited);
//! writer.length_delimited(b"hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.tag().unwrap(), (4 << 3) | 2);
//! assert_eq!(reader.utf8_length_delimited().unwrap(), "hello");
//! ```

mod error;
mod reader;
mod size;
mod tag;
mod writer;

pub use error::WireError;
pub use reader::Reader;
pub use size::{length_delimited_size, tag_size, varint_size};
pub use tag::{Tag, WireType};
pub use writer::Writer;
