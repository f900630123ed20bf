//! Opaque retention of fields this schema version does not recognize.

/// A field captured from the wire without interpretation.
///
/// `bytes` holds the complete wire run — tag and payload — exactly as read,
/// so re-encoding reproduces the field bit for bit. The field number is split
/// out of the tag for inspection only; nothing in the codec interprets the
/// payload, which is the property that keeps foreign-schema data safe to
/// carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    /// Field number carried by the captured tag.
    pub field_number: u32,
    /// The raw wire run (tag plus payload) as originally read.
    pub bytes: Vec<u8>,
}
