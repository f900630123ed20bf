//! Field tags and wire types.

/// Wire type of a tagged field, carried in the low three bits of the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    /// Base-128 variable-length integer.
    Varint = 0,
    /// Eight bytes, little-endian.
    Fixed64 = 1,
    /// Varint length prefix followed by that many raw bytes.
    LengthDelimited = 2,
    /// Start of a group. Never produced by this codec; recognized so foreign
    /// fields using it can be skipped.
    StartGroup = 3,
    /// End of a group. At the top level of a message this doubles as the
    /// end-of-message sentinel.
    EndGroup = 4,
    /// Four bytes, little-endian.
    Fixed32 = 5,
}

impl WireType {
    /// Maps the low three bits of a raw tag to a wire type. Values 6 and 7
    /// are reserved and map to `None`.
    pub fn from_raw(raw: u8) -> Option<WireType> {
        match raw & 0x7 {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

/// A decoded field tag: field number plus wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl Tag {
    pub fn new(field_number: u32, wire_type: WireType) -> Self {
        Self {
            field_number,
            wire_type,
        }
    }

    /// Splits a raw tag varint into field number and wire type. Returns
    /// `None` for the reserved wire-type values 6 and 7.
    pub fn from_raw(raw: u64) -> Option<Tag> {
        let wire_type = WireType::from_raw((raw & 0x7) as u8)?;
        Some(Tag {
            field_number: (raw >> 3) as u32,
            wire_type,
        })
    }

    /// Packs the tag into the value encoded as its varint representation.
    pub fn to_raw(self) -> u64 {
        (u64::from(self.field_number) << 3) | self.wire_type as u64
    }
}
