//! Exact encoded-size arithmetic, used to size buffers without encoding.

/// Exact byte length of `value` in varint form.
pub fn varint_size(value: u64) -> usize {
    // Each varint byte carries 7 payload bits; zero still takes one byte.
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

/// Exact byte length of the tag for `field_number`. The wire type lives in
/// the low three bits and never pushes the tag into an extra byte.
pub fn tag_size(field_number: u32) -> usize {
    varint_size(u64::from(field_number) << 3)
}

/// Exact byte length of a length-delimited run holding `len` payload bytes.
pub fn length_delimited_size(len: usize) -> usize {
    varint_size(len as u64) + len
}
