//! Writer/Reader roundtrip matrix for the wire primitives crate.

use chatcodec_wire::{
    length_delimited_size, tag_size, varint_size, Reader, Tag, WireError, WireType, Writer,
};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_varint() {
    let cases: &[u64] = &[
        0,
        1,
        127,
        128,
        150,
        16_383,
        16_384,
        u64::from(u32::MAX),
        u64::MAX - 1,
        u64::MAX,
    ];
    for &value in cases {
        let mut w = Writer::new();
        w.varint(value);
        let data = w.flush();
        assert_eq!(data.len(), varint_size(value), "size of {value}");
        let mut r = Reader::new(&data);
        assert_eq!(r.varint().unwrap(), value);
        assert!(r.is_done());
    }
}

#[test]
fn roundtrip_fixed64() {
    for value in [0u64, 1, 0xdead_beef, u64::MAX] {
        let mut w = Writer::new();
        w.fixed64(value);
        let data = w.flush();
        assert_eq!(data.len(), 8);
        let mut r = Reader::new(&data);
        assert_eq!(r.fixed64().unwrap(), value);
    }
}

#[test]
fn roundtrip_fixed32() {
    for value in [0u32, 1, 0xcafe, u32::MAX] {
        let mut w = Writer::new();
        w.fixed32(value);
        let data = w.flush();
        assert_eq!(data.len(), 4);
        let mut r = Reader::new(&data);
        assert_eq!(r.fixed32().unwrap(), value);
    }
}

#[test]
fn roundtrip_tag() {
    for field_number in [1u32, 4, 15, 16, 99, 536_870_911] {
        for wire_type in [WireType::Varint, WireType::Fixed64, WireType::LengthDelimited] {
            let mut w = Writer::new();
            w.tag(field_number, wire_type);
            let data = w.flush();
            assert_eq!(data.len(), tag_size(field_number));
            let mut r = Reader::new(&data);
            let tag = Tag::from_raw(r.tag().unwrap()).unwrap();
            assert_eq!(tag.field_number, field_number);
            assert_eq!(tag.wire_type, wire_type);
        }
    }
}

#[test]
fn roundtrip_length_delimited() {
    let cases: &[&[u8]] = &[b"", b"x", b"hello", &[0u8; 300]];
    for &payload in cases {
        let mut w = Writer::new();
        w.length_delimited(payload);
        let data = w.flush();
        assert_eq!(data.len(), length_delimited_size(payload.len()));
        let mut r = Reader::new(&data);
        assert_eq!(r.length_delimited().unwrap(), payload);
    }
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn varint_without_terminator() {
    let data = [0x80, 0x80, 0x80];
    assert_eq!(Reader::new(&data).varint(), Err(WireError::MalformedVarint));
}

#[test]
fn varint_longer_than_ten_bytes() {
    let data = [0x80; 16];
    assert_eq!(Reader::new(&data).varint(), Err(WireError::MalformedVarint));
}

#[test]
fn fixed64_needs_eight_bytes() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    assert_eq!(Reader::new(&data).fixed64(), Err(WireError::UnexpectedEof));
}

#[test]
fn length_delimited_declared_past_end() {
    let mut w = Writer::new();
    w.varint(10);
    w.raw(b"abc");
    let data = w.flush();
    assert_eq!(
        Reader::new(&data).length_delimited(),
        Err(WireError::UnexpectedEof)
    );
}

#[test]
fn utf8_text_rejected_when_invalid() {
    let data = [0x02, 0xc3, 0x28];
    assert_eq!(
        Reader::new(&data).utf8_length_delimited(),
        Err(WireError::InvalidUtf8)
    );
}
