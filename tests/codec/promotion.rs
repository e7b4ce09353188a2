//! Base Promotion Tests
//!
//! A record's base field exposes the nested record's names as its own,
//! without duplicating storage or wire bytes.

use crate::common::*;
use fieldwire::{engine, Codec, DefinitionError, Record, RecordSchema, Value};

#[test]
fn promoted_fields_read_and_write_through_base() {
    let mut packet = Record::new(packet_schema());
    packet.set("version", 7u8).unwrap();

    let header = packet.get("header").and_then(Value::as_record).unwrap();
    assert_eq!(header.get("version"), Some(&Value::U8(7)));
    assert_eq!(packet.get("version"), Some(&Value::U8(7)));
}

#[test]
fn promotion_adds_no_bytes() {
    let packet = sample_packet();
    let bytes = engine::to_bytes(&packet).unwrap();

    let header = packet.get("header").and_then(Value::as_record).unwrap();
    let header_bytes = engine::to_bytes(header).unwrap();
    assert_eq!(&bytes[..header_bytes.len()], &header_bytes[..]);
    // header, name, words, absent checksum
    assert_eq!(bytes.len(), 3 + (1 + 6) + (4 + 2 * 2) + 1);
}

#[test]
fn visible_names_list_own_then_promoted() {
    let schema = packet_schema();
    let names: Vec<&str> = schema.visible_names().iter().map(|id| id.as_str()).collect();
    assert_eq!(
        names,
        ["header", "name", "words", "checksum", "version", "length"]
    );
}

#[test]
fn own_field_shadows_promoted_name() {
    let schema = RecordSchema::builder("Override")
        .field("header", Codec::record(header_schema()))
        .field("version", Codec::big(Codec::u32()))
        .base("header")
        .build()
        .unwrap();
    let names: Vec<&str> = schema.visible_names().iter().map(|id| id.as_str()).collect();
    assert_eq!(names, ["header", "version", "length"]);

    let mut record = Record::new(schema);
    record.set("version", 9u32).unwrap();
    let header = record.get("header").and_then(Value::as_record).unwrap();
    assert_eq!(header.get("version"), Some(&Value::U8(0)));
}

#[test]
fn chained_bases_resolve_transitively() {
    let middle = RecordSchema::builder("Middle")
        .field("inner", Codec::record(header_schema()))
        .field("tag", Codec::u8())
        .base("inner")
        .build()
        .unwrap();
    let outer = RecordSchema::builder("Outer")
        .field("mid", Codec::record(middle))
        .base("mid")
        .build()
        .unwrap();

    let mut record = Record::new(outer.clone());
    record.set("length", 0xBEEFu16).unwrap();
    record.set("tag", 1u8).unwrap();

    let back = engine::from_bytes(&outer, &engine::to_bytes(&record).unwrap()).unwrap();
    assert_eq!(back.get("length"), Some(&Value::U16(0xBEEF)));
    assert_eq!(back.get("tag"), Some(&Value::U8(1)));
    assert!(outer.is_visible("version"));
}

#[test]
fn base_must_be_an_own_record_field() {
    let unknown = RecordSchema::builder("Bad")
        .field("x", Codec::u8())
        .base("missing")
        .build()
        .unwrap_err();
    assert!(matches!(unknown, DefinitionError::UnknownBase(_)));

    let scalar = RecordSchema::builder("Bad")
        .field("x", Codec::u8())
        .base("x")
        .build()
        .unwrap_err();
    assert!(matches!(scalar, DefinitionError::BaseNotRecord(_)));
}
