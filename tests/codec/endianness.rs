//! Endianness Mutator Tests
//!
//! Wire order against host order, nesting cancellation, and hosts whose
//! integer and float orders differ.

use crate::common::*;
use fieldwire::{ByteOrder, Codec, CodecConfig, HostOrder, Record, RecordSchema, Value};
use proptest::prelude::*;

fn one_field(codec: Codec) -> std::sync::Arc<RecordSchema> {
    RecordSchema::builder("One").field("f", codec).build().unwrap()
}

// ============================================================================
// Plain versus little-endian fields
// ============================================================================

#[test]
fn little_field_read_back_as_plain_on_little_host() {
    let writer = RecordSchema::builder("In")
        .field("Field 1", Codec::u16())
        .field("Field 2", Codec::little(Codec::u16()))
        .build()
        .unwrap();
    let reader = RecordSchema::builder("Out")
        .field("Field 1", Codec::u16())
        .field("Field 2", Codec::u16())
        .build()
        .unwrap();

    let input = Record::new(writer)
        .with("Field 1", 0x0102u16)
        .unwrap()
        .with("Field 2", 0x0102u16)
        .unwrap();

    let config = little_host();
    let output = decode_into(&encode(&input, &config), reader, &config);
    assert_eq!(output.get("Field 1"), input.get("Field 1"));
    assert_eq!(output.get("Field 2"), input.get("Field 2"));
}

#[test]
fn little_field_read_back_as_plain_on_big_host_is_swapped() {
    let writer = one_field(Codec::little(Codec::u16()));
    let reader = one_field(Codec::u16());
    let input = Record::new(writer).with("f", 0x0102u16).unwrap();

    let config = big_host();
    let output = decode_into(&encode(&input, &config), reader, &config);
    assert_eq!(output.get("f"), Some(&Value::U16(0x0201)));
}

#[test]
fn nested_little_cancels_on_every_host() {
    let writer = one_field(Codec::little(Codec::little(Codec::u16())));
    let reader = one_field(Codec::u16());
    let input = Record::new(writer).with("f", 0x0102u16).unwrap();

    for config in hosts() {
        let output = decode_into(&encode(&input, &config), reader.clone(), &config);
        assert_eq!(output.get("f"), Some(&Value::U16(0x0102)));
    }
}

#[test]
fn triple_wrap_behaves_like_single() {
    let triple = one_field(Codec::big(Codec::big(Codec::big(Codec::i32()))));
    let single = one_field(Codec::big(Codec::i32()));

    for config in hosts() {
        let a = encode(&Record::new(triple.clone()).with("f", -7i32).unwrap(), &config);
        let b = encode(&Record::new(single.clone()).with("f", -7i32).unwrap(), &config);
        assert_eq!(a, b);
        assert_eq!(a, (-7i32).to_be_bytes().to_vec());
    }
}

#[test]
fn wire_order_is_host_independent() {
    let schema = RecordSchema::builder("Wire")
        .field("a", Codec::little(Codec::u32()))
        .field("b", Codec::big(Codec::u32()))
        .field("c", Codec::little(Codec::f64()))
        .build()
        .unwrap();
    let record = Record::new(schema)
        .with("a", 0x0A0B_0C0Du32)
        .unwrap()
        .with("b", 0x0A0B_0C0Du32)
        .unwrap()
        .with("c", 2.5f64)
        .unwrap();

    let mut expected = 0x0A0B_0C0Du32.to_le_bytes().to_vec();
    expected.extend_from_slice(&0x0A0B_0C0Du32.to_be_bytes());
    expected.extend_from_slice(&2.5f64.to_le_bytes());

    for config in hosts() {
        assert_eq!(encode(&record, &config), expected);
    }
}

// ============================================================================
// Mixed integer/float host orders
// ============================================================================

#[test]
fn mixed_host_swaps_floats_but_not_integers() {
    let config = CodecConfig::default().with_host(HostOrder {
        integer: ByteOrder::Little,
        float: ByteOrder::Big,
    });
    let schema = RecordSchema::builder("Mixed")
        .field("i", Codec::little(Codec::u32()))
        .field("f", Codec::little(Codec::f32()))
        .build()
        .unwrap();
    let plain = RecordSchema::builder("Plain")
        .field("i", Codec::u32())
        .field("f", Codec::f32())
        .build()
        .unwrap();

    let record = Record::new(schema)
        .with("i", 0x0102_0304u32)
        .unwrap()
        .with("f", 1.0f32)
        .unwrap();
    let bytes = encode(&record, &config);

    // the wire is little-endian for both
    let mut expected = 0x0102_0304u32.to_le_bytes().to_vec();
    expected.extend_from_slice(&1.0f32.to_le_bytes());
    assert_eq!(bytes, expected);

    // read back as plain: integer untouched, float reversed
    let out = decode_into(&bytes, plain, &config);
    assert_eq!(out.get("i"), Some(&Value::U32(0x0102_0304)));
    let swapped = f32::from_bits(1.0f32.to_bits().swap_bytes());
    match out.get("f") {
        Some(Value::F32(v)) => assert_eq!(v.to_bits(), swapped.to_bits()),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn native_host_matches_target_endian() {
    let host = HostOrder::native();
    let expected = if cfg!(target_endian = "little") {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    assert_eq!(host.integer, expected);
    assert_eq!(host.float, expected);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn double_wrap_equals_plain(
        v in any::<u64>(),
        little in any::<bool>(),
        on_big_host in any::<bool>(),
    ) {
        let order = if little { ByteOrder::Little } else { ByteOrder::Big };
        let host = if on_big_host { ByteOrder::Big } else { ByteOrder::Little };
        let config = CodecConfig::default().with_host(HostOrder::uniform(host));

        let wrapped = one_field(Codec::endian(order, Codec::endian(order, Codec::u64())));
        let plain = one_field(Codec::u64());
        let a = encode(&Record::new(wrapped).with("f", v).unwrap(), &config);
        let b = encode(&Record::new(plain).with("f", v).unwrap(), &config);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn single_wrap_swaps_exactly_when_orders_differ(
        v in any::<i16>(),
        on_big_host in any::<bool>(),
    ) {
        let host = if on_big_host { ByteOrder::Big } else { ByteOrder::Little };
        let config = CodecConfig::default().with_host(HostOrder::uniform(host));

        let bytes = encode(
            &Record::new(one_field(Codec::little(Codec::i16()))).with("f", v).unwrap(),
            &config,
        );
        let out = decode_into(&bytes, one_field(Codec::i16()), &config);
        let expected = if host == ByteOrder::Little { v } else { v.swap_bytes() };
        prop_assert_eq!(out.get("f"), Some(&Value::I16(expected)));
    }
}
