//! Comparator Tests
//!
//! The six relations over records of the same and of different schemas.

use crate::common::*;
use fieldwire::{
    compare, equal, greater, greater_or_equal, less, less_or_equal, not_equal, Codec, Record,
    RecordSchema, Value,
};
use std::cmp::Ordering;

fn versioned(version: u8, label: Option<&str>) -> Record {
    let schema = RecordSchema::builder("Versioned")
        .field("version", Codec::u8())
        .field("label", Codec::optional(Codec::null_string()))
        .build()
        .unwrap();
    Record::new(schema)
        .with("version", version)
        .unwrap()
        .with("label", label.map(Value::from))
        .unwrap()
}

// ============================================================================
// Relations
// ============================================================================

#[test]
fn relations_are_consistent() {
    let cases = [
        (versioned(1, None), versioned(2, None)),
        (versioned(2, None), versioned(1, None)),
        (versioned(1, Some("a")), versioned(1, Some("a"))),
        (versioned(1, None), versioned(1, Some("a"))),
    ];
    for (a, b) in &cases {
        let ord = compare(a, b);
        assert_eq!(less(a, b), ord == Some(Ordering::Less));
        assert_eq!(greater(a, b), ord == Some(Ordering::Greater));
        assert_eq!(equal(a, b), ord == Some(Ordering::Equal));
        assert_eq!(not_equal(a, b), !equal(a, b));
        assert_eq!(less_or_equal(a, b), less(a, b) || equal(a, b));
        assert_eq!(greater_or_equal(a, b), greater(a, b) || equal(a, b));
        // swapping operands reverses the order
        assert_eq!(compare(b, a), ord.map(Ordering::reverse));
    }
}

#[test]
fn absent_optional_sorts_first() {
    let absent = versioned(1, None);
    let present = versioned(1, Some(""));
    assert!(less(&absent, &present));
    assert!(equal(&absent, &versioned(1, None)));
    assert!(greater(&present, &absent));
}

#[test]
fn optional_compares_against_plain_field() {
    let plain = RecordSchema::builder("Plain")
        .field("label", Codec::null_string())
        .build()
        .unwrap();
    let plain = Record::new(plain).with("label", "b").unwrap();

    assert!(less(&versioned(0, Some("a")), &plain));
    assert!(less(&versioned(0, None), &plain));
    assert!(equal(&versioned(0, Some("b")), &plain));
}

// ============================================================================
// Different schemas
// ============================================================================

#[test]
fn disjoint_records_are_equal() {
    let other = RecordSchema::builder("Other")
        .field("unrelated", Codec::f64())
        .build()
        .unwrap();
    let other = Record::new(other).with("unrelated", 99.0f64).unwrap();
    let record = versioned(5, Some("x"));

    assert!(equal(&record, &other));
    assert!(!not_equal(&record, &other));
    assert!(less_or_equal(&record, &other));
    assert!(greater_or_equal(&record, &other));
}

#[test]
fn promoted_names_take_part() {
    // Packet exposes version/length through its header base
    let packet = sample_packet();
    let header = Record::new(header_schema())
        .with("version", 2u8)
        .unwrap()
        .with("length", 0x0103u16)
        .unwrap();

    assert!(less(&packet, &header));
    assert!(greater(&header, &packet));
}

#[test]
fn integer_widths_compare_numerically() {
    let narrow = RecordSchema::builder("Narrow")
        .field("n", Codec::u8())
        .build()
        .unwrap();
    let wide = RecordSchema::builder("Wide")
        .field("n", Codec::big(Codec::i64()))
        .build()
        .unwrap();
    let a = Record::new(narrow).with("n", 200u8).unwrap();
    let b = Record::new(wide.clone()).with("n", 200i64).unwrap();
    let c = Record::new(wide).with("n", -1i64).unwrap();

    assert!(equal(&a, &b));
    assert!(greater(&a, &c));
}

#[test]
fn sole_incomparable_field_leaves_records_unordered() {
    let text = RecordSchema::builder("T")
        .field("version", Codec::null_string())
        .build()
        .unwrap();
    let text = Record::new(text).with("version", "1").unwrap();
    let record = versioned(1, None);

    assert_eq!(compare(&record, &text), None);
    assert!(!less(&record, &text));
    assert!(!greater(&record, &text));
    assert!(!equal(&record, &text));
    assert!(not_equal(&record, &text));
    assert!(record.partial_cmp(&text).is_none());
}

#[test]
fn later_field_decides_past_nan() {
    let schema = RecordSchema::builder("Sample")
        .field("a", Codec::little(Codec::f64()))
        .field("b", Codec::u8())
        .build()
        .unwrap();
    let x = Record::new(schema.clone())
        .with("a", f64::NAN)
        .unwrap()
        .with("b", 1u8)
        .unwrap();
    let y = Record::new(schema)
        .with("a", f64::NAN)
        .unwrap()
        .with("b", 2u8)
        .unwrap();

    assert!(less(&x, &y));
    assert!(!greater(&x, &y));
    assert!(less_or_equal(&x, &y));
    assert!(greater(&y, &x));
    assert!(!equal(&x, &y));
    assert!(not_equal(&x, &y));
    assert!(x < y);

    // every other pair ties, NaN keeps them from being equal
    assert!(!equal(&x, &x.clone()));
    assert!(!less(&x, &x.clone()));
    assert!(!greater_or_equal(&x, &x.clone()));
}
