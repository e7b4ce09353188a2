//! Configuration Tests
//!
//! Config documents, limits, and identifier registration.

use fieldwire::{
    engine, ByteOrder, Codec, CodecConfig, CodecError, DefinitionError, HostOrder, Identifier,
    Limits, Record, RecordSchema,
};

#[test]
fn config_document_drives_host_order() {
    let config: CodecConfig =
        serde_json::from_str(r#"{"host":{"integer":"big","float":"big"}}"#).unwrap();
    assert_eq!(config.host, HostOrder::uniform(ByteOrder::Big));
    assert_eq!(config.limits, Limits::default());

    let schema = RecordSchema::builder("W")
        .field("w", Codec::u32())
        .build()
        .unwrap();
    let record = Record::new(schema).with("w", 1u32).unwrap();
    assert_eq!(engine::to_bytes_with(&config, &record).unwrap(), vec![0, 0, 0, 1]);
}

#[test]
fn sequence_limit_from_config() {
    let config: CodecConfig =
        serde_json::from_str(r#"{"limits":{"max_sequence_len":2}}"#).unwrap();
    let schema = RecordSchema::builder("L")
        .field("l", Codec::length_prefixed(Codec::u8(), Codec::u8()))
        .build()
        .unwrap();

    assert!(engine::from_bytes_with(&config, &schema, &[2, 1, 1]).is_ok());
    let err = engine::from_bytes_with(&config, &schema, &[3, 1, 1, 1]).unwrap_err();
    assert!(matches!(
        err.root(),
        CodecError::SequenceTooLong { length: 3, max: 2 }
    ));
}

#[test]
fn identifiers_are_validated() {
    assert_eq!(Identifier::new(""), Err(DefinitionError::EmptyName));
    assert!(Identifier::new("x".repeat(100)).is_ok());
    assert!(matches!(
        Identifier::new("x".repeat(101)),
        Err(DefinitionError::NameTooLong { length: 101, max: 100 })
    ));
}

#[test]
fn builder_limits_apply_to_field_names() {
    let err = RecordSchema::builder("Tight")
        .with_limits(Limits::with_small_limits())
        .field("a_rather_long_field_name", Codec::u8())
        .build()
        .unwrap_err();
    assert!(matches!(err, DefinitionError::NameTooLong { max: 16, .. }));
}

#[test]
fn duplicate_field_rejected() {
    let err = RecordSchema::builder("Dup")
        .field("a", Codec::u8())
        .field("a", Codec::u16())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        DefinitionError::DuplicateField(Identifier::new("a").unwrap())
    );
}

#[test]
fn invalid_config_rejected() {
    let config: CodecConfig =
        serde_json::from_str(r#"{"limits":{"max_name_length":0}}"#).unwrap();
    assert!(config.validate().is_err());
}
