//! Byte-order mutator
//!
//! On write the value is byte-reversed before the inner codec sees it when
//! the target order differs from the host order for the value's kind; on
//! read the inner codec decodes first and the same test decides whether to
//! reverse the result.
//!
//! The decision depends only on (target, host), never on what other layers
//! did, so two same-target layers always cancel and an odd number of layers
//! behaves as one. Integer and float decisions use separate host facts.

use crate::codec::Codec;
use crate::error::CodecResult;
use crate::primitive::host_order_for;
use crate::value::Value;
use fieldwire_core::{ByteOrder, CodecConfig, HostOrder};
use std::io::{Read, Write};

/// Whether a value must be reversed to reach `target` order on this host
pub fn needs_swap(target: ByteOrder, value: &Value, host: &HostOrder) -> bool {
    match value.primitive() {
        Some(p) if p.width() > 1 => target != host_order_for(p, host),
        _ => false,
    }
}

/// Apply the mutator's decision to a value
fn apply(target: ByteOrder, value: &Value, host: &HostOrder) -> Option<Value> {
    needs_swap(target, value, host).then(|| value.swap_bytes())
}

pub(crate) fn write<W: Write + ?Sized>(
    order: ByteOrder,
    inner: &Codec,
    value: &Value,
    writer: &mut W,
    config: &CodecConfig,
) -> CodecResult<()> {
    match apply(order, value, &config.host) {
        Some(swapped) => inner.write(&swapped, writer, config),
        None => inner.write(value, writer, config),
    }
}

pub(crate) fn read<R: Read + ?Sized>(
    order: ByteOrder,
    inner: &Codec,
    reader: &mut R,
    config: &CodecConfig,
) -> CodecResult<Value> {
    let value = inner.read(reader, config)?;
    Ok(apply(order, &value, &config.host).unwrap_or(value))
}
