//! Byte order and host platform facts
//!
//! The endianness mutator consumes two independent platform facts: the host's
//! integer byte order and the host's floating-point word order. On every
//! target Rust supports these agree, but they are kept as separate inputs so
//! the codec can be exercised against any combination.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte order, either big or little endian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl ByteOrder {
    /// Byte order of the compilation target
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// The other byte order
    pub const fn reversed(self) -> Self {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Big => write!(f, "big"),
            ByteOrder::Little => write!(f, "little"),
        }
    }
}

/// Host byte order facts
///
/// `integer` governs integral values (and `bool`), `float` governs `f32` and
/// `f64`. Plain primitives are emitted in these orders, and the endianness
/// mutator swaps only when its target differs from the relevant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostOrder {
    /// Host integer byte order
    pub integer: ByteOrder,
    /// Host floating-point word order
    pub float: ByteOrder,
}

impl HostOrder {
    /// Facts for the compilation target
    pub const fn native() -> Self {
        HostOrder {
            integer: ByteOrder::native(),
            float: ByteOrder::native(),
        }
    }

    /// Both orders set to `order`
    pub const fn uniform(order: ByteOrder) -> Self {
        HostOrder {
            integer: order,
            float: order,
        }
    }
}

impl Default for HostOrder {
    fn default() -> Self {
        HostOrder::native()
    }
}
