//! Codec integration tests
//!
//! Exercises the public `fieldwire` facade end to end over in-memory streams.


mod comparator;
mod config;
mod endianness;
mod promotion;
