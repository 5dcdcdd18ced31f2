//! Deserializable field descriptions.
//!
//! Register maps and packet layouts are usually shipped as data (JSON, TOML, ...).
//! These types describe a single field in that form; convert them into a
//! validated [crate::Field] with `Field::try_from`.

use serde::{Deserialize, Serialize};

/// Byte order of a described field.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderDef {
    #[default]
    /// Same order as the containing word.
    Normal,
    /// Bytes reversed relative to the containing word.
    Swapped,
}

/// Description of one bit field inside a 64-bit word.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// First bit of the field, 0 being the most significant bit of the word.
    pub start_bit: usize,
    /// Width of the field in bits.
    pub num_bits: usize,
    /// Byte order of the field; `Normal` when omitted.
    #[serde(default)]
    pub byte_order: ByteOrderDef,
}
