//! Validated field descriptors for repeated access to the same bit range.

use crate::{
    bits::{self, bitmask, sign_extend},
    errors::FieldError,
};

/// Byte order of a field relative to the word it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Field is stored in the same order as the word.
    Normal,
    /// Field bytes are stored reversed. Only valid for widths that are a multiple of 8.
    Swapped,
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::Normal
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::ByteOrderDef> for ByteOrder {
    fn from(value: crate::serde::ByteOrderDef) -> Self {
        match value {
            crate::serde::ByteOrderDef::Normal => ByteOrder::Normal,
            crate::serde::ByteOrderDef::Swapped => ByteOrder::Swapped,
        }
    }
}

/// A bit range `(start_bit, num_bits)` that is known to fit inside a 64-bit word.
///
/// Build it once with [Field::new], typically from a static register map, then
/// read and write it without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    start_bit: usize,
    num_bits: usize,
    byte_order: ByteOrder,
}

impl Field {
    /// Validates a field starting at `start_bit` (0 = MSB) spanning `num_bits` bits.
    pub fn new(start_bit: usize, num_bits: usize) -> Result<Self, FieldError> {
        bits::check_field(start_bit, num_bits)?;

        Ok(Field {
            start_bit,
            num_bits,
            byte_order: ByteOrder::Normal,
        })
    }

    /// Changes the byte order. Fails with [FieldError::UnalignedSwap] when
    /// [ByteOrder::Swapped] is requested for a width that is not a multiple of 8.
    pub fn with_byte_order(self, byte_order: ByteOrder) -> Result<Self, FieldError> {
        bits::check_byte_order(self.num_bits, byte_order)?;

        Ok(Field { byte_order, ..self })
    }

    /// First bit of the field, 0 being the MSB.
    pub fn start_bit(&self) -> usize {
        self.start_bit
    }

    /// Width in bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Byte order applied on read and write.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Largest raw value the field can hold.
    pub fn max_value(&self) -> u64 {
        bitmask(self.num_bits)
    }

    /// Reads the field right-aligned.
    pub fn get(&self, data: u64) -> u64 {
        bits::extract(data, self.start_bit, self.num_bits, self.byte_order)
    }

    /// Reads the field as a two's-complement integer of width `num_bits`.
    pub fn get_signed(&self, data: u64) -> i64 {
        sign_extend(self.get(data), self.num_bits)
    }

    /// Writes the low `num_bits` bits of `value`, masking off anything wider.
    ///
    /// A [ByteOrder::Swapped] field stores `value` with its bytes reversed, so
    /// [Field::get] returns what was set.
    pub fn set(&self, data: &mut u64, value: u64) {
        bits::insert_ordered(data, value, self.start_bit, self.num_bits, self.byte_order);
    }

    /// Reads the field and converts it to engineering units: `raw * factor + offset`.
    pub fn get_scaled(&self, data: u64, factor: f64, offset: f64) -> f64 {
        self.get(data) as f64 * factor + offset
    }

    /// Encodes `value` as `round((value - offset) / factor)` and writes it.
    ///
    /// Unlike [Field::set], a result that is negative, not finite or wider than
    /// the field is rejected with [FieldError::ValueOutOfRange] and `data` is left
    /// untouched.
    pub fn set_scaled(
        &self,
        data: &mut u64,
        value: f64,
        factor: f64,
        offset: f64,
    ) -> Result<(), FieldError> {
        let raw = ((value - offset) / factor).round();

        // 2^num_bits is exact in f64 while max_value() is not for widths above 53
        let limit = 2f64.powi(self.num_bits as i32);
        if !raw.is_finite() || raw < 0.0 || raw >= limit {
            reject!(
                FieldError::ValueOutOfRange,
                "rejected scaled value {value} for {}-bit field at bit {}",
                self.num_bits,
                self.start_bit
            );
        }

        self.set(data, raw as u64);
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::FieldDef> for Field {
    type Error = FieldError;

    fn try_from(value: crate::serde::FieldDef) -> Result<Self, Self::Error> {
        Field::new(value.start_bit, value.num_bits)?.with_byte_order(value.byte_order.into())
    }
}
