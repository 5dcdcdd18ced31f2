//! Bit field primitives over a single 64-bit word.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the word and
//! byte 0 is its high byte. A field `(start_bit, num_bits)` must satisfy
//! `1 <= num_bits` and `start_bit + num_bits <= 64`.
//!
//! The read-only functions are pure. [set_bit_field] and [set_nth_byte] mutate
//! one caller-owned word and are not synchronized; callers sharing a word across
//! threads must provide their own exclusion.

use crate::{errors::FieldError, field::ByteOrder};

/// Returns a word with the low `num_bits` bits set. `num_bits` must be in `0..=64`.
pub(crate) fn bitmask(num_bits: usize) -> u64 {
    debug_assert!(num_bits <= 64, "bitmask width {num_bits} exceeds 64");
    u64::MAX.checked_shr((64 - num_bits) as u32).unwrap_or(0)
}

/// Checks that `(start_bit, num_bits)` describes a non-empty run inside the word.
pub(crate) fn check_field(start_bit: usize, num_bits: usize) -> Result<(), FieldError> {
    if num_bits == 0 || num_bits > 64 {
        reject!(
            FieldError::InvalidFieldSize,
            "rejected field width {num_bits} at bit {start_bit}"
        );
    }

    if start_bit > 63 || start_bit + num_bits > 64 {
        reject!(
            FieldError::OutOfBounds,
            "rejected field of {num_bits} bits at bit {start_bit}: past end of word"
        );
    }

    Ok(())
}

pub(crate) fn check_byte_order(num_bits: usize, byte_order: ByteOrder) -> Result<(), FieldError> {
    if byte_order == ByteOrder::Swapped && num_bits % 8 != 0 {
        reject!(
            FieldError::UnalignedSwap,
            "rejected byte swap of a {num_bits}-bit field"
        );
    }

    Ok(())
}

/// Distance from the field's lowest bit to bit 63.
fn shift_of(start_bit: usize, num_bits: usize) -> usize {
    64 - start_bit - num_bits
}

/// Reverses the bytes of a right-aligned field whose width is a multiple of 8.
fn swap_field_bytes(value: u64, num_bits: usize) -> u64 {
    value.swap_bytes() >> (64 - num_bits)
}

pub(crate) fn extract(data: u64, start_bit: usize, num_bits: usize, byte_order: ByteOrder) -> u64 {
    let value = (data >> shift_of(start_bit, num_bits)) & bitmask(num_bits);

    match byte_order {
        ByteOrder::Normal => value,
        ByteOrder::Swapped => swap_field_bytes(value, num_bits),
    }
}

pub(crate) fn insert(data: &mut u64, value: u64, start_bit: usize, num_bits: usize) {
    let shift = shift_of(start_bit, num_bits);
    let mask = bitmask(num_bits);

    *data = (*data & !(mask << shift)) | ((value & mask) << shift);
}

pub(crate) fn insert_ordered(
    data: &mut u64,
    value: u64,
    start_bit: usize,
    num_bits: usize,
    byte_order: ByteOrder,
) {
    let value = match byte_order {
        ByteOrder::Normal => value,
        ByteOrder::Swapped => swap_field_bytes(value & bitmask(num_bits), num_bits),
    };

    insert(data, value, start_bit, num_bits);
}

/// Reads `num_bits` bits starting at `start_bit` and returns them right-aligned.
///
/// With [ByteOrder::Swapped] the extracted field has its bytes reversed. Swapping
/// is only defined for widths that are a multiple of 8; other widths fail with
/// [FieldError::UnalignedSwap] rather than swapping partial bytes.
pub fn get_bit_field(
    data: u64,
    start_bit: usize,
    num_bits: usize,
    byte_order: ByteOrder,
) -> Result<u64, FieldError> {
    check_field(start_bit, num_bits)?;
    check_byte_order(num_bits, byte_order)?;

    Ok(extract(data, start_bit, num_bits, byte_order))
}

/// Writes the low `num_bits` bits of `value` into `data` at `start_bit`, leaving
/// every other bit unchanged.
///
/// Bits of `value` above `num_bits` are masked off, not reported. On error
/// `data` is left untouched.
pub fn set_bit_field(
    data: &mut u64,
    value: u64,
    start_bit: usize,
    num_bits: usize,
) -> Result<(), FieldError> {
    check_field(start_bit, num_bits)?;
    insert(data, value, start_bit, num_bits);

    Ok(())
}

/// Returns byte `n` of the word, byte 0 being the most significant.
pub fn nth_byte(data: u64, n: usize) -> Result<u8, FieldError> {
    match data.to_be_bytes().get(n) {
        Some(&byte) => Ok(byte),
        None => reject!(FieldError::ByteIndexOutOfRange, "rejected byte index {n}"),
    }
}

/// Overwrites byte `n` of the word, byte 0 being the most significant.
pub fn set_nth_byte(data: &mut u64, n: usize, value: u8) -> Result<(), FieldError> {
    let mut bytes = data.to_be_bytes();
    match bytes.get_mut(n) {
        Some(byte) => *byte = value,
        None => reject!(FieldError::ByteIndexOutOfRange, "rejected byte index {n}"),
    }

    *data = u64::from_be_bytes(bytes);
    Ok(())
}

/// Returns nibble `n` (0..16) of the word, nibble 0 being bits 0..4.
pub fn nth_nibble(data: u64, n: usize) -> Result<u8, FieldError> {
    if n > 15 {
        reject!(
            FieldError::NibbleIndexOutOfRange,
            "rejected nibble index {n}"
        );
    }

    Ok(extract(data, n * 4, 4, ByteOrder::Normal) as u8)
}

/// Sign-extends the low `bits` of `value` to a full `i64`. `bits` must be in `1..=64`.
pub(crate) fn sign_extend(value: u64, bits: usize) -> i64 {
    debug_assert!((1..=64).contains(&bits));
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}
