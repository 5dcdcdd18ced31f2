//! Error types for bit field access.

use std::fmt;

/// Errors produced when a field descriptor or index does not fit inside a 64-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field width is 0 or greater than 64 bits.
    InvalidFieldSize,
    /// Field starts past bit 63 or runs past the end of the word.
    OutOfBounds,
    /// Byte index is greater than 7.
    ByteIndexOutOfRange,
    /// Nibble index is greater than 15.
    NibbleIndexOutOfRange,
    /// Byte swap requested on a field whose width is not a multiple of 8 bits.
    UnalignedSwap,
    /// Scaled value cannot be represented in the field's width.
    ValueOutOfRange,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::InvalidFieldSize => "field width must be between 1 and 64 bits",
            FieldError::OutOfBounds => "field does not fit inside a 64-bit word",
            FieldError::ByteIndexOutOfRange => "byte index must be between 0 and 7",
            FieldError::NibbleIndexOutOfRange => "nibble index must be between 0 and 15",
            FieldError::UnalignedSwap => "byte swap requires a field width that is a multiple of 8",
            FieldError::ValueOutOfRange => "value does not fit in the field",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for FieldError {}
