//! # bitword
//!
//! Primitives for reading and writing arbitrary-width bit fields inside a
//! single 64-bit word, plus byte and nibble access into that word.
//!
//! Bits are numbered MSB-first (network bit order): bit 0 is the most
//! significant bit of the word, bit 63 the least significant. Bytes follow the
//! same convention, so byte 0 holds bits 0..8.
//!
//! Fields are described by a start bit and a width. Descriptors that do not fit
//! inside the word are rejected with a [FieldError] instead of being truncated.
//!
//! ## Example
//!
//! ```
//! use bitword::{bits::{get_bit_field, nth_byte, set_bit_field}, field::ByteOrder};
//!
//! let data = 0x0402574d555a0401;
//! assert_eq!(get_bit_field(data, 16, 32, ByteOrder::Normal), Ok(0x574d555a));
//! assert_eq!(nth_byte(data, 2), Ok(0x57));
//!
//! let mut word = 0u64;
//! set_bit_field(&mut word, 0xf, 3, 4).unwrap();
//! assert_eq!(get_bit_field(word, 3, 4, ByteOrder::Normal), Ok(0xf));
//! ```
//!
//! For descriptors that come from a static schema, validate once with
//! [Field::new] and reuse the result:
//!
//! ```
//! use bitword::Field;
//!
//! let speed = Field::new(12, 8).unwrap();
//! assert_eq!(speed.get(0x000012FA00000000), 0x01);
//! ```

/// Returns `Err($err)` from the enclosing function, logging the rejection when
/// the `logging` feature is enabled.
macro_rules! reject {
    ($err:expr, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
        return Err($err);
    }};
}

pub mod bits;
pub mod errors;
pub mod field;
#[cfg(feature = "serde")]
pub mod serde;

pub use errors::FieldError;
pub use field::{ByteOrder, Field};
