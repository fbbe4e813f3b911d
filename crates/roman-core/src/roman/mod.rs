//! Integer ↔ Roman numeral conversion.
//!
//! Both directions walk the same descending [`NUMERALS`] table: encoding
//! appends the largest symbol that still fits, decoding strips matching
//! symbol prefixes. Only the range 1..=3999 is supported (no vinculum).

mod decode;
mod encode;
mod table;

pub use decode::{decode, decode_bytes, decode_with};
pub use encode::{encode, encode_bytes};
pub use table::{Numeral, MAX_ENCODED_LEN, MAX_VALUE, MIN_VALUE, NUMERALS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RomanError {
    #[error("integer must be between 1 and 3999, got {0}")]
    IntegerOutOfBounds(i64),

    /// `position` is the byte offset of the first byte that could not be
    /// matched against the table.
    #[error("invalid roman numeral (unconsumed input at byte {position})")]
    InvalidRomanNumeral { position: usize },
}

/// How strictly [`decode_with`] judges its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Any input fully consumed by greedy table matching is accepted,
    /// including non-canonical forms such as `IIII`.
    #[default]
    Lenient,
    /// Input must also be the canonical encoding of its value.
    Strict,
}
