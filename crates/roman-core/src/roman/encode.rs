use tracing::debug;

use super::table::{MAX_ENCODED_LEN, MAX_VALUE, MIN_VALUE, NUMERALS};
use super::RomanError;

/// Encode `value` as its canonical Roman numeral.
///
/// Walks the table largest-first, appending each symbol while it still fits
/// in what is left. Because the subtractive pairs (CM, CD, XC, XL, IX, IV)
/// are table entries, the greedy result is also the shortest one.
///
/// Fails with [`RomanError::IntegerOutOfBounds`] outside 1..=3999.
pub fn encode(value: i64) -> Result<String, RomanError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        debug!(value, "integer outside encodable range");
        return Err(RomanError::IntegerOutOfBounds(value));
    }

    // In range, so the cast is lossless.
    let mut remaining = value as u32;
    let mut out = String::with_capacity(MAX_ENCODED_LEN);
    for numeral in &NUMERALS {
        while remaining >= numeral.value {
            out.push_str(numeral.symbol);
            remaining -= numeral.value;
        }
    }
    Ok(out)
}

/// Byte-sequence variant of [`encode`].
pub fn encode_bytes(value: i64) -> Result<Vec<u8>, RomanError> {
    encode(value).map(String::into_bytes)
}
