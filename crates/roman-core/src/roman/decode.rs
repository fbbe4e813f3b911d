use tracing::debug;

use super::encode::encode;
use super::table::{MAX_VALUE, NUMERALS};
use super::{DecodeMode, RomanError};

/// Outcome of one greedy pass over the table.
struct Scan {
    total: u32,
    /// Bytes matched before the pass ran out of table entries.
    consumed: usize,
    /// Offset of the symbol that first pushed `total` above [`MAX_VALUE`].
    exceeded_at: Option<usize>,
}

/// Strip symbol prefixes in table order, each entry as often as it matches.
///
/// Table symbols are ASCII, so working on bytes lets text and byte input
/// share the pass; any non-ASCII byte simply stops matching.
fn scan(input: &[u8]) -> Result<Scan, RomanError> {
    let mut rest = input;
    let mut total: u32 = 0;
    let mut exceeded_at = None;

    for numeral in &NUMERALS {
        while let Some(tail) = rest.strip_prefix(numeral.symbol.as_bytes()) {
            let position = input.len() - rest.len();
            total = total
                .checked_add(numeral.value)
                .ok_or(RomanError::InvalidRomanNumeral { position })?;
            if exceeded_at.is_none() && i64::from(total) > MAX_VALUE {
                exceeded_at = Some(position);
            }
            rest = tail;
        }
    }

    Ok(Scan {
        total,
        consumed: input.len() - rest.len(),
        exceeded_at,
    })
}

fn decode_raw(input: &[u8], mode: DecodeMode) -> Result<u32, RomanError> {
    if input.is_empty() {
        return Ok(0);
    }

    let scan = scan(input)?;
    if scan.consumed != input.len() {
        debug!(
            position = scan.consumed,
            len = input.len(),
            "unconsumed input after greedy match"
        );
        return Err(RomanError::InvalidRomanNumeral {
            position: scan.consumed,
        });
    }

    if mode == DecodeMode::Strict {
        check_canonical(input, &scan)?;
    }
    Ok(scan.total)
}

/// Reject input that is not byte-for-byte the encoding of its own total.
fn check_canonical(input: &[u8], scan: &Scan) -> Result<(), RomanError> {
    if let Some(position) = scan.exceeded_at {
        debug!(position, total = scan.total, "numeral exceeds encodable range");
        return Err(RomanError::InvalidRomanNumeral { position });
    }

    // Fully consumed non-empty input totals at least 1, and exceeded_at is
    // unset, so the total is encodable.
    let canonical = encode(i64::from(scan.total))?;
    let canonical = canonical.as_bytes();
    let mismatch = input
        .iter()
        .zip(canonical)
        .position(|(a, b)| a != b)
        .or_else(|| {
            (input.len() != canonical.len()).then_some(input.len().min(canonical.len()))
        });

    match mismatch {
        None => Ok(()),
        Some(position) => {
            debug!(position, total = scan.total, "non-canonical numeral");
            Err(RomanError::InvalidRomanNumeral { position })
        }
    }
}

/// Decode a Roman numeral string.
///
/// The empty string maps to 0. Otherwise every byte must be consumed by one
/// greedy pass over the table, or the call fails with
/// [`RomanError::InvalidRomanNumeral`]. Canonical form is not checked: `IIII`
/// decodes to 4. Use [`decode_with`] and [`DecodeMode::Strict`] for that.
pub fn decode(input: &str) -> Result<u32, RomanError> {
    decode_raw(input.as_bytes(), DecodeMode::Lenient)
}

/// [`decode`] with an explicit [`DecodeMode`].
pub fn decode_with(input: &str, mode: DecodeMode) -> Result<u32, RomanError> {
    decode_raw(input.as_bytes(), mode)
}

/// Byte-sequence variant of [`decode`]. An absent sequence (`None`) maps to
/// 0 just like an empty one.
pub fn decode_bytes(input: Option<&[u8]>) -> Result<u32, RomanError> {
    match input {
        None => Ok(0),
        Some(bytes) => decode_raw(bytes, DecodeMode::Lenient),
    }
}
