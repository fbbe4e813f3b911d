use std::ffi::{c_char, CString};
use std::ptr;

use roman_core::roman::{self, DecodeMode, RomanError};

use super::{ffi_guard, owned_drop, owned_new};

pub const ROMAN_OK: u8 = 0;
pub const ROMAN_INTEGER_OUT_OF_BOUNDS: u8 = 1;
pub const ROMAN_INVALID_NUMERAL: u8 = 2;

fn status_of(err: &RomanError) -> u8 {
    match err {
        RomanError::IntegerOutOfBounds(_) => ROMAN_INTEGER_OUT_OF_BOUNDS,
        RomanError::InvalidRomanNumeral { .. } => ROMAN_INVALID_NUMERAL,
    }
}

// --- Encode ---

/// NUL-terminated numeral. `text` is null whenever `status` is not
/// [`ROMAN_OK`].
#[repr(C)]
pub struct RomanTextResult {
    pub status: u8,
    pub text: *const c_char,
    _owned: *mut CString,
}

impl RomanTextResult {
    fn failed(status: u8) -> Self {
        Self {
            status,
            text: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }
}

/// Numeral as a `(bytes, len)` pair without a terminator. `bytes` is null
/// whenever `status` is not [`ROMAN_OK`].
#[repr(C)]
pub struct RomanBytesResult {
    pub status: u8,
    pub bytes: *const u8,
    pub len: usize,
    _owned: *mut Vec<u8>,
}

impl RomanBytesResult {
    fn failed(status: u8) -> Self {
        Self {
            status,
            bytes: ptr::null(),
            len: 0,
            _owned: ptr::null_mut(),
        }
    }
}

#[no_mangle]
pub extern "C" fn roman_encode(value: i64) -> RomanTextResult {
    let text = match roman::encode(value) {
        Ok(text) => text,
        Err(e) => return RomanTextResult::failed(status_of(&e)),
    };
    // Table symbols never contain NUL.
    let Ok(cs) = CString::new(text) else {
        return RomanTextResult::failed(ROMAN_INVALID_NUMERAL);
    };
    let owned = owned_new(cs);
    RomanTextResult {
        status: ROMAN_OK,
        text: unsafe { (*owned).as_ptr() },
        _owned: owned,
    }
}

#[no_mangle]
pub extern "C" fn roman_text_result_free(result: RomanTextResult) {
    unsafe { owned_drop(result._owned) };
}

#[no_mangle]
pub extern "C" fn roman_encode_bytes(value: i64) -> RomanBytesResult {
    let bytes = match roman::encode_bytes(value) {
        Ok(bytes) => bytes,
        Err(e) => return RomanBytesResult::failed(status_of(&e)),
    };
    // Moving the Vec into the box keeps its heap buffer in place.
    let owned = owned_new(bytes);
    let (data, len) = unsafe { ((*owned).as_ptr(), (*owned).len()) };
    RomanBytesResult {
        status: ROMAN_OK,
        bytes: data,
        len,
        _owned: owned,
    }
}

#[no_mangle]
pub extern "C" fn roman_bytes_result_free(result: RomanBytesResult) {
    unsafe { owned_drop(result._owned) };
}

// --- Decode ---

/// `value` is 0 whenever `status` is not [`ROMAN_OK`].
#[repr(C)]
pub struct RomanDecodeResult {
    pub status: u8,
    pub value: u32,
}

impl RomanDecodeResult {
    fn invalid() -> Self {
        Self {
            status: ROMAN_INVALID_NUMERAL,
            value: 0,
        }
    }
}

impl From<Result<u32, RomanError>> for RomanDecodeResult {
    fn from(result: Result<u32, RomanError>) -> Self {
        match result {
            Ok(value) => Self {
                status: ROMAN_OK,
                value,
            },
            Err(e) => Self {
                status: status_of(&e),
                value: 0,
            },
        }
    }
}

/// Decode NUL-terminated text. A null pointer is not text and is reported
/// as an invalid numeral; use [`roman_decode_bytes`] for absent input.
#[no_mangle]
pub extern "C" fn roman_decode(text: *const c_char) -> RomanDecodeResult {
    ffi_guard!(RomanDecodeResult::invalid();
        str: text_str = text,
    );
    roman::decode(text_str).into()
}

/// Like [`roman_decode`], but rejects non-canonical numerals such as `IIII`.
#[no_mangle]
pub extern "C" fn roman_decode_strict(text: *const c_char) -> RomanDecodeResult {
    ffi_guard!(RomanDecodeResult::invalid();
        str: text_str = text,
    );
    roman::decode_with(text_str, DecodeMode::Strict).into()
}

/// Decode `len` bytes at `bytes`. A null `bytes` is an absent sequence and
/// decodes to 0 without error, same as `len == 0`.
#[no_mangle]
pub extern "C" fn roman_decode_bytes(bytes: *const u8, len: usize) -> RomanDecodeResult {
    let input = if bytes.is_null() {
        None
    } else {
        Some(unsafe { std::slice::from_raw_parts(bytes, len) })
    };
    roman::decode_bytes(input).into()
}
