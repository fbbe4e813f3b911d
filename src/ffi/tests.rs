use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

fn encode_text(value: i64) -> (u8, Option<String>) {
    let result = roman_encode(value);
    let status = result.status;
    let text = if result.text.is_null() {
        None
    } else {
        Some(
            unsafe { CStr::from_ptr(result.text) }
                .to_str()
                .unwrap()
                .to_string(),
        )
    };
    roman_text_result_free(result);
    (status, text)
}

#[test]
fn test_ffi_encode_text() {
    assert_eq!(encode_text(1994), (ROMAN_OK, Some("MCMXCIV".to_string())));
    assert_eq!(encode_text(3999), (ROMAN_OK, Some("MMMCMXCIX".to_string())));
}

#[test]
fn test_ffi_encode_out_of_bounds() {
    assert_eq!(encode_text(0), (ROMAN_INTEGER_OUT_OF_BOUNDS, None));
    assert_eq!(encode_text(4000), (ROMAN_INTEGER_OUT_OF_BOUNDS, None));

    let result = roman_encode_bytes(-1);
    assert_eq!(result.status, ROMAN_INTEGER_OUT_OF_BOUNDS);
    assert!(result.bytes.is_null());
    assert_eq!(result.len, 0);
    roman_bytes_result_free(result);
}

#[test]
fn test_ffi_encode_bytes() {
    let result = roman_encode_bytes(49);
    assert_eq!(result.status, ROMAN_OK);
    let bytes = unsafe { std::slice::from_raw_parts(result.bytes, result.len) };
    assert_eq!(bytes, b"XLIX");
    roman_bytes_result_free(result);
}

#[test]
fn test_ffi_decode_text() {
    let text = CString::new("MCMXCIV").unwrap();
    let result = roman_decode(text.as_ptr());
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 1994);

    let empty = CString::new("").unwrap();
    let result = roman_decode(empty.as_ptr());
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 0);
}

#[test]
fn test_ffi_decode_invalid() {
    let text = CString::new("IVCMXCIX").unwrap();
    let result = roman_decode(text.as_ptr());
    assert_eq!(result.status, ROMAN_INVALID_NUMERAL);
    assert_eq!(result.value, 0);

    let result = roman_decode(ptr::null());
    assert_eq!(result.status, ROMAN_INVALID_NUMERAL);
    assert_eq!(result.value, 0);
}

#[test]
fn test_ffi_decode_strict() {
    let text = CString::new("IIII").unwrap();
    assert_eq!(roman_decode(text.as_ptr()).value, 4);

    let result = roman_decode_strict(text.as_ptr());
    assert_eq!(result.status, ROMAN_INVALID_NUMERAL);
    assert_eq!(result.value, 0);

    let text = CString::new("IV").unwrap();
    let result = roman_decode_strict(text.as_ptr());
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 4);
}

#[test]
fn test_ffi_decode_bytes() {
    let input = b"MMXXI";
    let result = roman_decode_bytes(input.as_ptr(), input.len());
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 2021);

    // Only the first `len` bytes are read.
    let result = roman_decode_bytes(input.as_ptr(), 2);
    assert_eq!(result.value, 2000);

    let bad = [b'X', 0xFF];
    let result = roman_decode_bytes(bad.as_ptr(), bad.len());
    assert_eq!(result.status, ROMAN_INVALID_NUMERAL);
}

#[test]
fn test_ffi_decode_absent_bytes() {
    let result = roman_decode_bytes(ptr::null(), 0);
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 0);

    // A null pointer is absent input regardless of the claimed length.
    let result = roman_decode_bytes(ptr::null(), 8);
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 0);

    let empty: [u8; 0] = [];
    let result = roman_decode_bytes(empty.as_ptr(), 0);
    assert_eq!(result.status, ROMAN_OK);
    assert_eq!(result.value, 0);
}

#[test]
fn test_ffi_free_failed_results() {
    // Freeing a failed result must be a no-op.
    roman_text_result_free(roman_encode(0));
    roman_bytes_result_free(roman_encode_bytes(0));
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(roman_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}
