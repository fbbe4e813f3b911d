// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod trace_init;

pub use roman_core::roman::{
    decode, decode_bytes, decode_with, encode, encode_bytes, DecodeMode, Numeral, RomanError,
    MAX_ENCODED_LEN, MAX_VALUE, MIN_VALUE, NUMERALS,
};
pub use roman_core::settings;
