//! Conversion between integers and Roman numerals (1..=3999).

pub mod roman;
pub mod settings;
