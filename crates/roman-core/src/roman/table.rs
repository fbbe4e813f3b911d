/// A single table entry: a symbol and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    pub value: u32,
    pub symbol: &'static str,
}

pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 3999;

/// Length of `MMMDCCCLXXXVIII` (3888), the longest encoding in range.
pub const MAX_ENCODED_LEN: usize = 15;

const fn numeral(value: u32, symbol: &'static str) -> Numeral {
    Numeral { value, symbol }
}

/// All numerals, strictly descending by value. The subtractive pairs are
/// part of the table so greedy matching needs no lookahead.
pub static NUMERALS: [Numeral; 13] = [
    numeral(1000, "M"),
    numeral(900, "CM"),
    numeral(500, "D"),
    numeral(400, "CD"),
    numeral(100, "C"),
    numeral(90, "XC"),
    numeral(50, "L"),
    numeral(40, "XL"),
    numeral(10, "X"),
    numeral(9, "IX"),
    numeral(5, "V"),
    numeral(4, "IV"),
    numeral(1, "I"),
];
