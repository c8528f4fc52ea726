//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "A1", "B2", "AA100") and zero-indexed column/row coordinates.
//!
//! Column letters are a bijective base-26 numeral (A=1 .. Z=26, AA=27), so
//! there is no "zero" letter and AA follows Z directly. Only uppercase ASCII
//! letters are address letters.
//!
//! # Examples
//!
//! ```
//! use gridcalc_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// A lexical `[A-Z]+[0-9]+` token as it appears inside a formula.
///
/// Column and row are kept 1-based so that tokens such as `A0` still lex
/// (and consume input) even though they name no cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddressToken {
    /// 1-based column number (A = 1).
    pub col: u64,
    /// Row number as written.
    pub row: u64,
    /// Number of bytes consumed from the input.
    pub len: usize,
}

impl AddressToken {
    /// Scan a leading address token from `input`.
    ///
    /// Stops at the first byte that is neither an uppercase letter (while in
    /// the letter part) nor a digit (while in the digit part). Returns `None`
    /// when there are no letters or no digits.
    pub fn scan(input: &[u8]) -> Option<AddressToken> {
        let mut pos = 0;
        let mut col = 0u64;
        while let Some(&b) = input.get(pos)
            && b.is_ascii_uppercase()
        {
            col = col.saturating_mul(26).saturating_add(u64::from(b - b'A') + 1);
            pos += 1;
        }
        if pos == 0 {
            return None;
        }

        let digits_start = pos;
        let mut row = 0u64;
        while let Some(&b) = input.get(pos)
            && b.is_ascii_digit()
        {
            row = row.saturating_mul(10).saturating_add(u64::from(b - b'0'));
            pos += 1;
        }
        if pos == digits_start {
            return None;
        }

        Some(AddressToken { col, row, len: pos })
    }

    /// Signed zero-based (col, row). Row `0` in text becomes `-1`.
    pub fn zero_based(&self) -> (i64, i64) {
        (to_signed(self.col) - 1, to_signed(self.row) - 1)
    }

    /// The cell this token names, if both coordinates are non-negative.
    pub fn to_cell_ref(&self) -> Option<CellRef> {
        let col = usize::try_from(self.col.checked_sub(1)?).ok()?;
        let row = usize::try_from(self.row.checked_sub(1)?).ok()?;
        Some(CellRef::new(col, row))
    }
}

fn to_signed(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]+[0-9]+$").expect("valid address regex"))
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "B2", "AA10").
    /// The whole string must be an address. Returns None if the input is invalid.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        if !a1_re().is_match(name) {
            return None;
        }
        Self::parse_prefix(name).map(|(cell, _)| cell)
    }

    /// Parse an address at the start of `input`, returning the cell and the
    /// number of bytes consumed. Trailing input is left alone.
    pub fn parse_prefix(input: &str) -> Option<(CellRef, usize)> {
        let token = AddressToken::scan(input.as_bytes())?;
        Some((token.to_cell_ref()?, token.len))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::from_str(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}
