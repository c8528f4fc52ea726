//! Formula evaluation.
//!
//! A recursive-descent parser that computes the value as it parses, with no
//! intermediate tree:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := '-' unary | atom
//! atom       := number | address | NAME '(' address ':' address ')' | '(' expression ')'
//! ```
//!
//! Evaluation never fails. Malformed input, division by zero and references
//! that do not resolve all degrade to 0, so every string (including the empty
//! one) produces a number.

use std::collections::HashMap;

use super::cell::Grid;
use super::cell_ref::{AddressToken, CellRef};
use super::number::parse_number_bytes;
use crate::builtins::{Range, RangeFn, eval_range};

/// Nesting limit for parentheses and unary minus.
const MAX_DEPTH: usize = 256;

/// Function names are taken from at most this many uppercase letters.
const MAX_FUNC_NAME: usize = 7;

/// Resolves a cell to its numeric value. `None` means the cell has no valid
/// value (blank, text, or outside the grid).
pub trait ValueLookup {
    fn value(&self, at: &CellRef) -> Option<f64>;

    /// `(rows, cols)` beyond which [`ValueLookup::value`] is always `None`.
    ///
    /// Range functions only visit cells inside the extent. Without one, every
    /// non-negative cell of a range is visited.
    fn extent(&self) -> Option<(usize, usize)> {
        None
    }
}

impl ValueLookup for Grid {
    fn value(&self, at: &CellRef) -> Option<f64> {
        self.cell(at)?.numeric_value()
    }

    fn extent(&self) -> Option<(usize, usize)> {
        Some((self.rows(), self.cols()))
    }
}

impl<F> ValueLookup for F
where
    F: Fn(&CellRef) -> Option<f64>,
{
    fn value(&self, at: &CellRef) -> Option<f64> {
        self(at)
    }
}

/// Fixed values keyed by address; handy for evaluating without a grid.
#[derive(Clone, Debug, Default)]
pub struct StaticLookup(pub HashMap<CellRef, f64>);

impl ValueLookup for StaticLookup {
    fn value(&self, at: &CellRef) -> Option<f64> {
        self.0.get(at).copied()
    }

    fn extent(&self) -> Option<(usize, usize)> {
        let rows = self.0.keys().map(|at| at.row + 1).max().unwrap_or(0);
        let cols = self.0.keys().map(|at| at.col + 1).max().unwrap_or(0);
        Some((rows, cols))
    }
}

/// Evaluate a formula body (without the leading `=`).
pub fn evaluate<L: ValueLookup + ?Sized>(formula: &str, lookup: &L) -> f64 {
    Parser {
        src: formula.as_bytes(),
        pos: 0,
        depth: 0,
        lookup,
    }
    .expression()
}

struct Parser<'a, L: ?Sized> {
    src: &'a [u8],
    pos: usize,
    depth: usize,
    lookup: &'a L,
}

impl<'a, L: ValueLookup + ?Sized> Parser<'a, L> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn rest(&self) -> &'a [u8] {
        &self.src[self.pos.min(self.src.len())..]
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> f64) -> f64 {
        if self.depth >= MAX_DEPTH {
            return 0.0;
        }
        self.depth += 1;
        let v = f(self);
        self.depth -= 1;
        v
    }

    fn expression(&mut self) -> f64 {
        let mut v = self.term();
        loop {
            self.skip_blanks();
            match self.peek() {
                Some(b'+') => {
                    self.pos += 1;
                    v += self.term();
                }
                Some(b'-') => {
                    self.pos += 1;
                    v -= self.term();
                }
                _ => break,
            }
        }
        v
    }

    fn term(&mut self) -> f64 {
        let mut v = self.unary();
        loop {
            self.skip_blanks();
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    v *= self.unary();
                }
                Some(b'/') => {
                    self.pos += 1;
                    let d = self.unary();
                    v = if d != 0.0 { v / d } else { 0.0 };
                }
                _ => break,
            }
        }
        v
    }

    fn unary(&mut self) -> f64 {
        self.skip_blanks();
        if self.peek() == Some(b'-') {
            self.pos += 1;
            return self.nested(|p| -p.unary());
        }
        self.atom()
    }

    fn atom(&mut self) -> f64 {
        self.skip_blanks();

        if self.peek() == Some(b'(') {
            self.pos += 1;
            let v = self.nested(|p| p.expression());
            self.skip_blanks();
            if self.peek() == Some(b')') {
                self.pos += 1;
            }
            return v;
        }

        if let Some(v) = self.function_call() {
            return v;
        }

        if let Some(token) = self.address() {
            return self.cell_value(&token);
        }

        if let Some((v, len)) = parse_number_bytes(self.rest()) {
            self.pos += len;
            return v;
        }

        // Unknown byte: skip it.
        if self.pos < self.src.len() {
            self.pos += 1;
        }
        0.0
    }

    /// `NAME(` where NAME is three or more uppercase letters. Anything else
    /// rewinds to where it started and returns `None`.
    fn function_call(&mut self) -> Option<f64> {
        let rest = self.rest();
        if rest.len() < 3 || !rest[..3].iter().all(u8::is_ascii_uppercase) {
            return None;
        }

        let start = self.pos;
        let name_len = rest
            .iter()
            .take(MAX_FUNC_NAME)
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        let func = RangeFn::from_name(std::str::from_utf8(&rest[..name_len]).unwrap_or(""));
        self.pos += name_len;

        self.skip_blanks();
        if self.peek() != Some(b'(') {
            self.pos = start;
            return None;
        }
        self.pos += 1;
        Some(self.range_call(func))
    }

    fn range_call(&mut self, func: RangeFn) -> f64 {
        self.skip_blanks();
        if let Some(first) = self.address() {
            self.skip_blanks();
            if self.peek() == Some(b':') {
                self.pos += 1;
                self.skip_blanks();
                if let Some(second) = self.address() {
                    self.skip_blanks();
                    if self.peek() == Some(b')') {
                        self.pos += 1;
                    }
                    let range = Range::new(first.zero_based(), second.zero_based());
                    return eval_range(func, range, self.lookup);
                }
            }
        }

        // Malformed body: drop a closing paren if we stopped on one.
        if self.peek() == Some(b')') {
            self.pos += 1;
        }
        0.0
    }

    fn address(&mut self) -> Option<AddressToken> {
        let token = AddressToken::scan(self.rest())?;
        self.pos += token.len;
        Some(token)
    }

    fn cell_value(&self, token: &AddressToken) -> f64 {
        token
            .to_cell_ref()
            .and_then(|cell| self.lookup.value(&cell))
            .unwrap_or(0.0)
    }
}
