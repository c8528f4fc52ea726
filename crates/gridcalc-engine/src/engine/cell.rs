//! Cell data structures for the spreadsheet grid.
//!
//! This module provides the core data types for representing cells:
//! - [`Cell`] - Raw text plus the cached numeric value from the last recalculation
//! - [`CellKind`] - How a cell's text is classified during recalculation
//! - [`Grid`] - Dense, fixed-size row-major storage with a modified flag

use super::cell_ref::CellRef;
use super::number::parse_number_literal;

/// Maximum number of bytes of raw text a cell keeps.
pub const MAX_CELL_TEXT: usize = 255;

/// Marker that turns a cell's text into a formula.
pub const FORMULA_PREFIX: char = '=';

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Raw user input. Empty means no content.
    pub text: String,
    /// Cached numeric value, meaningful only when `has_value` is set.
    pub value: f64,
    /// Set by recalculation when `text` is a number or a formula.
    pub has_value: bool,
}

/// Classification of a cell's text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellKind<'a> {
    Empty,
    Number(f64),
    Text(&'a str),
    /// Formula source with the leading `=` removed.
    Formula(&'a str),
}

impl<'a> CellKind<'a> {
    pub fn classify(text: &'a str) -> CellKind<'a> {
        if text.is_empty() {
            return CellKind::Empty;
        }
        if let Some(formula) = text.strip_prefix(FORMULA_PREFIX) {
            return CellKind::Formula(formula);
        }
        match parse_number_literal(text) {
            Some(n) => CellKind::Number(n),
            None => CellKind::Text(text),
        }
    }
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn kind(&self) -> CellKind<'_> {
        CellKind::classify(&self.text)
    }

    /// Cached value if the last recalculation produced one.
    pub fn numeric_value(&self) -> Option<f64> {
        self.has_value.then_some(self.value)
    }
}

/// Cut `text` down to [`MAX_CELL_TEXT`] bytes without splitting a character.
pub(crate) fn truncate_cell_text(text: &str) -> &str {
    if text.len() <= MAX_CELL_TEXT {
        return text;
    }
    let mut end = MAX_CELL_TEXT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Dense row-major cell storage with fixed dimensions.
///
/// Accessors taking `(row, col)` treat out-of-range coordinates as a bug and
/// panic. Lookups that come from user input go through [`Grid::cell`].
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    dirty: bool,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![Cell::new_empty(); rows * cols],
            dirty: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        cell_ref.row < self.rows && cell_ref.col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    /// Bounds-checked access by reference.
    pub fn cell(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.contains(cell_ref)
            .then(|| &self.cells[cell_ref.row * self.cols + cell_ref.col])
    }

    /// Overwrite a cell's text and invalidate its cached value.
    pub fn set_text(&mut self, row: usize, col: usize, text: &str) {
        let idx = self.index(row, col);
        let cell = &mut self.cells[idx];
        cell.text.clear();
        cell.text.push_str(truncate_cell_text(text));
        cell.has_value = false;
        cell.value = 0.0;
        self.dirty = true;
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = Cell::new_empty();
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// One past the highest row holding any text (0 for an empty grid).
    pub fn occupied_rows(&self) -> usize {
        (0..self.rows)
            .rev()
            .find(|&row| self.row_extent(row) > 0)
            .map_or(0, |row| row + 1)
    }

    /// One past the highest column holding text in `row`.
    pub fn row_extent(&self, row: usize) -> usize {
        let start = self.index(row, 0);
        self.cells[start..start + self.cols]
            .iter()
            .rposition(|cell| !cell.is_empty())
            .map_or(0, |col| col + 1)
    }

    /// Iterate cells in row-major order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (CellRef::new(idx % cols, idx / cols), cell))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
