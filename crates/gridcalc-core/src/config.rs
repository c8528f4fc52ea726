//! Sheet configuration.
//!
//! Grid dimensions are fixed for the lifetime of a [`crate::Document`]; they
//! come from here and are never resized afterwards.

use serde::Deserialize;

use crate::error::{GridcalcError, Result};

pub const DEFAULT_ROWS: usize = 100;
pub const DEFAULT_COLS: usize = 26;
pub const DEFAULT_COL_WIDTH: usize = 10;
pub const DEFAULT_SEPARATOR: char = ',';

/// Upper bound on `rows * cols`.
pub const MAX_GRID_CELLS: usize = 10_000_000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub rows: usize,
    pub cols: usize,
    /// Column width (in characters) used when rendering a text table.
    pub col_width: usize,
    /// Field separator for load/save.
    pub separator: char,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            col_width: DEFAULT_COL_WIDTH,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl SheetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridcalcError::InvalidConfig(format!(
                "grid must have at least one row and column (got {}x{})",
                self.rows, self.cols
            )));
        }
        match self.rows.checked_mul(self.cols) {
            Some(n) if n <= MAX_GRID_CELLS => {}
            _ => {
                return Err(GridcalcError::InvalidConfig(format!(
                    "grid {}x{} exceeds {} cells",
                    self.rows, self.cols, MAX_GRID_CELLS
                )));
            }
        }
        if self.col_width == 0 {
            return Err(GridcalcError::InvalidConfig(
                "col_width must be positive".to_string(),
            ));
        }
        if matches!(self.separator, '"' | '\n' | '\r') {
            return Err(GridcalcError::InvalidConfig(format!(
                "{:?} cannot be used as a separator",
                self.separator
            )));
        }
        Ok(())
    }
}
