use super::Document;
use crate::error::{GridcalcError, Result};
use gridcalc_engine::engine::{CellRef, recalculate};

impl Document {
    /// Parse a navigation-style address ("B7"), rejecting malformed text and
    /// cells outside the grid.
    pub fn parse_address_in_bounds(&self, text: &str) -> Result<CellRef> {
        let cell_ref = CellRef::from_str(text.trim())
            .ok_or_else(|| GridcalcError::InvalidAddress(text.to_string()))?;
        self.check_bounds(&cell_ref)?;
        Ok(cell_ref)
    }

    fn check_bounds(&self, cell_ref: &CellRef) -> Result<()> {
        if self.grid.contains(cell_ref) {
            Ok(())
        } else {
            Err(GridcalcError::OutOfBounds {
                address: cell_ref.to_string(),
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            })
        }
    }

    /// Set cell contents from input string and recalculate.
    pub fn set_cell_from_input(&mut self, cell_ref: CellRef, input: &str) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        self.grid.set_text(cell_ref.row, cell_ref.col, input);
        self.recalculate();
        Ok(())
    }

    /// Clear the specified cell and recalculate. Clearing a blank cell is a
    /// no-op and leaves the modified flag alone.
    pub fn clear_cell(&mut self, cell_ref: &CellRef) -> Result<()> {
        self.check_bounds(cell_ref)?;
        if !self.grid.get(cell_ref.row, cell_ref.col).is_empty() {
            self.grid.clear(cell_ref.row, cell_ref.col);
            self.recalculate();
        }
        Ok(())
    }

    /// Run a full recalculation pass.
    pub fn recalculate(&mut self) {
        recalculate(&mut self.grid);
    }
}
