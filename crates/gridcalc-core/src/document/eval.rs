use super::Document;
use gridcalc_engine::engine::{CellRef, FORMULA_PREFIX, evaluate, format_number};

impl Document {
    /// Get the display value for a cell: the formatted number when the cell
    /// has one, otherwise its raw text. Cells outside the grid display as "".
    pub fn get_cell_display(&self, cell_ref: &CellRef) -> String {
        let Some(cell) = self.grid.cell(cell_ref) else {
            return String::new();
        };
        match cell.numeric_value() {
            Some(v) => format_number(v),
            None => cell.text.clone(),
        }
    }

    /// Get the raw text of a cell (for editing).
    pub fn get_cell_input(&self, cell_ref: &CellRef) -> String {
        self.grid
            .cell(cell_ref)
            .map(|cell| cell.text.clone())
            .unwrap_or_default()
    }

    /// Evaluate an expression against the current grid. A leading `=` is
    /// optional.
    pub fn evaluate_expression(&self, expr: &str) -> f64 {
        let body = expr.trim_start();
        let body = body.strip_prefix(FORMULA_PREFIX).unwrap_or(body);
        evaluate(body, &self.grid)
    }
}
