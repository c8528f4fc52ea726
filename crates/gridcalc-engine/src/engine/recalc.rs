//! Full-grid recalculation.
//!
//! One row-major pass refreshes every cell's cached value from its text.
//! There is no dependency ordering: a formula reads cells it has already
//! passed with their fresh values and cells further on with whatever they
//! held before the pass started.

use log::debug;

use super::cell::{CellKind, Grid};
use super::eval::evaluate;

/// Recompute `value` / `has_value` for every cell in row-major order.
pub fn recalculate(grid: &mut Grid) {
    let mut formulas = 0usize;
    let cols = grid.cols();
    let len = grid.rows() * cols;

    for idx in 0..len {
        let computed = match grid.get(idx / cols, idx % cols).kind() {
            CellKind::Empty | CellKind::Text(_) => None,
            CellKind::Number(n) => Some(n),
            CellKind::Formula(body) => {
                // Evaluated against the grid as it stands mid-pass.
                formulas += 1;
                Some(evaluate(body, &*grid))
            }
        };

        let cell = &mut grid.cells_mut()[idx];
        cell.has_value = computed.is_some();
        if let Some(v) = computed {
            cell.value = v;
        }
    }

    debug!(
        "recalculated {}x{} grid ({} formulas)",
        grid.rows(),
        grid.cols(),
        formulas
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(grid: &Grid, row: usize, col: usize) -> Option<f64> {
        grid.get(row, col).numeric_value()
    }

    #[test]
    fn test_classifies_cells() {
        let mut grid = Grid::new(2, 2);
        grid.set_text(0, 0, "10");
        grid.set_text(0, 1, "label");
        grid.set_text(1, 0, "=A1*3");
        recalculate(&mut grid);

        assert_eq!(value(&grid, 0, 0), Some(10.0));
        assert_eq!(value(&grid, 0, 1), None);
        assert_eq!(value(&grid, 1, 0), Some(30.0));
        assert_eq!(value(&grid, 1, 1), None);
        assert_eq!(grid.get(1, 0).text, "=A1*3");
    }

    #[test]
    fn test_formula_referencing_blank_or_text() {
        let mut grid = Grid::new(2, 2);
        grid.set_text(0, 1, "words");
        grid.set_text(1, 0, "=A1+1");
        grid.set_text(1, 1, "=B1+1");
        recalculate(&mut grid);
        assert_eq!(value(&grid, 1, 0), Some(1.0));
        assert_eq!(value(&grid, 1, 1), Some(1.0));
    }

    #[test]
    fn test_edit_then_recalculate() {
        let mut grid = Grid::new(3, 1);
        grid.set_text(0, 0, "4");
        grid.set_text(1, 0, "=A1+1");
        recalculate(&mut grid);
        assert_eq!(value(&grid, 1, 0), Some(5.0));

        grid.set_text(0, 0, "41");
        recalculate(&mut grid);
        assert_eq!(value(&grid, 1, 0), Some(42.0));

        grid.clear(0, 0);
        recalculate(&mut grid);
        assert_eq!(value(&grid, 0, 0), None);
        assert_eq!(value(&grid, 1, 0), Some(1.0));
    }

    #[test]
    fn test_forward_reference_reads_previous_pass() {
        let mut grid = Grid::new(2, 1);
        // A1 refers to A2, which comes later in row-major order.
        grid.set_text(0, 0, "=A2*2");
        grid.set_text(1, 0, "5");
        recalculate(&mut grid);
        // A2 had no value when A1 was evaluated.
        assert_eq!(value(&grid, 0, 0), Some(0.0));
        assert_eq!(value(&grid, 1, 0), Some(5.0));

        recalculate(&mut grid);
        assert_eq!(value(&grid, 0, 0), Some(10.0));

        grid.set_text(1, 0, "7");
        recalculate(&mut grid);
        // set_text dropped A2's cached value before the pass.
        assert_eq!(value(&grid, 0, 0), Some(0.0));
        recalculate(&mut grid);
        assert_eq!(value(&grid, 0, 0), Some(14.0));
    }

    #[test]
    fn test_backward_chain_settles_in_one_pass() {
        let mut grid = Grid::new(1, 3);
        grid.set_text(0, 0, "2");
        grid.set_text(0, 1, "=A1*10");
        grid.set_text(0, 2, "=B1+A1");
        recalculate(&mut grid);
        assert_eq!(value(&grid, 0, 2), Some(22.0));
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let mut grid = Grid::new(3, 3);
        grid.set_text(0, 0, "1.5");
        grid.set_text(0, 1, "=A1*2");
        grid.set_text(1, 0, "=SUM(A1:B1)");
        grid.set_text(2, 2, "=MAX(A1:B2)");
        grid.set_text(1, 1, "note");
        recalculate(&mut grid);
        let first = grid.clone();
        recalculate(&mut grid);
        let second: Vec<_> = grid.iter().map(|(_, c)| c.clone()).collect();
        let first: Vec<_> = first.iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(value(&grid, 2, 2), Some(4.5));
    }

    #[test]
    fn test_self_reference_reads_own_previous_value() {
        let mut grid = Grid::new(1, 1);
        grid.set_text(0, 0, "=A1+1");
        recalculate(&mut grid);
        assert_eq!(value(&grid, 0, 0), Some(1.0));
        recalculate(&mut grid);
        assert_eq!(value(&grid, 0, 0), Some(2.0));
    }

    #[test]
    fn test_recalculate_does_not_touch_dirty_flag() {
        let mut grid = Grid::new(1, 1);
        recalculate(&mut grid);
        assert!(!grid.is_dirty());
    }
}
