//! Fixed-width text rendering of the grid.

use crate::document::Document;
use gridcalc_engine::engine::CellRef;
use std::io::Write;

pub(crate) const ROW_HEADER_WIDTH: usize = 4;
pub(crate) const GRID_COLUMN_SPACING: usize = 1;

/// Render the occupied part of the grid with `col_width`-character columns.
/// Display text longer than a column is cut; nothing is printed for an empty
/// grid.
pub fn write_table<W: Write>(w: &mut W, doc: &Document, col_width: usize) -> std::io::Result<()> {
    let rows = doc.grid.occupied_rows();
    let cols = (0..rows)
        .map(|row| doc.grid.row_extent(row))
        .max()
        .unwrap_or(0);
    if cols == 0 {
        return Ok(());
    }

    let spacer = " ".repeat(GRID_COLUMN_SPACING);
    let mut line = format!("{:width$}", "", width = ROW_HEADER_WIDTH);
    for col in 0..cols {
        line.push_str(&spacer);
        line.push_str(&fit(&CellRef::col_to_letters(col), col_width));
    }
    writeln!(w, "{}", line.trim_end())?;

    for row in 0..rows {
        let mut line = format!("{:>width$}", row + 1, width = ROW_HEADER_WIDTH);
        for col in 0..cols {
            line.push_str(&spacer);
            line.push_str(&fit(&doc.get_cell_display(&CellRef::new(col, row)), col_width));
        }
        writeln!(w, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Cut or pad `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{:<width$}", cut, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SheetConfig;

    fn render(doc: &Document, width: usize) -> String {
        let mut out = Vec::new();
        write_table(&mut out, doc, width).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let mut doc = Document::new(SheetConfig::default());
        doc.set_cell_from_input(CellRef::new(0, 0), "10").unwrap();
        doc.set_cell_from_input(CellRef::new(1, 0), "=A1*2").unwrap();
        doc.set_cell_from_input(CellRef::new(0, 1), "a long label").unwrap();

        let expected = "     A      B\n   1 10     20\n   2 a long\n";
        assert_eq!(render(&doc, 6), expected);
    }

    #[test]
    fn test_table_empty_grid() {
        let doc = Document::new(SheetConfig::default());
        assert_eq!(render(&doc, 10), "");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("ééé", 2), "éé");
    }
}
