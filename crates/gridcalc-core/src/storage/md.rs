//! Markdown export functionality

use crate::document::Document;
use gridcalc_engine::engine::CellRef;
use std::io::Write;
use std::path::Path;

/// Write the grid to a markdown file
pub fn write_markdown(path: &Path, doc: &Document) -> std::io::Result<()> {
    let mut buf = Vec::new();
    render_markdown(&mut buf, doc)?;
    std::fs::write(path, buf)
}

/// Render the occupied part of the grid as a markdown table of display values.
pub fn render_markdown<W: Write>(w: &mut W, doc: &Document) -> std::io::Result<()> {
    writeln!(w, "# Sheet")?;
    writeln!(w)?;

    let Some((max_row, max_col)) = find_grid_bounds(doc) else {
        writeln!(w, "*Empty spreadsheet*")?;
        return Ok(());
    };

    // Write markdown table header with column letters
    write!(w, "|   |")?;
    for col in 0..=max_col {
        write!(w, " {} |", CellRef::col_to_letters(col))?;
    }
    writeln!(w)?;

    // Write separator row
    write!(w, "|---|")?;
    for _ in 0..=max_col {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for row in 0..=max_row {
        write!(w, "| {} |", row + 1)?; // 1-based row numbers
        for col in 0..=max_col {
            let display = doc.get_cell_display(&CellRef::new(col, row));
            write!(w, " {} |", escape_markdown(&display))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Highest occupied (row, col), or `None` for an empty grid.
fn find_grid_bounds(doc: &Document) -> Option<(usize, usize)> {
    let rows = doc.grid.occupied_rows();
    let max_col = (0..rows).map(|row| doc.grid.row_extent(row)).max()?;
    (rows > 0 && max_col > 0).then(|| (rows - 1, max_col - 1))
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SheetConfig;

    fn render(doc: &Document) -> String {
        let mut out = Vec::new();
        render_markdown(&mut out, doc).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_markdown_empty_grid() {
        let doc = Document::new(SheetConfig::default());
        assert_eq!(render(&doc), "# Sheet\n\n*Empty spreadsheet*\n");
    }

    #[test]
    fn test_markdown_uses_display_values() {
        let mut doc = Document::new(SheetConfig::default());
        doc.set_cell_from_input(CellRef::new(0, 0), "2").unwrap();
        doc.set_cell_from_input(CellRef::new(1, 1), "=A1/4").unwrap();
        doc.set_cell_from_input(CellRef::new(0, 1), "a|b").unwrap();

        let expected = "\
# Sheet

|   | A | B |
|---|---|---|
| 1 | 2 |  |
| 2 | a\\|b | 0.5 |
";
        assert_eq!(render(&doc), expected);
    }

    #[test]
    fn test_write_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        let mut doc = Document::new(SheetConfig::default());
        doc.set_cell_from_input(CellRef::new(0, 0), "=1+2").unwrap();
        write_markdown(&path, &doc).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("| 1 | 3 |"));
    }
}
