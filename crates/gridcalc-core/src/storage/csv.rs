//! Delimiter-separated load/save.
//!
//! Files hold raw cell text (formulas included), one record per grid row.
//! The separator is configurable; `,` is the default.

use gridcalc_engine::engine::Grid;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Read a file into records of raw fields.
pub fn read_records(path: &Path, separator: char) -> Result<Vec<Vec<String>>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_records(&content, separator))
}

/// Split file content into records of raw fields.
///
/// Records end at `\n` (or `\r\n`) outside quotes. A field is quoted only
/// when it starts with `"`; inside it `""` is a literal quote, line breaks are
/// kept, and a lone `"` ends the quoted part. A final line without a
/// terminator still forms a record.
pub fn parse_records(content: &str, separator: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut record));
                at_field_start = true;
            }
            c if c == separator => {
                record.push(std::mem::take(&mut current));
                at_field_start = true;
            }
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            c => {
                current.push(c);
                at_field_start = false;
            }
        }
    }

    if !at_field_start || !record.is_empty() {
        record.push(current);
        records.push(record);
    }
    records
}

/// Fill `grid` from records. Empty fields and anything beyond the grid's
/// extent are skipped. Returns the number of cells written.
pub fn apply_records(grid: &mut Grid, records: &[Vec<String>]) -> usize {
    let mut count = 0;
    for (row, record) in records.iter().take(grid.rows()).enumerate() {
        for (col, field) in record.iter().take(grid.cols()).enumerate() {
            if field.is_empty() {
                continue;
            }
            grid.set_text(row, col, field);
            count += 1;
        }
    }
    count
}

/// Write raw cell text up to the occupied extent: no trailing blank rows,
/// no trailing blank fields.
pub fn write_records<W: Write>(out: &mut W, grid: &Grid, separator: char) -> std::io::Result<()> {
    let mut sep_buf = [0u8; 4];
    let sep = separator.encode_utf8(&mut sep_buf);

    for row in 0..grid.occupied_rows() {
        let fields: Vec<String> = (0..grid.row_extent(row))
            .map(|col| escape_field(&grid.get(row, col).text, separator))
            .collect();
        writeln!(out, "{}", fields.join(sep))?;
    }
    Ok(())
}

/// Write `grid` to `path`. Records are rendered in memory and written in
/// one call.
pub fn write_file(path: &Path, grid: &Grid, separator: char) -> Result<()> {
    let mut buf = Vec::new();
    write_records(&mut buf, grid, separator)?;
    std::fs::write(path, buf)?;
    Ok(())
}

/// Escape a field for output
fn escape_field(field: &str, separator: char) -> String {
    if field.contains(separator)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
