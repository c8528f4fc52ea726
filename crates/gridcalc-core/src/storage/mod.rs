//! Storage: delimiter-separated load/save plus Markdown and text-table export

pub mod csv;
mod md;
mod table;

pub use csv::{apply_records, parse_records, read_records, write_file, write_records};
pub use md::{render_markdown, write_markdown};
pub use table::write_table;
