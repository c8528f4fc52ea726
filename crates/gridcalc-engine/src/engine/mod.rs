//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Cell`], [`CellKind`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`], [`AddressToken`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`evaluate`], [`ValueLookup`] - Formula evaluation against a value source
//! - [`recalculate`] - Full-grid recalculation pass
//! - [`format_number`] - Format values for display

mod cell;
mod cell_ref;
mod eval;
mod format;
mod number;
mod recalc;

pub use cell::{Cell, CellKind, FORMULA_PREFIX, Grid, MAX_CELL_TEXT};
pub use cell_ref::{AddressToken, CellRef};
pub use eval::{StaticLookup, ValueLookup, evaluate};
pub use format::format_number;
pub use number::{parse_number_literal, parse_number_prefix};
pub use recalc::recalculate;
