//! Error types for Gridcalc core.

use thiserror::Error;

/// Errors that can occur in the Gridcalc document layer.
///
/// Formula problems never show up here: the evaluator turns them into 0.
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    #[error("Cell {address} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        address: String,
        rows: usize,
        cols: usize,
    },

    #[error("No file path set")]
    NoFilePath,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
