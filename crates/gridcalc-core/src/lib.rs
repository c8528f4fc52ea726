//! gridcalc-core - UI-agnostic document model + storage.

pub mod config;
pub mod document;
pub mod error;
pub mod storage;

pub use config::SheetConfig;
pub use document::Document;
pub use error::{GridcalcError, Result};

pub use gridcalc_engine::engine::CellRef;
