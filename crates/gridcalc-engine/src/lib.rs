//! gridcalc_engine - Cell grid, formula evaluator and recalculation.

pub mod builtins;
pub mod engine;
