//! Health evaluation: database probe, process stats, aggregate report.
//! Used by: handlers, state.

pub mod database;
pub mod process;
pub mod report;
