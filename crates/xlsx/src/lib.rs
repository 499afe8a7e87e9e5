//! XLSX/XLSM loading into the in-memory workbook model.

pub mod loader;

pub use loader::{load_workbook, sheet_from_range};
