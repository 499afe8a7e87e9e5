//! Error types for menu deck building.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a deck from a menu workbook.
///
/// Only structural problems surface here: a workbook that cannot be read
/// at all, or one whose shape breaks the layout schema. Content-level
/// anomalies (odd cell types, rows failing the validity filter, sheets
/// with no qualifying rows) are absorbed by the pipeline and never become
/// errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook file could not be parsed into an in-memory model.
    #[error("Workbook read error: {0}")]
    WorkbookRead(String),

    /// The workbook has fewer worksheets than the layout schema requires.
    #[error("Workbook has {found} worksheets, layout requires at least {required}")]
    TooFewSheets { found: usize, required: usize },

    /// A worksheet the layout schema points at is missing or unreadable.
    #[error("Required worksheet unavailable: {0}")]
    SheetUnavailable(String),

    /// A cell address string could not be parsed.
    #[error("Invalid cell address: {0}")]
    InvalidCellRef(String),
}
