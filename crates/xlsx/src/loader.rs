//! Workbook loading through calamine.
//!
//! Calamine hands back one `Range<Data>` per worksheet with coordinates
//! relative to the range's own top-left corner; this module re-anchors
//! every cell at its absolute 1-based position so the layout schema's
//! fixed addresses keep meaning what they say.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use menudeck_core::{CellValue, Error, Result, Sheet, Workbook};
use std::path::Path;

/// Load every worksheet of an `.xlsx`/`.xlsm` file, preserving workbook
/// order and tab names.
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    let mut source: Xlsx<_> = open_workbook(path)
        .map_err(|e| Error::WorkbookRead(format!("{}: {}", path.display(), e)))?;

    let mut book = Workbook::new();
    for name in source.sheet_names() {
        let range = source
            .worksheet_range(&name)
            .map_err(|e| Error::WorkbookRead(format!("worksheet '{}': {}", name, e)))?;
        book.push_sheet(sheet_from_range(&name, &range));
    }

    log::debug!(
        "loaded {} worksheets from {}",
        book.sheet_count(),
        path.display()
    );
    Ok(book)
}

/// Convert one calamine range into a [`Sheet`].
///
/// Range iterators yield coordinates relative to `range.start()`; both
/// offsets are applied here, shifted to 1-based.
pub fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    for (row, col, value) in range.used_cells() {
        if let Some(cell) = convert(value) {
            let col = col_offset + col as u32 + 1;
            let row = row_offset + row as u32 + 1;
            sheet.set_cell(col, row, cell);
        }
    }
    sheet
}

/// Map a calamine cell onto the pipeline's value model. Dates keep
/// their raw serial number, ISO date/duration strings and cell errors
/// come through as text.
fn convert(value: &Data) -> Option<CellValue> {
    match value {
        Data::Empty => None,
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => Some(CellValue::Text(s.clone())),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
    }
}
