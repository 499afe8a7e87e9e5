//! In-memory workbook model consumed by the extraction pipeline.
//!
//! Worksheets are sparse cell grids addressed by column letter and
//! 1-based row number, the way the layout schema talks about them
//! (`"AE3"`, `"I1"`). Loaders fill this model; the pipeline only reads
//! from it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A single cell value as seen by the pipeline.
///
/// Malformed content is never coerced: a text cell stays text even in a
/// numeric column, and callers decide how to treat it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Empty (or never written) cell.
    #[default]
    Empty,
    /// Numeric value. Whole numbers and fractions share this variant.
    Number(f64),
    /// String value, kept verbatim.
    Text(String),
    /// Boolean value.
    Bool(bool),
}

impl CellValue {
    /// True for `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric view of the cell. Text is *not* parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String coercion used for display, label comparison and header text.
    ///
    /// Whole numbers render without a fractional tail (`100`, not `100.0`);
    /// empty cells render as `""`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Truthiness used for workbook-level flag cells: empty cells, zero
    /// and the empty string are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Number(n) => *n != 0.0,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Bool(b) => *b,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Format a number the way spreadsheet tools display untyped cells.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A cell address as a 1-based `(column, row)` pair.
///
/// Parsed from `"A1"`-style strings: `A` = 1, `Z` = 26, `AA` = 27,
/// `AE` = 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// 1-based column index.
    pub col: u32,
    /// 1-based row number.
    pub row: u32,
}

impl CellRef {
    /// Create a reference from a 1-based column and row.
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let letters: String = s.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
        let digits = &s[letters.len()..];

        let col = column_index(&letters)
            .ok_or_else(|| Error::InvalidCellRef(s.to_string()))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidCellRef(s.to_string()))?;
        if row == 0 {
            return Err(Error::InvalidCellRef(s.to_string()));
        }

        Ok(CellRef { col, row })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row)
    }
}

/// Convert column letters to a 1-based index (`"A"` → 1, `"AE"` → 31).
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut index = 0u32;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as u32;
        index = index.checked_mul(26)?.checked_add(digit + 1)?;
    }
    Some(index)
}

/// Convert a 1-based column index back to letters (31 → `"AE"`).
pub fn column_letters(mut index: u32) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = ((index - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        index = (index - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// One worksheet: a named sparse grid of cells.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    cells: HashMap<(u32, u32), CellValue>,
    max_row: u32,
}

impl Sheet {
    /// Create an empty sheet with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
            max_row: 0,
        }
    }

    /// Worksheet name (tab title).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based row number of the last written row, 0 for an empty sheet.
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// Write a cell by 1-based column and row.
    pub fn set_cell(&mut self, col: u32, row: u32, value: CellValue) {
        self.max_row = self.max_row.max(row);
        self.cells.insert((col, row), value);
    }

    /// Write a cell by `"A1"`-style address.
    ///
    /// Convenience for loaders and tests building sheets from literals.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid cell address.
    pub fn set(&mut self, addr: &str, value: impl Into<CellValue>) {
        let r: CellRef = addr.parse().expect("valid cell address literal");
        self.set_cell(r.col, r.row, value.into());
    }

    /// Read a cell; unset cells read as `Empty`.
    pub fn cell(&self, r: CellRef) -> &CellValue {
        self.cell_at(r.col, r.row)
    }

    /// Read a cell by 1-based column and row; unset cells read as `Empty`.
    pub fn cell_at(&self, col: u32, row: u32) -> &CellValue {
        self.cells.get(&(col, row)).unwrap_or(&CellValue::Empty)
    }
}

/// An ordered collection of worksheets addressable by position and name.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook.
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Create a workbook from already-built sheets, preserving order.
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Append a sheet, keeping workbook order.
    pub fn push_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Number of worksheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Worksheet by 0-based position.
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Worksheet by tab name.
    pub fn sheet_named(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
