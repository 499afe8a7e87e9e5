//! Workbook layout schema and slide geometry.
//!
//! Every fixed worksheet position and cell address the pipeline relies on
//! lives in [`WorkbookLayout`], validated once per build instead of being
//! scattered through the pipeline as magic indices. [`SlideGeometry`]
//! carries the table measurements that drive pagination and pass through
//! to the renderer.

use crate::error::{Error, Result};
use crate::workbook::{column_index, CellRef, Sheet, Workbook};
use std::ops::RangeInclusive;

/// Parse a known-good cell address literal.
fn cell(addr: &str) -> CellRef {
    addr.parse().expect("valid cell address literal")
}

/// Parse known-good column letters.
fn col(letters: &str) -> u32 {
    column_index(letters).expect("valid column letters literal")
}

/// Where everything lives inside a master-menu workbook.
///
/// Positions are 0-based except `data_sheets`, which uses the 1-based
/// workbook positions the menu template is described in.
#[derive(Debug, Clone)]
pub struct WorkbookLayout {
    /// 1-based positions of the worksheets rendered as deck sections.
    pub data_sheets: RangeInclusive<usize>,

    /// 0-based index of the worksheet holding the category display order.
    pub order_sheet_index: usize,
    /// Column of the category-order list.
    pub order_column: u32,
    /// First row of the category-order list.
    pub order_start_row: u32,

    /// 0-based index of the label worksheet.
    pub labels_sheet_index: usize,
    /// Column-header label cells on the label worksheet.
    pub weight_header_cell: CellRef,
    pub portions_header_cell: CellRef,
    pub grams_header_cell: CellRef,
    /// Totals-row label cells on the label worksheet.
    pub food_label_cell: CellRef,
    pub liquid_label_cell: CellRef,
    /// Rectangular region listing the liquid category names.
    pub liquid_region: (CellRef, CellRef),
    /// Fixed suffix appended to every section header.
    pub section_suffix_cell: CellRef,

    /// Name of the worksheet holding the column-suppression flag.
    /// A workbook without this sheet simply leaves the flag off.
    pub flag_sheet_name: String,
    /// Flag cell on that worksheet.
    pub flag_cell: CellRef,

    /// 0-based index of the worksheet holding the event name.
    pub event_sheet_index: usize,
    /// Event-name cell on that worksheet.
    pub event_cell: CellRef,

    /// Per-data-sheet local header cell.
    pub section_header_cell: CellRef,
    /// Column on the first worksheet holding per-section labels,
    /// one row per data sheet.
    pub section_label_column: u32,

    /// Data columns of every menu sheet.
    pub category_column: u32,
    pub name_column: u32,
    pub weight_column: u32,
    pub portions_column: u32,
    pub grams_column: u32,
    /// First row scanned as data (row 1 is the header row).
    pub first_data_row: u32,
    /// Scan never runs past this many rows.
    pub max_scan_rows: u32,

    /// Substring marking a stray category-header cell inside the data.
    pub category_marker: String,
    /// Substring marking a stray name-header cell inside the data.
    pub name_marker: String,
}

impl WorkbookLayout {
    /// The layout of the standard master-menu template.
    pub fn standard() -> Self {
        Self {
            data_sheets: 3..=8,

            order_sheet_index: 2,
            order_column: col("AE"),
            order_start_row: 3,

            labels_sheet_index: 10,
            weight_header_cell: cell("A1"),
            portions_header_cell: cell("B1"),
            grams_header_cell: cell("C1"),
            food_label_cell: cell("A4"),
            liquid_label_cell: cell("A5"),
            liquid_region: (cell("A8"), cell("A12")),
            section_suffix_cell: cell("A2"),

            flag_sheet_name: "Расчет стоимости".to_string(),
            flag_cell: cell("I1"),

            event_sheet_index: 0,
            event_cell: cell("B3"),

            section_header_cell: cell("C1"),
            section_label_column: col("G"),

            category_column: col("B"),
            name_column: col("C"),
            weight_column: col("D"),
            portions_column: col("E"),
            grams_column: col("F"),
            first_data_row: 2,
            max_scan_rows: 400,

            category_marker: "Категория блюд".to_string(),
            name_marker: "Наименован".to_string(),
        }
    }

    /// Minimum worksheet count this layout can work against.
    pub fn required_sheets(&self) -> usize {
        (self.labels_sheet_index + 1)
            .max(self.order_sheet_index + 1)
            .max(*self.data_sheets.end())
    }

    /// Check the workbook is large enough for this layout.
    pub fn validate(&self, book: &Workbook) -> Result<()> {
        let required = self.required_sheets();
        let found = book.sheet_count();
        if found < required {
            return Err(Error::TooFewSheets { found, required });
        }
        Ok(())
    }

    /// The label worksheet.
    pub fn labels_sheet<'a>(&self, book: &'a Workbook) -> Result<&'a Sheet> {
        book.sheet(self.labels_sheet_index).ok_or_else(|| {
            Error::SheetUnavailable(format!("label worksheet #{}", self.labels_sheet_index + 1))
        })
    }

    /// The category-order worksheet.
    pub fn order_sheet<'a>(&self, book: &'a Workbook) -> Result<&'a Sheet> {
        book.sheet(self.order_sheet_index).ok_or_else(|| {
            Error::SheetUnavailable(format!(
                "category-order worksheet #{}",
                self.order_sheet_index + 1
            ))
        })
    }

    /// Row in the section-label column matching a 1-based data-sheet
    /// position (the first data sheet maps to row 1).
    pub fn section_label_row(&self, sheet_position: usize) -> u32 {
        (sheet_position + 1).saturating_sub(*self.data_sheets.start()) as u32
    }
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Slide-table measurements driving pagination, plus the renderer
/// pass-through constants.
#[derive(Debug, Clone)]
pub struct SlideGeometry {
    /// Total height available for the table on one slide.
    pub max_table_height_cm: f64,
    /// Height of the table header row.
    pub header_row_height_cm: f64,
    /// Height of one data row.
    pub data_row_height_cm: f64,
    /// Maximum table height on a page that also carries the totals block.
    pub totals_budget_cm: f64,
    /// Widths of the four table columns.
    pub column_widths_cm: [f64; 4],
    /// Table rows the totals block occupies (blank + food + liquid).
    pub totals_block_rows: usize,
}

impl SlideGeometry {
    /// The geometry of the standard deck template.
    pub fn standard() -> Self {
        Self {
            max_table_height_cm: 14.8,
            header_row_height_cm: 1.92,
            data_row_height_cm: 0.7,
            totals_budget_cm: 12.1,
            column_widths_cm: [15.0, 2.9, 2.9, 3.5],
            totals_block_rows: 3,
        }
    }

    /// Data rows that fit on one page. Depends only on the geometry,
    /// never on content.
    pub fn rows_per_page(&self) -> usize {
        ((self.max_table_height_cm - self.header_row_height_cm) / self.data_row_height_cm) as usize
    }

    /// Height of a table with the given number of data rows.
    pub fn table_height_cm(&self, data_rows: usize) -> f64 {
        self.header_row_height_cm + data_rows as f64 * self.data_row_height_cm
    }
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_addresses() {
        let layout = WorkbookLayout::standard();
        assert_eq!(layout.order_column, 31); // AE
        assert_eq!(layout.grams_column, 6); // F
        assert_eq!(layout.flag_cell, CellRef::new(9, 1)); // I1
        assert_eq!(layout.data_sheets, 3..=8);
    }

    #[test]
    fn test_required_sheets() {
        assert_eq!(WorkbookLayout::standard().required_sheets(), 11);
    }

    #[test]
    fn test_validate_rejects_small_workbook() {
        let layout = WorkbookLayout::standard();
        let mut book = Workbook::new();
        for i in 0..10 {
            book.push_sheet(Sheet::new(format!("Лист{}", i + 1)));
        }

        match layout.validate(&book) {
            Err(Error::TooFewSheets { found, required }) => {
                assert_eq!(found, 10);
                assert_eq!(required, 11);
            }
            other => panic!("expected TooFewSheets, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_full_workbook() {
        let layout = WorkbookLayout::standard();
        let mut book = Workbook::new();
        for i in 0..11 {
            book.push_sheet(Sheet::new(format!("Лист{}", i + 1)));
        }
        assert!(layout.validate(&book).is_ok());
    }

    #[test]
    fn test_section_label_rows() {
        let layout = WorkbookLayout::standard();
        assert_eq!(layout.section_label_row(3), 1);
        assert_eq!(layout.section_label_row(5), 3);
        assert_eq!(layout.section_label_row(8), 6);
    }

    #[test]
    fn test_rows_per_page_from_standard_geometry() {
        // floor((14.8 - 1.92) / 0.7) = 18
        assert_eq!(SlideGeometry::standard().rows_per_page(), 18);
    }

    #[test]
    fn test_table_height() {
        let g = SlideGeometry::standard();
        assert!((g.table_height_cm(0) - 1.92).abs() < 1e-9);
        assert!((g.table_height_cm(14) - 11.72).abs() < 1e-9);
    }
}
