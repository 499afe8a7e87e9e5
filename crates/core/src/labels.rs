//! Display labels read from the label worksheet.
//!
//! The label worksheet lets the menu template rename column headers and
//! totals rows without touching code; blank cells fall back to the
//! defaults below. Labels feed two consumers: the row extractor (to
//! filter header rows leaked into the data) and the renderer (for
//! display strings).

use crate::layout::WorkbookLayout;
use crate::workbook::{CellRef, Sheet};
use serde::{Deserialize, Serialize};

/// Default weight column header.
pub const DEFAULT_WEIGHT_HEADER: &str = "Вес порции, грамм";
/// Default portions column header.
pub const DEFAULT_PORTIONS_HEADER: &str = "Кол-во порций";
/// Default grams-per-person column header.
pub const DEFAULT_GRAMS_HEADER: &str = "Вес на одну персону, грамм";
/// Default label of the food totals row.
pub const DEFAULT_FOOD_TOTAL_LABEL: &str = "Итого выход еды на персону, грамм";
/// Default label of the liquid totals row.
pub const DEFAULT_LIQUID_TOTAL_LABEL: &str = "Итого выход напитков на персону, мл";

/// Resolved display strings for one build.
///
/// The two totals labels are independent; they happen to be adjacent on
/// the label worksheet but nothing may assume they are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    /// Header of the weight column.
    pub weight_header: String,
    /// Header of the portions column.
    pub portions_header: String,
    /// Header of the grams-per-person column.
    pub grams_header: String,
    /// Label of the food totals row.
    pub food_total_label: String,
    /// Label of the liquid totals row.
    pub liquid_total_label: String,
}

impl Labels {
    /// Read all labels from the label worksheet, falling back to the
    /// defaults cell by cell.
    pub fn resolve(sheet: &Sheet, layout: &WorkbookLayout) -> Self {
        Self {
            weight_header: cell_or(sheet, layout.weight_header_cell, DEFAULT_WEIGHT_HEADER),
            portions_header: cell_or(sheet, layout.portions_header_cell, DEFAULT_PORTIONS_HEADER),
            grams_header: cell_or(sheet, layout.grams_header_cell, DEFAULT_GRAMS_HEADER),
            food_total_label: cell_or(sheet, layout.food_label_cell, DEFAULT_FOOD_TOTAL_LABEL),
            liquid_total_label: cell_or(sheet, layout.liquid_label_cell, DEFAULT_LIQUID_TOTAL_LABEL),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            weight_header: DEFAULT_WEIGHT_HEADER.to_string(),
            portions_header: DEFAULT_PORTIONS_HEADER.to_string(),
            grams_header: DEFAULT_GRAMS_HEADER.to_string(),
            food_total_label: DEFAULT_FOOD_TOTAL_LABEL.to_string(),
            liquid_total_label: DEFAULT_LIQUID_TOTAL_LABEL.to_string(),
        }
    }
}

/// A cell's display string, or the default when it is blank.
fn cell_or(sheet: &Sheet, r: CellRef, default: &str) -> String {
    let text = sheet.cell(r).display();
    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}
