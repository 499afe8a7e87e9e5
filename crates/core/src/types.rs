//! Domain types for the menu deck page model.

use crate::labels::Labels;
use crate::workbook::CellValue;
use serde::{Deserialize, Serialize};

/// One qualifying dish row extracted from a menu worksheet.
///
/// Values are kept exactly as read: a text cell in a numeric column stays
/// text and is formatted verbatim later. `Empty` stands in for both a
/// blank source cell and a suppressed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRow {
    /// Dish category as written in the category column.
    pub category: String,
    /// Dish name.
    pub name: String,
    /// Portion weight; `Empty` when blank or suppressed.
    pub weight: CellValue,
    /// Portion count; `Empty` when blank or suppressed.
    pub portions: CellValue,
    /// Grams per person; never suppressed.
    pub grams: CellValue,
}

impl MenuRow {
    /// Create a row from its parts.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        weight: impl Into<CellValue>,
        portions: impl Into<CellValue>,
        grams: impl Into<CellValue>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            weight: weight.into(),
            portions: portions.into(),
            grams: grams.into(),
        }
    }
}

/// One row of the final render order: a category header or a dish entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MasterRow {
    /// Category header preceding the category's dishes.
    CategoryHeader(String),
    /// A dish entry.
    DishRow {
        /// Dish name.
        name: String,
        /// Portion weight; `Empty` when blank or suppressed.
        weight: CellValue,
        /// Portion count; `Empty` when blank or suppressed.
        portions: CellValue,
        /// Grams per person.
        grams: CellValue,
    },
}

impl MasterRow {
    /// Create a category header row.
    pub fn header(name: impl Into<String>) -> Self {
        MasterRow::CategoryHeader(name.into())
    }

    /// True for category headers.
    pub fn is_category_header(&self) -> bool {
        matches!(self, MasterRow::CategoryHeader(_))
    }
}

/// Per-worksheet nutritional totals, split by category kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTotals {
    /// Grams of food per person.
    pub food_per_person: f64,
    /// Millilitres of drinks per person.
    pub liquid_per_person: f64,
}

impl SheetTotals {
    /// Create totals from the two buckets.
    pub fn new(food_per_person: f64, liquid_per_person: f64) -> Self {
        Self {
            food_per_person,
            liquid_per_person,
        }
    }
}

/// One slide's worth of master rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidePage {
    /// Rows rendered on this page, in final order.
    pub rows: Vec<MasterRow>,
    /// Whether the totals block is rendered on this page. At most one
    /// page per section carries it, always the last one.
    pub carries_totals: bool,
}

impl SlidePage {
    /// Create a page.
    pub fn new(rows: Vec<MasterRow>, carries_totals: bool) -> Self {
        Self {
            rows,
            carries_totals,
        }
    }

    /// Number of data rows on this page.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// All pages produced from one menu worksheet, plus its header and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSection {
    /// Section header shown on every page of this section.
    pub header: String,
    /// Pages in render order.
    pub pages: Vec<SlidePage>,
    /// Totals rendered on the page that carries them.
    pub totals: SheetTotals,
}

impl SheetSection {
    /// All master rows of this section, flattened across pages in order.
    pub fn all_rows(&self) -> Vec<&MasterRow> {
        self.pages.iter().flat_map(|p| p.rows.iter()).collect()
    }

    /// Number of pages in this section.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// The complete page model of one build: everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Event name read from the workbook (or its configured fallback).
    pub event_name: String,
    /// Whether weight/portions columns are suppressed deck-wide.
    pub suppress_columns: bool,
    /// Resolved display labels.
    pub labels: Labels,
    /// Sections in workbook order; worksheets with no qualifying rows
    /// produce no section.
    pub sections: Vec<SheetSection>,
}

impl Deck {
    /// Total page count across all sections.
    pub fn page_count(&self) -> usize {
        self.sections.iter().map(SheetSection::page_count).sum()
    }
}
