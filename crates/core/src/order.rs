//! Category display order from the order worksheet.

use crate::layout::WorkbookLayout;
use crate::workbook::Sheet;

/// Canonical category ordering read from the order worksheet.
///
/// Categories listed here sort ahead of any unlisted category. Unlisted
/// categories are not an error; they fall back to first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryOrder {
    names: Vec<String>,
}

impl CategoryOrder {
    /// Read the order column top-down, stopping at the first empty cell.
    /// A name listed twice keeps its first position.
    pub fn resolve(sheet: &Sheet, layout: &WorkbookLayout) -> Self {
        let mut names: Vec<String> = Vec::new();
        for row in layout.order_start_row..=sheet.max_row() {
            let name = sheet.cell_at(layout.order_column, row).display();
            if name.is_empty() {
                break;
            }
            if !names.contains(&name) {
                names.push(name);
            }
        }
        log::debug!("category order holds {} entries", names.len());
        Self { names }
    }

    /// Build an order list directly, bypassing any worksheet.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of `name` in the canonical order, if listed.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
