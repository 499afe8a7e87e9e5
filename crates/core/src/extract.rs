//! Menu row extraction from a data worksheet.
//!
//! Scans the data rows of one worksheet and keeps only qualifying dish
//! rows. Dropped rows are a normal part of these workbooks (blank lines,
//! section dividers, header rows pasted into the middle of the data) and
//! are never reported as errors.

use crate::labels::Labels;
use crate::layout::WorkbookLayout;
use crate::types::MenuRow;
use crate::workbook::{CellValue, Sheet};

/// Extracts validated [`MenuRow`]s from a menu worksheet.
pub struct RowExtractor<'a> {
    layout: &'a WorkbookLayout,
    labels: &'a Labels,
    suppress_columns: bool,
}

impl<'a> RowExtractor<'a> {
    /// Create an extractor for one build.
    pub fn new(layout: &'a WorkbookLayout, labels: &'a Labels, suppress_columns: bool) -> Self {
        Self {
            layout,
            labels,
            suppress_columns,
        }
    }

    /// Extract qualifying rows in worksheet order.
    ///
    /// A row qualifies when its grams-per-person cell is neither empty
    /// nor numerically zero and none of its cells look like a leaked
    /// header row. When column suppression is on, weight and portions
    /// come out `Empty` regardless of cell content.
    pub fn extract(&self, sheet: &Sheet) -> Vec<MenuRow> {
        let layout = self.layout;
        let last_row = sheet.max_row().min(layout.max_scan_rows);

        let mut rows = Vec::new();
        for row in layout.first_data_row..=last_row {
            let grams = sheet.cell_at(layout.grams_column, row);
            if grams.is_empty() || is_zero(grams) {
                continue;
            }

            let category = sheet.cell_at(layout.category_column, row).display();
            let name = sheet.cell_at(layout.name_column, row).display();
            let weight = sheet.cell_at(layout.weight_column, row);
            let portions = sheet.cell_at(layout.portions_column, row);

            if self.is_header_leak(&category, &name, weight, portions, grams) {
                log::debug!(
                    "dropping header-like row {} on worksheet '{}'",
                    row,
                    sheet.name()
                );
                continue;
            }

            rows.push(MenuRow {
                category,
                name,
                weight: self.suppressed(weight),
                portions: self.suppressed(portions),
                grams: grams.clone(),
            });
        }
        rows
    }

    /// Header rows re-pasted inside the data carry either the marker
    /// substrings or the exact column-header labels.
    fn is_header_leak(
        &self,
        category: &str,
        name: &str,
        weight: &CellValue,
        portions: &CellValue,
        grams: &CellValue,
    ) -> bool {
        category.contains(&self.layout.category_marker)
            || name.contains(&self.layout.name_marker)
            || weight.display() == self.labels.weight_header
            || portions.display() == self.labels.portions_header
            || grams.display() == self.labels.grams_header
    }

    fn suppressed(&self, value: &CellValue) -> CellValue {
        if self.suppress_columns {
            CellValue::Empty
        } else {
            value.clone()
        }
    }
}

/// Numeric zero in the sense of the validity filter. The text `"0"` is
/// not zero; it survives the filter and is displayed verbatim.
fn is_zero(value: &CellValue) -> bool {
    match value {
        CellValue::Number(n) => *n == 0.0,
        CellValue::Bool(b) => !b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::CellValue;

    fn extractor_parts() -> (WorkbookLayout, Labels) {
        (WorkbookLayout::standard(), Labels::default())
    }

    fn dish(sheet: &mut Sheet, row: u32, category: &str, name: &str, grams: impl Into<CellValue>) {
        sheet.set(&format!("B{}", row), category);
        sheet.set(&format!("C{}", row), name);
        sheet.set(&format!("D{}", row), 150.0);
        sheet.set(&format!("E{}", row), 2.0);
        sheet.set(&format!("F{}", row), grams);
    }

    #[test]
    fn test_extracts_rows_in_source_order() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        dish(&mut sheet, 2, "Салаты", "Оливье", 75.0);
        dish(&mut sheet, 3, "Горячее", "Стейк", 120.0);

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Оливье");
        assert_eq!(rows[1].name, "Стейк");
        assert_eq!(rows[0].weight, CellValue::Number(150.0));
    }

    #[test]
    fn test_header_row_is_never_scanned() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        // Row 1 always holds headers; even plausible-looking content
        // there must not become a dish.
        sheet.set("B1", "Салаты");
        sheet.set("C1", "Оливье");
        sheet.set("F1", 75.0);
        dish(&mut sheet, 2, "Салаты", "Цезарь", 90.0);

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Цезарь");
    }

    #[test]
    fn test_rows_without_grams_are_dropped() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        dish(&mut sheet, 2, "Салаты", "Оливье", 75.0);
        // No grams at all.
        sheet.set("B3", "Салаты");
        sheet.set("C3", "Пустой");
        // Numeric zero grams.
        dish(&mut sheet, 4, "Салаты", "Нулевой", 0.0);

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Оливье");
    }

    #[test]
    fn test_text_zero_grams_survives() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        dish(&mut sheet, 2, "Салаты", "Строковый", "0");

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].grams, CellValue::Text("0".to_string()));
    }

    #[test]
    fn test_embedded_header_markers_are_dropped() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        dish(&mut sheet, 2, "Категория блюд", "что-то", 10.0);
        dish(&mut sheet, 3, "Салаты", "Наименование", 10.0);
        dish(&mut sheet, 4, "Салаты", "Цезарь", 90.0);

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Цезарь");
    }

    #[test]
    fn test_rows_matching_column_header_labels_are_dropped() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        // A header row pasted mid-sheet: numeric columns hold the header
        // labels as text.
        sheet.set("B2", "Блюда");
        sheet.set("C2", "что подаем");
        sheet.set("D2", labels.weight_header.as_str());
        sheet.set("F2", 10.0);
        dish(&mut sheet, 3, "Салаты", "Цезарь", 90.0);

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Цезарь");
    }

    #[test]
    fn test_suppression_blanks_weight_and_portions_only() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        dish(&mut sheet, 2, "Салаты", "Оливье", 75.0);

        let rows = RowExtractor::new(&layout, &labels, true).extract(&sheet);
        assert_eq!(rows[0].weight, CellValue::Empty);
        assert_eq!(rows[0].portions, CellValue::Empty);
        assert_eq!(rows[0].grams, CellValue::Number(75.0));
    }

    #[test]
    fn test_scan_stops_at_row_bound() {
        let (mut layout, labels) = extractor_parts();
        layout.max_scan_rows = 3;
        let mut sheet = Sheet::new("Фуршет");
        dish(&mut sheet, 2, "Салаты", "Внутри", 75.0);
        dish(&mut sheet, 3, "Салаты", "На границе", 75.0);
        dish(&mut sheet, 4, "Салаты", "За границей", 75.0);

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Внутри", "На границе"]);
    }

    #[test]
    fn test_malformed_cells_are_preserved_verbatim() {
        let (layout, labels) = extractor_parts();
        let mut sheet = Sheet::new("Фуршет");
        sheet.set("B2", "Салаты");
        sheet.set("C2", "Оливье");
        sheet.set("D2", "сто пятьдесят");
        sheet.set("F2", "75 г");

        let rows = RowExtractor::new(&layout, &labels, false).extract(&sheet);
        assert_eq!(rows[0].weight, CellValue::Text("сто пятьдесят".to_string()));
        assert_eq!(rows[0].grams, CellValue::Text("75 г".to_string()));
    }
}
