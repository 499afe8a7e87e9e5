//! Category grouping, ordering and per-sheet totals.
//!
//! Extracted rows arrive in worksheet order with their categories
//! interleaved. This module collects them into one block per category,
//! sorts the blocks by the canonical category order and flattens the
//! result into the master row sequence the paginator consumes. It also
//! computes the per-sheet nutritional totals, split into food and liquid
//! by the liquid category list.

use crate::layout::WorkbookLayout;
use crate::order::CategoryOrder;
use crate::types::{MasterRow, MenuRow, SheetTotals};
use crate::workbook::{CellValue, Sheet};
use std::collections::HashMap;

/// Category names whose grams count toward the liquid total, read from
/// the liquid region of the label worksheet. Blank cells inside the
/// region are skipped, not treated as a stop.
pub fn liquid_categories(sheet: &Sheet, layout: &WorkbookLayout) -> Vec<String> {
    let (start, end) = layout.liquid_region;
    let mut names = Vec::new();
    for row in start.row..=end.row {
        for col in start.col..=end.col {
            let name = sheet.cell_at(col, row).display();
            if !name.is_empty() {
                names.push(name);
            }
        }
    }
    names
}

/// Turns extracted rows into the master row sequence and the totals.
pub struct Aggregator<'a> {
    order: &'a CategoryOrder,
    liquid_categories: &'a [String],
    suppress_columns: bool,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator for one build.
    pub fn new(
        order: &'a CategoryOrder,
        liquid_categories: &'a [String],
        suppress_columns: bool,
    ) -> Self {
        Self {
            order,
            liquid_categories,
            suppress_columns,
        }
    }

    /// Sum grams per person over every row, food and liquid separately.
    ///
    /// Runs over all extracted rows, including rows without a category
    /// name that the table itself leaves out. Non-numeric grams cells
    /// are displayed verbatim elsewhere but contribute nothing here.
    pub fn totals(&self, rows: &[MenuRow]) -> SheetTotals {
        let mut totals = SheetTotals::default();
        for row in rows {
            match row.grams.as_number() {
                Some(grams) => {
                    if self.is_liquid(&row.category) {
                        totals.liquid_per_person += grams;
                    } else {
                        totals.food_per_person += grams;
                    }
                }
                None => log::warn!(
                    "grams value '{}' for dish '{}' is not numeric, excluded from totals",
                    row.grams.display(),
                    row.name
                ),
            }
        }
        totals
    }

    /// Group rows by category and flatten into the master sequence:
    /// each category contributes its header row followed by its dishes.
    ///
    /// Categories listed in the canonical order come first, in that
    /// order; unlisted ones follow in first-seen order. Dish order
    /// inside a category is worksheet order.
    pub fn master_rows(&self, rows: &[MenuRow]) -> Vec<MasterRow> {
        let mut groups: Vec<(String, Vec<&MenuRow>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for row in rows {
            if row.category.is_empty() {
                log::debug!("row '{}' carries no category, left out of the table", row.name);
                continue;
            }
            match index.get(row.category.as_str()) {
                Some(&at) => groups[at].1.push(row),
                None => {
                    index.insert(row.category.as_str(), groups.len());
                    groups.push((row.category.clone(), vec![row]));
                }
            }
        }

        let mut ordered: Vec<(usize, (String, Vec<&MenuRow>))> =
            groups.into_iter().enumerate().collect();
        ordered.sort_by_key(|(seen, (name, _))| match self.order.position(name) {
            Some(pos) => (0, pos),
            None => (1, *seen),
        });

        let mut master = Vec::new();
        for (_, (name, group)) in ordered {
            master.push(MasterRow::header(name));
            for row in group {
                master.push(MasterRow::DishRow {
                    name: row.name.clone(),
                    weight: self.suppressed(&row.weight),
                    portions: self.suppressed(&row.portions),
                    grams: row.grams.clone(),
                });
            }
        }
        master
    }

    fn is_liquid(&self, category: &str) -> bool {
        self.liquid_categories.iter().any(|name| name == category)
    }

    fn suppressed(&self, value: &CellValue) -> CellValue {
        if self.suppress_columns {
            CellValue::Empty
        } else {
            value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(category: &str, name: &str, grams: f64) -> MenuRow {
        MenuRow::new(category, name, 150.0, 2.0, grams)
    }

    fn headers(master: &[MasterRow]) -> Vec<String> {
        master
            .iter()
            .filter_map(|r| match r {
                MasterRow::CategoryHeader(name) => Some(name.clone()),
                MasterRow::DishRow { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_listed_categories_come_first_in_canonical_order() {
        let order = CategoryOrder::from_names(["Горячее", "Салаты"]);
        let rows = vec![
            dish("Напитки", "Морс", 200.0),
            dish("Салаты", "Оливье", 75.0),
            dish("Горячее", "Стейк", 120.0),
        ];

        let master = Aggregator::new(&order, &[], false).master_rows(&rows);
        assert_eq!(headers(&master), vec!["Горячее", "Салаты", "Напитки"]);
    }

    #[test]
    fn test_unlisted_categories_follow_in_first_seen_order() {
        let order = CategoryOrder::from_names(["Горячее"]);
        let rows = vec![
            dish("Десерты", "Торт", 50.0),
            dish("Горячее", "Стейк", 120.0),
            dish("Выпечка", "Пирог", 60.0),
        ];

        let master = Aggregator::new(&order, &[], false).master_rows(&rows);
        assert_eq!(headers(&master), vec!["Горячее", "Десерты", "Выпечка"]);
    }

    #[test]
    fn test_scattered_rows_collect_under_one_header() {
        let order = CategoryOrder::default();
        let rows = vec![
            dish("Салаты", "Оливье", 75.0),
            dish("Горячее", "Стейк", 120.0),
            dish("Салаты", "Цезарь", 90.0),
        ];

        let master = Aggregator::new(&order, &[], false).master_rows(&rows);
        let rendered: Vec<String> = master
            .iter()
            .map(|r| match r {
                MasterRow::CategoryHeader(name) => format!("[{}]", name),
                MasterRow::DishRow { name, .. } => name.clone(),
            })
            .collect();
        assert_eq!(
            rendered,
            vec!["[Салаты]", "Оливье", "Цезарь", "[Горячее]", "Стейк"]
        );
    }

    #[test]
    fn test_totals_split_by_liquid_membership() {
        let order = CategoryOrder::default();
        let liquids = vec!["Напитки".to_string()];
        let rows = vec![
            dish("Напитки", "Морс", 100.0),
            dish("Горячее", "Стейк", 50.0),
            dish("Горячее", "Котлета", 30.0),
        ];

        let totals = Aggregator::new(&order, &liquids, false).totals(&rows);
        assert_eq!(totals.food_per_person, 80.0);
        assert_eq!(totals.liquid_per_person, 100.0);
    }

    #[test]
    fn test_totals_skip_nonnumeric_grams() {
        let order = CategoryOrder::default();
        let rows = vec![
            dish("Горячее", "Стейк", 80.0),
            MenuRow::new("Горячее", "Уточнить", 150.0, 2.0, "по запросу"),
        ];

        let totals = Aggregator::new(&order, &[], false).totals(&rows);
        assert_eq!(totals.food_per_person, 80.0);
    }

    #[test]
    fn test_blank_category_counts_toward_totals_but_not_table() {
        let order = CategoryOrder::default();
        let rows = vec![dish("", "Хлеб", 30.0), dish("Горячее", "Стейк", 80.0)];

        let agg = Aggregator::new(&order, &[], false);
        assert_eq!(agg.totals(&rows).food_per_person, 110.0);

        let master = agg.master_rows(&rows);
        assert_eq!(headers(&master), vec!["Горячее"]);
        assert_eq!(master.len(), 2);
    }

    #[test]
    fn test_suppression_applied_at_emission() {
        let order = CategoryOrder::default();
        // Rows built upstream without suppression; emission enforces it
        // on its own.
        let rows = vec![dish("Горячее", "Стейк", 120.0)];

        let master = Aggregator::new(&order, &[], true).master_rows(&rows);
        match &master[1] {
            MasterRow::DishRow {
                weight,
                portions,
                grams,
                ..
            } => {
                assert_eq!(*weight, CellValue::Empty);
                assert_eq!(*portions, CellValue::Empty);
                assert_eq!(*grams, CellValue::Number(120.0));
            }
            other => panic!("expected dish row, got {:?}", other),
        }
    }

    #[test]
    fn test_liquid_categories_skip_blanks_inside_region() {
        let layout = WorkbookLayout::standard();
        let mut sheet = Sheet::new("Шаблоны");
        sheet.set("A8", "Напитки");
        // A9 left blank; the region keeps going.
        sheet.set("A10", "Соки");

        assert_eq!(liquid_categories(&sheet, &layout), vec!["Напитки", "Соки"]);
    }

    #[test]
    fn test_empty_rows_produce_empty_master() {
        let order = CategoryOrder::default();
        let agg = Aggregator::new(&order, &[], false);
        assert!(agg.master_rows(&[]).is_empty());
        assert_eq!(agg.totals(&[]), SheetTotals::default());
    }
}
