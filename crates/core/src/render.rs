//! Plain-text deck rendering.
//!
//! [`TextRenderer`] turns a [`Deck`] into a tab-separated text preview,
//! one block per page, laid out the way the slides themselves are: a
//! section header with page numbering, the column header row, category
//! headers flush left with dishes indented under them, and the totals
//! block on the page that carries it. External slide emitters consume
//! the [`Deck`] directly; this renderer is the built-in way to inspect
//! one.

use crate::layout::SlideGeometry;
use crate::types::{Deck, MasterRow, SheetSection, SlidePage};
use crate::workbook::CellValue;
use std::path::PathBuf;

/// Fixed caption of the dish-name column.
pub const NAME_COLUMN_HEADER: &str = "Наименования блюд";

/// Indent for dish rows under their category header.
const DISH_INDENT: &str = "  ";

/// Pass-through rendering constants a slide emitter needs alongside the
/// page model.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Widths of the four table columns.
    pub column_widths_cm: [f64; 4],
    /// Full-slide background image, when one is supplied.
    pub background_image: Option<PathBuf>,
}

impl RenderConfig {
    /// Derive the config from slide geometry and an optional background.
    pub fn new(geometry: &SlideGeometry, background_image: Option<PathBuf>) -> Self {
        Self {
            column_widths_cm: geometry.column_widths_cm,
            background_image,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(&SlideGeometry::standard(), None)
    }
}

/// Renders a deck as tab-separated text.
pub struct TextRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> TextRenderer<'a> {
    /// Create a renderer over the given config.
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Render the whole deck.
    pub fn render(&self, deck: &Deck) -> String {
        let mut out = String::new();

        out.push_str(&format!("Мероприятие: {}\n", deck.event_name));
        let widths: Vec<String> = self
            .config
            .column_widths_cm
            .iter()
            .map(|w| format!("{}", w))
            .collect();
        out.push_str(&format!("Колонки, см: {}\n", widths.join(" | ")));
        if let Some(path) = &self.config.background_image {
            out.push_str(&format!("Фон: {}\n", path.display()));
        }

        for section in &deck.sections {
            self.render_section(&mut out, deck, section);
        }
        out
    }

    fn render_section(&self, out: &mut String, deck: &Deck, section: &SheetSection) {
        let total = section.page_count();
        for (i, page) in section.pages.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!(
                "=== {} [стр. {} из {}] ===\n",
                section.header,
                i + 1,
                total
            ));
            self.render_page(out, deck, section, page);
        }
    }

    fn render_page(&self, out: &mut String, deck: &Deck, section: &SheetSection, page: &SlidePage) {
        if deck.suppress_columns {
            out.push_str(&format!(
                "{}\t\t\t{}\n",
                NAME_COLUMN_HEADER, deck.labels.grams_header
            ));
        } else {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                NAME_COLUMN_HEADER,
                deck.labels.weight_header,
                deck.labels.portions_header,
                deck.labels.grams_header
            ));
        }

        for row in &page.rows {
            match row {
                MasterRow::CategoryHeader(name) => {
                    out.push_str(name);
                    out.push('\n');
                }
                MasterRow::DishRow {
                    name,
                    weight,
                    portions,
                    grams,
                } => {
                    out.push_str(&format!(
                        "{}{}\t{}\t{}\t{}\n",
                        DISH_INDENT,
                        name,
                        weight.display(),
                        portions.display(),
                        grams_text(grams)
                    ));
                }
            }
        }

        if page.carries_totals {
            out.push('\n');
            out.push_str(&format!(
                "{}:\t{}\n",
                deck.labels.food_total_label,
                decimal_comma(section.totals.food_per_person)
            ));
            out.push_str(&format!(
                "{}:\t{}\n",
                deck.labels.liquid_total_label,
                decimal_comma(section.totals.liquid_per_person)
            ));
        }
    }
}

/// Format a number with two decimals and a comma separator (`75,00`).
pub fn decimal_comma(n: f64) -> String {
    format!("{:.2}", n).replace('.', ",")
}

/// Grams cells show two comma decimals when numeric and verbatim text
/// otherwise.
fn grams_text(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) => decimal_comma(*n),
        other => other.display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Labels;
    use crate::types::{SheetTotals, SlidePage};

    fn dish(name: &str, weight: f64, portions: f64, grams: f64) -> MasterRow {
        MasterRow::DishRow {
            name: name.to_string(),
            weight: CellValue::Number(weight),
            portions: CellValue::Number(portions),
            grams: CellValue::Number(grams),
        }
    }

    fn one_section_deck(pages: Vec<SlidePage>, suppress: bool) -> Deck {
        Deck {
            event_name: "Свадьба".to_string(),
            suppress_columns: suppress,
            labels: Labels::default(),
            sections: vec![SheetSection {
                header: "Фуршетное меню на 50 персон".to_string(),
                pages,
                totals: SheetTotals::new(195.0, 100.0),
            }],
        }
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(decimal_comma(75.0), "75,00");
        assert_eq!(decimal_comma(120.5), "120,50");
        assert_eq!(decimal_comma(0.0), "0,00");
    }

    #[test]
    fn test_render_single_page() {
        let page = SlidePage::new(
            vec![MasterRow::header("Горячее"), dish("Стейк", 200.0, 1.0, 120.0)],
            true,
        );
        let deck = one_section_deck(vec![page], false);
        let config = RenderConfig::default();
        let text = TextRenderer::new(&config).render(&deck);

        assert!(text.starts_with("Мероприятие: Свадьба\n"));
        assert!(text.contains("Колонки, см: 15 | 2.9 | 2.9 | 3.5\n"));
        assert!(text.contains("=== Фуршетное меню на 50 персон [стр. 1 из 1] ===\n"));
        assert!(text.contains("Горячее\n"));
        assert!(text.contains("  Стейк\t200\t1\t120,00\n"));
        assert!(text.contains("Итого выход еды на персону, грамм:\t195,00\n"));
        assert!(text.contains("Итого выход напитков на персону, мл:\t100,00\n"));
    }

    #[test]
    fn test_totals_render_only_on_carrier_page() {
        let pages = vec![
            SlidePage::new(vec![MasterRow::header("Салаты")], false),
            SlidePage::new(Vec::new(), true),
        ];
        let deck = one_section_deck(pages, false);
        let config = RenderConfig::default();
        let text = TextRenderer::new(&config).render(&deck);

        assert!(text.contains("[стр. 1 из 2]"));
        assert!(text.contains("[стр. 2 из 2]"));
        assert_eq!(text.matches("Итого выход еды").count(), 1);
        let totals_at = text.find("Итого выход еды").unwrap();
        let second_page_at = text.find("[стр. 2 из 2]").unwrap();
        assert!(totals_at > second_page_at);
    }

    #[test]
    fn test_suppressed_columns_render_blank_captions() {
        let page = SlidePage::new(
            vec![MasterRow::DishRow {
                name: "Стейк".to_string(),
                weight: CellValue::Empty,
                portions: CellValue::Empty,
                grams: CellValue::Number(120.0),
            }],
            true,
        );
        let deck = one_section_deck(vec![page], true);
        let config = RenderConfig::default();
        let text = TextRenderer::new(&config).render(&deck);

        assert!(text.contains(&format!(
            "{}\t\t\t{}\n",
            NAME_COLUMN_HEADER,
            Labels::default().grams_header
        )));
        assert!(text.contains("  Стейк\t\t\t120,00\n"));
    }

    #[test]
    fn test_text_grams_render_verbatim() {
        let page = SlidePage::new(
            vec![MasterRow::DishRow {
                name: "Морс".to_string(),
                weight: CellValue::Empty,
                portions: CellValue::Empty,
                grams: CellValue::Text("по запросу".to_string()),
            }],
            true,
        );
        let deck = one_section_deck(vec![page], false);
        let config = RenderConfig::default();
        let text = TextRenderer::new(&config).render(&deck);

        assert!(text.contains("  Морс\t\t\tпо запросу\n"));
    }

    #[test]
    fn test_background_listed_when_set() {
        let deck = one_section_deck(Vec::new(), false);
        let config = RenderConfig::new(
            &SlideGeometry::standard(),
            Some(PathBuf::from("фон.png")),
        );
        let text = TextRenderer::new(&config).render(&deck);
        assert!(text.contains("Фон: фон.png\n"));
    }
}
