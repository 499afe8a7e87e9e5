//! Deck assembly: from a loaded workbook to the complete page model.
//!
//! [`DeckBuilder`] wires the pipeline together: validate the workbook
//! against the layout, resolve labels, the liquid list, the category
//! order and the workbook-level flags once, then run every data sheet
//! through extraction, aggregation and pagination. Worksheets with
//! nothing to show produce no section and no error.

use crate::aggregate::{liquid_categories, Aggregator};
use crate::error::Result;
use crate::extract::RowExtractor;
use crate::labels::Labels;
use crate::layout::{SlideGeometry, WorkbookLayout};
use crate::naming::NamingConfig;
use crate::order::CategoryOrder;
use crate::paginate::Paginator;
use crate::types::{Deck, SheetSection};
use crate::workbook::{Sheet, Workbook};

/// Builds a [`Deck`] from a master-menu workbook.
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    /// Where everything lives inside the workbook.
    pub layout: WorkbookLayout,
    /// Table measurements driving pagination.
    pub geometry: SlideGeometry,
    /// Event-name fallback and output naming.
    pub naming: NamingConfig,
}

impl DeckBuilder {
    /// A builder over the standard layout, geometry and naming.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the page model.
    ///
    /// Fails only on structural problems (too few worksheets). Content
    /// problems degrade instead: sheets without qualifying rows are
    /// skipped, blank label cells fall back to defaults, a missing flag
    /// sheet leaves the flag off.
    pub fn build(&self, book: &Workbook) -> Result<Deck> {
        self.layout.validate(book)?;

        let labels_sheet = self.layout.labels_sheet(book)?;
        let labels = Labels::resolve(labels_sheet, &self.layout);
        let liquids = liquid_categories(labels_sheet, &self.layout);
        let section_suffix = labels_sheet.cell(self.layout.section_suffix_cell).display();

        let order = CategoryOrder::resolve(self.layout.order_sheet(book)?, &self.layout);
        let suppress = self.suppression_flag(book);
        let event_name = self.event_name(book);

        let extractor = RowExtractor::new(&self.layout, &labels, suppress);
        let aggregator = Aggregator::new(&order, &liquids, suppress);
        let paginator = Paginator::new(&self.geometry);

        let mut sections = Vec::new();
        for position in self.layout.data_sheets.clone() {
            let sheet = match book.sheet(position - 1) {
                Some(sheet) => sheet,
                None => continue,
            };

            let rows = extractor.extract(sheet);
            if rows.is_empty() {
                log::debug!("worksheet '{}' holds no menu rows, skipped", sheet.name());
                continue;
            }

            let totals = aggregator.totals(&rows);
            let master = aggregator.master_rows(&rows);
            let pages = paginator.paginate(&master);
            if pages.is_empty() {
                continue;
            }

            let header = self.section_header(book, sheet, position, &section_suffix);
            log::info!(
                "worksheet '{}': {} rows over {} pages",
                sheet.name(),
                master.len(),
                pages.len()
            );
            sections.push(SheetSection {
                header,
                pages,
                totals,
            });
        }

        Ok(Deck {
            event_name,
            suppress_columns: suppress,
            labels,
            sections,
        })
    }

    /// File stem for a built deck (no extension).
    pub fn output_stem(&self, deck: &Deck) -> String {
        self.naming.output_stem(&deck.event_name)
    }

    /// The column-suppression flag lives on a worksheet looked up by
    /// name; a workbook without that worksheet leaves the flag off.
    fn suppression_flag(&self, book: &Workbook) -> bool {
        match book.sheet_named(&self.layout.flag_sheet_name) {
            Some(sheet) => sheet.cell(self.layout.flag_cell).is_truthy(),
            None => false,
        }
    }

    fn event_name(&self, book: &Workbook) -> String {
        let name = book
            .sheet(self.layout.event_sheet_index)
            .map(|s| s.cell(self.layout.event_cell).display())
            .unwrap_or_default();
        let name = name.trim();
        if name.is_empty() {
            self.naming.default_event_name.clone()
        } else {
            name.to_string()
        }
    }

    /// Compose a section header from up to three parts: the sheet's own
    /// header cell, the per-section label on the front sheet and the
    /// fixed suffix from the label worksheet. Blank parts drop out.
    fn section_header(
        &self,
        book: &Workbook,
        sheet: &Sheet,
        position: usize,
        suffix: &str,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        let local = sheet.cell(self.layout.section_header_cell).display();
        if !local.is_empty() {
            parts.push(local);
        }

        if let Some(front) = book.sheet(self.layout.event_sheet_index) {
            let row = self.layout.section_label_row(position);
            let label = front.cell_at(self.layout.section_label_column, row).display();
            if !label.is_empty() {
                parts.push(label);
            }
        }

        if !suffix.is_empty() {
            parts.push(suffix.to_string());
        }

        join_header_parts(&parts)
    }
}

/// Commas between all parts but the last, a plain space before the last.
fn join_header_parts(parts: &[String]) -> String {
    if parts.is_empty() {
        return String::new();
    }
    if parts.len() == 1 {
        return parts[0].clone();
    }
    let head = parts[..parts.len() - 1].join(", ");
    format!("{} {}", head, parts[parts.len() - 1])
}
