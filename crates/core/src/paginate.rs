//! Slide pagination driven by table geometry.
//!
//! The master row sequence is cut into consecutive page-sized chunks;
//! how many rows fit is a function of the slide geometry alone, never of
//! row content. The totals block lands on the last page when the page
//! still has room for it underneath the table, otherwise on an extra
//! page of its own.

use crate::layout::SlideGeometry;
use crate::types::{MasterRow, SlidePage};

/// Cuts master rows into [`SlidePage`]s for one section.
pub struct Paginator<'a> {
    geometry: &'a SlideGeometry,
}

impl<'a> Paginator<'a> {
    /// Create a paginator over the given geometry.
    pub fn new(geometry: &'a SlideGeometry) -> Self {
        Self { geometry }
    }

    /// Paginate a master row sequence.
    ///
    /// An empty sequence produces no pages. Otherwise every page but the
    /// last is full, row order is preserved across page boundaries and
    /// exactly one page carries the totals block.
    pub fn paginate(&self, master: &[MasterRow]) -> Vec<SlidePage> {
        if master.is_empty() {
            return Vec::new();
        }

        // A chunk size of zero is never valid, whatever the geometry says.
        let per_page = self.geometry.rows_per_page().max(1);
        let mut pages: Vec<SlidePage> = master
            .chunks(per_page)
            .map(|chunk| SlidePage::new(chunk.to_vec(), false))
            .collect();

        let last_rows = pages.last().map(SlidePage::row_count).unwrap_or(0);
        if self.totals_fit(last_rows) {
            if let Some(last) = pages.last_mut() {
                last.carries_totals = true;
            }
        } else {
            log::debug!(
                "totals do not fit under {} rows, adding a totals-only page",
                last_rows
            );
            pages.push(SlidePage::new(Vec::new(), true));
        }
        pages
    }

    /// Whether a table with this many data rows leaves room for the
    /// totals block on the same page.
    fn totals_fit(&self, data_rows: usize) -> bool {
        self.geometry.table_height_cm(data_rows) <= self.geometry.totals_budget_cm
    }
}
