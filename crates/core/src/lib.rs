//! Workbook model, menu aggregation and slide pagination for banquet
//! menu decks.

pub mod aggregate;
pub mod deck;
pub mod error;
pub mod extract;
pub mod labels;
pub mod layout;
pub mod naming;
pub mod order;
pub mod paginate;
pub mod render;
pub mod types;
pub mod workbook;

pub use deck::DeckBuilder;
pub use error::{Error, Result};
pub use labels::Labels;
pub use layout::{SlideGeometry, WorkbookLayout};
pub use naming::NamingConfig;
pub use render::{RenderConfig, TextRenderer};
pub use types::{Deck, MasterRow, MenuRow, SheetSection, SheetTotals, SlidePage};
pub use workbook::{CellRef, CellValue, Sheet, Workbook};
