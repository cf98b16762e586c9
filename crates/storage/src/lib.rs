#![forbid(unsafe_code)]

pub mod repository;
pub mod sheet;

pub use repository::{DeckSource, InMemoryDeckSource, LoadError};
pub use sheet::{REQUIRED_COLUMNS, SheetFormat, SpreadsheetSource};
