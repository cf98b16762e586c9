use flashcards_core::model::{CardError, Deck};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading a deck. All of them are fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("deck file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("cannot read deck file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed spreadsheet: {0}")]
    Malformed(#[from] csv::Error),

    #[error("malformed workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<&'static str> },

    #[error("invalid card on row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: CardError,
    },
}

/// Source contract for the deck loaded at startup.
pub trait DeckSource: Send + Sync {
    /// Load every card, in source order.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is missing, unreadable, or schema-invalid.
    fn load(&self) -> Result<Deck, LoadError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Fixed in-memory deck for tests and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeckSource {
    deck: Deck,
}

impl InMemoryDeckSource {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }
}

impl DeckSource for InMemoryDeckSource {
    fn load(&self) -> Result<Deck, LoadError> {
        Ok(self.deck.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory deck ({} cards)", self.deck.len())
    }
}
