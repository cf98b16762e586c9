mod card;
mod chapter;
mod deck;
mod filter;

pub use card::{Card, CardError, CardKind, Difficulty};
pub use chapter::{Chapter, ChapterError};
pub use deck::{Deck, filter_cards};
pub use filter::{Criterion, FilterCriteria};
