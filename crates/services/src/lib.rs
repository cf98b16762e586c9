#![forbid(unsafe_code)]

pub mod deck_store;
pub mod error;
pub mod sessions;

pub use sessions as session;

pub use deck_store::DeckStore;
pub use error::{DeckStoreError, SessionError};

pub use sessions::{
    CardView, FilterOutcome, SessionNavigator, SessionProgress, SessionState, shuffle,
    shuffle_with,
};
