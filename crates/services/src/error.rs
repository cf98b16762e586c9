//! Shared error types for the services crate.

use thiserror::Error;

use storage::LoadError;

/// Errors emitted by `DeckStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckStoreError {
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors emitted by the session navigator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// Navigation was attempted on a session with no cards.
    #[error("no active session: the working set is empty")]
    Empty,
}
