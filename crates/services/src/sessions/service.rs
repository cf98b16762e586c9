use flashcards_core::model::Card;

use super::progress::SessionProgress;
use super::view::CardView;
use crate::error::SessionError;

/// Where the navigator is in the study flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No cards to show. Terminal: callers present a "no results" notice.
    Empty,
    /// Question shown, answer hidden.
    Viewing,
    /// Question and answer shown.
    Answered,
}

/// Position within a working set, with wraparound stepping.
///
/// The working set is fixed for the navigator's lifetime; applying new
/// filters builds a new navigator rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNavigator {
    cards: Vec<Card>,
    position: usize,
    state: SessionState,
}

impl SessionNavigator {
    /// Start at the first card, answer hidden. An empty working set yields
    /// a navigator in `SessionState::Empty`.
    #[must_use]
    pub fn start(working_set: Vec<Card>) -> Self {
        let state = if working_set.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Viewing
        };
        Self {
            cards: working_set,
            position: 0,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the working set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Zero-based index of the current card; `None` when empty.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.position)
    }

    #[must_use]
    pub fn working_set(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == SessionState::Answered
    }

    /// Show the current card's answer. Revealing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there are no cards.
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.state = SessionState::Answered;
        Ok(())
    }

    /// Step forward, wrapping from the last card to the first. The answer is
    /// hidden again; the outgoing card is not revealed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there are no cards.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<usize, SessionError> {
        let len = self.ensure_active()?;
        self.position = (self.position + 1) % len;
        self.state = SessionState::Viewing;
        Ok(self.position)
    }

    /// Step backward, wrapping from the first card to the last.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there are no cards.
    pub fn previous(&mut self) -> Result<usize, SessionError> {
        let len = self.ensure_active()?;
        self.position = (self.position + len - 1) % len;
        self.state = SessionState::Viewing;
        Ok(self.position)
    }

    /// Read-only snapshot of the current card for presentation.
    #[must_use]
    pub fn view(&self) -> Option<CardView> {
        let card = self.current()?;
        Some(CardView::from_card(
            card,
            self.is_revealed(),
            self.position,
            self.len(),
        ))
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.position().map(|position| SessionProgress {
            position,
            total: self.len(),
            revealed: self.is_revealed(),
        })
    }

    fn ensure_active(&self) -> Result<usize, SessionError> {
        match self.state {
            SessionState::Empty => Err(SessionError::Empty),
            SessionState::Viewing | SessionState::Answered => Ok(self.cards.len()),
        }
    }
}
