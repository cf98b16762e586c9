use flashcards_core::model::FilterCriteria;
use services::{CardView, DeckStore, FilterOutcome, SessionNavigator, SessionState};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Reveal,
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Prompt,
    Answer,
}

/// Card and answer views over a non-empty session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionVm {
    session: SessionNavigator,
}

impl SessionVm {
    /// Returns `None` for an empty navigator; the filter screen shows a
    /// notice instead.
    #[must_use]
    pub fn new(session: SessionNavigator) -> Option<Self> {
        (session.state() != SessionState::Empty).then_some(Self { session })
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.session.is_revealed() {
            SessionPhase::Answer
        } else {
            SessionPhase::Prompt
        }
    }

    /// Card popup title, e.g. `Flashcard 2/7`.
    #[must_use]
    pub fn title(&self) -> String {
        let progress = self.session.progress();
        let (ordinal, total) = progress.map_or((0, 0), |p| (p.ordinal(), p.total));
        format!("Flashcard {ordinal}/{total}")
    }

    #[must_use]
    pub fn card(&self) -> Option<CardView> {
        self.session.view()
    }

    /// Short metadata line, e.g. `Chapter 3 · Concept · Easy`.
    #[must_use]
    pub fn meta_line(&self) -> Option<String> {
        self.card().map(|card| {
            format!(
                "Chapter {} \u{b7} {} \u{b7} {}",
                card.chapter, card.kind, card.difficulty
            )
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoSession` if the session has no cards.
    pub fn apply(&mut self, intent: SessionIntent) -> Result<(), ViewError> {
        let result = match intent {
            SessionIntent::Reveal => self.session.reveal(),
            SessionIntent::Next => self.session.next().map(|_| ()),
            SessionIntent::Previous => self.session.previous().map(|_| ()),
        };
        result.map_err(|_| ViewError::NoSession)
    }
}

/// # Errors
///
/// Returns `ViewError::NoMatch` when no cards match `criteria`.
pub fn start_session(store: &DeckStore, criteria: &FilterCriteria) -> Result<SessionVm, ViewError> {
    match store.apply_filters(criteria) {
        FilterOutcome::Session(session) => SessionVm::new(session).ok_or(ViewError::NoMatch),
        FilterOutcome::NoMatch => Err(ViewError::NoMatch),
    }
}
