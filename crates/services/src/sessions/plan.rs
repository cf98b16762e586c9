use rand::seq::SliceRandom;
use rand::{Rng, rng};

use flashcards_core::model::{Card, Deck, FilterCriteria};

use super::service::SessionNavigator;

/// Result of applying filter criteria to the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// At least one card matched; navigation starts at the first card.
    Session(SessionNavigator),
    /// Nothing matched. No session is created.
    NoMatch,
}

impl FilterOutcome {
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, FilterOutcome::NoMatch)
    }

    #[must_use]
    pub fn into_session(self) -> Option<SessionNavigator> {
        match self {
            FilterOutcome::Session(session) => Some(session),
            FilterOutcome::NoMatch => None,
        }
    }
}

/// Returns `cards` in a uniformly random order when `enabled`, otherwise unchanged.
///
/// The input slice is never reordered.
#[must_use]
pub fn shuffle(cards: &[Card], enabled: bool) -> Vec<Card> {
    shuffle_with(cards, enabled, &mut rng())
}

/// Like [`shuffle`], drawing randomness from `rng`.
#[must_use]
pub fn shuffle_with<R: Rng + ?Sized>(cards: &[Card], enabled: bool, rng: &mut R) -> Vec<Card> {
    let mut out = cards.to_vec();
    if enabled {
        out.as_mut_slice().shuffle(rng);
    }
    out
}

/// Filter the deck, then shuffle if `criteria.randomize` is set.
#[must_use]
pub fn build_working_set<R: Rng + ?Sized>(
    deck: &Deck,
    criteria: &FilterCriteria,
    rng: &mut R,
) -> Vec<Card> {
    let mut working_set = deck.filter(criteria);
    if criteria.randomize {
        working_set.shuffle(rng);
    }
    working_set
}
