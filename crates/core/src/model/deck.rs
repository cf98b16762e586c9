use std::collections::HashSet;

use crate::model::{Card, Chapter, FilterCriteria};

/// The full, ordered set of cards loaded at startup.
///
/// A deck never changes after it is built; filtering produces new vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct chapters in the order they first appear.
    #[must_use]
    pub fn chapters(&self) -> Vec<Chapter> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .map(Card::chapter)
            .filter(|chapter| seen.insert(*chapter))
            .cloned()
            .collect()
    }

    /// Cards matching `criteria`, in deck order.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Card> {
        filter_cards(&self.cards, criteria)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ordered subsequence of `cards` matching every non-wildcard criterion.
///
/// `criteria.randomize` is ignored here; shuffling is a separate step.
#[must_use]
pub fn filter_cards(cards: &[Card], criteria: &FilterCriteria) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| criteria.matches(card))
        .cloned()
        .collect()
}
