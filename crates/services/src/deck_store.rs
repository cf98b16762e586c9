use std::sync::Arc;

use rand::{Rng, rng};

use flashcards_core::model::{Card, Chapter, Deck, FilterCriteria};
use storage::DeckSource;

use crate::error::DeckStoreError;
use crate::sessions::{FilterOutcome, SessionNavigator, build_working_set};

/// Owns the immutable deck and answers filter queries.
///
/// Cloning is cheap; clones share the same deck.
#[derive(Debug, Clone)]
pub struct DeckStore {
    deck: Arc<Deck>,
}

impl DeckStore {
    /// Load the deck once from `source`.
    ///
    /// An empty deck is not an error; every filter will simply yield
    /// `FilterOutcome::NoMatch`.
    ///
    /// # Errors
    ///
    /// Returns `DeckStoreError::Load` if the source is missing, unreadable,
    /// or schema-invalid.
    pub fn load(source: &dyn DeckSource) -> Result<Self, DeckStoreError> {
        let deck = source.load()?;
        if deck.is_empty() {
            tracing::warn!(source = %source.describe(), "deck has no cards");
        }
        Ok(Self::from_deck(deck))
    }

    #[must_use]
    pub fn from_deck(deck: Deck) -> Self {
        Self {
            deck: Arc::new(deck),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Distinct chapters in first-seen order, for the chapter picker.
    #[must_use]
    pub fn list_chapters(&self) -> Vec<Chapter> {
        self.deck.chapters()
    }

    /// Cards matching `criteria`, in deck order. Ignores `criteria.randomize`.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Card> {
        self.deck.filter(criteria)
    }

    /// Build a fresh session from `criteria`, or report that nothing matched.
    #[must_use]
    pub fn apply_filters(&self, criteria: &FilterCriteria) -> FilterOutcome {
        self.apply_filters_with(criteria, &mut rng())
    }

    /// Like [`DeckStore::apply_filters`], drawing shuffle randomness from `rng`.
    #[must_use]
    pub fn apply_filters_with<R: Rng + ?Sized>(
        &self,
        criteria: &FilterCriteria,
        rng: &mut R,
    ) -> FilterOutcome {
        let working_set = build_working_set(&self.deck, criteria, rng);
        tracing::debug!(
            chapter = ?criteria.chapter,
            kind = ?criteria.kind,
            difficulty = ?criteria.difficulty,
            randomize = criteria.randomize,
            matched = working_set.len(),
            "applied filters"
        );

        if working_set.is_empty() {
            return FilterOutcome::NoMatch;
        }
        FilterOutcome::Session(SessionNavigator::start(working_set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::model::{CardKind, Difficulty};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use storage::{InMemoryDeckSource, LoadError};

    fn deck() -> Deck {
        [
            ("1", "Concept", "Easy"),
            ("2", "Derivation", "Advanced"),
            ("1", "Derivation", "Easy"),
            ("3", "Concept", "Intermediate"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (ch, kind, diff))| {
            Card::from_cells(ch, kind, diff, &format!("Q{i}"), &format!("A{i}")).unwrap()
        })
        .collect()
    }

    struct FailingSource;

    impl DeckSource for FailingSource {
        fn load(&self) -> Result<Deck, LoadError> {
            Err(LoadError::MissingColumns {
                columns: vec!["Answer"],
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn load_propagates_source_errors() {
        let err = DeckStore::load(&FailingSource).unwrap_err();
        assert!(matches!(
            err,
            DeckStoreError::Load(LoadError::MissingColumns { .. })
        ));
    }

    #[test]
    fn load_accepts_empty_deck() {
        let store = DeckStore::load(&InMemoryDeckSource::default()).unwrap();
        assert!(store.deck().is_empty());
        assert!(store.apply_filters(&FilterCriteria::any()).is_no_match());
    }

    #[test]
    fn list_chapters_in_first_seen_order() {
        let store = DeckStore::from_deck(deck());
        let chapters: Vec<String> = store.list_chapters().iter().map(ToString::to_string).collect();
        assert_eq!(chapters, vec!["1", "2", "3"]);
    }

    #[test]
    fn apply_filters_starts_at_first_match() {
        let store = DeckStore::from_deck(deck());
        let criteria = FilterCriteria::any().with_kind(CardKind::Derivation);

        let session = store.apply_filters(&criteria).into_session().unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.position(), Some(0));
        assert_eq!(session.current().unwrap().question(), "Q1");
    }

    #[test]
    fn apply_filters_without_match_creates_no_session() {
        let store = DeckStore::from_deck(deck());
        let criteria = FilterCriteria::any()
            .with_chapter(Chapter::from(3))
            .with_difficulty(Difficulty::Advanced);

        assert_eq!(store.apply_filters(&criteria), FilterOutcome::NoMatch);
    }

    #[test]
    fn randomized_session_is_a_permutation_of_matches() {
        let store = DeckStore::from_deck(deck());
        let criteria = FilterCriteria::any().with_randomize(true);
        let mut rng = StdRng::seed_from_u64(11);

        let session = store
            .apply_filters_with(&criteria, &mut rng)
            .into_session()
            .unwrap();

        let mut got: Vec<&str> = session.working_set().iter().map(Card::question).collect();
        got.sort_unstable();
        assert_eq!(got, vec!["Q0", "Q1", "Q2", "Q3"]);
        assert_eq!(store.filter(&FilterCriteria::any()), store.deck().cards());
    }
}
