use crate::model::{Card, CardKind, Chapter, Difficulty};

/// A single filter dimension: either a wildcard or an exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Criterion<T> {
    #[default]
    Any,
    Exactly(T),
}

impl<T: PartialEq> Criterion<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Exactly(expected) => expected == value,
        }
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Criterion::Any)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Criterion::Any => None,
            Criterion::Exactly(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Criterion<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Criterion::Any, Criterion::Exactly)
    }
}

/// What the user picked on the filter screen.
///
/// Each dimension defaults to the wildcard; `randomize` defaults to off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub chapter: Criterion<Chapter>,
    pub kind: Criterion<CardKind>,
    pub difficulty: Criterion<Difficulty>,
    pub randomize: bool,
}

impl FilterCriteria {
    /// Criteria that match every card, in deck order.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chapter(mut self, chapter: impl Into<Criterion<Chapter>>) -> Self {
        self.chapter = chapter.into();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<Criterion<CardKind>>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<Criterion<Difficulty>>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// True when every non-wildcard dimension equals the card's field.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.chapter.matches(card.chapter())
            && self.kind.matches(&card.kind())
            && self.difficulty.matches(&card.difficulty())
    }
}

impl From<Chapter> for Criterion<Chapter> {
    fn from(value: Chapter) -> Self {
        Criterion::Exactly(value)
    }
}

impl From<CardKind> for Criterion<CardKind> {
    fn from(value: CardKind) -> Self {
        Criterion::Exactly(value)
    }
}

impl From<Difficulty> for Criterion<Difficulty> {
    fn from(value: Difficulty) -> Self {
        Criterion::Exactly(value)
    }
}
