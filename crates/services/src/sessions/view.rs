use flashcards_core::model::{Card, CardKind, Chapter, Difficulty};

/// Presentation-agnostic snapshot of the current card.
///
/// This is intentionally **not** a UI view-model: no pre-formatted titles or
/// labels. `answer` is `None` until the card is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub question: String,
    pub answer: Option<String>,
    pub chapter: Chapter,
    pub kind: CardKind,
    pub difficulty: Difficulty,

    /// Zero-based index within the working set.
    pub position: usize,
    pub total: usize,
}

impl CardView {
    #[must_use]
    pub fn from_card(card: &Card, revealed: bool, position: usize, total: usize) -> Self {
        Self {
            question: card.question().to_string(),
            answer: revealed.then(|| card.answer().to_string()),
            chapter: card.chapter().clone(),
            kind: card.kind(),
            difficulty: card.difficulty(),
            position,
            total,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.answer.is_some()
    }
}
