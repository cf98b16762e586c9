use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::chapter::{Chapter, ChapterError};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("unknown card type: {0:?} (expected Derivation or Concept)")]
    UnknownKind(String),

    #[error("unknown difficulty: {0:?} (expected Easy, Intermediate or Advanced)")]
    UnknownDifficulty(String),

    #[error(transparent)]
    Chapter(#[from] ChapterError),

    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── CARD KIND ────────────────────────────────────────────────────────────────
//

/// What a card asks for: a worked derivation or a conceptual explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Derivation,
    Concept,
}

impl CardKind {
    pub const ALL: [CardKind; 2] = [CardKind::Derivation, CardKind::Concept];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Derivation => "Derivation",
            CardKind::Concept => "Concept",
        }
    }
}

impl FromStr for CardKind {
    type Err = CardError;

    /// Parses the canonical spelling. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Derivation" => Ok(Self::Derivation),
            "Concept" => Ok(Self::Concept),
            other => Err(CardError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Author-assigned difficulty of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Easy" => Ok(Self::Easy),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            other => Err(CardError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── CARD ─────────────────────────────────────────────────────────────────────
//

/// A single question/answer unit.
///
/// Cards have no identity beyond their position in the deck; two cards with
/// identical fields are still distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    chapter: Chapter,
    kind: CardKind,
    difficulty: Difficulty,
    question: String,
    answer: String,
}

impl Card {
    /// Creates a card, trimming question and answer text.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyQuestion` or `CardError::EmptyAnswer` if either
    /// text is blank.
    pub fn new(
        chapter: Chapter,
        kind: CardKind,
        difficulty: Difficulty,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, CardError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(CardError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(CardError::EmptyAnswer);
        }

        Ok(Self {
            chapter,
            kind,
            difficulty,
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        })
    }

    /// Builds a card from raw spreadsheet cells.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if any cell fails to parse.
    pub fn from_cells(
        chapter: &str,
        kind: &str,
        difficulty: &str,
        question: &str,
        answer: &str,
    ) -> Result<Self, CardError> {
        Self::new(
            Chapter::new(chapter)?,
            kind.parse()?,
            difficulty.parse()?,
            question,
            answer,
        )
    }

    #[must_use]
    pub fn chapter(&self) -> &Chapter {
        &self.chapter
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
