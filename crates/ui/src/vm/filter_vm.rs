use flashcards_core::model::{CardKind, Chapter, Criterion, Difficulty, FilterCriteria};

use crate::views::ViewError;

/// Picker label for the wildcard criterion.
pub const ALL_LABEL: &str = "All";

/// State of the filter screen: three pickers and the randomize toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterFormVm {
    pub chapter: String,
    pub kind: String,
    pub difficulty: String,
    pub randomize: bool,
    chapter_options: Vec<String>,
}

impl FilterFormVm {
    /// Every picker starts on `All`, randomize off.
    #[must_use]
    pub fn new(chapters: &[Chapter]) -> Self {
        let mut chapter_options: Vec<String> = chapters.iter().map(ToString::to_string).collect();
        chapter_options.push(ALL_LABEL.to_string());

        Self {
            chapter: ALL_LABEL.to_string(),
            kind: ALL_LABEL.to_string(),
            difficulty: ALL_LABEL.to_string(),
            randomize: false,
            chapter_options,
        }
    }

    /// Deck chapters in first-seen order, followed by `All`.
    #[must_use]
    pub fn chapter_options(&self) -> &[String] {
        &self.chapter_options
    }

    #[must_use]
    pub fn kind_options() -> Vec<String> {
        std::iter::once(ALL_LABEL)
            .chain(CardKind::ALL.iter().map(|kind| kind.as_str()))
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn difficulty_options() -> Vec<String> {
        std::iter::once(ALL_LABEL)
            .chain(Difficulty::ALL.iter().map(|difficulty| difficulty.as_str()))
            .map(str::to_string)
            .collect()
    }

    pub fn toggle_randomize(&mut self) {
        self.randomize = !self.randomize;
    }

    #[must_use]
    pub fn randomize_label(&self) -> &'static str {
        if self.randomize {
            "Randomize: Yes"
        } else {
            "Randomize: No"
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidFilter` if a picker holds an unknown value.
    pub fn to_criteria(&self) -> Result<FilterCriteria, ViewError> {
        let chapter = pick(&self.chapter, |raw| Chapter::new(raw).ok())?;
        let kind = pick(&self.kind, |raw| raw.parse::<CardKind>().ok())?;
        let difficulty = pick(&self.difficulty, |raw| raw.parse::<Difficulty>().ok())?;

        Ok(FilterCriteria {
            chapter,
            kind,
            difficulty,
            randomize: self.randomize,
        })
    }
}

fn pick<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Criterion<T>, ViewError> {
    if raw == ALL_LABEL {
        return Ok(Criterion::Any);
    }
    parse(raw)
        .map(Criterion::Exactly)
        .ok_or(ViewError::InvalidFilter)
}
