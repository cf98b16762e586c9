#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The filters matched no cards.
    NoMatch,
    /// A picker held a value that is not a valid chapter, type or difficulty.
    InvalidFilter,
    /// Navigation was requested without an active session.
    NoSession,
}

impl ViewError {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ViewError::NoMatch => "No Match",
            ViewError::InvalidFilter | ViewError::NoSession => "Something went wrong",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NoMatch => "No flashcards match your criteria.",
            ViewError::InvalidFilter => "That filter value is not recognised. Please pick again.",
            ViewError::NoSession => "There is no active session. Start one from the filter screen.",
        }
    }
}
