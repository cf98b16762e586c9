/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based index of the current card.
    pub position: usize,
    pub total: usize,
    pub revealed: bool,
}

impl SessionProgress {
    /// One-based position, as shown to users.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.position + 1
    }
}
