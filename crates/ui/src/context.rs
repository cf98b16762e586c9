use std::sync::Arc;

use services::DeckStore;

pub trait UiApp: Send + Sync {
    fn deck_store(&self) -> DeckStore;

    /// Where the deck came from, shown on the filter screen.
    fn deck_label(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    deck_store: DeckStore,
    deck_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_store: app.deck_store(),
            deck_label: app.deck_label(),
        }
    }

    #[must_use]
    pub fn deck_store(&self) -> DeckStore {
        self.deck_store.clone()
    }

    #[must_use]
    pub fn deck_label(&self) -> &str {
        &self.deck_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
