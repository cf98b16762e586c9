mod plan;
mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{FilterOutcome, build_working_set, shuffle, shuffle_with};
pub use progress::SessionProgress;
pub use service::{SessionNavigator, SessionState};
pub use view::CardView;
