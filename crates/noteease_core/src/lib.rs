//! Core domain logic for NoteEase.
//! This crate owns the note store, its repository facade and the screen
//! presenters; display layers only render presenter state and send intents.

pub mod app;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod nav;
pub mod presenter;
pub mod repo;
pub mod store;

pub use app::{AppError, Intent, NoteApp, Outcome, Screen};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{default_log_level, ConfigError, CoreConfig};
pub use logging::{init_from_config, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteDraft, NoteId};
pub use nav::{NavStack, Route, RouteParseError};
pub use presenter::card::NoteCard;
pub use presenter::detail::{DetailPresenter, DetailState, NOT_FOUND_MESSAGE};
pub use presenter::editor::{EditorError, EditorPresenter, EditorState, TITLE_REQUIRED_MESSAGE};
pub use presenter::list::{ListPresenter, ListState, EMPTY_LIST_MESSAGE};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository};
pub use store::note_store::{NoteSnapshot, NoteStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
