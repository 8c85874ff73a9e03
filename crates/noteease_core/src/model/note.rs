//! Note domain model.
//!
//! # Responsibility
//! - Define the single entity held by the note store.
//! - Define the write-side draft shape consumed by repository upserts.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at <= updated_at` for every stored note.
//! - Title non-emptiness is enforced by the editor, not by this type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID assigned at creation.
    pub id: NoteId,
    /// Display title. Never blank when written through the editor.
    pub title: String,
    /// Free-form body, may be empty.
    pub content: String,
    /// Unix epoch milliseconds of the first successful write.
    pub created_at: i64,
    /// Unix epoch milliseconds of the latest successful write.
    pub updated_at: i64,
}

impl Note {
    /// Returns whether `query` occurs in title or content, ignoring case.
    ///
    /// A blank query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }

    /// Returns the write-side view of this note.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            id: Some(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Write input for repository upserts.
///
/// Timestamps are not part of the draft; the repository owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Target note. `None` (or the nil UUID) requests a new note.
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Creates a draft for a note that does not exist yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Creates a draft targeting a caller-provided ID.
    ///
    /// Used by import paths and the editor, where identity already exists.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the usable ID, treating the nil UUID as absent.
    pub fn existing_id(&self) -> Option<NoteId> {
        self.id.filter(|id| !id.is_nil())
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteDraft};
    use uuid::Uuid;

    fn sample() -> Note {
        Note {
            id: Uuid::new_v4(),
            title: "Groceries".to_string(),
            content: "Milk, Eggs".to_string(),
            created_at: 1,
            updated_at: 2,
        }
    }

    #[test]
    fn matches_is_case_insensitive_over_title_and_content() {
        let note = sample();
        assert!(note.matches("groc"));
        assert!(note.matches("EGGS"));
        assert!(note.matches(""));
        assert!(!note.matches("bread"));
    }

    #[test]
    fn whitespace_only_query_matches_every_note() {
        let note = sample();
        assert!(note.matches("   "));
        assert!(note.matches("\t\n"));
    }

    #[test]
    fn nil_id_is_treated_as_new() {
        let draft = NoteDraft::with_id(Uuid::nil(), "t", "c");
        assert_eq!(draft.existing_id(), None);
    }

    #[test]
    fn to_draft_keeps_identity_and_fields() {
        let note = sample();
        let draft = note.to_draft();
        assert_eq!(draft.existing_id(), Some(note.id));
        assert_eq!(draft.title, note.title);
        assert_eq!(draft.content, note.content);
    }
}
