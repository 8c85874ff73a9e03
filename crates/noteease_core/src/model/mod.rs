//! Domain model for notes.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and presenters.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal from the in-memory collection.

pub mod note;
