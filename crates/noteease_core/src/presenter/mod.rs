//! Per-screen presenters.
//!
//! # Responsibility
//! - Derive display-ready state from the repository.
//! - Forward user intents back to the repository.
//!
//! # Invariants
//! - Presenters never mutate a note outside a repository save/delete call.
//! - Presenters receive the repository through their constructor.

pub mod card;
pub mod detail;
pub mod editor;
pub mod list;
