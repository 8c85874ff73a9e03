//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the data access contract presenters depend on.
//! - Isolate store details from presenter orchestration.
//!
//! # Invariants
//! - Repository writes are the only path that assigns note timestamps.
//! - Lookup misses are `None`, never errors.

pub mod note_repo;
