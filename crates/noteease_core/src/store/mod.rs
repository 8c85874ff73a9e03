//! In-memory note storage.
//!
//! # Responsibility
//! - Hold the single authoritative note collection for the process.
//! - Broadcast the full collection to subscribers after every change.
//!
//! # Invariants
//! - Writes replace the whole collection; readers only see complete snapshots.
//! - The collection is ordered by `updated_at DESC, id ASC` after every write.

pub mod note_store;
