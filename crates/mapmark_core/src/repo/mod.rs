//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for markers.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories only run against connections with the marker schema applied.
//! - "Not found" is an `Ok(None)` outcome, never an error.

pub mod marker_repo;
