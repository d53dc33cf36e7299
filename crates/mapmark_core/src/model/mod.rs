//! Domain model for geo-tagged markers.
//!
//! # Responsibility
//! - Define the canonical marker record shared by store and presenters.
//!
//! # Invariants
//! - A marker is identified by a store-assigned integer id.
//! - Markers are never updated or deleted once persisted.

pub mod marker;
