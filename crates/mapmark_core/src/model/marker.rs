//! Marker domain model.
//!
//! # Responsibility
//! - Define the flat record stored in the `Mapa` table.
//! - Provide coordinate helpers used by presenters and seed checks.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `id == UNSAVED_MARKER_ID` means the marker has not been persisted.
//! - Coordinates are stored as given; range checks are advisory only.

use serde::{Deserialize, Serialize};

/// Store-assigned marker identifier (SQLite rowid).
pub type MarkerId = i64;

/// Id carried by markers that only exist in memory.
pub const UNSAVED_MARKER_ID: MarkerId = 0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns whether both components fall within geographic bounds.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Single geo-tagged record with title, coordinates and description.
///
/// `title` doubles as the lookup key for detail retrieval. The store does not
/// enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Zero until the store assigns one on insert.
    pub id: MarkerId,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

impl Marker {
    /// Creates an unsaved marker.
    pub fn new(
        title: impl Into<String>,
        latitude: f64,
        longitude: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_MARKER_ID,
            title: title.into(),
            latitude,
            longitude,
            description: description.into(),
        }
    }

    /// Returns whether the marker carries a store-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSAVED_MARKER_ID
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Compares everything except `id`.
    pub fn same_content(&self, other: &Marker) -> bool {
        self.title == other.title
            && self.latitude == other.latitude
            && self.longitude == other.longitude
            && self.description == other.description
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinates, Marker, UNSAVED_MARKER_ID};

    #[test]
    fn new_marker_is_unsaved() {
        let marker = Marker::new("bilbao", 43.263056, -2.934611, "desc");
        assert_eq!(marker.id, UNSAVED_MARKER_ID);
        assert!(!marker.is_persisted());
    }

    #[test]
    fn same_content_ignores_id() {
        let unsaved = Marker::new("a", 1.0, 2.0, "d");
        let mut saved = unsaved.clone();
        saved.id = 7;
        assert!(saved.same_content(&unsaved));
        assert_ne!(saved, unsaved);
    }

    #[test]
    fn coordinate_range_bounds_are_inclusive() {
        assert!(Coordinates::new(90.0, -180.0).is_in_range());
        assert!(!Coordinates::new(90.5, 0.0).is_in_range());
        assert!(!Coordinates::new(0.0, 181.0).is_in_range());
    }
}
