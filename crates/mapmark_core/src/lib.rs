//! Core domain logic for MapMark.
//! Marker storage, the built-in city catalog and the use-case layer consumed
//! by map and detail views.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::marker::{Coordinates, Marker, MarkerId, UNSAVED_MARKER_ID};
pub use repo::marker_repo::{MarkerRepository, RepoError, RepoResult, SqliteMarkerRepository};
pub use seed::{default_marker_count, default_markers, seed_defaults};
pub use service::asset::{AssetCatalog, AssetResolver, NoAssets};
pub use service::marker_service::{MapPin, MarkerDetail, MarkerService, DEFAULT_MAP_CENTER};

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
