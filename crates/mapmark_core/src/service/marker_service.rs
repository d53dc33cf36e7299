//! Marker use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the map and detail views.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - The service holds no global state; every caller injects its repository.

use crate::model::marker::{Coordinates, Marker, MarkerId};
use crate::repo::marker_repo::{MarkerRepository, RepoResult};
use crate::seed;
use crate::service::asset::AssetResolver;
use serde::Serialize;

/// Where the map view centers before the user moves it (Madrid).
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates::new(40.416775, -3.703790);

/// One point placed on the map. Selecting it hands `title` to the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub title: String,
    pub position: Coordinates,
}

/// Everything the detail view shows for one marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDetail {
    pub id: MarkerId,
    pub title: String,
    pub description: String,
    pub position: Coordinates,
    /// Bundled asset for this title, if the resolver knows one.
    pub asset: Option<String>,
}

/// Use-case service wrapper for marker storage.
pub struct MarkerService<R: MarkerRepository> {
    repo: R,
}

impl<R: MarkerRepository> MarkerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a marker; any id it carries is ignored.
    pub fn insert(&self, marker: &Marker) -> RepoResult<MarkerId> {
        self.repo.insert_marker(marker)
    }

    pub fn list_all(&self) -> RepoResult<Vec<Marker>> {
        self.repo.list_markers()
    }

    /// Exact, case-sensitive title lookup. `Ok(None)` when nothing matches.
    pub fn find_by_title(&self, title: &str) -> RepoResult<Option<Marker>> {
        self.repo.find_by_title(title)
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_markers()
    }

    /// Loads the built-in city catalog in one transaction.
    pub fn seed_defaults(&self) -> RepoResult<Vec<MarkerId>> {
        seed::seed_defaults(&self.repo)
    }

    /// Returns the pins for every stored marker, in storage order.
    pub fn map_pins(&self) -> RepoResult<Vec<MapPin>> {
        Ok(self
            .repo
            .list_markers()?
            .into_iter()
            .map(|marker| MapPin {
                position: marker.coordinates(),
                title: marker.title,
            })
            .collect())
    }

    /// Builds the detail view for the marker selected on the map.
    ///
    /// # Contract
    /// - Returns `Ok(None)` when no marker has this exact title.
    /// - `asset` comes from `assets`, never from the store.
    pub fn marker_detail(
        &self,
        title: &str,
        assets: &dyn AssetResolver,
    ) -> RepoResult<Option<MarkerDetail>> {
        let Some(marker) = self.repo.find_by_title(title)? else {
            return Ok(None);
        };

        let asset = assets.resolve(&marker.title);
        Ok(Some(MarkerDetail {
            id: marker.id,
            position: marker.coordinates(),
            title: marker.title,
            description: marker.description,
            asset,
        }))
    }
}
