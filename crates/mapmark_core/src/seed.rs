//! Built-in catalog of example markers.
//!
//! # Responsibility
//! - Hold the fixed list of Spanish cities offered for optional bulk loading.
//!
//! # Invariants
//! - The catalog is never inserted implicitly; callers opt in through
//!   [`seed_defaults`] or the service layer.

use crate::model::marker::{Marker, MarkerId};
use crate::repo::marker_repo::{MarkerRepository, RepoResult};
use log::info;

struct SeedEntry {
    title: &'static str,
    latitude: f64,
    longitude: f64,
    description: &'static str,
}

const SEED_ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        title: "vitoria",
        latitude: 42.849998,
        longitude: -2.683333,
        description: "Capital del País Vasco",
    },
    SeedEntry {
        title: "bilbao",
        latitude: 43.263056,
        longitude: -2.934611,
        description: "Centro económico y cultural del País Vasco",
    },
    SeedEntry {
        title: "madrid",
        latitude: 40.416775,
        longitude: -3.703790,
        description: "Capital de España",
    },
    SeedEntry {
        title: "barcelona",
        latitude: 41.385064,
        longitude: 2.173403,
        description: "Capital de Cataluña",
    },
    SeedEntry {
        title: "sevilla",
        latitude: 37.382830,
        longitude: -5.973174,
        description: "Capital de Andalucia",
    },
    SeedEntry {
        title: "valencia",
        latitude: 39.466667,
        longitude: -0.375000,
        description: "Ciudad costera conocida por su Ciudad de las Artes y las Ciencias",
    },
    SeedEntry {
        title: "zaragoza",
        latitude: 41.650002,
        longitude: -0.883,
        description: "Capital de Aragón",
    },
    SeedEntry {
        title: "valladolid",
        latitude: 41.6544,
        longitude: -4.723611,
        description: "Ciudad con un gran patrimonio histórico",
    },
    SeedEntry {
        title: "salamanca",
        latitude: 40.966668,
        longitude: -5.650000,
        description: "Hogar de una de las universidades más antiguas de Europa",
    },
    SeedEntry {
        title: "oviedo",
        latitude: 43.366667,
        longitude: -5.800000,
        description: "Capital de Asturias",
    },
];

/// Returns the catalog as unsaved markers, in catalog order.
pub fn default_markers() -> Vec<Marker> {
    SEED_ENTRIES
        .iter()
        .map(|entry| Marker::new(entry.title, entry.latitude, entry.longitude, entry.description))
        .collect()
}

/// Number of entries in the catalog.
pub fn default_marker_count() -> usize {
    SEED_ENTRIES.len()
}

/// Inserts the whole catalog in a single transaction.
///
/// No duplicate check is made: seeding twice stores every city twice.
pub fn seed_defaults<R: MarkerRepository>(repo: &R) -> RepoResult<Vec<MarkerId>> {
    let ids = repo.insert_markers(&default_markers())?;
    info!(
        "event=seed_defaults module=seed status=ok inserted={}",
        ids.len()
    );
    Ok(ids)
}
