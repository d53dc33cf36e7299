//! Title-to-asset lookup for the detail view.
//!
//! # Invariants
//! - Lookup is keyed by the lowercased marker title.
//! - A missing asset is `None`, never an error.

use std::collections::HashMap;

/// Resolves the bundled asset (typically an image) shown next to a marker.
pub trait AssetResolver {
    fn resolve(&self, title: &str) -> Option<String>;
}

/// In-memory title → asset identifier map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCatalog {
    assets: HashMap<String, String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `asset` for `title`, replacing any previous entry.
    pub fn insert(&mut self, title: &str, asset: impl Into<String>) {
        self.assets.insert(title.to_lowercase(), asset.into());
    }

    pub fn with_asset(mut self, title: &str, asset: impl Into<String>) -> Self {
        self.insert(title, asset);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetResolver for AssetCatalog {
    fn resolve(&self, title: &str) -> Option<String> {
        self.assets.get(&title.to_lowercase()).cloned()
    }
}

impl<T: AsRef<str>, A: Into<String>> FromIterator<(T, A)> for AssetCatalog {
    fn from_iter<I: IntoIterator<Item = (T, A)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (title, asset) in iter {
            catalog.insert(title.as_ref(), asset);
        }
        catalog
    }
}

/// Resolver with no assets, for callers that show text only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _title: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetCatalog, AssetResolver, NoAssets};

    #[test]
    fn lookup_ignores_title_case() {
        let catalog = AssetCatalog::new().with_asset("Bilbao", "raw/bilbao.jpg");
        assert_eq!(catalog.resolve("bilbao").as_deref(), Some("raw/bilbao.jpg"));
        assert_eq!(catalog.resolve("BILBAO").as_deref(), Some("raw/bilbao.jpg"));
    }

    #[test]
    fn missing_asset_is_none() {
        let catalog: AssetCatalog = [("madrid", "raw/madrid.jpg")].into_iter().collect();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.resolve("oviedo").is_none());
        assert!(NoAssets.resolve("madrid").is_none());
    }
}
