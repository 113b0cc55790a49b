//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;
use std::path::PathBuf;

use crate::core::catalog::{Catalog, CatalogEntry, ImageRef};
use crate::core::state::App;

/// `len` entries titled "Artwork 1".."Artwork N".
pub fn test_entries(len: usize) -> Vec<CatalogEntry> {
    (1..=len)
        .map(|i| CatalogEntry {
            title: format!("Artwork {i}"),
            description: format!("Description of artwork {i}."),
            image: ImageRef::new(format!("plate_{i}")),
        })
        .collect()
}

/// A catalog of `len` artworks. `len` must be at least 1.
pub fn test_catalog(len: usize) -> Catalog {
    Catalog::from_entries(test_entries(len)).expect("test catalog must not be empty")
}

/// Creates a test App over a three-artwork catalog, matching the reference screen.
pub fn test_app() -> App {
    App::new(test_catalog(3))
}

/// A fresh, empty scratch directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("artspace-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
