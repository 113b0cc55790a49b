//! # Plates
//!
//! Text art drawn in place of an artwork's image. `ImageRef`s are resolved
//! here, on the rendering side; the core treats them as opaque.
//!
//! Resolution order:
//! 1. Built-in plate with that name (`assets/plates/<name>.txt`, embedded by `build.rs`)
//! 2. A text file at that path, read once when the library is built.
//!    Relative paths are taken from the catalog file's folder.
//! 3. A placeholder naming the missing ref

use log::{debug, warn};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::{Catalog, ImageRef};

include!(concat!(env!("OUT_DIR"), "/plates.rs"));

/// Looks up a plate embedded at build time.
pub fn builtin_plate(name: &str) -> Option<&'static str> {
    PLATES
        .iter()
        .find(|(plate_name, _)| *plate_name == name)
        .map(|(_, plate)| *plate)
}

#[derive(Debug, Default)]
pub struct PlateLibrary {
    files: HashMap<ImageRef, String>,
}

impl PlateLibrary {
    /// Reads every catalog image that isn't a built-in plate from disk.
    /// Unreadable files are logged and left to the placeholder.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut files = HashMap::new();
        for artwork in catalog.iter() {
            let image = &artwork.image;
            if builtin_plate(image.as_str()).is_some() || files.contains_key(image) {
                continue;
            }
            let path = plate_path(catalog, image);
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    debug!("Loaded plate {} for artwork {}", path.display(), artwork.id);
                    files.insert(image.clone(), contents.trim_end_matches(['\n', '\r']).to_string());
                }
                Err(e) => {
                    warn!("No plate for artwork {} ({}): {}", artwork.id, path.display(), e);
                }
            }
        }
        Self { files }
    }

    pub fn resolve(&self, image: &ImageRef) -> Cow<'_, str> {
        if let Some(plate) = builtin_plate(image.as_str()) {
            return Cow::Borrowed(plate);
        }
        match self.files.get(image) {
            Some(plate) => Cow::Borrowed(plate.as_str()),
            None => Cow::Owned(placeholder(image)),
        }
    }
}

fn plate_path(catalog: &Catalog, image: &ImageRef) -> PathBuf {
    let raw = Path::new(image.as_str());
    match catalog.base_dir() {
        Some(base_dir) if raw.is_relative() => base_dir.join(raw),
        _ => raw.to_path_buf(),
    }
}

fn placeholder(image: &ImageRef) -> String {
    format!("[ no plate ]\n{image}")
}
