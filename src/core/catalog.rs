//! # Artwork Catalog
//!
//! The fixed, ordered list of artworks shown by the carousel. Built once at
//! startup (built-in or from a catalog file) and never mutated afterwards.
//!
//! ```text
//! Catalog
//! ├── name: Option<String>      // shown in the title bar
//! ├── base_dir: Option<PathBuf> // folder of the catalog file, if loaded from one
//! └── artworks: Vec<Artwork>    // non-empty, ids 1..=N in order
//!     ├── id: usize
//!     ├── image: ImageRef       // opaque to the core
//!     ├── title: String
//!     └── description: String
//! ```
//!
//! Catalog files are TOML unless the extension is `.json`:
//!
//! ```toml
//! name = "Weekend gallery"
//!
//! [[artworks]]
//! title = "Harbour at dusk"
//! description = "Oil on board."
//! image = "plates/harbour.txt"   # built-in plate name or path
//! ```
//!
//! Image paths are kept exactly as written. Relative ones are meant relative
//! to the catalog file, which is why a loaded catalog remembers its folder.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Opaque handle to an artwork's image. The core never looks inside it;
/// the rendering surface decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// 1-based ordinal position in the catalog.
    pub id: usize,
    pub image: ImageRef,
    pub title: String,
    pub description: String,
}

/// One artwork as written in a catalog file. Ids come from file order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: ImageRef,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogFile {
    pub name: Option<String>,
    #[serde(default)]
    pub artworks: Vec<CatalogEntry>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Toml(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Json(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Empty => write!(f, "catalog has no artworks"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: Option<String>,
    base_dir: Option<PathBuf>,
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Builds a catalog, numbering entries 1..=N in the given order.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            name: None,
            base_dir: None,
            artworks: number_entries(entries),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The three artworks shipped with the binary, paired with the
    /// built-in plates under `assets/plates/`.
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry {
                title: "The Great Wave off Kanagawa".to_string(),
                description: "Katsushika Hokusai, c. 1831. A woodblock print from the series \
                    Thirty-six Views of Mount Fuji. A towering wave curls over three fishing \
                    boats while the mountain sits small and still in the distance."
                    .to_string(),
                image: ImageRef::new("great_wave"),
            },
            CatalogEntry {
                title: "The Starry Night".to_string(),
                description: "Vincent van Gogh, 1889. Painted from memory in the asylum at \
                    Saint-Rémy, the village sleeps under a sky that swirls with eleven stars \
                    and a bright crescent moon, framed by a dark cypress."
                    .to_string(),
                image: ImageRef::new("starry_night"),
            },
            CatalogEntry {
                title: "Sunflowers".to_string(),
                description: "Vincent van Gogh, 1888. One of a series of still lifes painted \
                    in Arles to decorate the room of his friend Paul Gauguin, showing \
                    sunflowers at every stage of life in a simple earthenware vase."
                    .to_string(),
                image: ImageRef::new("sunflowers"),
            },
        ];

        Self {
            name: Some("Art Space".to_string()),
            base_dir: None,
            artworks: number_entries(entries),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Absolute folder of the catalog file. `None` for catalogs not read from disk.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> NonZeroUsize {
        // Construction rejects empty lists, so this never falls back
        NonZeroUsize::new(self.artworks.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// 1-based lookup. `None` outside `1..=len`.
    pub fn get(&self, id: usize) -> Option<&Artwork> {
        id.checked_sub(1).and_then(|i| self.artworks.get(i))
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }
}

fn number_entries(entries: Vec<CatalogEntry>) -> Vec<Artwork> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Artwork {
            id: i + 1,
            image: entry.image,
            title: entry.title,
            description: entry.description,
        })
        .collect()
}

/// Load a catalog file. `.json` files are parsed as JSON, anything else as TOML.
///
/// The catalog records the absolute folder of `path` as its base dir, so
/// relative image paths resolve the same way from any working directory.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: CatalogFile = if is_json {
        serde_json::from_str(&contents).map_err(CatalogError::Json)?
    } else {
        toml::from_str(&contents).map_err(CatalogError::Toml)?
    };

    let mut catalog = Catalog::from_entries(file.artworks)?;
    if let Some(name) = file.name {
        catalog = catalog.with_name(name);
    }
    let base_dir = catalog_dir(path);
    debug!("Catalog images resolve against {}", base_dir.display());
    catalog.base_dir = Some(base_dir);

    info!(
        "Loaded catalog from {} ({} artworks)",
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Absolute folder holding `path`. A bare file name lives in the cwd.
fn catalog_dir(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf())
}
