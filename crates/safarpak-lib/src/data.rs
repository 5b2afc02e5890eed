//! Locating and loading the city dataset.
//!
//! The crate ships with a Pakistani city list compiled into the binary. A
//! replacement CSV can be supplied explicitly, through the `SAFARPAK_CITIES`
//! environment variable, or by dropping `pak_cities.csv` into the platform
//! data directory.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::catalog::LocationCatalog;
use crate::error::{Error, Result};

/// Filename looked up in the platform data directory.
pub const CITIES_FILENAME: &str = "pak_cities.csv";

/// Environment variable naming a city CSV to load instead of the bundled data.
pub const CITIES_ENV_VAR: &str = "SAFARPAK_CITIES";

pub(crate) const BUNDLED_CITIES_CSV: &str = include_str!("../data/pak_cities.csv");

static BUNDLED_CATALOG: OnceCell<LocationCatalog> = OnceCell::new();

/// Location of `pak_cities.csv` inside the platform data directory.
pub fn default_cities_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "safarpak", "safarpak").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(CITIES_FILENAME))
}

/// Pick the city CSV to load, if any.
///
/// Order: `explicit`, then `SAFARPAK_CITIES`, then the data-directory file
/// when it exists. `None` means the bundled dataset should be used.
pub fn resolve_cities_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }

    if let Some(env_path) = env::var_os(CITIES_ENV_VAR).filter(|value| !value.is_empty()) {
        debug!(env = CITIES_ENV_VAR, "using city data from environment");
        return Ok(Some(PathBuf::from(env_path)));
    }

    match default_cities_path() {
        Ok(path) if path.is_file() => Ok(Some(path)),
        Ok(_) => Ok(None),
        Err(Error::ProjectDirsUnavailable) => {
            debug!("no project data directory on this platform");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// The bundled city dataset merged with the curated named areas.
///
/// Parsed once per process.
pub fn bundled_catalog() -> Result<&'static LocationCatalog> {
    BUNDLED_CATALOG.get_or_try_init(LocationCatalog::bundled)
}

/// Load the catalog used for routing: the resolved CSV (see
/// [`resolve_cities_path`]) or the bundled data, with named areas merged.
pub fn load_catalog(explicit: Option<&Path>) -> Result<LocationCatalog> {
    match resolve_cities_path(explicit)? {
        Some(path) => Ok(LocationCatalog::from_path(&path)?.with_named_areas()),
        None => bundled_catalog().cloned(),
    }
}
