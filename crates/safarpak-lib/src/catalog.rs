//! Location catalog: hub cities, curated named areas and user-picked points.
//!
//! The catalog is the only place location names are resolved. Names are the
//! primary key; inserting a name that already exists is a no-op, so the first
//! entry for a name always wins.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::areas::AREA_GROUPS;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Picked map points within this distance of a known location reuse its name.
pub const PICK_SNAP_RADIUS_KM: f64 = 5.0;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// What a catalog entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// Member of the city dataset; the only kind used as a routing hub.
    City,
    /// Curated neighbourhood, landmark, terminal or institution.
    NamedArea,
    /// Point picked on a map at runtime.
    Custom,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            LocationKind::City => "city",
            LocationKind::NamedArea => "named_area",
            LocationKind::Custom => "custom",
        };
        f.write_str(value)
    }
}

/// A named point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub kind: LocationKind,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            kind,
        }
    }

    pub fn city(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(name, lat, lon, LocationKind::City)
    }

    pub fn named_area(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(name, lat, lon, LocationKind::NamedArea)
    }

    /// A custom point named after its coordinates.
    pub fn custom(lat: f64, lon: f64) -> Self {
        Self::new(custom_location_name(lat, lon), lat, lon, LocationKind::Custom)
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Great-circle distance to another location in kilometres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.point().distance_to(&other.point())
    }
}

/// Display name given to a picked map point.
pub fn custom_location_name(lat: f64, lon: f64) -> String {
    format!("Custom Location ({lat:.4}, {lon:.4})")
}

/// Labelled group of location names, e.g. "Airports".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCategory {
    pub label: String,
    pub names: Vec<String>,
}

/// Name-keyed collection of locations in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,
    name_to_index: HashMap<String, usize>,
    categories: Vec<LocationCategory>,
    source: Option<PathBuf>,
}

impl LocationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from locations; later duplicates of a name are dropped.
    pub fn from_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let mut catalog = Self::new();
        for location in locations {
            catalog.insert(location);
        }
        catalog
    }

    /// The checked-in Pakistani city dataset merged with the curated areas.
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_reader(crate::data::BUNDLED_CITIES_CSV.as_bytes())?;
        Ok(catalog.with_named_areas())
    }

    /// Load hub cities from a CSV file with `City`, `Latitude`, `Longitude` columns.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(path = %path.display(), cities = catalog.len(), "loaded city catalog");
        Ok(catalog)
    }

    /// Load hub cities from CSV data (e.g. a file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::CatalogValidation {
                message: format!("failed to read city data headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        };
        let normalized_headers: Vec<String> = headers.iter().map(normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("city", &["city", "name", "cityname"]),
            ("latitude", &["latitude", "lat"]),
            ("longitude", &["longitude", "lon", "lng", "long"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(i) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h == alt))
            {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = ["city", "latitude", "longitude"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!(
                    "city data missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut catalog = Self::new();
        let mut duplicates = 0usize;
        for (offset, result) in csv_reader.records().enumerate() {
            // Header occupies line 1.
            let row = offset + 2;
            let record = result?;
            let get = |field: &str| index_map.get(field).and_then(|&i| record.get(i));

            let name = get("city").unwrap_or_default().to_string();
            if name.is_empty() {
                return Err(Error::CatalogValidation {
                    message: format!("missing city name at row {row}"),
                });
            }
            let lat = parse_coordinate(get("latitude"), "latitude", &name, row, 90.0)?;
            let lon = parse_coordinate(get("longitude"), "longitude", &name, row, 180.0)?;

            if !catalog.insert(Location::city(name, lat, lon)) {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!(duplicates, "ignored duplicate city rows");
        }

        Ok(catalog)
    }

    /// Merge the curated named areas. Names already present are kept as-is.
    pub fn with_named_areas(mut self) -> Self {
        for group in AREA_GROUPS {
            let mut names = Vec::with_capacity(group.entries.len());
            for &(name, lat, lon) in group.entries {
                self.insert(Location::named_area(name, lat, lon));
                names.push(name.to_string());
            }
            self.categories.push(LocationCategory {
                label: group.label.to_string(),
                names,
            });
        }
        self
    }

    /// Insert a location. Returns `false` (and leaves the catalog unchanged)
    /// when the name is already taken.
    pub fn insert(&mut self, location: Location) -> bool {
        if self.name_to_index.contains_key(&location.name) {
            return false;
        }
        self.name_to_index
            .insert(location.name.clone(), self.locations.len());
        self.locations.push(location);
        true
    }

    /// Add a picked map point and return its name. Re-picking the same
    /// coordinates returns the existing name.
    pub fn insert_custom(&mut self, lat: f64, lon: f64) -> String {
        let location = Location::custom(lat, lon);
        let name = location.name.clone();
        self.insert(location);
        name
    }

    /// Name for a picked map point: the nearest known location when it lies
    /// within [`PICK_SNAP_RADIUS_KM`], otherwise a newly inserted custom point.
    pub fn resolve_point(&mut self, lat: f64, lon: f64) -> String {
        if let Some((nearest, distance)) = self.nearest(GeoPoint::new(lat, lon)) {
            if distance <= PICK_SNAP_RADIUS_KM {
                return nearest.name.clone();
            }
        }
        self.insert_custom(lat, lon)
    }

    /// Closest location to `point`; exact distance ties go to the
    /// lexicographically smallest name.
    pub fn nearest(&self, point: GeoPoint) -> Option<(&Location, f64)> {
        nearest_by_distance(point, self.locations.iter())
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.name_to_index.get(name).map(|&i| &self.locations[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Look up a location by name, falling back to a unique case-insensitive
    /// match. Unknown names produce suggestions.
    pub fn resolve(&self, name: &str) -> Result<&Location> {
        if let Some(location) = self.get(name) {
            return Ok(location);
        }

        let mut folded = self
            .locations
            .iter()
            .filter(|loc| loc.name.eq_ignore_ascii_case(name.trim()));
        if let (Some(location), None) = (folded.next(), folded.next()) {
            return Ok(location);
        }

        Err(Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, 3),
        })
    }

    /// Names similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        rank_similar_names(name, self.locations.iter().map(|loc| loc.name.as_str()), limit)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn names_sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.locations.iter().map(|l| l.name.clone()).collect();
        names.sort();
        names
    }

    /// Routing hubs: every city, in dataset order.
    pub fn hub_cities(&self) -> Vec<Location> {
        self.locations
            .iter()
            .filter(|loc| loc.kind == LocationKind::City)
            .cloned()
            .collect()
    }

    pub fn categories(&self) -> &[LocationCategory] {
        &self.categories
    }

    /// Category by label, compared case-insensitively.
    pub fn category(&self, label: &str) -> Option<&LocationCategory> {
        self.categories
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Closest of `candidates` to `point`, with exact ties going to the smaller name.
pub(crate) fn nearest_by_distance<'a, I>(point: GeoPoint, candidates: I) -> Option<(&'a Location, f64)>
where
    I: IntoIterator<Item = &'a Location>,
{
    candidates
        .into_iter()
        .map(|loc| (loc, point.distance_to(&loc.point())))
        .min_by(|(a, da), (b, db)| da.total_cmp(db).then_with(|| a.name.cmp(&b.name)))
}

/// Rank `candidates` by Jaro-Winkler similarity to `query`.
pub(crate) fn rank_similar_names<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = strsim::jaro_winkler(&query, &candidate.to_lowercase());
            (score >= FUZZY_MATCH_THRESHOLD).then_some((score, candidate))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

fn parse_coordinate(
    value: Option<&str>,
    field: &str,
    name: &str,
    row: usize,
    bound: f64,
) -> Result<f64> {
    let raw = value.ok_or_else(|| Error::CatalogValidation {
        message: format!("missing {field} for city '{name}' at row {row}"),
    })?;
    let parsed = raw.parse::<f64>().map_err(|e| Error::CatalogValidation {
        message: format!("invalid {field} for city '{name}' at row {row}: {e}"),
    })?;
    if !parsed.is_finite() || parsed.abs() > bound {
        return Err(Error::CatalogValidation {
            message: format!("{field} {parsed} for city '{name}' at row {row} is out of range"),
        });
    }
    Ok(parsed)
}
