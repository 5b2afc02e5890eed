//! Nearest command handler: which known location is closest to a point.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use safarpak_cli::output::{render_json, OutputFormat};
use safarpak_lib::{load_catalog, nearest_hub, GeoPoint, LocationKind, PICK_SNAP_RADIUS_KM};

/// Arguments for the nearest command.
#[derive(Debug, Clone)]
pub struct NearestCommandArgs {
    pub point: GeoPoint,
    /// Only consider hub cities.
    pub cities_only: bool,
}

#[derive(Debug, Serialize)]
struct NearestReport<'a> {
    name: &'a str,
    kind: LocationKind,
    lat: f64,
    lon: f64,
    distance_km: f64,
    /// Whether a map pick at this point would reuse the location's name.
    /// Omitted for hub-only searches, where a pick may snap to a non-hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    snaps: Option<bool>,
}

/// Handle the nearest subcommand.
pub fn handle_nearest_command(
    cities: Option<&Path>,
    format: OutputFormat,
    args: &NearestCommandArgs,
) -> Result<()> {
    let catalog = load_catalog(cities).context("failed to load city data")?;
    let hubs = catalog.hub_cities();

    let found = if args.cities_only {
        nearest_hub(args.point, &hubs)
    } else {
        catalog.nearest(args.point)
    };
    let (location, distance_km) =
        found.ok_or_else(|| anyhow::anyhow!("The catalog has no locations to compare against."))?;

    let report = NearestReport {
        name: &location.name,
        kind: location.kind,
        lat: location.lat,
        lon: location.lon,
        distance_km,
        snaps: (!args.cities_only).then_some(distance_km <= PICK_SNAP_RADIUS_KM),
    };

    match format {
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Rich => println!(
            "Nearest: **{}** _{}_ `{:.1} km` away",
            report.name, report.kind, report.distance_km
        ),
        OutputFormat::Text => println!(
            "Nearest: {} [{}] {:.1} km away ({:.4}, {:.4})",
            report.name, report.kind, report.distance_km, report.lat, report.lon
        ),
    }
    Ok(())
}
