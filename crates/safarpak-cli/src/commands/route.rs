//! Route command handler for computing routes between locations.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use safarpak_cli::output::{render_route, OutputFormat};
use safarpak_lib::{
    build_graph, load_catalog, validate_threshold, Error as RouteError, GeoPoint,
    LocationCatalog, RouteComposer, RouteSummary, TravelConfig, TravelMode,
};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Source location name.
    pub from: Option<String>,
    /// Source picked as coordinates.
    pub from_point: Option<GeoPoint>,
    /// Destination location name.
    pub to: Option<String>,
    /// Destination picked as coordinates.
    pub to_point: Option<GeoPoint>,
    /// Proximity threshold for the hub graph, in kilometres.
    pub threshold: f64,
    pub mode: TravelMode,
    /// Overrides the mode's default speed.
    pub speed: Option<f64>,
    pub fuel_average: Option<f64>,
    pub fuel_price: Option<f64>,
}

impl RouteCommandArgs {
    /// Travel settings: the mode's defaults with any explicit overrides.
    pub fn travel_config(&self) -> TravelConfig {
        let mut config = TravelConfig::for_mode(self.mode);
        if let Some(speed) = self.speed {
            config.speed_kmh = speed;
        }
        if let Some(average) = self.fuel_average {
            config.fuel_average_kmpl = average;
        }
        if let Some(price) = self.fuel_price {
            config.fuel_price_per_liter = price;
        }
        config
    }
}

/// Handle the route subcommand.
///
/// Loads the catalog, builds the hub graph for the requested threshold and
/// prints the composed route with travel estimates.
pub fn handle_route_command(
    cities: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let threshold = validate_threshold(args.threshold)?;
    let config = args.travel_config();
    config.validate()?;

    let mut catalog = load_catalog(cities).context("failed to load city data")?;
    let from = resolve_endpoint(&mut catalog, args.from.as_deref(), args.from_point)?;
    let to = resolve_endpoint(&mut catalog, args.to.as_deref(), args.to_point)?;

    let hubs = catalog.hub_cities();
    let graph = build_graph(&hubs, threshold);
    let composer = RouteComposer::with_hubs(&catalog, hubs, &graph);

    let route = composer
        .compose_by_name(&from, &to)
        .map_err(handle_route_failure)?;
    info!(
        classification = %route.classification,
        hops = route.hop_count(),
        distance_km = route.distance_km,
        "composed route"
    );

    let summary = RouteSummary::from_route(&route, &catalog, &config)?;
    render_route(&summary, format)?;
    Ok(())
}

fn resolve_endpoint(
    catalog: &mut LocationCatalog,
    name: Option<&str>,
    point: Option<GeoPoint>,
) -> Result<String> {
    match (name, point) {
        (Some(name), _) => Ok(name.to_string()),
        (None, Some(point)) => Ok(catalog.resolve_point(point.lat, point.lon)),
        (None, None) => anyhow::bail!("each endpoint needs a location name or a LAT,LON point"),
    }
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        RouteError::DegenerateQuery { name } => anyhow::anyhow!(
            "Source and destination are both '{name}'. Pick two different locations."
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    if let [only] = suggestions {
        message.push_str(&format!(" Did you mean '{only}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RouteCommandArgs {
        RouteCommandArgs {
            from: Some("Karachi".to_string()),
            from_point: None,
            to: Some("Lahore".to_string()),
            to_point: None,
            threshold: 300.0,
            mode: TravelMode::Bike,
            speed: None,
            fuel_average: None,
            fuel_price: None,
        }
    }

    #[test]
    fn travel_config_uses_mode_defaults() {
        let config = args().travel_config();
        assert_eq!(config.mode, TravelMode::Bike);
        assert_eq!(config.speed_kmh, 50.0);
    }

    #[test]
    fn travel_config_applies_overrides() {
        let mut args = args();
        args.speed = Some(80.0);
        args.fuel_price = Some(300.0);
        let config = args.travel_config();
        assert_eq!(config.speed_kmh, 80.0);
        assert_eq!(config.fuel_price_per_liter, 300.0);
        assert_eq!(config.fuel_average_kmpl, 12.0);
    }

    #[test]
    fn unknown_location_message_lists_suggestions() {
        assert_eq!(
            format_unknown_location_message("Lahor", &["Lahore".to_string()]),
            "Unknown location 'Lahor'. Did you mean 'Lahore'?"
        );
        assert_eq!(
            format_unknown_location_message("Atlantis", &[]),
            "Unknown location 'Atlantis'."
        );
    }

    #[test]
    fn picked_points_snap_or_become_custom() {
        let mut catalog = LocationCatalog::from_locations([safarpak_lib::Location::city(
            "Lahore", 31.5497, 74.3436,
        )]);
        let snapped =
            resolve_endpoint(&mut catalog, None, Some(GeoPoint::new(31.55, 74.344))).unwrap();
        assert_eq!(snapped, "Lahore");

        let custom =
            resolve_endpoint(&mut catalog, None, Some(GeoPoint::new(25.0, 65.0))).unwrap();
        assert!(catalog.contains(&custom));
        assert!(resolve_endpoint(&mut catalog, None, None).is_err());
    }
}
