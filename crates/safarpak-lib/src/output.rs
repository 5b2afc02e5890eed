use std::fmt::{self, Write};

use serde::Serialize;

use crate::catalog::{Location, LocationCatalog};
use crate::error::{Error, Result};
use crate::routing::{RouteClassification, RouteResult};
use crate::travel::{
    estimate_fuel, format_duration, road_distance_km, travel_hours, FuelEstimate, TravelConfig,
    TravelMode, ROAD_FACTOR,
};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Offline route sheet.
    PlainText,
    /// Markdown.
    RichText,
}

/// Compass heading of a leg, taken from the dominant axis of its
/// coordinate delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Heading from `from` to `to`. Equal deltas count as east/west.
    pub fn between(from: &Location, to: &Location) -> Self {
        let lat_diff = to.lat - from.lat;
        let lon_diff = to.lon - from.lon;
        if lat_diff.abs() > lon_diff.abs() {
            if lat_diff > 0.0 {
                Heading::North
            } else {
                Heading::South
            }
        } else if lon_diff > 0.0 {
            Heading::East
        } else {
            Heading::West
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Heading::North => "↑",
            Heading::South => "↓",
            Heading::East => "→",
            Heading::West => "←",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heading::North => "north",
            Heading::South => "south",
            Heading::East => "east",
            Heading::West => "west",
        };
        f.write_str(value)
    }
}

/// One leg between consecutive route entries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub step: usize,
    pub from: String,
    pub to: String,
    /// Estimated road distance of the leg.
    pub distance_km: f64,
    /// Road distance covered up to and including this leg.
    pub cumulative_km: f64,
    pub est_time: String,
    pub heading: Heading,
    pub instruction: String,
}

/// Route entry with its coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteWaypoint {
    pub stop_number: usize,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Structured representation of a composed route that higher-level consumers
/// can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub generated: String,
    pub note: String,
    pub from: String,
    pub to: String,
    pub classification: RouteClassification,
    pub straight_distance_km: f64,
    /// Road estimate for the whole route.
    pub total_distance_km: f64,
    pub transport_mode: TravelMode,
    pub speed_kmh: f64,
    pub stops: usize,
    pub travel_time: String,
    pub legs: Vec<RouteLeg>,
    pub coordinates: Vec<RouteWaypoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<FuelSummary>,
}

/// Fuel estimate together with the settings it was derived from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FuelSummary {
    pub liters_needed: f64,
    pub cost_estimate: f64,
    pub fuel_average_kmpl: f64,
    pub fuel_price_per_liter: f64,
}

impl FuelSummary {
    fn new(estimate: FuelEstimate, config: &TravelConfig) -> Self {
        Self {
            liters_needed: estimate.liters,
            cost_estimate: estimate.cost,
            fuel_average_kmpl: config.fuel_average_kmpl,
            fuel_price_per_liter: config.fuel_price_per_liter,
        }
    }
}

impl RouteSummary {
    /// Convert a [`RouteResult`] into a summary with resolved coordinates,
    /// per-leg directions and travel estimates.
    pub fn from_route(
        route: &RouteResult,
        catalog: &LocationCatalog,
        config: &TravelConfig,
    ) -> Result<Self> {
        let locations = route
            .path
            .iter()
            .map(|name| catalog.resolve(name))
            .collect::<Result<Vec<_>>>()?;
        let (Some(first), Some(last)) = (locations.first(), locations.last()) else {
            return Err(Error::EmptyRoute);
        };

        let coordinates = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| RouteWaypoint {
                stop_number: i + 1,
                name: loc.name.clone(),
                lat: loc.lat,
                lon: loc.lon,
            })
            .collect();

        let mut cumulative = 0.0;
        let legs = locations
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let (from, to) = (pair[0], pair[1]);
                let distance = road_distance_km(from.distance_to(to));
                cumulative += distance;
                RouteLeg {
                    step: i + 1,
                    from: from.name.clone(),
                    to: to.name.clone(),
                    distance_km: distance,
                    cumulative_km: cumulative,
                    est_time: format_duration(travel_hours(distance, config.speed_kmh)),
                    heading: Heading::between(from, to),
                    instruction: format!("Head towards {}", to.name),
                }
            })
            .collect();

        let total_distance_km = road_distance_km(route.distance_km);

        Ok(Self {
            generated: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            note: format!(
                "Distances are road estimates ({ROAD_FACTOR}x straight-line distance)"
            ),
            from: first.name.clone(),
            to: last.name.clone(),
            classification: route.classification,
            straight_distance_km: route.distance_km,
            total_distance_km,
            transport_mode: config.mode,
            speed_kmh: config.speed_kmh,
            stops: route.path.len().saturating_sub(2),
            travel_time: format_duration(travel_hours(total_distance_km, config.speed_kmh)),
            legs,
            coordinates,
            fuel: estimate_fuel(total_distance_km, config)
                .map(|estimate| FuelSummary::new(estimate, config)),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    /// Pretty-printed JSON document for offline use.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "SAFARPAK ROUTE");
        let _ = writeln!(buffer, "Generated: {}", self.generated);
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "ROUTE SUMMARY");
        let _ = writeln!(buffer, "  From: {}", self.from);
        let _ = writeln!(buffer, "  To:   {}", self.to);
        let _ = writeln!(buffer, "  Route type: {}", self.classification);
        let _ = writeln!(
            buffer,
            "  Total distance: ~{:.1} km (road estimate, {:.1} km straight)",
            self.total_distance_km, self.straight_distance_km
        );
        let _ = writeln!(
            buffer,
            "  Transport mode: {}",
            self.transport_mode.to_string().to_uppercase()
        );
        let _ = writeln!(buffer, "  Speed: {} km/h", self.speed_kmh);
        let _ = writeln!(buffer, "  Travel time: {}", self.travel_time);
        let _ = writeln!(buffer, "  Stops: {}", self.stops);

        if let Some(fuel) = &self.fuel {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "FUEL ESTIMATE");
            let _ = writeln!(buffer, "  Liters needed: {:.1} L", fuel.liters_needed);
            let _ = writeln!(
                buffer,
                "  Estimated cost: Rs. {}",
                group_thousands(fuel.cost_estimate)
            );
            let _ = writeln!(
                buffer,
                "  (Based on {} km/L @ Rs.{}/L)",
                fuel.fuel_average_kmpl, fuel.fuel_price_per_liter
            );
        }

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "DIRECTIONS (at {} km/h)", self.speed_kmh);
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "  [{}] {} {} {}",
                leg.step,
                leg.from,
                leg.heading.arrow(),
                leg.to
            );
            let _ = writeln!(
                buffer,
                "      ~{:.1} km, {} (total: {:.1} km)",
                leg.distance_km, leg.est_time, leg.cumulative_km
            );
        }
        let _ = writeln!(buffer, "  [end] Destination reached");
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "{}", self.note);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({}, {} stops)",
            self.from, self.to, self.classification, self.stops
        );
        let _ = writeln!(
            buffer,
            "* Distance: **~{:.1} km** by road ({:.1} km straight)",
            self.total_distance_km, self.straight_distance_km
        );
        let _ = writeln!(
            buffer,
            "* Time: **{}** by {} at {} km/h",
            self.travel_time, self.transport_mode, self.speed_kmh
        );
        if let Some(fuel) = &self.fuel {
            let _ = writeln!(
                buffer,
                "* Fuel: **{:.1} L** (~Rs. {})",
                fuel.liters_needed,
                group_thousands(fuel.cost_estimate)
            );
        }
        let _ = writeln!(buffer);
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "{:>3}. {} **{}** `{:.1} km` _{}_",
                leg.step,
                leg.heading.arrow(),
                leg.instruction,
                leg.distance_km,
                leg.est_time
            );
        }
        buffer
    }
}

/// Whole rupees with comma thousands separators, e.g. `12,345`.
fn group_thousands(value: f64) -> String {
    let whole = if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    };
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_uses_dominant_axis() {
        let origin = Location::city("O", 30.0, 70.0);
        assert_eq!(
            Heading::between(&origin, &Location::city("N", 31.0, 70.5)),
            Heading::North
        );
        assert_eq!(
            Heading::between(&origin, &Location::city("W", 29.9, 69.0)),
            Heading::West
        );
        assert_eq!(
            Heading::between(&origin, &Location::city("E", 31.0, 71.0)),
            Heading::East
        );
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0.4), "0");
        assert_eq!(group_thousands(999.9), "999");
        assert_eq!(group_thousands(1234.0), "1,234");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }
}
