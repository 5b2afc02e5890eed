//! Travel estimates derived from a route's straight-line distance.
//!
//! Distances on the proximity graph are great-circle lengths. Roads are
//! longer, so every user-facing figure (road distance, time, fuel) is scaled
//! by [`ROAD_FACTOR`] first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ratio between estimated road distance and great-circle distance.
pub const ROAD_FACTOR: f64 = 1.4;

/// Default fuel average in kilometres per litre.
pub const DEFAULT_FUEL_AVERAGE_KMPL: f64 = 12.0;

/// Default fuel price in rupees per litre.
pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 260.0;

/// Bikes cover this many times the distance of a car on the same fuel.
const BIKE_FUEL_MULTIPLIER: f64 = 1.5;

/// Estimated road distance for a straight-line distance.
pub fn road_distance_km(straight_km: f64) -> f64 {
    straight_km * ROAD_FACTOR
}

/// Means of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Car,
    Bike,
    Cycle,
    Walk,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Car,
        TravelMode::Bike,
        TravelMode::Cycle,
        TravelMode::Walk,
    ];

    /// Typical cruising speed in km/h.
    pub fn default_speed_kmh(self) -> f64 {
        match self {
            TravelMode::Car => 60.0,
            TravelMode::Bike => 50.0,
            TravelMode::Cycle => 15.0,
            TravelMode::Walk => 5.0,
        }
    }

    /// Whether the mode burns fuel.
    pub fn uses_fuel(self) -> bool {
        matches!(self, TravelMode::Car | TravelMode::Bike)
    }

    fn fuel_multiplier(self) -> f64 {
        match self {
            TravelMode::Bike => BIKE_FUEL_MULTIPLIER,
            _ => 1.0,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TravelMode::Car => "car",
            TravelMode::Bike => "bike",
            TravelMode::Cycle => "cycle",
            TravelMode::Walk => "walk",
        };
        f.write_str(value)
    }
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(TravelMode::Car),
            "bike" | "motorbike" => Ok(TravelMode::Bike),
            "cycle" | "bicycle" => Ok(TravelMode::Cycle),
            "walk" | "walking" => Ok(TravelMode::Walk),
            other => Err(Error::InvalidTravelConfig {
                message: format!("unknown travel mode '{other}'"),
            }),
        }
    }
}

/// Speed and fuel settings applied to a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelConfig {
    pub mode: TravelMode,
    pub speed_kmh: f64,
    pub fuel_average_kmpl: f64,
    pub fuel_price_per_liter: f64,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self::for_mode(TravelMode::Car)
    }
}

impl TravelConfig {
    /// Defaults for `mode` (its typical speed, default fuel figures).
    pub fn for_mode(mode: TravelMode) -> Self {
        Self {
            mode,
            speed_kmh: mode.default_speed_kmh(),
            fuel_average_kmpl: DEFAULT_FUEL_AVERAGE_KMPL,
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
        }
    }

    /// Validate the travel configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(Error::InvalidTravelConfig {
                message: format!("speed must be a positive number, got {}", self.speed_kmh),
            });
        }

        if !self.fuel_average_kmpl.is_finite() || self.fuel_average_kmpl <= 0.0 {
            return Err(Error::InvalidTravelConfig {
                message: format!(
                    "fuel average must be a positive number, got {}",
                    self.fuel_average_kmpl
                ),
            });
        }

        if !self.fuel_price_per_liter.is_finite() || self.fuel_price_per_liter < 0.0 {
            return Err(Error::InvalidTravelConfig {
                message: format!(
                    "fuel price must not be negative, got {}",
                    self.fuel_price_per_liter
                ),
            });
        }

        Ok(())
    }
}

/// Hours needed to cover `distance_km` at `speed_kmh`; zero for a
/// non-positive speed.
pub fn travel_hours(distance_km: f64, speed_kmh: f64) -> f64 {
    if speed_kmh > 0.0 {
        distance_km / speed_kmh
    } else {
        0.0
    }
}

/// Format a duration as `"42 min"` below one hour and `"3h 5m"` otherwise.
/// Partial minutes are truncated.
pub fn format_duration(hours: f64) -> String {
    let total_minutes = if hours.is_finite() && hours > 0.0 {
        (hours * 60.0) as u64
    } else {
        0
    };
    let (h, m) = (total_minutes / 60, total_minutes % 60);
    if h == 0 {
        format!("{m} min")
    } else {
        format!("{h}h {m}m")
    }
}

/// Fuel required for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEstimate {
    pub liters: f64,
    pub cost: f64,
}

/// Fuel needed for `distance_km` under `config`; `None` for modes that do not
/// burn fuel.
pub fn estimate_fuel(distance_km: f64, config: &TravelConfig) -> Option<FuelEstimate> {
    if !config.mode.uses_fuel() {
        return None;
    }
    let efficiency = config.fuel_average_kmpl * config.mode.fuel_multiplier();
    let liters = if efficiency > 0.0 {
        distance_km / efficiency
    } else {
        0.0
    };
    Some(FuelEstimate {
        liters,
        cost: liters * config.fuel_price_per_liter,
    })
}
