//! Great-circle distance on a spherical Earth.
//!
//! Every distance in the crate (graph edge weights, nearest-hub scans, leg
//! lengths) goes through [`distance_km`], so there is a single Haversine
//! implementation to reason about.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the Haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle surface distance between two points, in kilometres.
///
/// Uses the Haversine formula with a fixed radius of [`EARTH_RADIUS_KM`].
/// The result is exactly symmetric: `distance_km(a, b) == distance_km(b, a)`
/// bit for bit. NaN coordinates yield NaN.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    // Canonical argument order so swapped calls evaluate identical operations.
    let ((lat1, lon1), (lat2, lon2)) = if (lat2, lon2) < (lat1, lon1) {
        ((lat2, lon2), (lat1, lon1))
    } else {
        ((lat1, lon1), (lat2, lon2))
    };

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let a = sin_dlat * sin_dlat + lat1_rad.cos() * lat2_rad.cos() * sin_dlon * sin_dlon;
    // Clamp guards asin against rounding pushing `a` a hair above 1 for antipodes.
    EARTH_RADIUS_KM * 2.0 * a.sqrt().clamp(0.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KARACHI: GeoPoint = GeoPoint::new(24.86, 67.01);
    const PESHAWAR: GeoPoint = GeoPoint::new(34.0144, 71.5675);

    #[test]
    fn same_point_is_zero() {
        assert_eq!(KARACHI.distance_to(&KARACHI), 0.0);
    }

    #[test]
    fn karachi_to_peshawar_matches_reference() {
        let d = KARACHI.distance_to(&PESHAWAR);
        assert!((d - 1109.1).abs() < 0.5, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = distance_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn swapped_arguments_are_bit_identical() {
        let forward = distance_km(KARACHI.lat, KARACHI.lon, PESHAWAR.lat, PESHAWAR.lon);
        let backward = distance_km(PESHAWAR.lat, PESHAWAR.lon, KARACHI.lat, KARACHI.lon);
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn nan_input_propagates_without_panicking() {
        assert!(distance_km(f64::NAN, 0.0, 1.0, 1.0).is_nan());
        assert!(distance_km(0.0, 0.0, 1.0, f64::NAN).is_nan());
    }
}
