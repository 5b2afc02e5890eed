#![allow(dead_code)]

use safarpak_lib::{bundled_catalog, Location, LocationCatalog};

/// Three hubs on the equator: A at 0°, B at 1°, C at 3° longitude.
///
/// A-B is about 111 km, B-C about 222 km and A-C about 334 km.
pub fn equator_hubs() -> Vec<Location> {
    vec![
        Location::city("A", 0.0, 0.0),
        Location::city("B", 0.0, 1.0),
        Location::city("C", 0.0, 3.0),
    ]
}

pub fn equator_catalog() -> LocationCatalog {
    LocationCatalog::from_locations(equator_hubs())
}

pub fn bundled() -> &'static LocationCatalog {
    bundled_catalog().expect("bundled data loads")
}

/// Deterministic pseudo-random hubs inside a small box.
pub fn scattered_hubs(count: usize, seed: u64) -> Vec<Location> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / ((1u64 << 31) as f64)
    };
    (0..count)
        .map(|i| Location::city(format!("H{i}"), 28.0 + next() * 4.0, 68.0 + next() * 4.0))
        .collect()
}
