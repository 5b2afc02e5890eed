//! SafarPak library entry points.
//!
//! This crate exposes the location catalog for Pakistani cities and curated
//! areas, the proximity graph built over hub cities, Dijkstra search on that
//! graph, and the composer that turns two arbitrary locations into a route.
//! Travel estimates and route summaries sit on top for presentation. The CLI
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod areas;
pub mod catalog;
pub mod data;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod travel;

pub use catalog::{
    custom_location_name, Location, LocationCatalog, LocationCategory, LocationKind,
    PICK_SNAP_RADIUS_KM,
};
pub use data::{bundled_catalog, default_cities_path, load_catalog, resolve_cities_path};
pub use error::{Error, Result};
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use graph::{build_graph, validate_threshold, Graph, GraphCache, DEFAULT_THRESHOLD_KM};
pub use output::{Heading, RouteLeg, RouteRenderMode, RouteSummary, RouteWaypoint};
pub use path::{shortest_path, ShortestPath};
pub use routing::{
    compose_route, nearest_hub, RouteClassification, RouteComposer, RouteResult, LOCAL_RADIUS_KM,
};
pub use travel::{
    estimate_fuel, format_duration, road_distance_km, travel_hours, FuelEstimate, TravelConfig,
    TravelMode, ROAD_FACTOR,
};
