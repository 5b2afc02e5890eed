//! Route composition between arbitrary locations.
//!
//! A route between two locations that are not themselves hub cities is built
//! in three parts: a straight hop from the source to its nearest hub, the
//! shortest path through the proximity graph between the hubs, and a straight
//! hop from the destination's nearest hub to the destination.
//!
//! - [`RouteClassification`] - how the route was obtained
//! - [`RouteResult`] - composed path and distance
//! - [`RouteComposer`] - catalog, hubs and graph bundled for repeated queries
//! - [`compose_route`] - the composition routine itself

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{nearest_by_distance, Location, LocationCatalog};
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::graph::Graph;
use crate::path::shortest_path;

/// Endpoints closer than this are joined directly without consulting hubs.
pub const LOCAL_RADIUS_KM: f64 = 50.0;

/// How a [`RouteResult`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClassification {
    /// Endpoints are close together or share a nearest hub.
    Local,
    /// The hub graph produced a path.
    Intercity,
    /// No hub path exists; straight-line fallback.
    Direct,
}

impl fmt::Display for RouteClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteClassification::Local => "local",
            RouteClassification::Intercity => "intercity",
            RouteClassification::Direct => "direct",
        };
        f.write_str(value)
    }
}

/// Composed route between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Location names from source to destination without repeats.
    pub path: Vec<String>,
    /// Great-circle length of the route in kilometres.
    pub distance_km: f64,
    pub classification: RouteClassification,
}

impl RouteResult {
    fn straight(source: &Location, destination: &Location, classification: RouteClassification) -> Self {
        let path = if source.name == destination.name {
            vec![source.name.clone()]
        } else {
            vec![source.name.clone(), destination.name.clone()]
        };
        Self {
            path,
            distance_km: source.distance_to(destination),
            classification,
        }
    }

    /// Number of hops (edges) in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// Closest hub to `point` by linear scan. Exact distance ties go to the
/// lexicographically smallest name.
pub fn nearest_hub(point: GeoPoint, hubs: &[Location]) -> Option<(&Location, f64)> {
    nearest_by_distance(point, hubs)
}

/// Compose a route from `source` to `destination` through the hub graph.
///
/// Never fails: when the hubs cannot be connected the route falls back to a
/// [`RouteClassification::Direct`] straight line and the reason is logged.
/// Every hub in a returned intercity path resolves in `catalog`; the
/// endpoints need not be catalog entries.
pub fn compose_route(
    source: &Location,
    destination: &Location,
    catalog: &LocationCatalog,
    hubs: &[Location],
    graph: &Graph,
) -> RouteResult {
    let direct_km = source.distance_to(destination);
    if direct_km < LOCAL_RADIUS_KM || source.name == destination.name {
        return RouteResult::straight(source, destination, RouteClassification::Local);
    }

    let (Some((src_hub, src_hub_km)), Some((dst_hub, dst_hub_km))) = (
        nearest_hub(source.point(), hubs),
        nearest_hub(destination.point(), hubs),
    ) else {
        warn!(
            from = %source.name,
            to = %destination.name,
            "no hub cities available; using direct route"
        );
        return RouteResult::straight(source, destination, RouteClassification::Direct);
    };

    if src_hub.name == dst_hub.name {
        debug!(hub = %src_hub.name, "endpoints share a nearest hub");
        return RouteResult::straight(source, destination, RouteClassification::Local);
    }

    let hub_path = match shortest_path(graph, &src_hub.name, &dst_hub.name) {
        Ok(Some(found)) => found,
        Ok(None) => {
            warn!(
                from = %src_hub.name,
                to = %dst_hub.name,
                threshold_km = graph.threshold_km(),
                "hubs are not connected; using direct route"
            );
            return RouteResult::straight(source, destination, RouteClassification::Direct);
        }
        Err(err) => {
            warn!(error = %err, "hub search failed; using direct route");
            return RouteResult::straight(source, destination, RouteClassification::Direct);
        }
    };

    let path = splice_path(&source.name, &hub_path.path, &destination.name);
    // Endpoints may be unsaved map picks; only the hubs must resolve.
    let interior = &path[1..path.len() - 1];
    if let Some(missing) = interior.iter().find(|name| !catalog.contains(name)) {
        warn!(hub = %missing, "hub missing from catalog; using direct route");
        return RouteResult::straight(source, destination, RouteClassification::Direct);
    }

    RouteResult {
        path,
        distance_km: src_hub_km + hub_path.total_km + dst_hub_km,
        classification: RouteClassification::Intercity,
    }
}

/// `[source] + hubs + [destination]` with the endpoints pinned and any later
/// repeat of a name dropped.
fn splice_path(source: &str, hubs: &[String], destination: &str) -> Vec<String> {
    let mut path = Vec::with_capacity(hubs.len() + 2);
    path.push(source.to_string());
    for hub in hubs {
        if hub != source && hub != destination && !path.contains(hub) {
            path.push(hub.clone());
        }
    }
    path.push(destination.to_string());
    path
}

/// Catalog, hub set and proximity graph bundled for repeated route queries.
#[derive(Debug, Clone)]
pub struct RouteComposer<'a> {
    catalog: &'a LocationCatalog,
    hubs: Vec<Location>,
    graph: &'a Graph,
}

impl<'a> RouteComposer<'a> {
    /// Use every city of `catalog` as a hub.
    pub fn new(catalog: &'a LocationCatalog, graph: &'a Graph) -> Self {
        Self::with_hubs(catalog, catalog.hub_cities(), graph)
    }

    pub fn with_hubs(catalog: &'a LocationCatalog, hubs: Vec<Location>, graph: &'a Graph) -> Self {
        Self {
            catalog,
            hubs,
            graph,
        }
    }

    pub fn hubs(&self) -> &[Location] {
        &self.hubs
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    pub fn compose(&self, source: &Location, destination: &Location) -> RouteResult {
        compose_route(source, destination, self.catalog, &self.hubs, self.graph)
    }

    /// Resolve both names through the catalog and compose a route.
    ///
    /// Unknown names fail with suggestions; identical endpoints fail with
    /// [`Error::DegenerateQuery`].
    pub fn compose_by_name(&self, from: &str, to: &str) -> Result<RouteResult> {
        let source = self.catalog.resolve(from)?;
        let destination = self.catalog.resolve(to)?;
        if source.name == destination.name {
            return Err(Error::DegenerateQuery {
                name: source.name.clone(),
            });
        }
        Ok(self.compose(source, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splice_pins_endpoints_and_drops_repeats() {
        let spliced = splice_path("Src", &names(&["Src", "H1", "H2", "H1", "Dst"]), "Dst");
        assert_eq!(spliced, names(&["Src", "H1", "H2", "Dst"]));
    }

    #[test]
    fn splice_keeps_hubs_between_custom_endpoints() {
        let spliced = splice_path("P", &names(&["H1", "H2"]), "Q");
        assert_eq!(spliced, names(&["P", "H1", "H2", "Q"]));
    }

    #[test]
    fn nearest_hub_of_empty_set_is_none() {
        assert!(nearest_hub(GeoPoint::new(0.0, 0.0), &[]).is_none());
    }

    #[test]
    fn identical_endpoints_give_single_entry_path() {
        let a = Location::city("A", 0.0, 0.0);
        let catalog = LocationCatalog::from_locations([a.clone()]);
        let graph = crate::graph::build_graph(&catalog.hub_cities(), 100.0);
        let result = compose_route(&a, &a, &catalog, &catalog.hub_cities(), &graph);
        assert_eq!(result.path, names(&["A"]));
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.classification, RouteClassification::Local);
    }
}
