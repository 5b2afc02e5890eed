use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::catalog::{rank_similar_names, Location};
use crate::error::{Error, Result};

/// Proximity threshold used when the caller does not pick one.
pub const DEFAULT_THRESHOLD_KM: f64 = 300.0;

/// Dense node index assigned in input order.
pub type NodeId = usize;

/// Edge within the proximity graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
}

/// Undirected proximity graph over a set of hub cities.
///
/// Two cities are adjacent when their great-circle distance is at or below
/// the threshold the graph was built with. Every input city is a node, even
/// when it has no neighbours.
#[derive(Debug, Clone)]
pub struct Graph {
    threshold_km: f64,
    nodes: Vec<String>,
    name_to_id: HashMap<String, NodeId>,
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    /// Threshold the graph was built with, in kilometres.
    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(String::as_str)
    }

    /// Node names in input order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Return the neighbours for a given node identifier.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbour names and edge weights for a city, in input order.
    pub fn neighbours_of(&self, name: &str) -> Vec<(&str, f64)> {
        self.node_id(name)
            .map(|id| {
                self.neighbours(id)
                    .iter()
                    .map(|edge| (self.nodes[edge.target].as_str(), edge.distance))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn degree(&self, name: &str) -> Option<usize> {
        self.node_id(name).map(|id| self.neighbours(id).len())
    }

    /// Cities with no neighbour within the threshold.
    pub fn isolated_nodes(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(id, _)| self.adjacency[*id].is_empty())
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Undirected edges as `(a, b, weight)` with `a < b`, sorted by name.
    pub fn edges(&self) -> Vec<(String, String, f64)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (id, neighbours) in self.adjacency.iter().enumerate() {
            for edge in neighbours {
                let (a, b) = (&self.nodes[id], &self.nodes[edge.target]);
                if a < b {
                    edges.push((a.clone(), b.clone(), edge.distance));
                }
            }
        }
        edges.sort_by(|x, y| x.0.cmp(&y.0).then_with(|| x.1.cmp(&y.1)));
        edges
    }

    /// Node names similar to `name`, best match first.
    pub fn suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        rank_similar_names(name, self.nodes.iter().map(String::as_str), limit)
    }

    pub(crate) fn require_node(&self, name: &str) -> Result<NodeId> {
        self.node_id(name).ok_or_else(|| Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.suggestions(name, 3),
        })
    }
}

/// Reject thresholds that cannot describe a distance.
pub fn validate_threshold(threshold_km: f64) -> Result<f64> {
    if threshold_km.is_finite() && threshold_km > 0.0 {
        Ok(threshold_km)
    } else {
        Err(Error::InvalidThreshold {
            value: threshold_km,
        })
    }
}

/// Build the proximity graph for `cities` at `threshold_km`.
///
/// Every unordered pair is measured once and the same weight is stored in both
/// adjacency lists. Later entries repeating an earlier name are skipped.
pub fn build_graph(cities: &[Location], threshold_km: f64) -> Graph {
    let mut nodes: Vec<String> = Vec::with_capacity(cities.len());
    let mut name_to_id: HashMap<String, NodeId> = HashMap::with_capacity(cities.len());
    let mut members: Vec<&Location> = Vec::with_capacity(cities.len());

    for city in cities {
        if name_to_id.contains_key(&city.name) {
            warn!(city = %city.name, "duplicate city name in graph input; keeping first entry");
            continue;
        }
        name_to_id.insert(city.name.clone(), nodes.len());
        nodes.push(city.name.clone());
        members.push(city);
    }

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); members.len()];
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            let distance = members[i].distance_to(members[j]);
            if distance <= threshold_km {
                adjacency[i].push(Edge {
                    target: j,
                    distance,
                });
                adjacency[j].push(Edge {
                    target: i,
                    distance,
                });
            }
        }
    }

    let graph = Graph {
        threshold_km,
        nodes,
        name_to_id,
        adjacency: Arc::new(adjacency),
    };
    debug!(
        threshold_km,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built proximity graph"
    );
    graph
}

/// Memoizes proximity graphs per threshold for a fixed set of hub cities.
///
/// Graphs are built outside the lock; when two callers race on the same
/// threshold the first inserted graph is kept and returned to both.
#[derive(Debug, Default)]
pub struct GraphCache {
    graphs: RwLock<HashMap<u64, Arc<Graph>>>,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached graph for `threshold_km`, building it on first use.
    pub fn get_or_build(&self, cities: &[Location], threshold_km: f64) -> Result<Arc<Graph>> {
        let threshold_km = validate_threshold(threshold_km)?;
        let key = threshold_km.to_bits();

        if let Some(graph) = self.read_entry(key) {
            debug!(threshold_km, "graph cache hit");
            return Ok(graph);
        }

        let built = Arc::new(build_graph(cities, threshold_km));
        let mut guard = self
            .graphs
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Arc::clone(guard.entry(key).or_insert(built)))
    }

    /// Number of thresholds currently cached.
    pub fn len(&self) -> usize {
        self.graphs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_entry(&self, key: u64) -> Option<Arc<Graph>> {
        self.graphs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
            .cloned()
    }
}
