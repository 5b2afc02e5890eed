use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Lowest-cost path through the proximity graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// City names from source to destination, inclusive.
    pub path: Vec<String>,
    /// Sum of the edge weights along `path`, in kilometres.
    pub total_km: f64,
}

/// Run Dijkstra's algorithm between two cities of `graph`.
///
/// Returns `Ok(None)` when the destination is unreachable. Both names are
/// checked before the search starts and unknown names produce
/// [`Error::UnknownLocation`](crate::Error::UnknownLocation).
pub fn shortest_path(graph: &Graph, source: &str, destination: &str) -> Result<Option<ShortestPath>> {
    let start = graph.require_node(source)?;
    let goal = graph.require_node(destination)?;

    if start == goal {
        return Ok(Some(ShortestPath {
            path: vec![source.to_string()],
            total_km: 0.0,
        }));
    }

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        if entry.node == goal {
            break;
        }

        let current_distance = distances[entry.node];
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if visited[next] {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if distances[goal].is_infinite() {
        return Ok(None);
    }

    let path = reconstruct_path(&parents, start, goal)
        .into_iter()
        .filter_map(|id| graph.node_name(id).map(str::to_string))
        .collect();

    Ok(Some(ShortestPath {
        path,
        total_km: distances[goal],
    }))
}

fn reconstruct_path(parents: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // lowest node id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_cost_then_lowest_node() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(3, 5.0));
        heap.push(QueueEntry::new(1, 2.0));
        heap.push(QueueEntry::new(0, 5.0));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.node).collect();
        assert_eq!(order, vec![1, 0, 3]);
    }

    #[test]
    fn reconstruct_walks_parents_back_to_start() {
        let parents = vec![None, Some(0), Some(1)];
        assert_eq!(reconstruct_path(&parents, 0, 2), vec![0, 1, 2]);
    }
}
