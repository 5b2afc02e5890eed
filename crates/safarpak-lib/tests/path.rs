mod common;

use safarpak_lib::{build_graph, shortest_path, Error, Graph, Location};

use common::{bundled, equator_hubs, scattered_hubs};

fn path_weight(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbours_of(&pair[0])
                .into_iter()
                .find(|(name, _)| *name == pair[1])
                .map(|(_, weight)| weight)
                .expect("consecutive path entries share an edge")
        })
        .sum()
}

/// Cheapest simple path by exhaustive enumeration.
fn brute_force(graph: &Graph, source: &str, destination: &str) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: &str,
        destination: &str,
        visited: &mut Vec<String>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == destination {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (next, weight) in graph.neighbours_of(current) {
            if visited.iter().any(|v| v == next) {
                continue;
            }
            visited.push(next.to_string());
            walk(graph, next, destination, visited, cost + weight, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![source.to_string()];
    walk(graph, source, destination, &mut visited, 0.0, &mut best);
    best
}

#[test]
fn disconnected_hubs_have_no_path() {
    let graph = build_graph(&equator_hubs(), 150.0);
    let result = shortest_path(&graph, "A", "C").expect("known nodes");
    assert!(result.is_none());
}

#[test]
fn path_goes_through_intermediate_hub() {
    let graph = build_graph(&equator_hubs(), 250.0);
    let found = shortest_path(&graph, "A", "C")
        .expect("known nodes")
        .expect("path exists");

    assert_eq!(found.path, vec!["A", "B", "C"]);
    assert!((found.total_km - 333.58).abs() < 0.01, "got {}", found.total_km);
    assert_eq!(found.total_km, path_weight(&graph, &found.path));
}

#[test]
fn never_worse_than_any_candidate_route() {
    let graph = build_graph(&equator_hubs(), 400.0);
    let found = shortest_path(&graph, "A", "C").unwrap().unwrap();

    // On the equator A-B-C and A-C measure the same up to rounding.
    let detour = path_weight(&graph, &["A", "B", "C"].map(String::from));
    assert!(found.total_km <= detour);
    assert!((found.total_km - 333.58).abs() < 0.01);
}

#[test]
fn equal_cost_paths_keep_the_first_established_predecessor() {
    // B and C mirror each other across the equator, so A-B-D and A-C-D tie.
    let a = Location::city("A", 0.0, 0.0);
    let b = Location::city("B", 0.5, 1.0);
    let c = Location::city("C", -0.5, 1.0);
    let d = Location::city("D", 0.0, 2.0);

    let graph = build_graph(&[a.clone(), b.clone(), c.clone(), d.clone()], 150.0);
    let found = shortest_path(&graph, "A", "D").unwrap().unwrap();
    assert_eq!(found.path, vec!["A", "B", "D"]);
    assert_eq!(
        path_weight(&graph, &["A", "B", "D"].map(String::from)),
        path_weight(&graph, &["A", "C", "D"].map(String::from))
    );

    let reordered = build_graph(&[a, c, b, d], 150.0);
    let found = shortest_path(&reordered, "A", "D").unwrap().unwrap();
    assert_eq!(found.path, vec!["A", "C", "D"]);
}

#[test]
fn same_source_and_destination_is_trivial() {
    let graph = build_graph(&equator_hubs(), 150.0);
    let found = shortest_path(&graph, "C", "C").unwrap().unwrap();
    assert_eq!(found.path, vec!["C"]);
    assert_eq!(found.total_km, 0.0);
}

#[test]
fn unknown_names_are_rejected_with_suggestions() {
    let graph = build_graph(&bundled().hub_cities(), 300.0);

    let err = shortest_path(&graph, "Lahor", "Karachi").unwrap_err();
    match err {
        Error::UnknownLocation { name, suggestions } => {
            assert_eq!(name, "Lahor");
            assert_eq!(suggestions.first().map(String::as_str), Some("Lahore"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        shortest_path(&graph, "Karachi", "Atlantis"),
        Err(Error::UnknownLocation { .. })
    ));
}

#[test]
fn matches_brute_force_on_small_graphs() {
    for seed in 1..=6u64 {
        let hubs = scattered_hubs(7, seed);
        for threshold in [120.0, 180.0, 260.0] {
            let graph = build_graph(&hubs, threshold);
            for source in graph.nodes() {
                for destination in graph.nodes() {
                    let found = shortest_path(&graph, source, destination).unwrap();
                    let expected = brute_force(&graph, source, destination);
                    match (found, expected) {
                        (Some(found), Some(expected)) => {
                            assert!(
                                (found.total_km - expected).abs() < 1e-6,
                                "seed {seed} {source}->{destination}: {} vs {expected}",
                                found.total_km
                            );
                            assert_eq!(found.path.first(), Some(source));
                            assert_eq!(found.path.last(), Some(destination));
                            assert!(
                                (found.total_km - path_weight(&graph, &found.path)).abs() < 1e-9
                            );
                        }
                        (None, None) => {}
                        (found, expected) => {
                            panic!("seed {seed} {source}->{destination}: {found:?} vs {expected:?}")
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn approximate_triangle_inequality_holds_for_paths() {
    let hubs = bundled().hub_cities();
    let graph = build_graph(&hubs, 300.0);
    let names = ["Karachi", "Multan", "Lahore", "Peshawar", "Quetta"];

    for a in names {
        for b in names {
            for c in names {
                let ab = shortest_path(&graph, a, b).unwrap().unwrap().total_km;
                let bc = shortest_path(&graph, b, c).unwrap().unwrap().total_km;
                let ac = shortest_path(&graph, a, c).unwrap().unwrap().total_km;
                assert!(ac <= ab + bc + 1e-6, "{a}->{c} exceeds via {b}");
            }
        }
    }
}

#[test]
fn karachi_to_lahore_through_sindh_and_punjab() {
    let graph = build_graph(&bundled().hub_cities(), 300.0);
    let found = shortest_path(&graph, "Karachi", "Lahore").unwrap().unwrap();

    assert_eq!(found.path.first().map(String::as_str), Some("Karachi"));
    assert_eq!(found.path.last().map(String::as_str), Some("Lahore"));
    assert!(found.path.len() > 2);
    assert!((found.total_km - 1037.85).abs() < 0.05, "got {}", found.total_km);

    let again = shortest_path(&graph, "Karachi", "Lahore").unwrap().unwrap();
    assert_eq!(found, again);
}

#[test]
fn isolated_karachi_is_unreachable_at_one_hundred_km() {
    let graph = build_graph(&bundled().hub_cities(), 100.0);
    assert!(shortest_path(&graph, "Karachi", "Lahore").unwrap().is_none());
}
