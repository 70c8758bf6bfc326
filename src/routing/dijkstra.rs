use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::debug;
use petgraph::stable_graph::NodeIndex;

use crate::network::transit_graph::TransitGraph;
use crate::routing::{Route, RoutingError};

/// Find the minimum-distance route between two stops using Dijkstra's
/// algorithm (all segment distances are non-negative).
///
/// The search keeps a binary-heap frontier of (tentative distance, index)
/// pairs, finalizes one stop per extraction, and stops as soon as the
/// target is extracted. The route is rebuilt by walking predecessor links
/// back from the target.
///
/// When several stops share the same tentative distance the extraction
/// order among them is unspecified; ties break by graph index here, which
/// may pick one of several equally short routes. The total distance is the
/// same either way.
pub fn shortest_route(
    graph: &TransitGraph,
    source: &str,
    target: &str,
) -> Result<Route, RoutingError> {
    let source_index = graph
        .resolve(source)
        .ok_or_else(|| RoutingError::UnknownStop(source.to_string()))?;
    let target_index = graph
        .resolve(target)
        .ok_or_else(|| RoutingError::UnknownStop(target.to_string()))?;

    let mut distances: HashMap<NodeIndex, u64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, NodeIndex)>> = BinaryHeap::new();

    distances.insert(source_index, 0);
    frontier.push(Reverse((0, source_index)));

    while let Some(Reverse((distance, index))) = frontier.pop() {
        // A stop can sit in the frontier multiple times with outdated
        // distances; only the first extraction finalizes it.
        if !visited.insert(index) {
            continue;
        }
        if index == target_index {
            break;
        }
        for (neighbor, segment) in graph.incident_segments(index) {
            if visited.contains(&neighbor) {
                continue;
            }
            // Saturate so hand-authored files with absurd distances cannot
            // overflow the relaxation. No infinity sentinel: an unseen stop
            // always relaxes, so even a saturated distance stays reachable.
            let candidate = distance.saturating_add(segment.distance_m);
            let best = distances.get(&neighbor).copied();
            if best.map_or(true, |b| candidate < b) {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, index);
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let no_route = || RoutingError::NoRoute {
        origin: source.to_string(),
        target: target.to_string(),
    };

    if !visited.contains(&target_index) {
        return Err(no_route());
    }
    let total_distance_m = distances
        .get(&target_index)
        .copied()
        .ok_or_else(|| no_route())?;

    let mut indices = vec![target_index];
    let mut current = target_index;
    while current != source_index {
        match predecessors.get(&current) {
            Some(&previous) => {
                indices.push(previous);
                current = previous;
            }
            None => return Err(no_route()),
        }
    }
    indices.reverse();

    let stops = indices
        .into_iter()
        .filter_map(|index| graph.stop(index).cloned())
        .collect();
    let route = Route {
        stops,
        total_distance_m,
    };
    debug!("shortest route {source} -> {target}: {route} ({total_distance_m} m)");
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::siginjai::SIGINJAI;

    fn diamond() -> TransitGraph {
        let mut graph = TransitGraph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_stop(name);
        }
        graph.add_segment("A", "B", 10).unwrap();
        graph.add_segment("B", "C", 5).unwrap();
        graph.add_segment("A", "C", 20).unwrap();
        graph.add_segment("C", "D", 1).unwrap();
        graph
    }

    /// Enumerate every simple path between two stops and return the
    /// smallest distance sum, as an oracle for minimality checks.
    fn brute_force_minimum(graph: &TransitGraph, source: &str, target: &str) -> Option<u64> {
        let source = graph.resolve(source)?;
        let target = graph.resolve(target)?;
        let mut best = None;
        let mut on_path = HashSet::new();
        on_path.insert(source);
        explore(graph, source, target, 0, &mut on_path, &mut best);
        best
    }

    fn explore(
        graph: &TransitGraph,
        current: NodeIndex,
        target: NodeIndex,
        distance: u64,
        on_path: &mut HashSet<NodeIndex>,
        best: &mut Option<u64>,
    ) {
        if current == target {
            if best.map_or(true, |b| distance < b) {
                *best = Some(distance);
            }
            return;
        }
        for (neighbor, segment) in graph.incident_segments(current) {
            if on_path.insert(neighbor) {
                explore(graph, neighbor, target, distance + segment.distance_m, on_path, best);
                on_path.remove(&neighbor);
            }
        }
    }

    #[test]
    fn prefers_detour_over_heavier_direct_segment() {
        let graph = diamond();
        let route = shortest_route(&graph, "A", "D").unwrap();
        assert_eq!(route.to_string(), "A -> B -> C -> D");
        assert_eq!(route.total_distance_m, 16);
    }

    #[test]
    fn route_segments_exist_and_distances_sum() {
        let graph = diamond();
        let route = shortest_route(&graph, "A", "D").unwrap();

        let mut sum = 0;
        for pair in route.stops.windows(2) {
            let a = graph.resolve(&pair[0].name).unwrap();
            let b = graph.resolve(&pair[1].name).unwrap();
            let (_, segment) = graph
                .incident_segments(a)
                .find(|(neighbor, _)| *neighbor == b)
                .expect("consecutive route stops must be joined by a segment");
            sum += segment.distance_m;
        }
        assert_eq!(sum, route.total_distance_m);
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let graph = diamond();
        for source in ["A", "B", "C", "D"] {
            for target in ["A", "B", "C", "D"] {
                let route = shortest_route(&graph, source, target).unwrap();
                let oracle = brute_force_minimum(&graph, source, target).unwrap();
                assert_eq!(route.total_distance_m, oracle, "{source} -> {target}");
            }
        }
    }

    #[test]
    fn same_stop_yields_trivial_route() {
        let graph = diamond();
        let route = shortest_route(&graph, "B", "B").unwrap();
        assert_eq!(route.stops.len(), 1);
        assert_eq!(route.stops[0].name, "B");
        assert_eq!(route.total_distance_m, 0);
    }

    #[test]
    fn unreachable_target_is_a_no_route_error() {
        let mut graph = diamond();
        graph.add_stop("Island");
        let err = shortest_route(&graph, "A", "Island").unwrap_err();
        assert_eq!(
            err,
            RoutingError::NoRoute {
                origin: "A".to_string(),
                target: "Island".to_string(),
            }
        );
        assert_eq!(err.to_string(), "No route connects A and Island");
    }

    #[test]
    fn near_maximum_distances_do_not_overflow() {
        let mut graph = TransitGraph::new();
        for name in ["A", "B", "C"] {
            graph.add_stop(name);
        }
        graph.add_segment("A", "B", u64::MAX - 1).unwrap();
        graph.add_segment("B", "C", u64::MAX - 1).unwrap();

        let route = shortest_route(&graph, "A", "C").unwrap();
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(route.total_distance_m, u64::MAX);
    }

    #[test]
    fn unknown_stop_is_rejected() {
        let graph = diamond();
        let err = shortest_route(&graph, "A", "Z").unwrap_err();
        assert_eq!(err, RoutingError::UnknownStop("Z".to_string()));
    }

    #[test]
    fn siginjai_route_from_pijoan_to_pasar() {
        let graph = SIGINJAI.build().unwrap();
        let route = shortest_route(&graph, "Pijoan", "Pasar (WTC)").unwrap();
        assert_eq!(
            route.to_string(),
            "Pijoan -> Simpang Rimbo -> UNJA Telanai -> Pasar (WTC)"
        );
        assert_eq!(route.total_distance_m, 22700);

        let oracle = brute_force_minimum(&graph, "Pijoan", "Pasar (WTC)").unwrap();
        assert_eq!(route.total_distance_m, oracle);
    }
}
