use std::collections::HashMap;

use log::debug;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use thiserror::Error;

use crate::network::{
    segment::Segment,
    stop::{Stop, StopId},
};

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
    #[error("Segment endpoints must be two distinct stops: {0}")]
    SelfLoop(String),
    #[error("Failed to parse network definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The transit network as an undirected weighted graph.
///
/// Wraps a petgraph `StableUnGraph` of `Stop` nodes and `Segment` edges.
/// `stop_id_to_index_map` maps stable stop ids to graph indices to allow
/// safe lookups by name without scanning the node set.
#[derive(Debug, Default)]
pub struct TransitGraph {
    graph: StableUnGraph<Stop, Segment>,
    stop_id_to_index_map: HashMap<StopId, NodeIndex>,
}

impl TransitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop by name. Adding the same name twice is a no-op and
    /// returns the existing index.
    pub fn add_stop(&mut self, name: impl Into<String>) -> NodeIndex {
        let stop = Stop::new(name);
        if let Some(&index) = self.stop_id_to_index_map.get(&stop.id) {
            return index;
        }
        let id = stop.id;
        let index = self.graph.add_node(stop);
        self.stop_id_to_index_map.insert(id, index);
        index
    }

    /// Add an undirected segment between two stops identified by name.
    ///
    /// Both endpoints must already exist and must differ. If a segment
    /// between the same pair is already present, the shorter distance wins
    /// rather than the last write.
    pub fn add_segment(&mut self, from: &str, to: &str, distance_m: u64) -> Result<(), NetworkError> {
        let a = self
            .resolve(from)
            .ok_or_else(|| NetworkError::UnknownStop(from.to_string()))?;
        let b = self
            .resolve(to)
            .ok_or_else(|| NetworkError::UnknownStop(to.to_string()))?;
        if a == b {
            return Err(NetworkError::SelfLoop(from.to_string()));
        }

        if let Some(existing) = self.graph.find_edge(a, b) {
            if let Some(segment) = self.graph.edge_weight_mut(existing) {
                if distance_m < segment.distance_m {
                    debug!(
                        "duplicate segment {from} - {to}: keeping shorter distance {distance_m} m over {} m",
                        segment.distance_m
                    );
                    segment.distance_m = distance_m;
                } else {
                    debug!(
                        "duplicate segment {from} - {to}: keeping existing distance {} m",
                        segment.distance_m
                    );
                }
            }
            return Ok(());
        }

        self.graph.add_edge(a, b, Segment::new(distance_m));
        Ok(())
    }

    /// Look up the graph index for a stop name.
    pub fn resolve(&self, name: &str) -> Option<NodeIndex> {
        self.stop_id_to_index_map
            .get(&StopId::from_name(name))
            .copied()
    }

    pub fn stop(&self, index: NodeIndex) -> Option<&Stop> {
        self.graph.node_weight(index)
    }

    pub fn stop_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all stops with their graph indices.
    pub fn stops(&self) -> impl Iterator<Item = (NodeIndex, &Stop)> {
        self.graph
            .node_indices()
            .filter_map(|index| self.graph.node_weight(index).map(|stop| (index, stop)))
    }

    /// Iterate over all segments as (endpoint, endpoint, payload) triples.
    pub fn segments(&self) -> impl Iterator<Item = (&Stop, &Stop, &Segment)> {
        self.graph.edge_references().filter_map(|edge| {
            let a = self.graph.node_weight(edge.source())?;
            let b = self.graph.node_weight(edge.target())?;
            Some((a, b, edge.weight()))
        })
    }

    /// Iterate over the segments incident to a stop, yielding the neighbor
    /// index and the segment payload.
    pub fn incident_segments(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, &Segment)> {
        self.graph.edges(index).map(move |edge| {
            let neighbor = if edge.source() == index {
                edge.target()
            } else {
                edge.source()
            };
            (neighbor, edge.weight())
        })
    }

    /// Stop names in alphabetical order, for user-facing listings.
    pub fn stop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stops().map(|(_, stop)| stop.name.clone()).collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransitGraph {
        let mut graph = TransitGraph::new();
        for name in ["A", "B", "C"] {
            graph.add_stop(name);
        }
        graph.add_segment("A", "B", 10).unwrap();
        graph.add_segment("B", "C", 5).unwrap();
        graph
    }

    #[test]
    fn add_stop_is_idempotent_by_name() {
        let mut graph = TransitGraph::new();
        let first = graph.add_stop("Jamtos");
        let second = graph.add_stop("Jamtos");
        assert_eq!(first, second);
        assert_eq!(graph.stop_count(), 1);
    }

    #[test]
    fn segment_with_unknown_endpoint_is_rejected() {
        let mut graph = sample();
        let err = graph.add_segment("A", "Nowhere", 3).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownStop(name) if name == "Nowhere"));
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut graph = sample();
        let err = graph.add_segment("A", "A", 3).unwrap_err();
        assert!(matches!(err, NetworkError::SelfLoop(_)));
    }

    #[test]
    fn duplicate_segment_keeps_minimum_distance() {
        let mut graph = sample();
        graph.add_segment("B", "A", 7).unwrap();
        graph.add_segment("A", "B", 12).unwrap();
        assert_eq!(graph.segment_count(), 2);

        let a = graph.resolve("A").unwrap();
        let (_, segment) = graph
            .incident_segments(a)
            .find(|(n, _)| graph.stop(*n).unwrap().name == "B")
            .unwrap();
        assert_eq!(segment.distance_m, 7);
    }

    #[test]
    fn segments_iterate_every_edge_once() {
        let graph = sample();
        let mut seen: Vec<(String, String, u64)> = graph
            .segments()
            .map(|(a, b, segment)| {
                let (a, b) = if a.name < b.name { (a, b) } else { (b, a) };
                (a.name.clone(), b.name.clone(), segment.distance_m)
            })
            .collect();
        seen.sort();
        assert_eq!(
            seen,
            vec![
                ("A".to_string(), "B".to_string(), 10),
                ("B".to_string(), "C".to_string(), 5),
            ]
        );
    }

    #[test]
    fn incident_segments_yield_neighbors() {
        let graph = sample();
        let b = graph.resolve("B").unwrap();
        let mut neighbors: Vec<String> = graph
            .incident_segments(b)
            .map(|(n, _)| graph.stop(n).unwrap().name.clone())
            .collect();
        neighbors.sort();
        assert_eq!(neighbors, vec!["A", "C"]);
    }
}
