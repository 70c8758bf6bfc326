use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::network::transit_graph::{NetworkError, TransitGraph};

/// A stop entry in a network definition: name plus its hand-authored
/// position on the map (abstract map units, west-east / south-north).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDefinition {
    pub name: String,
    pub position: [f32; 2],
}

/// A road segment entry in a network definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDefinition {
    pub from: String,
    pub to: String,
    pub distance_m: u64,
}

/// Declarative description of a whole transit network, suitable for JSON
/// files and for the built-in network literal. `build` validates the
/// definition and produces the graph the router and renderer work on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDefinition {
    pub name: String,
    pub stops: Vec<StopDefinition>,
    pub segments: Vec<SegmentDefinition>,
}

impl NetworkDefinition {
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, NetworkError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build a validated `TransitGraph`. Fails if a segment references a
    /// stop that is not declared, or joins a stop to itself.
    pub fn build(&self) -> Result<TransitGraph, NetworkError> {
        let mut graph = TransitGraph::new();
        for stop in &self.stops {
            graph.add_stop(stop.name.clone());
        }
        for segment in &self.segments {
            graph.add_segment(&segment.from, &segment.to, segment.distance_m)?;
        }
        Ok(graph)
    }
}
