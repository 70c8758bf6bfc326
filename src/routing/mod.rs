/*
 * This module implements route finding on the transit graph: the Dijkstra
 * search itself, the resulting `Route` value, and the routing error kinds.
 */

pub mod dijkstra;

use std::fmt::Display;

use thiserror::Error;

use crate::network::segment::SegmentKey;
use crate::network::stop::Stop;

pub use dijkstra::shortest_route;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
    // Field is named `origin` rather than `source`: thiserror reserves
    // `source` for the underlying-error chain.
    #[error("No route connects {origin} and {target}")]
    NoRoute { origin: String, target: String },
}

/// A computed route: the ordered stops and the summed segment distance.
///
/// A route always has at least one stop; querying a stop against itself
/// yields that single stop with distance 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub stops: Vec<Stop>,
    pub total_distance_m: u64,
}

impl Route {
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_m as f64 / 1000.0
    }

    /// Direction-agnostic keys of the segments the route traverses, in
    /// order. Empty for a single-stop route.
    pub fn segment_keys(&self) -> Vec<SegmentKey> {
        self.stops
            .windows(2)
            .map(|pair| SegmentKey::new(pair[0].id, pair[1].id))
            .collect()
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stops.iter().map(|stop| stop.name.as_str()).collect();
        write!(f, "{}", names.join(" -> "))
    }
}
