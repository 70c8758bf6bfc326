/*
 * This module defines the transit network graph model: stops, road
 * segments, the undirected weighted graph they form, and the declarative
 * definition format the graph is built from.
 */

pub mod definition;
pub mod segment;
pub mod stop;
pub mod transit_graph;
