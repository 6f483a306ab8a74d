//! AirTight routing graph
//!
//! Static multi-hop routes declared by the protocol's route description
//! file: per-(source, destination) next hops, reachability queries, and an
//! exhaustive connectivity export for visualization.

pub mod graph;

pub use graph::*;
