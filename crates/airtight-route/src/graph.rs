//! Directed route graph
//!
//! Nodes and next-hop decisions come from a static route description
//! file. The export covers every ordered node pair, so gaps in
//! connectivity are visible rather than merely absent.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use airtight_core::{AirtightError, AirtightResult, NodeId};
use serde::Serialize;
use tracing::debug;

/// Directed routing graph with per-(source, destination) next hops
#[derive(Debug, Default)]
pub struct RouteGraph {
    nodes: BTreeSet<NodeId>,
    hops: BTreeMap<(NodeId, NodeId), NodeId>,
    reachable: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        RouteGraph::default()
    }

    /// Declare a node.
    pub fn add_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    /// Record that `source` reaches `destination` via `next_hop`.
    pub fn add_hop(&mut self, source: NodeId, destination: NodeId, next_hop: NodeId) {
        self.reachable.entry(source).or_default().insert(destination);
        self.hops.insert((source, destination), next_hop);
    }

    /// Whether a route is declared from `source` to `destination`.
    ///
    /// A source with no declared routes answers `false`.
    pub fn can_route(&self, source: NodeId, destination: NodeId) -> bool {
        self.reachable
            .get(&source)
            .is_some_and(|destinations| destinations.contains(&destination))
    }

    /// Next hop of the declared (source, destination) route, if any.
    pub fn next_hop(&self, source: NodeId, destination: NodeId) -> Option<NodeId> {
        self.hops.get(&(source, destination)).copied()
    }

    /// Declared nodes, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Exhaustive connectivity export: every declared hop as a routed
    /// edge, then a synthetic no-route edge for every remaining ordered
    /// pair of declared nodes.
    pub fn export(&self) -> GraphView {
        let mut edges: Vec<EdgeView> = self
            .hops
            .keys()
            .map(|&(source, target)| EdgeView {
                source: source.as_u32(),
                target: target.as_u32(),
                has_route: true,
            })
            .collect();

        for &source in &self.nodes {
            for &target in &self.nodes {
                if source == target || self.hops.contains_key(&(source, target)) {
                    continue;
                }
                edges.push(EdgeView {
                    source: source.as_u32(),
                    target: target.as_u32(),
                    has_route: false,
                });
            }
        }

        GraphView {
            nodes: self.nodes.iter().map(|n| n.as_u32()).collect(),
            edges,
        }
    }

    /// Build a graph from a route description file.
    ///
    /// Recognized lines are `HOP(source, destination, next_hop)`,
    /// case-insensitive and whitespace-tolerant. Anything else, including
    /// a HOP line that does not parse, is skipped.
    pub fn from_route_file(path: &Path) -> AirtightResult<RouteGraph> {
        if !path.is_file() {
            return Err(AirtightError::MissingInputFile(path.to_path_buf()));
        }

        let mut graph = RouteGraph::new();
        let contents = fs::read_to_string(path)?;
        for line in contents.lines() {
            let line = line.trim().to_uppercase();
            if !line.starts_with("HOP") {
                continue;
            }
            let Some((source, destination, next_hop)) = parse_hop(&line) else {
                continue;
            };
            graph.add_node(source);
            graph.add_node(destination);
            graph.add_node(next_hop);
            graph.add_hop(source, destination, next_hop);
        }

        debug!(
            path = %path.display(),
            nodes = graph.node_count(),
            hops = graph.hop_count(),
            "route graph loaded"
        );
        Ok(graph)
    }
}

fn parse_hop(line: &str) -> Option<(NodeId, NodeId, NodeId)> {
    let open = line.find('(')?;
    let close = line.find(')')?;
    let args = line.get(open + 1..close)?;

    let mut ids = args.split(',').map(|token| token.trim().parse::<u32>());
    let source = ids.next()?.ok()?;
    let destination = ids.next()?.ok()?;
    let next_hop = ids.next()?.ok()?;
    if ids.next().is_some() {
        return None;
    }

    Some((NodeId(source), NodeId(destination), NodeId(next_hop)))
}

/// JSON-serializable graph export
#[derive(Clone, Debug, Serialize)]
pub struct GraphView {
    pub nodes: Vec<u32>,
    pub edges: Vec<EdgeView>,
}

/// One directed edge of the export
#[derive(Clone, Debug, Serialize)]
pub struct EdgeView {
    pub source: u32,
    pub target: u32,
    pub has_route: bool,
}
