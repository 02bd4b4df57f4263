// src/graph/mod.rs
//! Graph storage and the provider boundary every algorithm reads through.
//!
//! Vertices are plain dense indices `0..n`. [`Network`] is the concrete
//! provider, backed by a petgraph `DiGraph` plus a directedness flag;
//! undirected traversal walks both the outgoing and incoming edge lists.

use crate::errors::{check_vertex, CentralityError, Result};
use crate::graph::shortest_paths::DistanceMatrix;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

pub mod centrality;
pub mod graph_algorithms;
pub mod ranking;
pub mod reporting;
pub mod shortest_paths;
pub mod topology;

/// Read-only view of a graph as consumed by the analysis algorithms.
///
/// Implementors must keep vertex indices dense (`0..vertex_count()`); use
/// [`validate_provider`] to check edge endpoints of an external implementation.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Every edge as `(from, to)`, parallel edges listed separately, in insertion order.
    fn edges(&self) -> Vec<(usize, usize)>;

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Vertices reachable in one hop. Follows edge direction on directed graphs.
    fn successors(&self, vertex: usize) -> Vec<usize>;

    /// Direction-agnostic neighbours, one entry per incident edge endpoint.
    /// A self-loop therefore shows up twice.
    fn neighbors(&self, vertex: usize) -> Vec<usize>;

    fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors(from).contains(&to)
    }

    /// True when an earlier edge joins the same endpoints. Direction matters on
    /// directed graphs: `a -> b` does not duplicate `b -> a`.
    fn is_multiple(&self, edge_index: usize) -> bool {
        let edges = self.edges();
        let Some(&(from, to)) = edges.get(edge_index) else {
            return false;
        };
        let key = edge_key(self.is_directed(), from, to);
        edges[..edge_index]
            .iter()
            .any(|&(a, b)| edge_key(self.is_directed(), a, b) == key)
    }

    /// Precomputed all-pairs hop distances, if the provider has them.
    fn hop_distances(&self) -> Option<DistanceMatrix> {
        None
    }
}

/// Canonical endpoint pair used to compare edges for multiplicity.
pub(crate) fn edge_key(directed: bool, from: usize, to: usize) -> (usize, usize) {
    if directed || from <= to {
        (from, to)
    } else {
        (to, from)
    }
}

/// Check that every edge endpoint of `graph` is a valid vertex index.
pub fn validate_provider<G: GraphProvider + ?Sized>(graph: &G) -> Result<()> {
    let n = graph.vertex_count();
    for (i, (from, to)) in graph.edges().into_iter().enumerate() {
        if from >= n || to >= n {
            return Err(CentralityError::invalid_input(format!(
                "edge {} ({}, {}) references a vertex outside 0..{}",
                i, from, to, n
            )));
        }
    }
    Ok(())
}

/// Deduplicated successor lists with self-loops removed. Parallel edges do not
/// produce distinct vertex paths, so traversals work on this simple view.
pub(crate) fn successor_lists<G: GraphProvider + ?Sized>(graph: &G) -> Vec<Vec<usize>> {
    (0..graph.vertex_count())
        .map(|v| {
            let mut succ: Vec<usize> = graph.successors(v).into_iter().filter(|&w| w != v).collect();
            succ.sort_unstable();
            succ.dedup();
            succ
        })
        .collect()
}

/// Deduplicated direction-agnostic neighbour lists with self-loops removed.
pub(crate) fn undirected_neighbor_lists<G: GraphProvider + ?Sized>(graph: &G) -> Vec<Vec<usize>> {
    (0..graph.vertex_count())
        .map(|v| {
            let mut nbrs: Vec<usize> = graph.neighbors(v).into_iter().filter(|&w| w != v).collect();
            nbrs.sort_unstable();
            nbrs.dedup();
            nbrs
        })
        .collect()
}

/// An unweighted network, directed or undirected, possibly with parallel edges
/// and self-loops.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub(crate) graph: DiGraph<(), ()>,
    directed: bool,
}

impl Network {
    pub fn new(directed: bool) -> Self {
        Network {
            graph: DiGraph::new(),
            directed,
        }
    }

    pub fn with_vertices(vertex_count: usize, directed: bool) -> Self {
        let mut network = Network {
            graph: DiGraph::with_capacity(vertex_count, 0),
            directed,
        };
        for _ in 0..vertex_count {
            network.graph.add_node(());
        }
        network
    }

    /// Build a network from an edge list. Any endpoint outside `0..vertex_count`
    /// makes the input invalid.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)], directed: bool) -> Result<Self> {
        let mut network = Network::with_vertices(vertex_count, directed);
        for (i, &(from, to)) in edges.iter().enumerate() {
            if from >= vertex_count || to >= vertex_count {
                return Err(CentralityError::invalid_input(format!(
                    "edge {} ({}, {}) references a vertex outside 0..{}",
                    i, from, to, vertex_count
                )));
            }
            network
                .graph
                .add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        Ok(network)
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self) -> usize {
        self.graph.add_node(()).index()
    }

    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge_with_multiplicity(from, to, 1)
    }

    /// Insert `multiplicity` parallel edges between `from` and `to`.
    pub fn add_edge_with_multiplicity(&mut self, from: usize, to: usize, multiplicity: usize) -> Result<()> {
        let n = self.graph.node_count();
        check_vertex(from, n)?;
        check_vertex(to, n)?;
        for _ in 0..multiplicity {
            self.graph
                .add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        Ok(())
    }
}

impl GraphProvider for Network {
    fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn successors(&self, vertex: usize) -> Vec<usize> {
        if vertex >= self.graph.node_count() {
            return Vec::new();
        }
        let node = NodeIndex::new(vertex);
        if self.directed {
            self.graph
                .neighbors_directed(node, Direction::Outgoing)
                .map(|n| n.index())
                .collect()
        } else {
            self.neighbors(vertex)
        }
    }

    fn neighbors(&self, vertex: usize) -> Vec<usize> {
        if vertex >= self.graph.node_count() {
            return Vec::new();
        }
        // neighbors_undirected reports a self-loop once; walking both edge
        // lists reports it once per endpoint
        let node = NodeIndex::new(vertex);
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| e.target().index())
            .chain(
                self.graph
                    .edges_directed(node, Direction::Incoming)
                    .map(|e| e.source().index()),
            )
            .collect()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        let n = self.graph.node_count();
        if from >= n || to >= n {
            return false;
        }
        let (a, b) = (NodeIndex::new(from), NodeIndex::new(to));
        if self.directed {
            self.graph.find_edge(a, b).is_some()
        } else {
            self.graph.find_edge_undirected(a, b).is_some()
        }
    }

    // Edge indices follow insertion order, so "earlier" is a lower index
    fn is_multiple(&self, edge_index: usize) -> bool {
        let Some((a, b)) = self.graph.edge_endpoints(EdgeIndex::new(edge_index)) else {
            return false;
        };
        let earlier = |from: NodeIndex, to: NodeIndex| {
            self.graph
                .edges_connecting(from, to)
                .any(|e| e.id().index() < edge_index)
        };
        earlier(a, b) || (!self.directed && earlier(b, a))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Network;

    /// Path 0 - 1 - ... - (n-1)
    pub fn chain(n: usize) -> Network {
        let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
        Network::from_edges(n, &edges, false).unwrap()
    }

    /// Cycle 0 - 1 - ... - (n-1) - 0
    pub fn cycle(n: usize) -> Network {
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        Network::from_edges(n, &edges, false).unwrap()
    }

    /// Star with centre 0 and leaves 1..=leaves
    pub fn star(leaves: usize) -> Network {
        let edges: Vec<(usize, usize)> = (1..=leaves).map(|i| (0, i)).collect();
        Network::from_edges(leaves + 1, &edges, false).unwrap()
    }

    pub fn triangle() -> Network {
        Network::from_edges(3, &[(0, 1), (1, 2), (2, 0)], false).unwrap()
    }

    /// Triangles {0, 1, 2} and {3, 4, 5} with no edge between them
    pub fn two_triangles() -> Network {
        Network::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
            false,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        let err = Network::from_edges(2, &[(0, 1), (1, 2)], false).unwrap_err();
        assert!(matches!(err, CentralityError::InvalidInput { .. }));
    }

    #[test]
    fn test_add_edge_invalid_vertex() {
        let mut net = Network::with_vertices(2, false);
        assert_eq!(
            net.add_edge(0, 5),
            Err(CentralityError::InvalidVertex {
                vertex: 5,
                vertex_count: 2
            })
        );
        let v = net.add_vertex();
        assert_eq!(v, 2);
        assert!(net.add_edge(1, 2).is_ok());
    }

    #[test]
    fn test_undirected_neighbors_both_directions() {
        let net = chain(3);
        let mut succ = net.successors(1);
        succ.sort_unstable();
        assert_eq!(succ, vec![0, 2]);
        assert!(net.has_edge(1, 0));
        assert!(!net.has_edge(0, 2));
    }

    #[test]
    fn test_directed_successors_follow_direction() {
        let net = Network::from_edges(3, &[(0, 1), (1, 2)], true).unwrap();
        assert_eq!(net.successors(1), vec![2]);
        assert!(net.has_edge(0, 1));
        assert!(!net.has_edge(1, 0));
        assert_eq!(net.degree(1), 2);
    }

    #[test]
    fn test_self_loop_counts_twice_in_degree() {
        let mut net = Network::with_vertices(2, false);
        net.add_edge(0, 0).unwrap();
        net.add_edge(0, 1).unwrap();
        assert_eq!(net.degree(0), 3);
        assert_eq!(net.degree(1), 1);
    }

    #[test]
    fn test_is_multiple_undirected_and_directed() {
        let undirected = Network::from_edges(2, &[(0, 1), (1, 0), (0, 1)], false).unwrap();
        assert!(!undirected.is_multiple(0));
        assert!(undirected.is_multiple(1));
        assert!(undirected.is_multiple(2));
        assert!(!undirected.is_multiple(9));

        let directed = Network::from_edges(2, &[(0, 1), (1, 0), (0, 1)], true).unwrap();
        assert!(!directed.is_multiple(1));
        assert!(directed.is_multiple(2));
    }

    #[test]
    fn test_multiplicity_inserts_parallel_edges() {
        let mut net = Network::with_vertices(3, false);
        net.add_edge_with_multiplicity(0, 1, 3).unwrap();
        assert_eq!(net.edge_count(), 3);
        assert!(!net.is_multiple(0));
        assert!(net.is_multiple(1));
        assert!(net.is_multiple(2));
        assert_eq!(successor_lists(&net)[0], vec![1]);
    }

    struct BrokenProvider;

    impl GraphProvider for BrokenProvider {
        fn vertex_count(&self) -> usize {
            2
        }
        fn is_directed(&self) -> bool {
            false
        }
        fn edges(&self) -> Vec<(usize, usize)> {
            vec![(0, 4)]
        }
        fn successors(&self, _vertex: usize) -> Vec<usize> {
            Vec::new()
        }
        fn neighbors(&self, _vertex: usize) -> Vec<usize> {
            Vec::new()
        }
    }

    #[test]
    fn test_validate_provider() {
        assert!(validate_provider(&two_triangles()).is_ok());
        assert!(matches!(
            validate_provider(&BrokenProvider),
            Err(CentralityError::InvalidInput { .. })
        ));
    }

    /// Delegates to a `Network` but keeps the trait's default `is_multiple`.
    struct DefaultMultiplicity<'a>(&'a Network);

    impl GraphProvider for DefaultMultiplicity<'_> {
        fn vertex_count(&self) -> usize {
            self.0.vertex_count()
        }
        fn is_directed(&self) -> bool {
            self.0.is_directed()
        }
        fn edges(&self) -> Vec<(usize, usize)> {
            self.0.edges()
        }
        fn successors(&self, vertex: usize) -> Vec<usize> {
            self.0.successors(vertex)
        }
        fn neighbors(&self, vertex: usize) -> Vec<usize> {
            self.0.neighbors(vertex)
        }
    }

    #[test]
    fn test_network_is_multiple_matches_default() {
        let edges = [(0, 1), (2, 2), (1, 0), (1, 2), (2, 2), (0, 1), (2, 1)];
        for directed in [false, true] {
            let net = Network::from_edges(3, &edges, directed).unwrap();
            let fallback = DefaultMultiplicity(&net);
            for index in 0..=edges.len() {
                assert_eq!(
                    net.is_multiple(index),
                    fallback.is_multiple(index),
                    "edge {} directed={}",
                    index,
                    directed
                );
            }
        }
    }

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(star(4).vertex_count(), 5);
        assert_eq!(cycle(6).edge_count(), 6);
        assert_eq!(triangle().edge_count(), 3);
    }
}
