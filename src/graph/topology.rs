// src/graph/topology.rs
//! Aggregate descriptors of network shape: connectivity, path-length
//! statistics, neighbourhood statistics and clustering.

use crate::errors::{CentralityError, Result};
use crate::graph::graph_algorithms::connected_components;
use crate::graph::shortest_paths::ShortestPathOracle;
use crate::graph::{undirected_neighbor_lists, validate_provider, GraphProvider};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// A statistic that may have no value for a given graph, e.g. when its
/// formula divides by zero. Serialises as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum Measure {
    Defined(f64),
    Undefined,
}

impl Measure {
    /// `numerator / denominator`, undefined when the denominator is zero.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Measure::Undefined
        } else {
            Measure::Defined(numerator / denominator)
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Measure::Defined(v) => Some(v),
            Measure::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Measure::Defined(_))
    }
}

impl From<Measure> for Option<f64> {
    fn from(measure: Measure) -> Self {
        measure.value()
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Defined(v) => write!(f, "{}", v),
            Measure::Undefined => write!(f, "undefined"),
        }
    }
}

/// Summary statistics of one graph. Built once by [`topology_parameters`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyParameters {
    /// Strongly connected components when directed, components otherwise
    pub connected_component_count: usize,
    pub diameter: usize,
    pub radius: usize,
    /// Mean over reachable ordered pairs only
    pub average_shortest_path_length: Measure,
    /// Mean closed-neighbourhood size (the vertex itself plus distinct neighbours)
    pub average_neighbor_count: Measure,
    pub density: f64,
    pub isolated_node_count: usize,
    pub centralization: Measure,
    /// Coefficient of variation of the neighbour counts, excluding the vertex
    /// itself (unlike `average_neighbor_count`)
    pub heterogeneity: Measure,
    pub multi_edge_node_pair_count: usize,
    pub clustering_coefficient: Measure,
}

/// Compute every topology parameter for `graph`, reading distances from an
/// oracle built for the same graph.
pub fn topology_parameters<G: GraphProvider + ?Sized>(
    graph: &G,
    oracle: &ShortestPathOracle,
) -> Result<TopologyParameters> {
    validate_provider(graph)?;
    let n = graph.vertex_count();
    if oracle.vertex_count() != n {
        return Err(CentralityError::invalid_input(format!(
            "distance oracle covers {} vertices, graph has {}",
            oracle.vertex_count(),
            n
        )));
    }

    let matrix = oracle.all_pairs();
    let neighbors = undirected_neighbor_lists(graph);
    let neighbor_counts: Vec<f64> = neighbors.iter().map(|nbrs| nbrs.len() as f64).collect();
    let neighborhood_sizes: Vec<f64> = neighbor_counts.iter().map(|k| k + 1.0).collect();

    let graph_density = density(n, graph.edge_count(), graph.is_directed());
    let max_neighborhood = neighborhood_sizes.iter().cloned().fold(0.0f64, f64::max);

    let params = TopologyParameters {
        connected_component_count: connected_components(graph)?.len(),
        diameter: if n <= 1 { 0 } else { matrix.diameter() },
        radius: matrix.radius(),
        average_shortest_path_length: average_shortest_path_length(oracle),
        average_neighbor_count: mean(&neighborhood_sizes),
        density: graph_density,
        isolated_node_count: (0..n).filter(|&v| graph.degree(v) == 0).count(),
        centralization: centralization(n, max_neighborhood, graph_density),
        heterogeneity: heterogeneity(&neighbor_counts),
        multi_edge_node_pair_count: multi_edge_node_pair_count(graph),
        clustering_coefficient: clustering_coefficient(&neighbors),
    };

    for (name, value) in [
        ("average_shortest_path_length", params.average_shortest_path_length),
        ("average_neighbor_count", params.average_neighbor_count),
        ("centralization", params.centralization),
        ("heterogeneity", params.heterogeneity),
        ("clustering_coefficient", params.clustering_coefficient),
    ] {
        if !value.is_defined() {
            warn!(parameter = name, vertices = n, "topology parameter is undefined for this graph");
        }
    }

    Ok(params)
}

/// `m / (n(n-1))` directed, `2m / (n(n-1))` undirected; 0 when `n <= 1`.
pub fn density(vertex_count: usize, edge_count: usize, directed: bool) -> f64 {
    if vertex_count <= 1 {
        return 0.0;
    }
    let possible = vertex_count as f64 * (vertex_count - 1) as f64;
    let edges = edge_count as f64;
    if directed {
        edges / possible
    } else {
        2.0 * edges / possible
    }
}

/// Mean distance over ordered pairs `s != t` that have a path.
pub fn average_shortest_path_length(oracle: &ShortestPathOracle) -> Measure {
    let mut total: usize = 0;
    let mut pairs: usize = 0;
    for (source, row) in oracle.all_pairs().rows().enumerate() {
        for (target, d) in row.iter().enumerate() {
            if source == target {
                continue;
            }
            if let Some(d) = d.finite() {
                total += d;
                pairs += 1;
            }
        }
    }
    Measure::ratio(total as f64, pairs as f64)
}

/// `n/(n-2) * (max_neighborhood/(n-1) - density)`; undefined for `n <= 2`.
pub fn centralization(vertex_count: usize, max_neighborhood: f64, density: f64) -> Measure {
    if vertex_count <= 2 {
        return Measure::Undefined;
    }
    let n = vertex_count as f64;
    Measure::Defined(n / (n - 2.0) * (max_neighborhood / (n - 1.0) - density))
}

/// Sample standard deviation over mean. Undefined with fewer than two values
/// or a zero mean (no vertex has a neighbour).
pub fn heterogeneity(neighbor_counts: &[f64]) -> Measure {
    if neighbor_counts.len() < 2 {
        return Measure::Undefined;
    }
    let Measure::Defined(avg) = mean(neighbor_counts) else {
        return Measure::Undefined;
    };
    if avg == 0.0 {
        return Measure::Undefined;
    }
    let variance = neighbor_counts
        .iter()
        .map(|k| (k - avg) * (k - avg))
        .sum::<f64>()
        / (neighbor_counts.len() - 1) as f64;
    Measure::Defined(variance.sqrt() / avg)
}

/// Distinct unordered vertex pairs joined by more than one edge, as reported
/// by [`GraphProvider::is_multiple`]. On directed graphs `a -> b` and `b -> a`
/// are different edges, not duplicates.
pub fn multi_edge_node_pair_count<G: GraphProvider + ?Sized>(graph: &G) -> usize {
    let pairs: HashSet<(usize, usize)> = graph
        .edges()
        .into_iter()
        .enumerate()
        .filter(|&(index, _)| graph.is_multiple(index))
        .map(|(_, (a, b))| (a.min(b), a.max(b)))
        .collect();
    pairs.len()
}

/// Average local clustering coefficient over all vertices, vertices with
/// fewer than two neighbours contributing 0. Edge direction is ignored.
/// `neighbors` must be sorted, deduplicated and free of self-loops.
pub fn clustering_coefficient(neighbors: &[Vec<usize>]) -> Measure {
    let local: Vec<f64> = neighbors
        .iter()
        .map(|nbrs| {
            let k = nbrs.len();
            if k < 2 {
                return 0.0;
            }
            let mut links = 0usize;
            for (i, &a) in nbrs.iter().enumerate() {
                for &b in &nbrs[i + 1..] {
                    if neighbors[a].binary_search(&b).is_ok() {
                        links += 1;
                    }
                }
            }
            links as f64 / (k * (k - 1) / 2) as f64
        })
        .collect();
    mean(&local)
}

fn mean(values: &[f64]) -> Measure {
    Measure::ratio(values.iter().sum(), values.len() as f64)
}
