// src/graph/graph_algorithms.rs
//! Connectivity analysis and the standard centrality measures (degree,
//! betweenness, closeness, eigenvector, PageRank).

use crate::config::{EigenvectorConfig, PageRankConfig};
use crate::errors::Result;
use crate::graph::ranking::ScoreMap;
use crate::graph::shortest_paths::ShortestPathOracle;
use crate::graph::{successor_lists, validate_provider, GraphProvider};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::VecDeque;

/// Components matching the graph's directedness: strongly connected components
/// for directed graphs, plain components otherwise. Largest first.
pub fn connected_components<G: GraphProvider + ?Sized>(graph: &G) -> Result<Vec<Vec<usize>>> {
    if graph.is_directed() {
        strongly_connected_components(graph)
    } else {
        weakly_connected_components(graph)
    }
}

/// Strongly connected components via Kosaraju on a petgraph copy of the provider.
pub fn strongly_connected_components<G: GraphProvider + ?Sized>(
    graph: &G,
) -> Result<Vec<Vec<usize>>> {
    validate_provider(graph)?;
    let n = graph.vertex_count();
    let edges = graph.edges();

    let mut scratch: DiGraph<(), ()> = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        scratch.add_node(());
    }
    for (from, to) in edges {
        scratch.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }

    let mut components: Vec<Vec<usize>> = kosaraju_scc(&scratch)
        .into_iter()
        .map(|component| {
            let mut vertices: Vec<usize> = component.into_iter().map(|n| n.index()).collect();
            vertices.sort_unstable();
            vertices
        })
        .collect();
    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
    Ok(components)
}

/// Find weakly connected components (treating graph as undirected).
/// Uses Vec<bool> for O(1) visited tracking.
pub fn weakly_connected_components<G: GraphProvider + ?Sized>(
    graph: &G,
) -> Result<Vec<Vec<usize>>> {
    validate_provider(graph)?;
    let n = graph.vertex_count();
    let mut visited: Vec<bool> = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for neighbor in graph.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    // Stable sort keeps discovery order (lowest vertex first) among equal sizes
    components.sort_by_key(|c| std::cmp::Reverse(c.len()));
    Ok(components)
}

/// Number of incident edge endpoints per vertex, optionally divided by n-1.
pub fn degree_centrality<G: GraphProvider + ?Sized>(graph: &G, normalized: bool) -> Result<ScoreMap> {
    validate_provider(graph)?;
    let n = graph.vertex_count();

    let scale = if normalized && n > 1 {
        1.0 / (n - 1) as f64
    } else {
        1.0
    };

    Ok(ScoreMap::new(
        (0..n).map(|v| graph.degree(v) as f64 * scale).collect(),
    ))
}

/// Calculate betweenness centrality for all vertices.
///
/// Brandes' algorithm, O(V * E). Directed graphs follow edge direction; on
/// undirected graphs every pair is counted once. With `normalized`, scores are
/// divided by the number of pairs not involving the vertex.
pub fn betweenness_centrality<G: GraphProvider + ?Sized>(
    graph: &G,
    normalized: bool,
) -> Result<ScoreMap> {
    validate_provider(graph)?;
    let n = graph.vertex_count();

    if n <= 2 {
        return Ok(ScoreMap::zeros(n));
    }

    let adjacency = successor_lists(graph);
    let mut betweenness: Vec<f64> = vec![0.0; n];

    // Pre-allocate data structures ONCE outside the loop
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<i64> = vec![-1; n];
    let mut delta: Vec<f64> = vec![0.0; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    for s in 0..n {
        stack.clear();
        queue.clear();
        for i in 0..n {
            pred[i].clear();
            sigma[i] = 0.0;
            dist[i] = -1;
            delta[i] = 0.0;
        }

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let v_dist = dist[v];

            for &w in &adjacency[v] {
                // First visit?
                if dist[w] < 0 {
                    dist[w] = v_dist + 1;
                    queue.push_back(w);
                }
                // Shortest path to w via v?
                if dist[w] == v_dist + 1 {
                    sigma[w] += sigma[v];
                    pred[w].push(v);
                }
            }
        }

        // Accumulation phase - back propagation
        while let Some(w) = stack.pop() {
            for &v in &pred[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                betweenness[w] += delta[w];
            }
        }
    }

    if !graph.is_directed() {
        for score in betweenness.iter_mut() {
            *score /= 2.0;
        }
    }

    if normalized {
        let pairs = (n - 1) as f64 * (n - 2) as f64;
        let scale = if graph.is_directed() { 1.0 / pairs } else { 2.0 / pairs };
        for score in betweenness.iter_mut() {
            *score *= scale;
        }
    }

    Ok(ScoreMap::new(betweenness))
}

/// Calculate closeness centrality for all vertices.
///
/// Reciprocal of the mean distance to the vertices a vertex can reach;
/// unreachable vertices are left out. With `normalized`, the score is further
/// scaled by the fraction of other vertices that are reachable.
pub fn closeness_centrality(oracle: &ShortestPathOracle, normalized: bool) -> ScoreMap {
    let n = oracle.vertex_count();

    let scores = oracle
        .all_pairs()
        .rows()
        .map(|row| {
            let mut total_distance: usize = 0;
            let mut reachable: usize = 0;
            for d in row.iter().filter_map(|d| d.finite()) {
                total_distance += d;
                reachable += 1;
            }

            if reachable > 1 && total_distance > 0 {
                let closeness = (reachable - 1) as f64 / total_distance as f64;
                if normalized {
                    closeness * (reachable - 1) as f64 / (n - 1) as f64
                } else {
                    closeness
                }
            } else {
                0.0
            }
        })
        .collect();

    ScoreMap::new(scores)
}

/// Calculate PageRank for all vertices.
///
/// Directed graphs follow outgoing edges; undirected edges count both ways.
/// Parallel edges carry proportionally more rank. Mass from dangling vertices
/// is spread uniformly.
pub fn pagerank<G: GraphProvider + ?Sized>(graph: &G, config: &PageRankConfig) -> Result<ScoreMap> {
    validate_provider(graph)?;
    let n = graph.vertex_count();

    if n == 0 {
        return Ok(ScoreMap::default());
    }

    let damping_factor = config.damping_factor;
    let out_links: Vec<Vec<usize>> = (0..n).map(|v| graph.successors(v)).collect();

    // Initialize PageRank scores (uniform distribution)
    let mut pr: Vec<f64> = vec![1.0 / n as f64; n];
    let mut new_pr: Vec<f64> = vec![0.0; n];

    let dangling_nodes: Vec<usize> = out_links
        .iter()
        .enumerate()
        .filter(|(_, links)| links.is_empty())
        .map(|(i, _)| i)
        .collect();

    let teleport = (1.0 - damping_factor) / n as f64;

    for _iteration in 0..config.max_iterations {
        let dangling_sum: f64 = dangling_nodes.iter().map(|&i| pr[i]).sum();
        let dangling_contrib = damping_factor * dangling_sum / n as f64;

        for score in new_pr.iter_mut() {
            *score = teleport + dangling_contrib;
        }

        for (i, links) in out_links.iter().enumerate() {
            if !links.is_empty() {
                let contrib = damping_factor * pr[i] / links.len() as f64;
                for &j in links {
                    new_pr[j] += contrib;
                }
            }
        }

        let diff: f64 = pr
            .iter()
            .zip(new_pr.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut pr, &mut new_pr);

        if diff < config.tolerance {
            break;
        }
    }

    Ok(ScoreMap::new(pr))
}

/// Eigenvector centrality by power iteration, scaled so the top score is 1.
///
/// Directed graphs credit a vertex through its incoming edges. The iteration
/// runs on `A + I`, which has the same leading eigenvector as `A` but does not
/// oscillate on bipartite graphs. An edgeless graph scores every vertex 1.
pub fn eigenvector_centrality<G: GraphProvider + ?Sized>(
    graph: &G,
    config: &EigenvectorConfig,
) -> Result<ScoreMap> {
    validate_provider(graph)?;
    let n = graph.vertex_count();

    if n == 0 {
        return Ok(ScoreMap::default());
    }

    let in_links: Vec<Vec<usize>> = if graph.is_directed() {
        let mut lists = vec![Vec::new(); n];
        for (from, to) in graph.edges() {
            lists[to].push(from);
        }
        lists
    } else {
        (0..n).map(|v| graph.neighbors(v)).collect()
    };

    let mut x: Vec<f64> = vec![1.0; n];
    let mut next: Vec<f64> = vec![0.0; n];

    for _iteration in 0..config.max_iterations {
        for (v, links) in in_links.iter().enumerate() {
            next[v] = x[v] + links.iter().map(|&u| x[u]).sum::<f64>();
        }

        let max = next.iter().cloned().fold(0.0f64, f64::max);
        if max > 0.0 {
            for value in next.iter_mut() {
                *value /= max;
            }
        }

        let diff: f64 = x
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut x, &mut next);

        if diff < config.tolerance {
            break;
        }
    }

    Ok(ScoreMap::new(x))
}
