// src/graph/centrality.rs
//! Shortest-path centralities computed from first principles: stress,
//! radiality, centroid and eccentricity.

use crate::config::StressConfig;
use crate::errors::Result;
use crate::graph::ranking::ScoreMap;
use crate::graph::shortest_paths::{Distance, ShortestPathOracle};
use crate::graph::{successor_lists, validate_provider, GraphProvider};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Calculate stress centrality for all vertices.
///
/// Stress counts, for every pair of vertices, how many of the shortest paths
/// between them run through a vertex. All shortest paths are counted, not
/// just one per pair. Undirected graphs count each unordered pair once;
/// directed graphs count each ordered pair that has a path.
///
/// Paths are counted rather than enumerated: one BFS per source records the
/// number of shortest paths reaching each vertex, and a reverse sweep counts
/// how many shortest paths continue past it. Cost is O(V * E) in time, even
/// though the number of paths being counted can grow exponentially.
///
/// With `include_endpoints`, the source and target of each path are counted
/// as lying on it as well.
pub fn stress_centrality<G: GraphProvider + ?Sized>(graph: &G, config: StressConfig) -> Result<ScoreMap> {
    validate_provider(graph)?;
    let n = graph.vertex_count();
    let adjacency = successor_lists(graph);

    let mut stress: Vec<f64> = vec![0.0; n];

    // Pre-allocate data structures ONCE outside the loop
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    // sigma[v]: shortest paths from the source to v
    let mut sigma: Vec<f64> = vec![0.0; n];
    // beyond[v]: shortest paths from the source that pass v and end further out
    let mut beyond: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<i64> = vec![-1; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    for s in 0..n {
        order.clear();
        queue.clear();
        for i in 0..n {
            pred[i].clear();
            sigma[i] = 0.0;
            beyond[i] = 0.0;
            dist[i] = -1;
        }

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let v_dist = dist[v];

            for &w in &adjacency[v] {
                if dist[w] < 0 {
                    dist[w] = v_dist + 1;
                    queue.push_back(w);
                }
                if dist[w] == v_dist + 1 {
                    sigma[w] += sigma[v];
                    pred[w].push(v);
                }
            }
        }

        // Farthest vertices first, so every successor is settled before its predecessors
        while let Some(w) = order.pop() {
            for &v in &pred[w] {
                beyond[v] += 1.0 + beyond[w];
            }
            if w == s {
                continue;
            }
            stress[w] += sigma[w] * beyond[w];
            if config.include_endpoints {
                stress[w] += sigma[w];
                stress[s] += sigma[w];
            }
        }
    }

    if !graph.is_directed() {
        // Every unordered pair was walked from both ends
        for score in stress.iter_mut() {
            *score /= 2.0;
        }
    }

    Ok(ScoreMap::new(stress))
}

/// Calculate radiality centrality for all vertices.
///
/// `radiality(v) = sum over w != v of (D + 1 - d(v, w)) / (n - 1)` where `D` is
/// the diameter. An unreachable `w` is placed at distance `D + 1`, so it adds
/// nothing. Graphs with fewer than two vertices score 0.
pub fn radiality_centrality(oracle: &ShortestPathOracle) -> ScoreMap {
    let n = oracle.vertex_count();
    if n <= 1 {
        return ScoreMap::zeros(n);
    }

    let matrix = oracle.all_pairs();
    let horizon = matrix.diameter() + 1;

    let scores = matrix
        .rows()
        .enumerate()
        .map(|(v, row)| {
            let total: usize = row
                .iter()
                .enumerate()
                .filter(|&(w, _)| w != v)
                .map(|(_, d)| horizon - d.finite().unwrap_or(horizon))
                .sum();
            total as f64 / (n - 1) as f64
        })
        .collect();

    ScoreMap::new(scores)
}

/// Calculate centroid centrality for all vertices.
///
/// For an ordered pair `(v1, v2)`, `f(v1, v2)` is the number of vertices
/// strictly closer to `v1` minus the number strictly closer to `v2`, with
/// unreachable counting as farther than any finite distance. A vertex scores
/// the minimum of `f` against every other vertex. A single vertex scores 0.
///
/// O(n^3) time. `f` is antisymmetric, so each unordered pair is compared once.
pub fn centroid_centrality(oracle: &ShortestPathOracle) -> ScoreMap {
    let n = oracle.vertex_count();
    if n <= 1 {
        return ScoreMap::zeros(n);
    }

    let profiles: Vec<&[Distance]> = oracle.all_pairs().rows().collect();
    let mut best: Vec<i64> = vec![i64::MAX; n];

    for v1 in 0..n {
        for v2 in (v1 + 1)..n {
            let f = dominance(profiles[v1], profiles[v2]);
            best[v1] = best[v1].min(f);
            best[v2] = best[v2].min(-f);
        }
    }

    ScoreMap::new(best.into_iter().map(|f| f as f64).collect())
}

/// `|{w : a[w] < b[w]}| - |{w : a[w] > b[w]}|`
fn dominance(a: &[Distance], b: &[Distance]) -> i64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| match x.cmp(y) {
            Ordering::Less => 1,
            Ordering::Greater => -1,
            Ordering::Equal => 0,
        })
        .sum()
}

/// Eccentricity of every vertex: the longest distance to a reachable vertex.
/// A vertex that reaches nothing scores 0.
pub fn eccentricity_centrality(oracle: &ShortestPathOracle) -> ScoreMap {
    ScoreMap::new(
        oracle
            .all_pairs()
            .eccentricities()
            .into_iter()
            .map(|e| e as f64)
            .collect(),
    )
}
