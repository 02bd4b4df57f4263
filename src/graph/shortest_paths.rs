// src/graph/shortest_paths.rs
//! All-pairs hop distances, computed once per graph and shared read-only by
//! every measure in an analysis session.

use crate::errors::{check_vertex, CentralityError, Result};
use crate::graph::{successor_lists, validate_provider, GraphProvider};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::debug;

/// Hop distance between two vertices.
///
/// `Unreachable` orders after every finite distance, so comparisons between
/// distance profiles treat a missing path as the longest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Distance {
    Finite(usize),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<usize> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

/// Dense `n x n` distance table, row-major by source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Matrix with a zero diagonal and every other pair unreachable.
    pub fn unreachable(n: usize) -> Self {
        let mut cells = vec![Distance::Unreachable; n * n];
        for v in 0..n {
            cells[v * n + v] = Distance::Finite(0);
        }
        DistanceMatrix { n, cells }
    }

    /// Build from explicit rows, e.g. distances supplied by a graph provider.
    /// Rows must form a square matrix with a zero diagonal.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (v, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(CentralityError::invalid_input(format!(
                    "distance row {} has {} entries, expected {}",
                    v,
                    row.len(),
                    n
                )));
            }
            if row[v] != Distance::Finite(0) {
                return Err(CentralityError::invalid_input(format!(
                    "distance from vertex {} to itself must be 0",
                    v
                )));
            }
            cells.extend(row);
        }
        Ok(DistanceMatrix { n, cells })
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Unchecked lookup; callers guarantee both indices are below `n`.
    #[inline]
    pub(crate) fn at(&self, source: usize, target: usize) -> Distance {
        self.cells[source * self.n + target]
    }

    pub fn get(&self, source: usize, target: usize) -> Result<Distance> {
        check_vertex(source, self.n)?;
        check_vertex(target, self.n)?;
        Ok(self.at(source, target))
    }

    pub fn row(&self, source: usize) -> Result<&[Distance]> {
        check_vertex(source, self.n)?;
        Ok(&self.cells[source * self.n..(source + 1) * self.n])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        // n == 0 leaves `cells` empty, so the chunk size never matters there
        self.cells.chunks(self.n.max(1))
    }

    /// Largest finite distance, unreachable pairs ignored. 0 for graphs with
    /// at most one vertex or no paths at all.
    pub fn diameter(&self) -> usize {
        self.cells.iter().filter_map(|d| d.finite()).max().unwrap_or(0)
    }

    /// Per-vertex eccentricity over reachable targets only. A vertex that
    /// reaches nothing but itself gets 0.
    pub fn eccentricities(&self) -> Vec<usize> {
        self.rows()
            .map(|row| row.iter().filter_map(|d| d.finite()).max().unwrap_or(0))
            .collect()
    }

    /// Smallest eccentricity; 0 for the empty graph.
    pub fn radius(&self) -> usize {
        self.eccentricities().into_iter().min().unwrap_or(0)
    }
}

/// Breadth-first hop distances from `source` over pre-built successor lists.
pub(crate) fn bfs_distances(adjacency: &[Vec<usize>], source: usize) -> Vec<Distance> {
    let n = adjacency.len();
    // -1 means not visited, >= 0 is the distance
    let mut dist: Vec<i64> = vec![-1; n];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

    dist[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next = dist[current] + 1;
        for &neighbor in &adjacency[current] {
            if dist[neighbor] < 0 {
                dist[neighbor] = next;
                queue.push_back(neighbor);
            }
        }
    }

    dist.into_iter()
        .map(|d| {
            if d < 0 {
                Distance::Unreachable
            } else {
                Distance::Finite(d as usize)
            }
        })
        .collect()
}

/// Owns the distance matrix for one graph. Built once, then only read.
#[derive(Debug, Clone)]
pub struct ShortestPathOracle {
    matrix: DistanceMatrix,
    directed: bool,
}

impl ShortestPathOracle {
    /// Compute all-pairs hop distances, one BFS per source. Directed graphs
    /// follow edge direction. A provider-supplied matrix is used instead when
    /// available.
    pub fn new<G: GraphProvider + ?Sized>(graph: &G) -> Result<Self> {
        validate_provider(graph)?;
        let n = graph.vertex_count();

        let matrix = match graph.hop_distances() {
            Some(matrix) if matrix.vertex_count() == n => {
                debug!(vertices = n, "using provider-supplied distance matrix");
                matrix
            }
            Some(matrix) => {
                return Err(CentralityError::invalid_input(format!(
                    "provider distance matrix covers {} vertices, graph has {}",
                    matrix.vertex_count(),
                    n
                )))
            }
            None => {
                let adjacency = successor_lists(graph);
                let mut cells = Vec::with_capacity(n * n);
                for source in 0..n {
                    cells.extend(bfs_distances(&adjacency, source));
                }
                let matrix = DistanceMatrix { n, cells };
                debug!(
                    vertices = n,
                    reachable_pairs = matrix.cells.iter().filter(|d| d.is_reachable()).count(),
                    "computed all-pairs hop distances"
                );
                matrix
            }
        };

        Ok(ShortestPathOracle {
            matrix,
            directed: graph.is_directed(),
        })
    }

    pub fn all_pairs(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Distances from `source` to every vertex, indexed by target.
    pub fn from_source(&self, source: usize) -> Result<&[Distance]> {
        self.matrix.row(source)
    }

    pub fn distance(&self, source: usize, target: usize) -> Result<Distance> {
        self.matrix.get(source, target)
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.vertex_count()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::*;
    use crate::graph::Network;

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(0) < Distance::Finite(3));
        assert!(Distance::Finite(usize::MAX) < Distance::Unreachable);
        assert_eq!(Distance::Unreachable.finite(), None);
    }

    #[test]
    fn test_chain_distances() {
        let oracle = ShortestPathOracle::new(&chain(5)).unwrap();
        assert_eq!(oracle.distance(0, 4).unwrap(), Distance::Finite(4));
        assert_eq!(oracle.distance(3, 1).unwrap(), Distance::Finite(2));
        assert_eq!(oracle.all_pairs().diameter(), 4);
        assert_eq!(oracle.all_pairs().radius(), 2);
    }

    #[test]
    fn test_zero_diagonal_and_symmetry() {
        let oracle = ShortestPathOracle::new(&cycle(7)).unwrap();
        for s in 0..7 {
            assert_eq!(oracle.distance(s, s).unwrap(), Distance::Finite(0));
            for t in 0..7 {
                assert_eq!(oracle.distance(s, t).unwrap(), oracle.distance(t, s).unwrap());
            }
        }
    }

    #[test]
    fn test_disconnected_pairs_unreachable() {
        let oracle = ShortestPathOracle::new(&two_triangles()).unwrap();
        assert_eq!(oracle.distance(0, 4).unwrap(), Distance::Unreachable);
        assert_eq!(oracle.distance(3, 5).unwrap(), Distance::Finite(1));
        assert_eq!(oracle.all_pairs().diameter(), 1);
    }

    #[test]
    fn test_directed_distances_follow_direction() {
        let net = Network::from_edges(3, &[(0, 1), (1, 2)], true).unwrap();
        let oracle = ShortestPathOracle::new(&net).unwrap();
        assert_eq!(oracle.distance(0, 2).unwrap(), Distance::Finite(2));
        assert_eq!(oracle.distance(2, 0).unwrap(), Distance::Unreachable);
        assert_eq!(oracle.all_pairs().eccentricities(), vec![2, 1, 0]);
    }

    #[test]
    fn test_invalid_vertex() {
        let oracle = ShortestPathOracle::new(&triangle()).unwrap();
        assert!(matches!(
            oracle.from_source(3),
            Err(CentralityError::InvalidVertex { vertex: 3, .. })
        ));
        assert!(oracle.distance(0, 10).is_err());
        assert_eq!(oracle.from_source(1).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_and_single_vertex() {
        let empty = ShortestPathOracle::new(&Network::new(false)).unwrap();
        assert_eq!(empty.vertex_count(), 0);
        assert_eq!(empty.all_pairs().diameter(), 0);
        assert_eq!(empty.all_pairs().radius(), 0);

        let single = ShortestPathOracle::new(&Network::with_vertices(1, false)).unwrap();
        assert_eq!(single.distance(0, 0).unwrap(), Distance::Finite(0));
    }

    #[test]
    fn test_from_rows_validation() {
        let ok = DistanceMatrix::from_rows(vec![
            vec![Distance::Finite(0), Distance::Finite(1)],
            vec![Distance::Finite(1), Distance::Finite(0)],
        ]);
        assert!(ok.is_ok());

        let ragged = DistanceMatrix::from_rows(vec![vec![Distance::Finite(0)], vec![]]);
        assert!(ragged.is_err());

        let bad_diagonal = DistanceMatrix::from_rows(vec![vec![Distance::Unreachable]]);
        assert!(bad_diagonal.is_err());
    }

    struct PrecomputedPath {
        matrix: DistanceMatrix,
    }

    impl GraphProvider for PrecomputedPath {
        fn vertex_count(&self) -> usize {
            2
        }
        fn is_directed(&self) -> bool {
            false
        }
        fn edges(&self) -> Vec<(usize, usize)> {
            vec![(0, 1)]
        }
        fn successors(&self, vertex: usize) -> Vec<usize> {
            vec![1 - vertex]
        }
        fn neighbors(&self, vertex: usize) -> Vec<usize> {
            vec![1 - vertex]
        }
        fn hop_distances(&self) -> Option<DistanceMatrix> {
            Some(self.matrix.clone())
        }
    }

    #[test]
    fn test_provider_matrix_is_used() {
        let provider = PrecomputedPath {
            matrix: DistanceMatrix::from_rows(vec![
                vec![Distance::Finite(0), Distance::Finite(1)],
                vec![Distance::Finite(1), Distance::Finite(0)],
            ])
            .unwrap(),
        };
        let oracle = ShortestPathOracle::new(&provider).unwrap();
        assert_eq!(oracle.all_pairs(), &provider.matrix);

        let wrong_size = PrecomputedPath {
            matrix: DistanceMatrix::unreachable(3),
        };
        assert!(ShortestPathOracle::new(&wrong_size).is_err());
    }
}
