// src/graph/ranking.rs
//! Score vectors and their deterministic ranking.

use crate::errors::{check_vertex, Result};
use serde::Serialize;
use std::cmp::Ordering;

/// Raw per-vertex scores from one algorithm run, indexed by vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreMap {
    scores: Vec<f64>,
}

impl ScoreMap {
    pub fn new(scores: Vec<f64>) -> Self {
        ScoreMap { scores }
    }

    pub fn zeros(vertex_count: usize) -> Self {
        ScoreMap {
            scores: vec![0.0; vertex_count],
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score(&self, vertex: usize) -> Result<f64> {
        check_vertex(vertex, self.scores.len())?;
        Ok(self.scores[vertex])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().copied().enumerate()
    }

    pub fn ranked(&self) -> RankedList {
        rank(self)
    }
}

impl From<Vec<f64>> for ScoreMap {
    fn from(scores: Vec<f64>) -> Self {
        ScoreMap::new(scores)
    }
}

/// One entry of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentralityResult {
    pub vertex: usize,
    pub score: f64,
}

pub type RankedList = Vec<CentralityResult>;

/// Sort scores descending, ties broken by ascending vertex index.
pub fn rank(scores: &ScoreMap) -> RankedList {
    let mut results: RankedList = scores
        .iter()
        .map(|(vertex, score)| CentralityResult { vertex, score })
        .collect();

    results.sort_by(|a, b| {
        score_order(b.score, a.score).then_with(|| a.vertex.cmp(&b.vertex))
    });

    results
}

// Total order on scores with -0.0 folded into 0.0, so equal scores always
// fall through to the vertex tie-break.
fn score_order(a: f64, b: f64) -> Ordering {
    let fold = |x: f64| if x == 0.0 { 0.0 } else { x };
    fold(a).total_cmp(&fold(b))
}
