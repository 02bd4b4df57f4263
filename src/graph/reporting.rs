// src/graph/reporting.rs
use crate::errors::{CentralityError, Result};
use crate::graph::ranking::RankedList;
use crate::graph::topology::TopologyParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every centrality measure the crate can rank vertices by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityMeasure {
    Degree,
    Betweenness,
    Closeness,
    Eigenvector,
    PageRank,
    Stress,
    Radiality,
    Centroid,
    Eccentricity,
}

impl CentralityMeasure {
    /// The standard measures, in the order `analyze_centrality` runs them.
    pub const STANDARD: [CentralityMeasure; 5] = [
        CentralityMeasure::Degree,
        CentralityMeasure::Betweenness,
        CentralityMeasure::Closeness,
        CentralityMeasure::Eigenvector,
        CentralityMeasure::PageRank,
    ];

    pub const ALL: [CentralityMeasure; 9] = [
        CentralityMeasure::Degree,
        CentralityMeasure::Betweenness,
        CentralityMeasure::Closeness,
        CentralityMeasure::Eigenvector,
        CentralityMeasure::PageRank,
        CentralityMeasure::Stress,
        CentralityMeasure::Radiality,
        CentralityMeasure::Centroid,
        CentralityMeasure::Eccentricity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CentralityMeasure::Degree => "degree",
            CentralityMeasure::Betweenness => "betweenness",
            CentralityMeasure::Closeness => "closeness",
            CentralityMeasure::Eigenvector => "eigenvector",
            CentralityMeasure::PageRank => "pagerank",
            CentralityMeasure::Stress => "stress",
            CentralityMeasure::Radiality => "radiality",
            CentralityMeasure::Centroid => "centroid",
            CentralityMeasure::Eccentricity => "eccentricity",
        }
    }
}

impl fmt::Display for CentralityMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CentralityMeasure {
    type Err = CentralityError;

    fn from_str(s: &str) -> Result<Self> {
        CentralityMeasure::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CentralityError::invalid_config(format!("unknown centrality measure '{}'", s)))
    }
}

/// One ranked measure along with how long it took.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureReport {
    pub measure: CentralityMeasure,
    pub processing_time_ms: f64,
    pub ranking: RankedList,
}

/// Result of a full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub topology: TopologyParameters,
    pub centralities: Vec<MeasureReport>,
    pub processing_time_ms: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AnalysisReport {
    pub fn ranking(&self, measure: CentralityMeasure) -> Option<&RankedList> {
        self.centralities
            .iter()
            .find(|m| m.measure == measure)
            .map(|m| &m.ranking)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
