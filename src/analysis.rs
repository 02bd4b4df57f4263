// src/analysis.rs
//! One analysis session: a borrowed graph, its distance matrix built once
//! (or handed in prebuilt), and every measure computed against that shared
//! matrix.

use crate::config::AnalysisConfig;
use crate::errors::{CentralityError, Result};
use crate::graph::centrality::{
    centroid_centrality, eccentricity_centrality, radiality_centrality, stress_centrality,
};
use crate::graph::graph_algorithms::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
    pagerank,
};
use crate::graph::ranking::{rank, RankedList, ScoreMap};
use crate::graph::reporting::{AnalysisReport, CentralityMeasure, MeasureReport};
use crate::graph::shortest_paths::ShortestPathOracle;
use crate::graph::topology::{topology_parameters, TopologyParameters};
use crate::graph::GraphProvider;
use std::borrow::Cow;
use std::time::Instant;
use tracing::{info, info_span};

pub struct AnalysisSession<'g, G: GraphProvider + ?Sized> {
    graph: &'g G,
    oracle: Cow<'g, ShortestPathOracle>,
    config: AnalysisConfig,
}

impl<'g, G: GraphProvider + ?Sized> AnalysisSession<'g, G> {
    pub fn new(graph: &'g G) -> Result<Self> {
        Self::with_config(graph, AnalysisConfig::default())
    }

    /// Validate the config and build the distance matrix for `graph`.
    pub fn with_config(graph: &'g G, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let _span = info_span!(
            "shortest_paths",
            vertices = graph.vertex_count(),
            directed = graph.is_directed()
        )
        .entered();
        let oracle = ShortestPathOracle::new(graph)?;
        Ok(AnalysisSession {
            graph,
            oracle: Cow::Owned(oracle),
            config,
        })
    }

    /// Reuse an oracle already built for `graph`, so repeated sessions over
    /// one graph share a single distance matrix.
    pub fn from_parts(
        graph: &'g G,
        oracle: &'g ShortestPathOracle,
        config: AnalysisConfig,
    ) -> Result<Self> {
        config.validate()?;
        if oracle.vertex_count() != graph.vertex_count()
            || oracle.is_directed() != graph.is_directed()
        {
            return Err(CentralityError::invalid_input(format!(
                "distance oracle ({} vertices, directed={}) does not match graph ({} vertices, directed={})",
                oracle.vertex_count(),
                oracle.is_directed(),
                graph.vertex_count(),
                graph.is_directed()
            )));
        }
        Ok(AnalysisSession {
            graph,
            oracle: Cow::Borrowed(oracle),
            config,
        })
    }

    pub fn graph(&self) -> &G {
        self.graph
    }

    pub fn oracle(&self) -> &ShortestPathOracle {
        &self.oracle
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn topology_parameters(&self) -> Result<TopologyParameters> {
        let _span = info_span!("topology_parameters").entered();
        topology_parameters(self.graph, &self.oracle)
    }

    /// Raw per-vertex scores for `measure`.
    pub fn scores(&self, measure: CentralityMeasure) -> Result<ScoreMap> {
        let config = &self.config;
        match measure {
            CentralityMeasure::Degree => degree_centrality(self.graph, config.degree.normalized),
            CentralityMeasure::Betweenness => {
                betweenness_centrality(self.graph, config.betweenness.normalized)
            }
            CentralityMeasure::Closeness => {
                Ok(closeness_centrality(&self.oracle, config.closeness.normalized))
            }
            CentralityMeasure::Eigenvector => eigenvector_centrality(self.graph, &config.eigenvector),
            CentralityMeasure::PageRank => pagerank(self.graph, &config.pagerank),
            CentralityMeasure::Stress => stress_centrality(self.graph, config.stress),
            CentralityMeasure::Radiality => Ok(radiality_centrality(&self.oracle)),
            CentralityMeasure::Centroid => Ok(centroid_centrality(&self.oracle)),
            CentralityMeasure::Eccentricity => Ok(eccentricity_centrality(&self.oracle)),
        }
    }

    /// Vertices ranked by `measure`, highest score first.
    pub fn centrality(&self, measure: CentralityMeasure) -> Result<RankedList> {
        let _span = info_span!("centrality", measure = measure.name()).entered();
        info!("Analyzing {} centrality", measure);
        let ranking = rank(&self.scores(measure)?);
        info!("Finished {} centrality", measure);
        Ok(ranking)
    }

    pub fn stress(&self) -> Result<RankedList> {
        self.centrality(CentralityMeasure::Stress)
    }

    pub fn radiality(&self) -> Result<RankedList> {
        self.centrality(CentralityMeasure::Radiality)
    }

    pub fn centroid(&self) -> Result<RankedList> {
        self.centrality(CentralityMeasure::Centroid)
    }

    pub fn eccentricity(&self) -> Result<RankedList> {
        self.centrality(CentralityMeasure::Eccentricity)
    }

    /// Degree, betweenness, closeness, eigenvector and PageRank, in that order.
    pub fn analyze_centrality(&self) -> Result<Vec<(CentralityMeasure, RankedList)>> {
        CentralityMeasure::STANDARD
            .into_iter()
            .map(|measure| Ok((measure, self.centrality(measure)?)))
            .collect()
    }

    /// Topology parameters plus every centrality measure, timed.
    pub fn analyze_all(&self) -> Result<AnalysisReport> {
        let start = Instant::now();
        let topology = self.topology_parameters()?;

        let mut centralities = Vec::with_capacity(CentralityMeasure::ALL.len());
        for measure in CentralityMeasure::ALL {
            let measure_start = Instant::now();
            let ranking = self.centrality(measure)?;
            centralities.push(MeasureReport {
                measure,
                processing_time_ms: measure_start.elapsed().as_secs_f64() * 1000.0,
                ranking,
            });
        }

        let report = AnalysisReport {
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            directed: self.graph.is_directed(),
            topology,
            centralities,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            timestamp: chrono::Utc::now(),
        };
        info!(
            vertices = report.vertex_count,
            edges = report.edge_count,
            elapsed_ms = report.processing_time_ms,
            "analysis complete"
        );
        Ok(report)
    }
}
