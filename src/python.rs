// src/python.rs
// Python bindings, built with the `python` feature.

use crate::analysis::AnalysisSession;
use crate::config::AnalysisConfig;
use crate::errors::CentralityError;
use crate::graph::ranking::RankedList;
use crate::graph::reporting::CentralityMeasure;
use crate::graph::shortest_paths::ShortestPathOracle;
use crate::graph::{GraphProvider, Network};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn to_py_err(err: CentralityError) -> PyErr {
    match err {
        CentralityError::InvalidVertex { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn ranking_to_py(ranking: RankedList) -> Vec<(usize, f64)> {
    ranking.into_iter().map(|r| (r.vertex, r.score)).collect()
}

#[pyclass(name = "Network")]
pub struct PyNetwork {
    inner: Network,
    oracle: ShortestPathOracle,
    config: AnalysisConfig,
}

impl PyNetwork {
    fn session(&self) -> PyResult<AnalysisSession<'_, Network>> {
        AnalysisSession::from_parts(&self.inner, &self.oracle, self.config.clone())
            .map_err(to_py_err)
    }
}

#[pymethods]
impl PyNetwork {
    /// Create a network from a vertex count and a list of (from, to) edges.
    ///
    /// Args:
    ///     vertex_count: Number of vertices; vertices are 0..vertex_count
    ///     edges: List of (from, to) pairs; repeat a pair for parallel edges
    ///     directed: Whether edges are directed
    ///     config_json: Optional JSON analysis config
    #[new]
    #[pyo3(signature = (vertex_count, edges, directed=false, config_json=None))]
    fn new(
        vertex_count: usize,
        edges: Vec<(usize, usize)>,
        directed: bool,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let inner = Network::from_edges(vertex_count, &edges, directed).map_err(to_py_err)?;
        let config = match config_json {
            Some(json) => AnalysisConfig::from_json_str(json).map_err(to_py_err)?,
            None => AnalysisConfig::default(),
        };
        let oracle = ShortestPathOracle::new(&inner).map_err(to_py_err)?;
        Ok(PyNetwork {
            inner,
            oracle,
            config,
        })
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    /// Aggregate topology parameters as a dict. Undefined values are None.
    fn topology_parameters(&self, py: Python<'_>) -> PyResult<PyObject> {
        let params = self.session()?.topology_parameters().map_err(to_py_err)?;

        let dict = PyDict::new_bound(py);
        dict.set_item("connected_component_count", params.connected_component_count)?;
        dict.set_item("diameter", params.diameter)?;
        dict.set_item("radius", params.radius)?;
        dict.set_item(
            "average_shortest_path_length",
            params.average_shortest_path_length.value(),
        )?;
        dict.set_item("average_neighbor_count", params.average_neighbor_count.value())?;
        dict.set_item("density", params.density)?;
        dict.set_item("isolated_node_count", params.isolated_node_count)?;
        dict.set_item("centralization", params.centralization.value())?;
        dict.set_item("heterogeneity", params.heterogeneity.value())?;
        dict.set_item("multi_edge_node_pair_count", params.multi_edge_node_pair_count)?;
        dict.set_item("clustering_coefficient", params.clustering_coefficient.value())?;
        Ok(dict.into_py(py))
    }

    /// Rank vertices by a centrality measure.
    ///
    /// Args:
    ///     measure: One of degree, betweenness, closeness, eigenvector, pagerank,
    ///              stress, radiality, centroid, eccentricity
    ///
    /// Returns:
    ///     List of (vertex, score) tuples, highest score first, ties by vertex.
    fn centrality(&self, measure: &str) -> PyResult<Vec<(usize, f64)>> {
        let measure: CentralityMeasure = measure.parse().map_err(to_py_err)?;
        let ranking = self.session()?.centrality(measure).map_err(to_py_err)?;
        Ok(ranking_to_py(ranking))
    }

    /// Degree, betweenness, closeness, eigenvector and PageRank rankings.
    fn analyze_centrality(&self) -> PyResult<Vec<(String, Vec<(usize, f64)>)>> {
        let results = self.session()?.analyze_centrality().map_err(to_py_err)?;
        Ok(results
            .into_iter()
            .map(|(measure, ranking)| (measure.name().to_string(), ranking_to_py(ranking)))
            .collect())
    }

    /// Full analysis report (topology plus every measure) as a JSON string.
    fn report_json(&self) -> PyResult<String> {
        let report = self.session()?.analyze_all().map_err(to_py_err)?;
        report.to_json().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Network(vertices={}, edges={}, directed={})",
            self.inner.vertex_count(),
            self.inner.edge_count(),
            self.inner.is_directed()
        )
    }
}
