// src/lib.rs
//! Centrality rankings and topology statistics for unweighted networks.
//!
//! Build a [`Network`] (or implement [`GraphProvider`] for your own graph),
//! open an [`AnalysisSession`] to compute the distance matrix once, then ask
//! it for [`TopologyParameters`] or any [`CentralityMeasure`] ranking.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod graph;

#[cfg(feature = "python")]
mod python;

pub use analysis::AnalysisSession;
pub use config::AnalysisConfig;
pub use errors::{CentralityError, Result};
pub use graph::ranking::{rank, CentralityResult, RankedList, ScoreMap};
pub use graph::reporting::{AnalysisReport, CentralityMeasure};
pub use graph::shortest_paths::{Distance, DistanceMatrix, ShortestPathOracle};
pub use graph::topology::{Measure, TopologyParameters};
pub use graph::{GraphProvider, Network};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn network_centrality(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<python::PyNetwork>()?;
    Ok(())
}
