// src/config.rs
//! Tunables for a full analysis run. Every section has a `Default`, so a JSON
//! config only needs to name the values it overrides.

use crate::errors::{CentralityError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub stress: StressConfig,
    pub degree: NormalizationConfig,
    pub betweenness: NormalizationConfig,
    pub closeness: NormalizationConfig,
    pub pagerank: PageRankConfig,
    pub eigenvector: EigenvectorConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    /// Count the two endpoints of every shortest path as lying on it.
    pub include_endpoints: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub normalized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Probability of following a link (typically 0.85)
    pub damping_factor: f64,
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        PageRankConfig {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        EigenvectorConfig {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl AnalysisConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let pr = &self.pagerank;
        if pr.damping_factor.is_nan() || pr.damping_factor <= 0.0 || pr.damping_factor >= 1.0 {
            return Err(CentralityError::invalid_config(format!(
                "pagerank.damping_factor must be in (0, 1), got {}",
                pr.damping_factor
            )));
        }
        if pr.max_iterations == 0 {
            return Err(CentralityError::invalid_config(
                "pagerank.max_iterations must be at least 1",
            ));
        }
        if pr.tolerance.is_nan() || pr.tolerance <= 0.0 {
            return Err(CentralityError::invalid_config(format!(
                "pagerank.tolerance must be positive, got {}",
                pr.tolerance
            )));
        }
        let ev = &self.eigenvector;
        if ev.max_iterations == 0 {
            return Err(CentralityError::invalid_config(
                "eigenvector.max_iterations must be at least 1",
            ));
        }
        if ev.tolerance.is_nan() || ev.tolerance <= 0.0 {
            return Err(CentralityError::invalid_config(format!(
                "eigenvector.tolerance must be positive, got {}",
                ev.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.stress.include_endpoints);
        assert_eq!(config.pagerank.damping_factor, 0.85);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(
            r#"{"stress": {"include_endpoints": true}, "pagerank": {"max_iterations": 50}}"#,
        )
        .unwrap();
        assert!(config.stress.include_endpoints);
        assert_eq!(config.pagerank.max_iterations, 50);
        assert_eq!(config.pagerank.damping_factor, 0.85);
        assert_eq!(config.eigenvector, EigenvectorConfig::default());
    }

    #[test]
    fn test_rejects_bad_damping() {
        let err = AnalysisConfig::from_json_str(r#"{"pagerank": {"damping_factor": 1.5}}"#)
            .unwrap_err();
        assert!(matches!(err, CentralityError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AnalysisConfig::from_json_str("{stress").unwrap_err();
        assert!(matches!(err, CentralityError::Serialization { .. }));
    }

    #[test]
    fn test_rejects_zero_tolerance() {
        let mut config = AnalysisConfig::default();
        config.eigenvector.tolerance = 0.0;
        assert!(config.validate().is_err());
    }
}
