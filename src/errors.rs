//! Error types for network_centrality
//!
//! Structural problems with the input (a malformed graph, an out-of-range
//! vertex) abort the operation and surface here. Formula results that are
//! undefined for a given graph size are not errors; see
//! [`crate::graph::topology::Measure`].

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CentralityError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CentralityError {
    /// The supplied graph is not well formed (e.g. an edge endpoint outside `0..n`)
    #[error("Invalid input graph: {message}")]
    InvalidInput { message: String },

    /// A requested vertex index is out of range
    #[error("Invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CentralityError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        Self::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CentralityError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Check that `vertex` is a valid index for a graph of `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(CentralityError::invalid_vertex(vertex, vertex_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CentralityError::invalid_vertex(7, 3);
        assert!(err.to_string().contains("Invalid vertex 7"));
        assert!(err.to_string().contains("3 vertices"));

        let err = CentralityError::invalid_input("edge (0, 9) out of range");
        assert!(err.to_string().contains("Invalid input graph"));
    }

    #[test]
    fn test_check_vertex() {
        assert!(check_vertex(0, 1).is_ok());
        assert_eq!(
            check_vertex(1, 1),
            Err(CentralityError::InvalidVertex {
                vertex: 1,
                vertex_count: 1
            })
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: CentralityError = parse.unwrap_err().into();
        assert!(matches!(err, CentralityError::Serialization { .. }));
    }
}
