//! Network error types.
//!
//! Every variant is an expected, recoverable outcome of a query or
//! mutation. None of them indicate a broken process; callers render them
//! as user-facing text.

use std::fmt;

use super::{Station, StationId};

/// Which derived matrix a query needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    Adjacency,
    Incidence,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKind::Adjacency => f.write_str("adjacency"),
            MatrixKind::Incidence => f.write_str("incidence"),
        }
    }
}

/// Errors reported by the network core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Station id not present for a path or lookup query
    #[error("station {0} not found")]
    UnknownStation(StationId),

    /// Connection references a station that does not exist
    #[error("connection {from} - {to} references a missing station")]
    UnknownEndpoint { from: StationId, to: StationId },

    /// Origin and destination are structurally disconnected
    #[error("no path found from station {} to {}", .origin.name(), .destination.name())]
    NoPathFound {
        origin: Station,
        destination: Station,
    },

    /// The network holds no stations
    #[error("the network has no stations")]
    EmptyGraph,

    /// A matrix was queried before it was generated (or after it went stale)
    #[error("{0} matrix not yet generated")]
    NotYetGenerated(MatrixKind),
}

impl NetworkError {
    /// Stable snake_case tag for this error, used by external surfaces.
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkError::UnknownStation(_) => "unknown_station",
            NetworkError::UnknownEndpoint { .. } => "unknown_endpoint",
            NetworkError::NoPathFound { .. } => "no_path_found",
            NetworkError::EmptyGraph => "empty_graph",
            NetworkError::NotYetGenerated(_) => "not_yet_generated",
        }
    }
}
