//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Station, StationId, Weight};
use crate::network::{Hop, Route};

/// A station in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResult {
    pub id: StationId,
    pub name: String,
}

/// A connection in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionResult {
    pub from: StationId,
    pub to: StationId,
    pub weight: Weight,
}

/// Adjacency matrix with its row/column station ids.
#[derive(Debug, Serialize)]
pub struct AdjacencyResponse {
    /// Station id for each row and column, in index order
    pub station_ids: Vec<StationId>,
    pub matrix: Vec<Vec<Weight>>,
    pub report: String,
}

/// Incidence matrix: one row per station, one column per connection.
#[derive(Debug, Serialize)]
pub struct IncidenceResponse {
    pub station_ids: Vec<StationId>,
    pub connections: Vec<ConnectionResult>,
    pub matrix: Vec<Vec<i8>>,
    pub report: String,
}

/// Every connection in insertion order.
#[derive(Debug, Serialize)]
pub struct EdgeListResponse {
    pub connections: Vec<ConnectionResult>,
    pub report: String,
}

/// A neighbouring station reached over a positive-weight edge.
#[derive(Debug, Serialize)]
pub struct NeighborResult {
    pub station: StationResult,
    pub weight: Weight,
}

#[derive(Debug, Serialize)]
pub struct SuccessorEntry {
    pub station: StationResult,
    pub neighbors: Vec<NeighborResult>,
}

#[derive(Debug, Serialize)]
pub struct SuccessorListResponse {
    pub successors: Vec<SuccessorEntry>,
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct DegreeEntry {
    pub station: StationResult,
    pub degree: usize,
}

#[derive(Debug, Serialize)]
pub struct DegreesResponse {
    pub degrees: Vec<DegreeEntry>,
    pub report: String,
}

/// Origin and destination of a route query.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub from: u32,
    pub to: u32,
}

/// One edge of a route.
#[derive(Debug, Serialize)]
pub struct HopResult {
    pub from: StationId,
    pub to: StationId,
    pub weight: Weight,
}

/// A route found by BFS or Dijkstra.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// `"stops"` or `"distance"`
    pub kind: &'static str,
    pub stations: Vec<StationResult>,
    pub hops: Vec<HopResult>,
    pub stops: usize,
    pub total_weight: u64,
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PrefixQuery {
    pub prefix: String,
}

/// A list of stations with its textual rendering.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
    pub report: String,
}

/// Request to create a station. The id is assigned by the server.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

/// Request to create a connection.
#[derive(Debug, Deserialize)]
pub struct CreateConnectionRequest {
    pub from: u32,
    pub to: u32,
    pub weight: Weight,
}

/// Endpoints of a connection to delete.
#[derive(Debug, Deserialize)]
pub struct ConnectionQuery {
    pub from: u32,
    pub to: u32,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Stable machine-readable error tag
    pub kind: String,
}

// Conversion implementations

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

impl From<&Connection> for ConnectionResult {
    fn from(connection: &Connection) -> Self {
        Self {
            from: connection.from(),
            to: connection.to(),
            weight: connection.weight(),
        }
    }
}

impl From<Hop<'_>> for HopResult {
    fn from(hop: Hop<'_>) -> Self {
        Self {
            from: hop.from.id(),
            to: hop.to.id(),
            weight: hop.weight,
        }
    }
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            kind: route.kind().as_str(),
            stations: route.stations().iter().map(StationResult::from).collect(),
            hops: route.hops().map(HopResult::from).collect(),
            stops: route.stops(),
            total_weight: route.total_weight(),
            report: route.to_string(),
        }
    }
}

impl StationListResponse {
    /// Create from stations and a pre-rendered report.
    pub fn new<'a>(stations: impl IntoIterator<Item = &'a Station>, report: String) -> Self {
        Self {
            stations: stations.into_iter().map(StationResult::from).collect(),
            report,
        }
    }
}
