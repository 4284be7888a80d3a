//! Transit network graph.
//!
//! [`Network`] owns the station set and the connection list and derives
//! dense matrices from them on demand. The matrices are cached state: every
//! structural mutation leaves them stale until the caller runs
//! [`Network::regenerate`] again. Path search and the textual reports read
//! only the cached matrices.

mod index;
mod matrix;
mod path;
mod render;


use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Connection, MatrixKind, NetworkError, Station, StationId};

pub use index::IndexMapping;
pub use matrix::{AdjacencyMatrix, IncidenceMatrix};
pub use path::{Hop, Route, RouteKind};

/// The transit graph: stations, connections, and derived matrices.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, Station>,

    /// Insertion order is preserved; parallel connections are allowed.
    connections: Vec<Connection>,

    mapping: IndexMapping,
    adjacency: Option<AdjacencyMatrix>,
    incidence: Option<IncidenceMatrix>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station, replacing any existing station with the same id.
    ///
    /// Returns the replaced station, if any.
    pub fn add_station(&mut self, station: Station) -> Option<Station> {
        self.stations.insert(station.id(), station)
    }

    /// Append a connection if both endpoints exist.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), NetworkError> {
        if !self.stations.contains_key(&connection.from())
            || !self.stations.contains_key(&connection.to())
        {
            warn!(%connection, "Rejected connection with unknown endpoint");
            return Err(NetworkError::UnknownEndpoint {
                from: connection.from(),
                to: connection.to(),
            });
        }
        self.connections.push(connection);
        Ok(())
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Greatest station id in use, or `0` if there are no stations.
    pub fn max_station_id(&self) -> u32 {
        self.stations.keys().map(|id| id.0).max().unwrap_or(0)
    }

    /// The id a newly created station should receive, or `None` once
    /// `u32::MAX` is in use.
    pub fn next_station_id(&self) -> Option<StationId> {
        StationId(self.max_station_id()).next()
    }

    /// Remove a station and every connection touching it.
    ///
    /// Returns whether the station existed.
    pub fn remove_station(&mut self, id: StationId) -> bool {
        if self.stations.remove(&id).is_none() {
            return false;
        }
        self.connections.retain(|c| !c.touches(id));
        true
    }

    /// Remove the first connection joining `from` and `to`, in either
    /// direction.
    ///
    /// Returns whether one was found.
    pub fn remove_connection(&mut self, from: StationId, to: StationId) -> bool {
        match self.connections.iter().position(|c| c.joins(from, to)) {
            Some(pos) => {
                self.connections.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations in ascending id order.
    pub fn stations_by_id(&self) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self.stations.values().collect();
        stations.sort_by_key(|s| s.id());
        stations
    }

    /// All connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Reassign dense indices from the current station set.
    pub fn rebuild_index_mapping(&mut self) {
        self.mapping = IndexMapping::from_ids(self.stations.keys().copied());
    }

    /// Current id ↔ index mapping.
    pub fn mapping(&self) -> &IndexMapping {
        &self.mapping
    }

    /// Rebuild the index mapping and the adjacency matrix.
    pub fn build_adjacency_matrix(&mut self) {
        self.rebuild_index_mapping();
        self.adjacency = Some(AdjacencyMatrix::build(&self.mapping, &self.connections));
    }

    /// Rebuild the index mapping and the incidence matrix.
    pub fn build_incidence_matrix(&mut self) {
        self.rebuild_index_mapping();
        self.incidence = Some(IncidenceMatrix::build(&self.mapping, &self.connections));
    }

    /// Rebuild both matrices.
    pub fn regenerate(&mut self) {
        self.build_adjacency_matrix();
        self.build_incidence_matrix();
        debug!(
            stations = self.stations.len(),
            connections = self.connections.len(),
            "Regenerated network matrices"
        );
    }

    /// The cached adjacency matrix.
    pub fn adjacency(&self) -> Result<&AdjacencyMatrix, NetworkError> {
        self.adjacency
            .as_ref()
            .ok_or(NetworkError::NotYetGenerated(MatrixKind::Adjacency))
    }

    /// The cached incidence matrix.
    pub fn incidence(&self) -> Result<&IncidenceMatrix, NetworkError> {
        self.incidence
            .as_ref()
            .ok_or(NetworkError::NotYetGenerated(MatrixKind::Incidence))
    }

    /// Adjacency matrix, provided it still matches the current mapping.
    fn current_adjacency(&self) -> Result<&AdjacencyMatrix, NetworkError> {
        let adjacency = self.adjacency()?;
        if adjacency.size() != self.mapping.len() {
            return Err(NetworkError::NotYetGenerated(MatrixKind::Adjacency));
        }
        Ok(adjacency)
    }

    /// Degree of a station: the number of positive-weight neighbours.
    pub fn degree_of(&self, id: StationId) -> Result<usize, NetworkError> {
        let adjacency = self.current_adjacency()?;
        let index = self
            .mapping
            .index_of(id)
            .ok_or(NetworkError::UnknownStation(id))?;
        Ok(adjacency.degree(index))
    }

    /// Degree of every station, in index order.
    pub fn degrees(&self) -> Result<Vec<(&Station, usize)>, NetworkError> {
        let adjacency = self.current_adjacency()?;
        if self.stations.is_empty() {
            return Err(NetworkError::EmptyGraph);
        }

        (0..adjacency.size())
            .map(|i| Ok((self.station_at(i)?, adjacency.degree(i))))
            .collect()
    }

    /// Station at a dense matrix index.
    fn station_at(&self, index: usize) -> Result<&Station, NetworkError> {
        let id = self
            .mapping
            .id_at(index)
            .ok_or(NetworkError::NotYetGenerated(MatrixKind::Adjacency))?;
        self.stations
            .get(&id)
            .ok_or(NetworkError::UnknownStation(id))
    }
}
