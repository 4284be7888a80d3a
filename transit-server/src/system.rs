//! The network and its two lookup indexes as one unit.
//!
//! [`Network`] leaves its matrices stale after a mutation and the indexes
//! never follow the network on their own. [`TransitSystem`] wraps every
//! mutation so that, on return, the matrices are regenerated and (for
//! station changes) both indexes have been rebuilt.

use tracing::{debug, info, warn};

use crate::domain::{Connection, InvalidStation, NetworkError, Station, StationId, Weight};
use crate::network::Network;
use crate::stations::{LookupError, NameIndex, PrefixIndex};

/// What happened while populating a system from loaded records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Stations that replaced an earlier record with the same id.
    pub replaced_stations: Vec<Station>,
    /// Connections rejected because an endpoint does not exist.
    pub rejected_connections: Vec<Connection>,
}

/// Network, name index and prefix index kept consistent with each other.
#[derive(Debug, Default)]
pub struct TransitSystem {
    network: Network,
    names: NameIndex,
    prefixes: PrefixIndex,
}

impl TransitSystem {
    /// Create an empty system with generated (empty) matrices.
    pub fn new() -> Self {
        let mut system = Self::default();
        system.network.regenerate();
        system
    }

    /// Build a system from parsed records.
    ///
    /// Stations are added first, so connection order does not matter.
    pub fn from_records(
        stations: impl IntoIterator<Item = Station>,
        connections: impl IntoIterator<Item = Connection>,
    ) -> (Self, LoadSummary) {
        let mut system = Self::default();
        let mut summary = LoadSummary::default();

        for station in stations {
            if let Some(old) = system.network.add_station(station) {
                warn!(station = %old, "Duplicate station id, keeping the later record");
                summary.replaced_stations.push(old);
            }
        }
        for connection in connections {
            if system.network.add_connection(connection).is_err() {
                summary.rejected_connections.push(connection);
            }
        }

        system.network.regenerate();
        system.rebuild_indexes();
        info!(
            stations = system.network.station_count(),
            connections = system.network.connection_count(),
            rejected = summary.rejected_connections.len(),
            "Transit system built"
        );
        (system, summary)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    pub fn prefixes(&self) -> &PrefixIndex {
        &self.prefixes
    }

    /// Create a station with the next free id.
    ///
    /// Fails with [`InvalidStation::NO_FREE_ID`] once `u32::MAX` is taken.
    pub fn add_station(&mut self, name: &str) -> Result<Station, InvalidStation> {
        let id = self
            .network
            .next_station_id()
            .ok_or(InvalidStation::NO_FREE_ID)?;
        let station = Station::new(id, name)?;
        self.network.add_station(station.clone());
        self.network.regenerate();
        self.rebuild_indexes();
        debug!(%station, "Station added");
        Ok(station)
    }

    /// Connect two existing stations.
    pub fn add_connection(
        &mut self,
        from: StationId,
        to: StationId,
        weight: Weight,
    ) -> Result<Connection, NetworkError> {
        let connection = Connection::new(from, to, weight);
        self.network.add_connection(connection)?;
        self.network.regenerate();
        debug!(%connection, "Connection added");
        Ok(connection)
    }

    /// Remove a station and every connection touching it.
    pub fn remove_station(&mut self, id: StationId) -> Result<Station, NetworkError> {
        let station = self
            .network
            .station(id)
            .cloned()
            .ok_or(NetworkError::UnknownStation(id))?;
        self.network.remove_station(id);
        self.network.regenerate();
        self.rebuild_indexes();
        debug!(%station, "Station removed");
        Ok(station)
    }

    /// Remove the first connection joining two stations, in either direction.
    ///
    /// Returns whether a connection was removed.
    pub fn remove_connection(&mut self, from: StationId, to: StationId) -> bool {
        if !self.network.remove_connection(from, to) {
            return false;
        }
        self.network.regenerate();
        debug!(%from, %to, "Connection removed");
        true
    }

    /// Exact, case-sensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Result<&Station, LookupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LookupError::BlankQuery { field: "name" });
        }
        self.names.search(name).ok_or_else(|| LookupError::NotFound {
            name: name.to_string(),
        })
    }

    /// Accent- and case-insensitive prefix lookup.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<&Station>, LookupError> {
        if prefix.trim().is_empty() {
            return Err(LookupError::BlankQuery { field: "prefix" });
        }
        let found = self.prefixes.search_by_prefix(prefix);
        if found.is_empty() {
            return Err(LookupError::NoPrefixMatch {
                prefix: prefix.to_string(),
            });
        }
        Ok(found)
    }

    /// Every station in alphabetical order.
    pub fn alphabetical(&self) -> Result<Vec<&Station>, LookupError> {
        self.names.in_order()
    }

    /// Clear both indexes and reinsert every station in ascending id order.
    fn rebuild_indexes(&mut self) {
        let stations: Vec<Station> = self
            .network
            .stations_by_id()
            .into_iter()
            .cloned()
            .collect();
        self.names.rebuild(stations.iter().cloned());
        self.prefixes.rebuild(stations);
        debug!(
            names = self.names.len(),
            prefixes = self.prefixes.len(),
            "Rebuilt station indexes"
        );
    }
}
