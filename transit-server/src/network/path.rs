//! Shortest-path search over the adjacency matrix.
//!
//! Both searches treat a cell as an edge only when its weight is positive,
//! and both share the same predecessor-walk reconstruction.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use tracing::{debug, trace};

use crate::domain::{NetworkError, Station, StationId, Weight};

use super::Network;
use super::matrix::AdjacencyMatrix;

/// Which cost a route minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Fewest edges (breadth-first search).
    Stops,
    /// Least cumulative weight (Dijkstra).
    Distance,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Stops => "stops",
            RouteKind::Distance => "distance",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            RouteKind::Stops => "Route by stops (BFS)",
            RouteKind::Distance => "Route by distance (Dijkstra)",
        }
    }
}

/// One edge of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub weight: Weight,
}

/// A reconstructed path from origin to destination.
///
/// Hop weights are read back from the adjacency matrix along the path, so
/// the total is a recomputation rather than the search's own distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    kind: RouteKind,
    stations: Vec<Station>,
    /// `weights[i]` is the weight between `stations[i]` and `stations[i + 1]`.
    weights: Vec<Weight>,
}

impl Route {
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Stations in travel order, origin first.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Station ids in travel order.
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(Station::id).collect()
    }

    /// Consecutive station pairs with their edge weight.
    pub fn hops(&self) -> impl Iterator<Item = Hop<'_>> {
        self.stations
            .windows(2)
            .zip(&self.weights)
            .map(|(pair, &weight)| Hop {
                from: &pair[0],
                to: &pair[1],
                weight,
            })
    }

    /// Number of edges travelled.
    pub fn stops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Sum of edge weights along the route.
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.title())?;
        writeln!(f)?;

        for (i, station) in self.stations.iter().enumerate() {
            write!(f, "[{}] {}", station.id(), station.name())?;
            if let Some(weight) = self.weights.get(i) {
                match self.kind {
                    RouteKind::Distance => writeln!(f, " --(Weight: {weight})-->")?,
                    RouteKind::Stops => writeln!(f, " -->")?,
                }
            }
        }

        write!(f, "\n\n--- SUMMARY ---\n")?;
        if self.kind == RouteKind::Distance {
            writeln!(f, "Total cost (distance): {}", self.total_weight())?;
        }
        writeln!(f, "Number of stops: {}", self.stops())
    }
}

impl Network {
    /// Fewest-stops route between two stations.
    ///
    /// Neighbours are explored in ascending index (and therefore id) order,
    /// and the search stops as soon as the destination is dequeued.
    pub fn bfs(&self, origin: StationId, destination: StationId) -> Result<Route, NetworkError> {
        let adjacency = self.current_adjacency()?;
        let (start, goal) = self.endpoints(origin, destination)?;

        let n = adjacency.size();
        let mut previous: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            if current == goal {
                break;
            }
            trace!(index = current, "BFS expanding station");

            for (next, _) in adjacency.neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    previous[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        self.reconstruct(adjacency, RouteKind::Stops, start, goal, &previous)
    }

    /// Least-weight route between two stations.
    ///
    /// Lazy-deletion Dijkstra: stale frontier entries are skipped when
    /// popped, and the search stops once the destination is finalized.
    pub fn dijkstra(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<Route, NetworkError> {
        let adjacency = self.current_adjacency()?;
        let (start, goal) = self.endpoints(origin, destination)?;

        let n = adjacency.size();
        let mut distance = vec![u64::MAX; n];
        let mut previous: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut frontier = BinaryHeap::new();

        distance[start] = 0;
        frontier.push(Reverse((0u64, start)));

        while let Some(Reverse((dist, current))) = frontier.pop() {
            if finalized[current] {
                continue;
            }
            finalized[current] = true;

            if current == goal {
                break;
            }
            trace!(index = current, distance = dist, "Dijkstra finalized station");

            for (next, weight) in adjacency.neighbors(current) {
                if finalized[next] {
                    continue;
                }
                let candidate = dist + u64::from(weight);
                if candidate < distance[next] {
                    distance[next] = candidate;
                    previous[next] = Some(current);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        let route = self.reconstruct(adjacency, RouteKind::Distance, start, goal, &previous)?;
        debug_assert_eq!(route.total_weight(), distance[goal]);
        debug!(
            origin = %origin,
            destination = %destination,
            total = route.total_weight(),
            "Dijkstra route found"
        );
        Ok(route)
    }

    /// Matrix indices for a query pair.
    fn endpoints(
        &self,
        origin: StationId,
        destination: StationId,
    ) -> Result<(usize, usize), NetworkError> {
        let start = self
            .mapping
            .index_of(origin)
            .ok_or(NetworkError::UnknownStation(origin))?;
        let goal = self
            .mapping
            .index_of(destination)
            .ok_or(NetworkError::UnknownStation(destination))?;
        Ok((start, goal))
    }

    /// Walk predecessor links back from `goal` and re-derive hop weights.
    fn reconstruct(
        &self,
        adjacency: &AdjacencyMatrix,
        kind: RouteKind,
        start: usize,
        goal: usize,
        previous: &[Option<usize>],
    ) -> Result<Route, NetworkError> {
        if previous[goal].is_none() && goal != start {
            return Err(NetworkError::NoPathFound {
                origin: self.station_at(start)?.clone(),
                destination: self.station_at(goal)?.clone(),
            });
        }

        let mut indices = vec![goal];
        let mut current = goal;
        while let Some(prev) = previous[current] {
            indices.push(prev);
            current = prev;
        }
        indices.reverse();

        let stations = indices
            .iter()
            .map(|&i| self.station_at(i).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        let weights = indices
            .windows(2)
            .map(|pair| adjacency.get(pair[0], pair[1]))
            .collect();

        Ok(Route {
            kind,
            stations,
            weights,
        })
    }
}
