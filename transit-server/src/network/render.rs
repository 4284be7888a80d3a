//! Plain-text reports over the network state.
//!
//! Matrix views distinguish "not yet generated" (an error) from a
//! generated matrix over an empty network ([`NetworkError::EmptyGraph`]).

use crate::domain::{MatrixKind, NetworkError, StationId};

use super::Network;

/// Width of the row label column (`ID nnn | `).
const ROW_LABEL_PAD: &str = "        ";

impl Network {
    /// Adjacency matrix with station ids as row and column headers.
    pub fn adjacency_report(&self) -> Result<String, NetworkError> {
        let adjacency = self.current_adjacency()?;
        if self.is_empty() {
            return Err(NetworkError::EmptyGraph);
        }

        let mut out = String::from("Adjacency matrix (IDs)\n\n");
        out.push_str(ROW_LABEL_PAD);
        for id in self.mapping.ids() {
            out.push_str(&format!("ID {:<3} ", id.0));
        }
        out.push('\n');

        for (id, row) in self.mapping.ids().iter().zip(adjacency.rows()) {
            push_row(&mut out, *id, row.iter().map(|&w| i64::from(w)));
        }
        Ok(out)
    }

    /// Incidence matrix with one `Cnn` column per connection.
    pub fn incidence_report(&self) -> Result<String, NetworkError> {
        let incidence = self.incidence()?;
        if self.connections.is_empty() {
            return Ok("Incidence matrix\n\n(No connections to display)".to_string());
        }
        if self.is_empty() {
            return Err(NetworkError::EmptyGraph);
        }
        if incidence.rows() != self.mapping.len() {
            return Err(NetworkError::NotYetGenerated(MatrixKind::Incidence));
        }

        let mut out = String::from("Incidence matrix\n\n");
        out.push_str(ROW_LABEL_PAD);
        for j in 0..incidence.cols() {
            out.push_str(&format!("C{:02}   ", j + 1));
        }
        out.push('\n');

        for (i, id) in self.mapping.ids().iter().enumerate() {
            push_row(&mut out, *id, incidence.row(i).iter().map(|&v| i64::from(v)));
        }
        Ok(out)
    }

    /// Every connection with its endpoint names and weight.
    pub fn edge_list_report(&self) -> String {
        let mut out = String::from("Edge list (connections):\n\n");
        if self.connections.is_empty() {
            out.push_str("(No connections)");
            return out;
        }

        for conn in &self.connections {
            out.push_str(&format!(
                "[{}] {} <--(Weight: {})--> [{}] {}\n",
                conn.from(),
                self.station_name(conn.from()),
                conn.weight(),
                conn.to(),
                self.station_name(conn.to()),
            ));
        }
        out
    }

    /// For each station, its positive-weight neighbours.
    pub fn successor_report(&self) -> Result<String, NetworkError> {
        if self.is_empty() {
            return Err(NetworkError::EmptyGraph);
        }
        let adjacency = self.current_adjacency()?;

        let mut out = String::from("Successor list (adjacencies):\n\n");
        for (i, &id) in self.mapping.ids().iter().enumerate() {
            out.push_str(&format!("[{}] {} -> ", id, self.station_name(id)));

            let mut any = false;
            for (j, weight) in adjacency.neighbors(i) {
                let Some(next) = self.mapping.id_at(j) else {
                    continue;
                };
                out.push_str(&format!(
                    "[{}] {} (Weight: {}) | ",
                    next,
                    self.station_name(next),
                    weight
                ));
                any = true;
            }
            if !any {
                out.push_str("(None)");
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Degree of every station.
    pub fn degree_report(&self) -> Result<String, NetworkError> {
        if self.is_empty() {
            return Err(NetworkError::EmptyGraph);
        }

        let mut out = String::from("Vertex degrees (stations):\n\n");
        for (station, degree) in self.degrees()? {
            out.push_str(&format!(
                "[{}] {}: Degree {}\n",
                station.id(),
                station.name(),
                degree
            ));
        }
        Ok(out)
    }

    fn station_name(&self, id: StationId) -> &str {
        self.stations.get(&id).map_or("?", |s| s.name())
    }
}

/// Append one labelled matrix row.
fn push_row(out: &mut String, id: StationId, values: impl Iterator<Item = i64>) {
    out.push_str(&format!("ID {:<3} | ", id.0));
    for v in values {
        out.push_str(&format!("{:<6} ", v));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use crate::domain::{Connection, MatrixKind, NetworkError, Station, StationId};
    use crate::network::Network;

    fn network() -> Network {
        let mut net = Network::new();
        net.add_station(Station::new(StationId(1), "A").unwrap());
        net.add_station(Station::new(StationId(2), "B").unwrap());
        net.add_station(Station::new(StationId(3), "C").unwrap());
        net.add_connection(Connection::new(StationId(1), StationId(2), 5))
            .unwrap();
        net.regenerate();
        net
    }

    #[test]
    fn adjacency_not_generated() {
        let net = Network::new();
        assert_eq!(
            net.adjacency_report().unwrap_err(),
            NetworkError::NotYetGenerated(MatrixKind::Adjacency)
        );
    }

    #[test]
    fn adjacency_empty_graph_is_distinct() {
        let mut net = Network::new();
        net.regenerate();
        assert_eq!(net.adjacency_report().unwrap_err(), NetworkError::EmptyGraph);
    }

    #[test]
    fn adjacency_layout() {
        let report = network().adjacency_report().unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Adjacency matrix (IDs)");
        assert_eq!(lines[2], "        ID 1   ID 2   ID 3   ");
        assert_eq!(lines[3], "ID 1   | 0      5      0      ");
        assert_eq!(lines[4], "ID 2   | 5      0      0      ");
        assert_eq!(lines[5], "ID 3   | 0      0      0      ");
    }

    #[test]
    fn incidence_layout() {
        let report = network().incidence_report().unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Incidence matrix");
        assert_eq!(lines[2], "        C01   ");
        assert_eq!(lines[3], "ID 1   | 1      ");
        assert_eq!(lines[4], "ID 2   | -1     ");
        assert_eq!(lines[5], "ID 3   | 0      ");
    }

    #[test]
    fn incidence_without_connections() {
        let mut net = Network::new();
        net.add_station(Station::new(StationId(1), "A").unwrap());
        net.regenerate();
        assert_eq!(
            net.incidence_report().unwrap(),
            "Incidence matrix\n\n(No connections to display)"
        );
    }

    #[test]
    fn incidence_not_generated() {
        assert_eq!(
            Network::new().incidence_report().unwrap_err(),
            NetworkError::NotYetGenerated(MatrixKind::Incidence)
        );
    }

    #[test]
    fn edge_list() {
        let report = network().edge_list_report();
        assert!(report.starts_with("Edge list (connections):\n\n"));
        assert!(report.contains("[1] A <--(Weight: 5)--> [2] B\n"));

        assert!(Network::new().edge_list_report().ends_with("(No connections)"));
    }

    #[test]
    fn successors() {
        let report = network().successor_report().unwrap();
        assert!(report.contains("[1] A -> [2] B (Weight: 5) | \n"));
        assert!(report.contains("[2] B -> [1] A (Weight: 5) | \n"));
        assert!(report.contains("[3] C -> (None)\n"));

        assert_eq!(
            Network::new().successor_report().unwrap_err(),
            NetworkError::EmptyGraph
        );
    }

    #[test]
    fn degrees() {
        let report = network().degree_report().unwrap();
        assert!(report.starts_with("Vertex degrees (stations):\n\n"));
        assert!(report.contains("[1] A: Degree 1\n"));
        assert!(report.contains("[2] B: Degree 1\n"));
        assert!(report.contains("[3] C: Degree 0\n"));
    }

    #[test]
    fn full_reports_verbatim() {
        let net = network();
        assert_eq!(
            net.edge_list_report(),
            "Edge list (connections):\n\n[1] A <--(Weight: 5)--> [2] B\n"
        );
        assert_eq!(
            net.degree_report().unwrap(),
            "Vertex degrees (stations):\n\n[1] A: Degree 1\n[2] B: Degree 1\n[3] C: Degree 0\n"
        );
        assert_eq!(
            net.incidence_report().unwrap(),
            "Incidence matrix\n\n        C01   \nID 1   | 1      \nID 2   | -1     \nID 3   | 0      \n"
        );
    }
}
