//! Domain types for the transit network.
//!
//! Stations and connections are plain records validated at construction
//! time; the error taxonomy shared by every query lives here too.

mod connection;
mod error;
mod station;

pub use connection::{Connection, Weight};
pub use error::{MatrixKind, NetworkError};
pub use station::{InvalidStation, Station, StationId};
