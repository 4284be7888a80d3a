//! Web layer for the transit network server.
//!
//! Exposes the network views, route searches, station lookups and the
//! station/connection mutations as a JSON API.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
