//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::system::TransitSystem;

/// Shared application state.
///
/// The whole system sits behind one lock: queries take it shared, and
/// mutations hold it exclusively until matrices and indexes are rebuilt.
#[derive(Clone)]
pub struct AppState {
    pub system: Arc<RwLock<TransitSystem>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(system: TransitSystem) -> Self {
        Self {
            system: Arc::new(RwLock::new(system)),
        }
    }
}
