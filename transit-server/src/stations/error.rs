//! Station lookup error types.

/// Errors returned by the name and prefix indexes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The index holds no stations
    #[error("name index is empty")]
    EmptyIndex,

    /// No station has exactly this name
    #[error("station '{name}' not found")]
    NotFound { name: String },

    /// No station name starts with this prefix
    #[error("no station found with prefix: {prefix}")]
    NoPrefixMatch { prefix: String },

    /// The query string was blank
    #[error("{field} must not be blank")]
    BlankQuery { field: &'static str },
}

impl LookupError {
    /// Stable machine-readable identifier for the error.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::EmptyIndex => "empty_index",
            LookupError::NotFound { .. } => "not_found",
            LookupError::NoPrefixMatch { .. } => "no_prefix_match",
            LookupError::BlankQuery { .. } => "blank_query",
        }
    }
}
