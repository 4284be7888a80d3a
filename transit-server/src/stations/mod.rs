//! Station lookup indexes.
//!
//! [`NameIndex`] answers exact, case-sensitive name queries and lists
//! stations alphabetically. [`PrefixIndex`] answers accent- and
//! case-insensitive prefix queries. Neither follows network mutations on its
//! own; both are rebuilt from the current station set.

mod error;
mod names;
mod normalize;
mod prefix;

pub use error::LookupError;
pub use names::{InOrder, NameIndex};
pub use normalize::normalize;
pub use prefix::PrefixIndex;
