//! Dense indexing for matrix construction.
//!
//! Maps station ids to contiguous matrix indices (0..N) and back.

use std::collections::HashMap;

use crate::domain::StationId;

/// Bijection between station ids and dense 0-based matrix indices.
///
/// Indices are assigned by ascending id, so index order follows id order.
/// The mapping is a snapshot: it goes stale as soon as a station is added
/// or removed and must be rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMapping {
    /// index -> id, ascending.
    ids: Vec<StationId>,

    /// id -> index.
    positions: HashMap<StationId, usize>,
}

impl IndexMapping {
    /// Build a mapping from any collection of ids.
    pub fn from_ids(ids: impl IntoIterator<Item = StationId>) -> Self {
        let mut ids: Vec<StationId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        let positions = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        Self { ids, positions }
    }

    /// Number of mapped stations.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Matrix index for a station id, if mapped.
    pub fn index_of(&self, id: StationId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Station id at a matrix index, if in range.
    pub fn id_at(&self, index: usize) -> Option<StationId> {
        self.ids.get(index).copied()
    }

    /// All mapped ids in index order.
    pub fn ids(&self) -> &[StationId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping() {
        let m = IndexMapping::default();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.index_of(StationId(1)), None);
        assert_eq!(m.id_at(0), None);
    }

    #[test]
    fn ascending_contiguous() {
        let m = IndexMapping::from_ids([StationId(30), StationId(4), StationId(12)]);

        assert_eq!(m.len(), 3);
        assert_eq!(m.index_of(StationId(4)), Some(0));
        assert_eq!(m.index_of(StationId(12)), Some(1));
        assert_eq!(m.index_of(StationId(30)), Some(2));
        assert_eq!(m.ids(), &[StationId(4), StationId(12), StationId(30)]);
    }

    #[test]
    fn round_trip() {
        let m = IndexMapping::from_ids([StationId(7), StationId(2)]);
        for &id in m.ids() {
            let i = m.index_of(id).unwrap();
            assert_eq!(m.id_at(i), Some(id));
        }
    }

    #[test]
    fn unknown_id() {
        let m = IndexMapping::from_ids([StationId(1)]);
        assert_eq!(m.index_of(StationId(999)), None);
        assert_eq!(m.id_at(1), None);
    }

    #[test]
    fn independent_of_input_order() {
        let a = IndexMapping::from_ids([StationId(3), StationId(1), StationId(2)]);
        let b = IndexMapping::from_ids([StationId(1), StationId(2), StationId(3)]);
        assert_eq!(a, b);
    }
}
