//! Accent- and case-insensitive prefix search over station names.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::Station;

use super::normalize::normalize;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Set on the node that ends a station's normalized name.
    station: Option<Station>,
}

/// Trie keyed by normalized station names.
///
/// Keys and queries both go through [`normalize`], so `"sao"` matches
/// `"São Paulo"`. Two stations with the same key share a terminal node and
/// the one inserted last replaces the other.
///
/// Results come back in preorder, which for this trie is ascending order of
/// normalized name.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a station under its normalized name.
    ///
    /// Returns the station previously stored under the same key, if any.
    pub fn insert(&mut self, station: Station) -> Option<Station> {
        let key = normalize(station.name());
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }

        let replaced = node.station.replace(station);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Every station whose normalized name starts with the normalized
    /// `prefix`. An empty result means nothing matched.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&Station> {
        let key = normalize(prefix);
        let mut node = &self.root;
        for c in key.chars() {
            match node.children.get(&c) {
                Some(next) => node = next,
                None => return Vec::new(),
            }
        }

        let mut found = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(station) = &current.station {
                found.push(station);
            }
            stack.extend(current.children.values().rev());
        }
        trace!(prefix = %key, matches = found.len(), "prefix search");
        found
    }

    /// Number of distinct normalized names stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every entry. Nodes are freed from an explicit stack, so a long
    /// key cannot exhaust the call stack.
    pub fn clear(&mut self) {
        let mut stack = vec![std::mem::take(&mut self.root)];
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
        self.len = 0;
    }

    /// Replace the contents with `stations`, inserted in iteration order.
    pub fn rebuild(&mut self, stations: impl IntoIterator<Item = Station>) {
        self.clear();
        for station in stations {
            self.insert(station);
        }
    }

    /// Listing of the stations matching `prefix`.
    pub fn search_report(&self, prefix: &str) -> String {
        let found = self.search_by_prefix(prefix);
        if found.is_empty() {
            return format!("No station found with prefix: {prefix}");
        }

        let mut out = String::from("Stations found (trie):\n\n");
        for station in found {
            out.push_str(&station.to_string());
            out.push('\n');
        }
        out
    }
}

impl Drop for PrefixIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u32, name: &str) -> Station {
        Station::new(StationId(id), name).unwrap()
    }

    fn sample() -> PrefixIndex {
        let mut index = PrefixIndex::new();
        index.insert(station(1, "São Paulo"));
        index.insert(station(2, "Sao Pedro"));
        index.insert(station(3, "Rio"));
        index
    }

    fn ids(found: &[&Station]) -> Vec<u32> {
        let mut ids: Vec<u32> = found.iter().map(|s| s.id().0).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn accent_and_case_insensitive() {
        let index = sample();
        for query in ["sao", "SAO", "São", "sÃo"] {
            assert_eq!(ids(&index.search_by_prefix(query)), vec![1, 2], "{query}");
        }
    }

    #[test]
    fn no_match() {
        let index = sample();
        assert!(index.search_by_prefix("xyz").is_empty());
        assert!(index.search_by_prefix("rioo").is_empty());
    }

    #[test]
    fn full_name_is_a_prefix_of_itself() {
        let index = sample();
        assert_eq!(ids(&index.search_by_prefix("rio")), vec![3]);
        assert_eq!(ids(&index.search_by_prefix("sao paulo")), vec![1]);
    }

    #[test]
    fn empty_prefix_lists_everything() {
        let index = sample();
        assert_eq!(ids(&index.search_by_prefix("")), vec![1, 2, 3]);
    }

    #[test]
    fn results_in_key_order() {
        let index = sample();
        let names: Vec<&str> = index.search_by_prefix("").iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Rio", "São Paulo", "Sao Pedro"]);
    }

    #[test]
    fn last_inserted_key_wins() {
        let mut index = PrefixIndex::new();
        assert!(index.insert(station(1, "Sé")).is_none());
        let replaced = index.insert(station(2, "SE")).unwrap();

        assert_eq!(replaced.id(), StationId(1));
        assert_eq!(index.len(), 1);
        assert_eq!(ids(&index.search_by_prefix("se")), vec![2]);
    }

    #[test]
    fn name_that_is_prefix_of_another() {
        let mut index = PrefixIndex::new();
        index.insert(station(1, "Luz"));
        index.insert(station(2, "Luzia"));

        assert_eq!(ids(&index.search_by_prefix("luz")), vec![1, 2]);
        assert_eq!(ids(&index.search_by_prefix("luzi")), vec![2]);
    }

    #[test]
    fn rebuild_and_clear() {
        let mut index = sample();
        index.rebuild(vec![station(9, "Recife")]);
        assert_eq!(index.len(), 1);
        assert!(index.search_by_prefix("sao").is_empty());

        index.clear();
        assert!(index.is_empty());
        assert!(index.search_by_prefix("").is_empty());
    }

    #[test]
    fn long_name_drops_without_overflow() {
        let long = "a".repeat(100_000);
        let mut index = PrefixIndex::new();
        index.insert(station(1, &long));
        assert_eq!(ids(&index.search_by_prefix("aaa")), vec![1]);
        assert_eq!(ids(&index.search_by_prefix(&long)), vec![1]);

        // Rebuild clears the deep chain before reinserting
        index.rebuild(vec![station(2, &long), station(3, "Luz")]);
        assert_eq!(index.len(), 2);
        assert_eq!(ids(&index.search_by_prefix("a")), vec![2]);

        drop(index);
    }

    #[test]
    fn report() {
        let index = sample();
        assert_eq!(
            index.search_report("ri"),
            "Stations found (trie):\n\nID: 3, Name: Rio\n"
        );
        assert_eq!(
            index.search_report("xyz"),
            "No station found with prefix: xyz"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationId;
    use proptest::prelude::*;

    proptest! {
        /// Prefix search returns exactly the stations whose key starts with the query key
        #[test]
        fn matches_linear_scan(
            names in prop::collection::vec("[a-cA-Cé]{1,5}", 1..25),
            query in "[a-c]{0,3}",
        ) {
            let mut index = PrefixIndex::new();
            // Later duplicates replace earlier ones, so keep the last id per key
            let mut expected = BTreeMap::new();
            for (i, name) in names.iter().enumerate() {
                let id = i as u32 + 1;
                index.insert(Station::new(StationId(id), name).unwrap());
                expected.insert(normalize(name), id);
            }

            let mut want: Vec<u32> = expected
                .iter()
                .filter(|(key, _)| key.starts_with(&query))
                .map(|(_, &id)| id)
                .collect();
            want.sort_unstable();

            let mut got: Vec<u32> = index.search_by_prefix(&query).iter().map(|s| s.id().0).collect();
            got.sort_unstable();

            prop_assert_eq!(got, want);
            prop_assert_eq!(index.len(), expected.len());
        }
    }
}
