//! Exact station lookup by name.

use std::cmp::Ordering;

use crate::domain::Station;

use super::error::LookupError;

#[derive(Debug)]
struct Node {
    station: Station,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(station: Station) -> Box<Self> {
        Box::new(Self {
            station,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree of stations ordered by name.
///
/// The tree is not rebalanced: its height depends on insertion order and
/// degrades to a list when names arrive sorted. On a name collision the
/// station inserted first is kept (the prefix index keeps the last one).
///
/// The index holds its own copies of the stations and is not kept in sync
/// with the network; rebuild it after stations are added or removed.
///
/// # Examples
///
/// ```
/// use transit_server::domain::{Station, StationId};
/// use transit_server::stations::NameIndex;
///
/// let mut index = NameIndex::new();
/// index.insert(Station::new(StationId(1), "Zeta").unwrap());
/// index.insert(Station::new(StationId(2), "Alpha").unwrap());
///
/// assert_eq!(index.search("Alpha").map(|s| s.id()), Some(StationId(2)));
/// assert!(index.search("alpha").is_none());
///
/// let names: Vec<&str> = index.iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["Alpha", "Zeta"]);
/// ```
#[derive(Debug, Default)]
pub struct NameIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl NameIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station.
    ///
    /// Returns `false` (and discards `station`) if a station with the same
    /// name is already present.
    pub fn insert(&mut self, station: Station) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match station.cmp_by_name(&node.station) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Node::leaf(station));
        self.len += 1;
        true
    }

    /// Find the station with exactly this name.
    pub fn search(&self, name: &str) -> Option<&Station> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match name.cmp(node.station.name()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.station),
            };
        }
        None
    }

    /// All stations in ascending name order, or [`LookupError::EmptyIndex`].
    pub fn in_order(&self) -> Result<Vec<&Station>, LookupError> {
        if self.is_empty() {
            return Err(LookupError::EmptyIndex);
        }
        Ok(self.iter().collect())
    }

    /// In-order iterator over the stored stations.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Number of stations stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Remove every station.
    pub fn clear(&mut self) {
        // Unlink iteratively so a degenerate tree cannot overflow the stack
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
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

    /// Alphabetical listing of every station.
    pub fn listing_report(&self) -> String {
        if self.is_empty() {
            return "Name index is empty.".to_string();
        }
        let mut out = String::from("Stations in alphabetical order (BST):\n\n");
        for station in self.iter() {
            out.push_str(&station.to_string());
            out.push('\n');
        }
        out
    }
}

impl Drop for NameIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a NameIndex {
    type Item = &'a Station;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal of a [`NameIndex`].
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Station;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u32, name: &str) -> Station {
        Station::new(StationId(id), name).unwrap()
    }

    #[test]
    fn ordered_traversal() {
        let mut index = NameIndex::new();
        index.insert(station(1, "Zeta"));
        index.insert(station(2, "Alpha"));
        index.insert(station(3, "Mu"));

        let names: Vec<&str> = index.in_order().unwrap().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);
    }

    #[test]
    fn exact_search() {
        let mut index = NameIndex::new();
        index.insert(station(1, "Zeta"));
        index.insert(station(2, "Alpha"));
        index.insert(station(3, "Mu"));

        assert_eq!(index.search("Alpha").unwrap().id(), StationId(2));
        assert!(index.search("Omega").is_none());
        assert!(index.search("Alph").is_none());
    }

    #[test]
    fn first_inserted_name_wins() {
        let mut index = NameIndex::new();
        assert!(index.insert(station(1, "Central")));
        assert!(!index.insert(station(2, "Central")));

        assert_eq!(index.len(), 1);
        assert_eq!(index.search("Central").unwrap().id(), StationId(1));
    }

    #[test]
    fn empty_indicator() {
        let index = NameIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.in_order().unwrap_err(), LookupError::EmptyIndex);
        assert_eq!(index.listing_report(), "Name index is empty.");
    }

    #[test]
    fn search_is_case_sensitive() {
        let mut index = NameIndex::new();
        index.insert(station(1, "Luz"));
        assert!(index.search("luz").is_none());
        assert!(index.search("Luz").is_some());
    }

    #[test]
    fn sorted_insertion_degenerates() {
        let mut index = NameIndex::new();
        for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            index.insert(station(i as u32 + 1, name));
        }
        assert_eq!(index.height(), 5);

        let mut balanced = NameIndex::new();
        for (i, name) in ["C", "A", "E", "B", "D"].iter().enumerate() {
            balanced.insert(station(i as u32 + 1, name));
        }
        assert_eq!(balanced.height(), 3);
    }

    #[test]
    fn deep_tree_drops_without_overflow() {
        let mut index = NameIndex::new();
        for i in 1..=10_000u32 {
            index.insert(station(i, &format!("{i:08}")));
        }
        assert_eq!(index.len(), 10_000);
        drop(index);
    }

    #[test]
    fn rebuild_replaces_contents() {
        let mut index = NameIndex::new();
        index.insert(station(1, "Old"));
        index.rebuild(vec![station(2, "New"), station(3, "Newer")]);

        assert_eq!(index.len(), 2);
        assert!(index.search("Old").is_none());
        assert!(index.search("Newer").is_some());
    }

    #[test]
    fn listing() {
        let mut index = NameIndex::new();
        index.insert(station(2, "B"));
        index.insert(station(1, "A"));
        assert_eq!(
            index.listing_report(),
            "Stations in alphabetical order (BST):\n\nID: 1, Name: A\nID: 2, Name: B\n"
        );
    }
}
