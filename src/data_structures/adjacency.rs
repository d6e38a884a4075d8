use std::collections::{HashMap, HashSet};

use super::point_index::PointIndex;

/// The adjacency map `A: (i, j) -> k`: for every directed edge `(i, j)` of every
/// stored triangle, `A(i, j) = k` where `(i, j, k)` is that triangle.
///
/// A missing key reads as [`PointIndex::NoAdjacent`] (`get` never inserts). Entries
/// are not removed immediately on [`crate::data_structures::Triangulation::delete_triangle`];
/// they are first tombstoned to `NoAdjacent` (or, if the edge is exposed as a new
/// hull edge, promoted to `Boundary`), and only swept away by [`AdjacencyMap::clear_empty_keys`].
#[derive(Debug, Default, Clone)]
pub struct AdjacencyMap {
    map: HashMap<(PointIndex, PointIndex), PointIndex>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// `A(i, j) = k` or `NoAdjacent` if unset. Never inserts.
    pub fn get(&self, i: PointIndex, j: PointIndex) -> PointIndex {
        self.map
            .get(&(i, j))
            .copied()
            .unwrap_or(PointIndex::NoAdjacent)
    }

    /// `edge_exists(i, j, A)`: true iff `A(i, j) != DefaultAdjacentValue`.
    pub fn edge_exists(&self, i: PointIndex, j: PointIndex) -> bool {
        self.get(i, j) != PointIndex::NoAdjacent
    }

    /// `is_boundary_edge`'s `A`-side test: true iff `A(i, j) = BoundaryIndex`.
    pub fn is_boundary_edge(&self, i: PointIndex, j: PointIndex) -> bool {
        self.get(i, j) == PointIndex::Boundary
    }

    pub(crate) fn set(&mut self, i: PointIndex, j: PointIndex, value: PointIndex) {
        if value == PointIndex::NoAdjacent {
            self.map.remove(&(i, j));
        } else {
            self.map.insert((i, j), value);
        }
    }

    pub(crate) fn tombstone(&mut self, i: PointIndex, j: PointIndex) {
        self.map.insert((i, j), PointIndex::NoAdjacent);
    }

    /// Sweeps away entries whose value is the default-adjacent sentinel.
    /// Idempotent: a second call finds nothing left to remove.
    pub fn clear_empty_keys(&mut self) {
        self.map.retain(|_, v| *v != PointIndex::NoAdjacent);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(PointIndex, PointIndex), &PointIndex)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl PartialEq for AdjacencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

/// The reverse adjacency map `V: k -> {(i, j)}`: for each vertex `k`, the set of
/// ordered pairs `(i, j)` such that `(i, j, k)` is a triangle.
#[derive(Debug, Default, Clone)]
pub struct ReverseAdjacency {
    map: HashMap<PointIndex, HashSet<(PointIndex, PointIndex)>>,
}

impl ReverseAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, k: PointIndex, edge: (PointIndex, PointIndex)) {
        self.map.entry(k).or_default().insert(edge);
    }

    pub fn remove(&mut self, k: PointIndex, edge: (PointIndex, PointIndex)) {
        if let Some(set) = self.map.get_mut(&k) {
            set.remove(&edge);
        }
    }

    pub fn get(&self, k: PointIndex) -> HashSet<(PointIndex, PointIndex)> {
        self.map.get(&k).cloned().unwrap_or_default()
    }

    pub fn contains(&self, k: PointIndex, edge: (PointIndex, PointIndex)) -> bool {
        self.map.get(&k).is_some_and(|set| set.contains(&edge))
    }

    /// Removes vertex keys whose edge set has become empty. Idempotent.
    pub fn clear_empty_keys(&mut self) {
        self.map.retain(|_, set| !set.is_empty());
    }

    /// Drops every edge set keyed by `k`, regardless of content. Used when a
    /// vertex itself is being purged from the triangulation entirely.
    pub fn remove_all_for(&mut self, k: PointIndex) {
        self.map.remove(&k);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PointIndex, &HashSet<(PointIndex, PointIndex)>)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl PartialEq for ReverseAdjacency {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}
