use std::collections::HashSet;

use super::adjacency::{AdjacencyMap, ReverseAdjacency};
use super::graph::VertexGraph;
use super::point_index::PointIndex;
use super::triangle::Triangle;

/// The combinatorial structures bundle: the triangle set `T`, the adjacency map
/// `A`, the reverse adjacency map `V`, and the vertex graph `G`, all owned together
/// since they are always kept mutually consistent by the same two mutators,
/// [`Triangulation::add_triangle`] and [`Triangulation::delete_triangle`].
///
/// A map-keyed adjacency (`A`/`V`) plus an explicit vertex graph (`G`) is what
/// lets ghost triangles and ordinary solid triangles share one representation
/// uniformly.
#[derive(Debug, Default, Clone)]
pub struct Triangulation {
    triangles: HashSet<Triangle>,
    adjacency: AdjacencyMap,
    reverse_adjacency: ReverseAdjacency,
    graph: VertexGraph,
    /// Hint for jump-and-walk's seed triangle: the most recently added triangle.
    last_triangle: Option<Triangle>,
}

impl Triangulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangles(&self) -> &HashSet<Triangle> {
        &self.triangles
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    pub fn reverse_adjacency(&self) -> &ReverseAdjacency {
        &self.reverse_adjacency
    }

    pub fn graph(&self) -> &VertexGraph {
        &self.graph
    }

    pub fn last_triangle(&self) -> Option<Triangle> {
        self.last_triangle
    }

    pub fn contains(&self, t: Triangle) -> bool {
        self.triangles.contains(&t)
    }

    pub fn get_edge(&self, i: PointIndex, j: PointIndex) -> PointIndex {
        self.adjacency.get(i, j)
    }

    pub fn edge_exists(&self, i: PointIndex, j: PointIndex) -> bool {
        self.adjacency.edge_exists(i, j)
    }

    /// True iff `A(i,j) = BoundaryIndex` or `(i,j) ∈ V[BoundaryIndex]`.
    pub fn is_boundary_edge(&self, i: PointIndex, j: PointIndex) -> bool {
        self.adjacency.is_boundary_edge(i, j)
            || self.reverse_adjacency.contains(PointIndex::Boundary, (i, j))
    }

    /// Inserts `(i, j, k)` and keeps `A`, `V`, `G` consistent.
    ///
    /// Besides the triangle's own three forward adjacency entries, each of the
    /// three *reverse* edges is provisionally marked `Boundary` if it is
    /// currently unset — this is what lets a hull edge's adjacency read as
    /// `BoundaryIndex` the moment it becomes exposed, without a separate sweep.
    /// A later triangle that genuinely owns that reverse edge overwrites the
    /// provisional marker with its real neighbour when it is added.
    pub fn add_triangle(&mut self, i: PointIndex, j: PointIndex, k: PointIndex) {
        let t = Triangle::new(i, j, k);
        self.triangles.insert(t);
        self.last_triangle = Some(t);

        for (a, b, opposite) in [(i, j, k), (j, k, i), (k, i, j)] {
            self.adjacency.set(a, b, opposite);
            self.reverse_adjacency.insert(opposite, (a, b));
            self.graph.add_edge(a, b);

            if self.adjacency.get(b, a) == PointIndex::NoAdjacent {
                self.adjacency.set(b, a, PointIndex::Boundary);
            }
        }
    }

    /// Removes `(i, j, k)` (and both cyclic shifts, via [`Triangle`]'s
    /// canonicalization) and keeps `A`, `V`, `G` consistent.
    ///
    /// A forward edge exposed by this removal is promoted to `Boundary` if its
    /// reverse edge is still backed by a real triangle (it has just become a hull
    /// edge); otherwise it is tombstoned to `NoAdjacent` for a later
    /// [`AdjacencyMap::clear_empty_keys`] sweep. A graph edge is only dropped once
    /// neither direction is backed by any triangle.
    pub fn delete_triangle(&mut self, i: PointIndex, j: PointIndex, k: PointIndex) {
        let t = Triangle::new(i, j, k);
        self.triangles.remove(&t);
        if self.last_triangle == Some(t) {
            self.last_triangle = None;
        }

        for (a, b, opposite) in [(i, j, k), (j, k, i), (k, i, j)] {
            self.reverse_adjacency.remove(opposite, (a, b));

            if self.adjacency.edge_exists(b, a) {
                self.adjacency.set(a, b, PointIndex::Boundary);
            } else {
                self.adjacency.tombstone(a, b);
            }

            if !self.adjacency.edge_exists(a, b) && !self.adjacency.edge_exists(b, a) {
                self.graph.remove_edge(a, b);
            }
        }
    }

    /// Idempotent sweep of tombstoned adjacency entries, empty reverse-adjacency
    /// buckets, and isolated graph vertices.
    pub fn clear_empty_keys(&mut self) {
        self.adjacency.clear_empty_keys();
        self.reverse_adjacency.clear_empty_keys();
        self.graph.clear_empty_points();
    }

    /// Forcibly drops every adjacency/reverse-adjacency entry that mentions
    /// `vertex` on either side, and any triangle still referencing it. Used once,
    /// after the bounding triangle's corners have had all their incident
    /// triangles removed, so that the final hull consists only of the input
    /// points' own convex hull, with no bounding-triangle leftovers.
    pub fn purge_vertex(&mut self, vertex: PointIndex) {
        self.triangles.retain(|t| !t.indices().contains(&vertex));
        for (a, b) in self
            .adjacency
            .iter()
            .filter(|((a, b), v)| *a == vertex || *b == vertex || **v == vertex)
            .map(|(k, _)| *k)
            .collect::<Vec<_>>()
        {
            self.adjacency.tombstone(a, b);
        }
        self.adjacency.clear_empty_keys();
        self.reverse_adjacency.remove_all_for(vertex);
        self.graph.clear_empty_points();
    }
}
