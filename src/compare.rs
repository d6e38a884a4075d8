use std::collections::HashSet;

use crate::data_structures::{AdjacencyMap, PointIndex, ReverseAdjacency, Triangle, Triangulation};
use crate::error::TriangulationError;

/// True iff `a` and `b` contain exactly the same set of triangles, modulo each
/// triangle's own cyclic-rotation equality (already implemented by
/// [`Triangle`]'s `Eq`).
pub fn compare_triangle_sets(a: &HashSet<Triangle>, b: &HashSet<Triangle>) -> bool {
    a == b
}

/// Compares two triangulations of the same point set for full structural
/// equality: the triangle set `T` (including ghosts), the adjacency map `A`,
/// the reverse adjacency map `V`, and the vertex graph `G` must all agree once
/// both sides' tombstoned entries are swept with `clear_empty_keys`.
pub fn compare_unconstrained_triangulations(a: &Triangulation, b: &Triangulation) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    a.clear_empty_keys();
    b.clear_empty_keys();

    a.triangles() == b.triangles()
        && a.adjacency() == b.adjacency()
        && a.reverse_adjacency() == b.reverse_adjacency()
        && a.graph() == b.graph()
}

/// Compares the de Berg (history-DAG) construction against Bowyer-Watson
/// insertion on the same input: the two algorithms take unrelated insertion
/// paths (random order with flips vs. cavity re-fanning) but a Delaunay
/// triangulation of a point set in general position is unique, so the
/// resulting combinatorial structures must agree completely.
pub fn compare_deberg_to_bowyerwatson(
    berg: &Triangulation,
    bowyer_watson: &Triangulation,
) -> bool {
    compare_unconstrained_triangulations(berg, bowyer_watson)
}

/// Verifies that `A` and `V` are mutual inverses: for every `(i, j) -> k` in
/// `A`, `(i, j)` must be recorded under `k` in `V`, and conversely, for every
/// `(i, j)` recorded under some `k` in `V`, `A(i, j)` must equal `k`. Only
/// used from verification/test paths; a normal build never calls this.
pub fn check_adjacent_is_adjacent2vertex_inverse(
    adjacency: &AdjacencyMap,
    reverse_adjacency: &ReverseAdjacency,
) -> Result<(), TriangulationError> {
    for (&(i, j), &k) in adjacency.iter() {
        if k == PointIndex::NoAdjacent || k == PointIndex::Boundary {
            continue;
        }
        if !reverse_adjacency.contains(k, (i, j)) {
            return Err(TriangulationError::InvariantViolation(k));
        }
    }
    for (&k, edges) in reverse_adjacency.iter() {
        for &(i, j) in edges {
            if adjacency.get(i, j) != k {
                return Err(TriangulationError::InvariantViolation(k));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::Point;

    fn idx(n: u32) -> PointIndex {
        PointIndex::Input(n)
    }

    #[test]
    fn identical_triangle_sets_compare_equal() {
        let mut a = Triangulation::new();
        a.add_triangle(idx(1), idx(2), idx(3));
        let mut b = Triangulation::new();
        b.add_triangle(idx(2), idx(3), idx(1));
        assert!(compare_unconstrained_triangulations(&a, &b));
    }

    #[test]
    fn adjacent_is_adjacent2vertex_inverse_holds_on_a_hexagon_fan() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.7),
            Point::new(2.0, 3.4),
            Point::new(0.0, 3.4),
            Point::new(-1.0, 1.7),
            Point::new(1.0, 1.7),
        ];
        let config = crate::config::TriangulationConfig::default();
        let (tri, _store) = crate::bowyer_watson::triangulate_bowyer_watson(&points, &config).unwrap();
        assert!(check_adjacent_is_adjacent2vertex_inverse(tri.adjacency(), tri.reverse_adjacency()).is_ok());

        let mut spurious = tri.reverse_adjacency().clone();
        spurious.insert(PointIndex::Boundary, (idx(10), idx(11)));
        assert!(check_adjacent_is_adjacent2vertex_inverse(tri.adjacency(), &spurious).is_err());
    }
}
