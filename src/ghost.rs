use crate::data_structures::{PointIndex, Triangle, Triangulation};

/// True iff `t` has `Boundary` as one of its vertices.
pub fn is_ghost_triangle(t: Triangle) -> bool {
    t.is_ghost()
}

/// Caps every exposed hull edge with a ghost triangle `(u, v, Boundary)`.
///
/// An edge `(u, v)` is exposed once its solid owner has been deleted (or never
/// existed, for a brand-new hull edge): [`Triangulation::add_triangle`] and
/// [`Triangulation::delete_triangle`] already provisionally mark such an edge's
/// reverse direction as `Boundary` in the adjacency map, so this only has to
/// find edges carrying that marker which are not yet backed by an actual ghost
/// triangle in `T`, and materialise one. Inserting `(u, v, Boundary)` through
/// the ordinary `add_triangle` path also stitches the new ghost triangle to its
/// neighbours around the hull automatically: the call sets `A(Boundary, u) = v`,
/// which is exactly the entry the *previous* ghost triangle around the hull was
/// waiting on.
pub fn add_ghost_triangles(tri: &mut Triangulation) {
    let pending: Vec<(PointIndex, PointIndex)> = tri
        .adjacency()
        .iter()
        .filter(|(&(a, b), &v)| {
            v == PointIndex::Boundary
                && !a.is_boundary()
                && !b.is_boundary()
                && !tri.contains(Triangle::new(a, b, PointIndex::Boundary))
        })
        .map(|(&(a, b), _)| (a, b))
        .collect();

    for (u, v) in pending {
        tri.add_triangle(u, v, PointIndex::Boundary);
    }
}

/// Removes every ghost triangle from `tri`, leaving only solid triangles.
pub fn remove_ghost_triangles(tri: &mut Triangulation) {
    let ghosts: Vec<Triangle> = tri
        .triangles()
        .iter()
        .copied()
        .filter(|t| t.is_ghost())
        .collect();
    for t in ghosts {
        tri.delete_triangle(t.i(), t.j(), t.k());
    }
    tri.clear_empty_keys();
}
