use super::point_index::PointIndex;

/// An ordered triple of point indices, stored counter-clockwise by convention.
///
/// [`Triangle`] is *rotationally canonicalized* on construction: the smallest index
/// (by [`PointIndex`]'s raw-value ordering) is always rotated to the front. Because
/// rotation preserves CCW orientation, this loses no information, and it means the
/// derived [`PartialEq`]/[`Eq`]/[`Hash`] already implement "equality modulo cyclic
/// rotation" (`circular_equality`) for free — a `HashSet<Triangle>` can never hold
/// the same triangle twice under a different rotation.
///
/// The free functions [`shift_indices`] and [`choose_uvw`] operate on raw
/// `[PointIndex; 3]` triples rather than on `Triangle` itself, since the rotation
/// law they implement is stated over the three indices directly, independent of
/// any canonicalization policy a concrete triangle type might apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    vertices: [PointIndex; 3],
}

impl Triangle {
    /// Builds a triangle from a CCW triple, rotating it into canonical form.
    pub fn new(i: PointIndex, j: PointIndex, k: PointIndex) -> Self {
        let raw = [i, j, k];
        let min_pos = (0..3).min_by_key(|&p| raw[p]).unwrap();
        Triangle {
            vertices: shift_indices(raw, min_pos as u8),
        }
    }

    pub fn i(&self) -> PointIndex {
        self.vertices[0]
    }

    pub fn j(&self) -> PointIndex {
        self.vertices[1]
    }

    pub fn k(&self) -> PointIndex {
        self.vertices[2]
    }

    pub fn indices(&self) -> [PointIndex; 3] {
        self.vertices
    }

    /// The triangle's three directed, CCW-ordered edges: `(i,j)`, `(j,k)`, `(k,i)`.
    pub fn directed_edges(&self) -> [(PointIndex, PointIndex); 3] {
        let [i, j, k] = self.vertices;
        [(i, j), (j, k), (k, i)]
    }

    /// True iff any vertex is the `Boundary` ghost sentinel.
    pub fn is_ghost(&self) -> bool {
        self.vertices.iter().any(|v| v.is_boundary())
    }

    /// For a ghost triangle, the hull edge `(u, v)` it caps, in the same CCW
    /// order it was built with (`Triangle::new(u, v, Boundary)`). Canonical
    /// rotation may have moved `Boundary` to any of the three slots, so this
    /// rotates it back to the front before reading off the other two.
    /// Panics if `self` is not a ghost triangle.
    pub fn hull_edge(&self) -> (PointIndex, PointIndex) {
        let pos = self
            .vertices
            .iter()
            .position(|v| v.is_boundary())
            .expect("hull_edge called on a non-ghost triangle");
        let shifted = shift_indices(self.vertices, pos as u8);
        (shifted[1], shifted[2])
    }
}

/// Rotates a raw triple left by `r` positions (`r` taken mod 3), without any
/// canonicalization. `shift_indices(t, 0) == t`.
pub fn shift_indices(t: [PointIndex; 3], r: u8) -> [PointIndex; 3] {
    match r % 3 {
        0 => t,
        1 => [t[1], t[2], t[0]],
        2 => [t[2], t[0], t[1]],
        _ => unreachable!(),
    }
}

/// True iff `a` and `b` name the same triangle under some cyclic rotation.
pub fn circular_equality(a: [PointIndex; 3], b: [PointIndex; 3]) -> bool {
    b == a || b == shift_indices(a, 1) || b == shift_indices(a, 2)
}

/// Selects one of the three cyclic rotations of `(i, j, k)` based on which of
/// `a`, `b`, `c` is set. Exactly one of `a`, `b`, `c` must be `true`:
///
/// - `choose_uvw(true, false, false, i, j, k) == (i, j, k)`
/// - `choose_uvw(false, true, false, i, j, k) == (j, k, i)`
/// - `choose_uvw(false, false, true, i, j, k) == (k, i, j)`
pub fn choose_uvw(
    a: bool,
    b: bool,
    c: bool,
    i: PointIndex,
    j: PointIndex,
    k: PointIndex,
) -> (PointIndex, PointIndex, PointIndex) {
    match (a, b, c) {
        (true, false, false) => (i, j, k),
        (false, true, false) => (j, k, i),
        (false, false, true) => (k, i, j),
        _ => panic!("choose_uvw requires exactly one of a, b, c to be true"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(n: u32) -> PointIndex {
        PointIndex::Input(n)
    }

    #[test]
    fn canonicalization_treats_rotations_as_equal() {
        let t1 = Triangle::new(idx(5), idx(7), idx(10));
        let t2 = Triangle::new(idx(7), idx(10), idx(5));
        let t3 = Triangle::new(idx(10), idx(5), idx(7));
        assert_eq!(t1, t2);
        assert_eq!(t1, t3);
    }

    #[test]
    fn distinct_triangles_differ() {
        let t1 = Triangle::new(idx(1), idx(2), idx(3));
        let t2 = Triangle::new(idx(1), idx(2), idx(4));
        assert_ne!(t1, t2);
    }

    #[test]
    fn choose_uvw_rotation_law() {
        let (i, j, k) = (idx(1), idx(2), idx(3));
        assert_eq!(choose_uvw(true, false, false, i, j, k), (i, j, k));
        assert_eq!(choose_uvw(false, true, false, i, j, k), (j, k, i));
        assert_eq!(choose_uvw(false, false, true, i, j, k), (k, i, j));
    }

    #[test]
    #[should_panic]
    fn choose_uvw_requires_exactly_one_flag() {
        let (i, j, k) = (idx(1), idx(2), idx(3));
        choose_uvw(true, true, false, i, j, k);
    }

    #[test]
    fn circular_equality_matches_rotations_only() {
        let base = [idx(1), idx(2), idx(3)];
        assert!(circular_equality(base, shift_indices(base, 1)));
        assert!(circular_equality(base, shift_indices(base, 2)));
        assert!(!circular_equality(base, [idx(1), idx(3), idx(2)]));
    }

    #[test]
    fn is_ghost_detects_boundary_vertex() {
        let solid = Triangle::new(idx(1), idx(2), idx(3));
        let ghost = Triangle::new(idx(1), idx(2), PointIndex::Boundary);
        assert!(!solid.is_ghost());
        assert!(ghost.is_ghost());
    }

    #[test]
    fn hull_edge_recovers_the_capped_edge_regardless_of_rotation() {
        // Boundary's raw value is smaller than any input index, so
        // canonicalization always rotates it to the front here, but
        // hull_edge must not assume that is the only possible layout.
        let ghost = Triangle::new(idx(4), idx(7), PointIndex::Boundary);
        assert_eq!(ghost.hull_edge(), (idx(4), idx(7)));
    }

    #[test]
    #[should_panic]
    fn hull_edge_panics_on_a_solid_triangle() {
        Triangle::new(idx(1), idx(2), idx(3)).hull_edge();
    }
}
