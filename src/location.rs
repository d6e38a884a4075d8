use crate::data_structures::{Point, PointIndex, Triangle, Triangulation};
use crate::error::TriangulationError;
use crate::geometry;
use crate::points::PointStore;

/// Visibility-walk point location: starting from `start`, repeatedly cross
/// whichever edge the target lies on the far side of, until a triangle (solid
/// or ghost) contains it on every edge.
///
/// Tests the target against each of the current triangle's edges and steps
/// to the neighbour across the first failing one, walking across ghost
/// triangles too so a target outside the current hull locates correctly
/// instead of erroring.
pub fn jump_and_walk(
    tri: &Triangulation,
    points: &PointStore,
    start: Triangle,
    target: Point,
) -> Result<Triangle, TriangulationError> {
    let mut current = start;
    // A correct walk on a valid triangulation cannot revisit more triangles
    // than exist; this bound only guards against a corrupt structure.
    let max_steps = tri.triangles().len().max(1) * 4 + 16;

    for _ in 0..max_steps {
        if current.is_ghost() {
            let (u, v) = current.hull_edge();
            let pu = points.get(u)?;
            let pv = points.get(v)?;
            if geometry::orient(pu, pv, target) >= 0 {
                return Ok(current);
            }
            let opposite = tri.get_edge(v, u);
            if opposite == PointIndex::NoAdjacent {
                return Err(TriangulationError::DegenerateInput(target));
            }
            current = Triangle::new(v, u, opposite);
            continue;
        }

        let verts = current.indices();
        let coords = [
            points.get(verts[0])?,
            points.get(verts[1])?,
            points.get(verts[2])?,
        ];

        let mut crossed = None;
        for e in 0..3 {
            if geometry::orient(coords[e], coords[(e + 1) % 3], target) < 0 {
                crossed = Some((verts[e], verts[(e + 1) % 3]));
                break;
            }
        }

        match crossed {
            None => return Ok(current),
            Some((a, b)) => {
                let opposite = tri.get_edge(b, a);
                if opposite == PointIndex::NoAdjacent {
                    return Err(TriangulationError::DegenerateInput(target));
                }
                current = Triangle::new(b, a, opposite);
            }
        }
    }

    Err(TriangulationError::DegenerateInput(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(n: u32) -> PointIndex {
        PointIndex::Input(n)
    }

    #[test]
    fn walk_finds_containing_triangle_directly() {
        let points = PointStore::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ]);
        let mut tri = Triangulation::new();
        tri.add_triangle(idx(1), idx(2), idx(3));
        let start = Triangle::new(idx(1), idx(2), idx(3));

        let found = jump_and_walk(&tri, &points, start, Point::new(1.0, 1.0)).unwrap();
        assert_eq!(found, start);
    }

    #[test]
    fn walk_steps_across_a_shared_edge() {
        let points = PointStore::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]);
        let mut tri = Triangulation::new();
        // two triangles splitting the square along the (2,4) diagonal
        tri.add_triangle(idx(1), idx(2), idx(4));
        tri.add_triangle(idx(2), idx(3), idx(4));

        let start = Triangle::new(idx(1), idx(2), idx(4));
        let found = jump_and_walk(&tri, &points, start, Point::new(3.0, 3.0)).unwrap();
        assert_eq!(found, Triangle::new(idx(2), idx(3), idx(4)));
    }
}
