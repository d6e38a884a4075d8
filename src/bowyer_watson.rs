use std::collections::HashSet;

use crate::config::{DuplicatePolicy, TriangulationConfig};
use crate::data_structures::{Point, PointIndex, Triangle, Triangulation};
use crate::error::TriangulationError;
use crate::geometry;
use crate::ghost;
use crate::points::PointStore;

/// Filters `input` down to the points that will actually be inserted,
/// resolving duplicates per `policy`. `Skip` keeps the first occurrence of a
/// coincident point silently; `Error` is the opt-in strict mode for callers
/// who consider a duplicate a data problem.
pub(crate) fn dedup_points(
    input: &[Point],
    policy: DuplicatePolicy,
) -> Result<Vec<Point>, TriangulationError> {
    let mut accepted: Vec<Point> = Vec::with_capacity(input.len());
    for &p in input {
        if accepted.contains(&p) {
            match policy {
                DuplicatePolicy::Skip => continue,
                DuplicatePolicy::Error => return Err(TriangulationError::DuplicatePoint(p)),
            }
        }
        accepted.push(p);
    }
    Ok(accepted)
}

/// Builds a Delaunay triangulation of `input` by cavity-based (Bowyer-Watson)
/// incremental insertion.
///
/// A single bounding (super-)triangle seeds the structure, every point is
/// then inserted by locating its containing triangle and re-fanning the
/// cavity of circumcircle-violating triangles around it. Growing the whole
/// cavity first and re-fanning once is the standard Bowyer-Watson
/// formulation, and composes more directly with the ghost layer's "is this
/// neighbour bad" rule than a per-edge flip-stack legalisation loop would.
pub fn triangulate_bowyer_watson(
    input: &[Point],
    config: &TriangulationConfig,
) -> Result<(Triangulation, PointStore), TriangulationError> {
    let accepted = dedup_points(input, config.duplicate_policy)?;
    let store = PointStore::new(accepted);

    log::debug!("bowyer-watson: triangulating {} points", store.len());

    let mut tri = Triangulation::new();
    let (lr, up, ll) = store.bounding_corners();
    tri.add_triangle(lr, up, ll);

    for (point_index, _) in store.iter() {
        add_point_bowyer(&mut tri, &store, point_index)?;
    }

    for corner in [lr, up, ll] {
        tri.purge_vertex(corner);
    }

    if config.keep_ghosts {
        ghost::add_ghost_triangles(&mut tri);
    }

    log::debug!(
        "bowyer-watson: finished with {} solid triangles",
        tri.triangles().iter().filter(|t| !t.is_ghost()).count()
    );

    Ok((tri, store))
}

/// Inserts a single point into an already-seeded triangulation via the
/// Bowyer-Watson cavity rule.
pub fn add_point_bowyer(
    tri: &mut Triangulation,
    store: &PointStore,
    point_index: PointIndex,
) -> Result<(), TriangulationError> {
    let p = store.get(point_index)?;
    let seed = tri
        .last_triangle()
        .expect("triangulation must contain at least the bounding triangle");
    let start = crate::location::jump_and_walk(tri, store, seed, p)?;

    let mut cavity: HashSet<Triangle> = HashSet::new();
    let mut stack = vec![start];
    let mut boundary: Vec<(PointIndex, PointIndex)> = Vec::new();

    while let Some(t) = stack.pop() {
        if cavity.contains(&t) {
            continue;
        }
        cavity.insert(t);

        for (a, b) in t.directed_edges() {
            let opposite = tri.get_edge(b, a);

            let neighbour = match opposite {
                PointIndex::NoAdjacent => {
                    boundary.push((a, b));
                    continue;
                }
                PointIndex::Boundary if !tri.contains(Triangle::new(b, a, PointIndex::Boundary)) => {
                    // Exposed hull edge with no materialised ghost: a genuine
                    // cavity boundary, nothing to cross.
                    boundary.push((a, b));
                    continue;
                }
                PointIndex::Boundary => Triangle::new(b, a, PointIndex::Boundary),
                _ => Triangle::new(b, a, opposite),
            };

            if cavity.contains(&neighbour) {
                continue;
            }

            let is_bad = if neighbour.is_ghost() {
                // The ghost in-circle rule: p is "inside" a ghost's
                // circumcircle iff it lies outside the hull edge it caps.
                geometry::orient(store.get(b)?, store.get(a)?, p) > 0
            } else {
                in_circumcircle(store, neighbour, p)?
            };

            if is_bad {
                stack.push(neighbour);
            } else {
                boundary.push((a, b));
            }
        }
    }

    log::trace!(
        "bowyer-watson: inserting {point_index}, cavity of {} triangle(s)",
        cavity.len()
    );

    for t in &cavity {
        tri.delete_triangle(t.i(), t.j(), t.k());
    }
    tri.clear_empty_keys();

    for (a, b) in boundary {
        tri.add_triangle(a, b, point_index);
    }

    Ok(())
}

fn in_circumcircle(store: &PointStore, t: Triangle, p: Point) -> Result<bool, TriangulationError> {
    let [i, j, k] = t.indices();
    let a = store.get(i)?;
    let b = store.get(j)?;
    let c = store.get(k)?;
    Ok(geometry::in_circle(a, b, c, p) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_corners_of_a_square_triangulate_without_error() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let config = TriangulationConfig::default();
        let (tri, _store) = triangulate_bowyer_watson(&points, &config).unwrap();

        let solid: Vec<_> = tri.triangles().iter().filter(|t| !t.is_ghost()).collect();
        assert_eq!(solid.len(), 2);
    }

    #[test]
    fn duplicate_points_are_skipped_by_default() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let config = TriangulationConfig::default();
        let (_tri, store) = triangulate_bowyer_watson(&points, &config).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicate_points_error_when_configured() {
        let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
        let config = TriangulationConfig {
            duplicate_policy: DuplicatePolicy::Error,
            ..TriangulationConfig::default()
        };
        assert!(triangulate_bowyer_watson(&points, &config).is_err());
    }

    #[test]
    fn exterior_point_extends_the_hull_through_the_ghost_layer() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let exterior = Point::new(10.0, 2.0);
        let store = PointStore::new({
            let mut pts = square.clone();
            pts.push(exterior);
            pts
        });

        let mut tri = Triangulation::new();
        let (lr, up, ll) = store.bounding_corners();
        tri.add_triangle(lr, up, ll);
        for (point_index, _) in store.iter().take(4) {
            add_point_bowyer(&mut tri, &store, point_index).unwrap();
        }
        for corner in [lr, up, ll] {
            tri.purge_vertex(corner);
        }
        ghost::add_ghost_triangles(&mut tri);

        let exterior_index = store.iter().nth(4).unwrap().0;
        add_point_bowyer(&mut tri, &store, exterior_index).unwrap();

        let solid_with_exterior = tri
            .triangles()
            .iter()
            .filter(|t| !t.is_ghost() && t.indices().contains(&exterior_index))
            .count();
        assert!(solid_with_exterior > 0);
    }

    #[test]
    fn a_five_point_triangulation_has_no_leftover_bounding_vertices() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 2.0),
        ];
        let config = TriangulationConfig::default();
        let (tri, _store) = triangulate_bowyer_watson(&points, &config).unwrap();
        for t in tri.triangles() {
            for v in t.indices() {
                assert!(!v.is_bounding());
            }
        }
    }
}
