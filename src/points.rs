use crate::constants::FIRST_POINT_INDEX;
use crate::data_structures::{Point, PointIndex};
use crate::error::TriangulationError;
use crate::geometry::{self, BoundingCorner};

/// The input point cloud plus the three bounding-triangle corners computed
/// from it, addressed uniformly through [`PointIndex`].
///
/// The bounding triangle's corners are derived once from the input's
/// bounding box and kept alongside the input points rather than applied as a
/// coordinate transform, so insertion order and raw input coordinates are
/// preserved, which matters for the reference oracle's node bookkeeping.
#[derive(Debug, Clone)]
pub struct PointStore {
    points: Vec<Point>,
    bounding_lower_right: Point,
    bounding_lower_left: Point,
    bounding_upper: Point,
}

impl PointStore {
    pub fn new(points: Vec<Point>) -> Self {
        let bounding_lower_right =
            geometry::bounding_triangle_coords(&points, BoundingCorner::LowerRight);
        let bounding_lower_left =
            geometry::bounding_triangle_coords(&points, BoundingCorner::LowerLeft);
        let bounding_upper = geometry::bounding_triangle_coords(&points, BoundingCorner::Upper);
        PointStore {
            points,
            bounding_lower_right,
            bounding_lower_left,
            bounding_upper,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point) -> PointIndex {
        self.points.push(point);
        PointIndex::Input(self.points.len() as u32 - 1 + FIRST_POINT_INDEX as u32)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointIndex, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (PointIndex::Input(i as u32 + FIRST_POINT_INDEX as u32), *p))
    }

    /// Finds an existing input point equal to `p`, if any. Used to implement
    /// [`crate::config::DuplicatePolicy`].
    pub fn find(&self, p: Point) -> Option<PointIndex> {
        self.points
            .iter()
            .position(|&q| q == p)
            .map(|i| PointIndex::Input(i as u32 + FIRST_POINT_INDEX as u32))
    }

    /// Resolves any [`PointIndex`] (input or bounding corner) to coordinates.
    /// `Boundary` and `NoAdjacent` have no coordinates and are rejected.
    pub fn get(&self, index: PointIndex) -> Result<Point, TriangulationError> {
        match index {
            PointIndex::Input(_) => {
                let i = index.array_index().unwrap();
                self.points
                    .get(i)
                    .copied()
                    .ok_or(TriangulationError::OutOfRange(index.to_raw()))
            }
            PointIndex::BoundingLowerRight => Ok(self.bounding_lower_right),
            PointIndex::BoundingLowerLeft => Ok(self.bounding_lower_left),
            PointIndex::BoundingUpper => Ok(self.bounding_upper),
            PointIndex::Boundary | PointIndex::NoAdjacent => {
                Err(TriangulationError::OutOfRange(index.to_raw()))
            }
        }
    }

    pub fn bounding_corners(&self) -> (PointIndex, PointIndex, PointIndex) {
        (
            PointIndex::BoundingLowerRight,
            PointIndex::BoundingUpper,
            PointIndex::BoundingLowerLeft,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_corners_contain_every_input_point() {
        let store = PointStore::new(vec![
            Point::new(1.0, 1.0),
            Point::new(-2.0, 3.0),
            Point::new(0.5, -4.0),
        ]);
        let (lr, up, ll) = store.bounding_corners();
        let lr = store.get(lr).unwrap();
        let up = store.get(up).unwrap();
        let ll = store.get(ll).unwrap();
        for (_, p) in store.iter() {
            assert_eq!(geometry::orient(lr, up, p), 1);
            assert_eq!(geometry::orient(up, ll, p), 1);
            assert_eq!(geometry::orient(ll, lr, p), 1);
        }
    }

    #[test]
    fn input_indices_round_trip() {
        let store = PointStore::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let indices: Vec<_> = store.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![PointIndex::Input(1), PointIndex::Input(2)]);
        assert_eq!(store.get(PointIndex::Input(2)).unwrap(), Point::new(1.0, 1.0));
    }

    #[test]
    fn boundary_and_no_adjacent_have_no_coordinates() {
        let store = PointStore::new(vec![Point::new(0.0, 0.0)]);
        assert!(store.get(PointIndex::Boundary).is_err());
        assert!(store.get(PointIndex::NoAdjacent).is_err());
    }
}
