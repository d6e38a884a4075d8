//! Incremental Delaunay triangulation over a 2D point set.
//!
//! Two independent construction engines are provided over the same
//! combinatorial core ([`data_structures::Triangulation`]): a cavity-based
//! Bowyer-Watson insertion ([`bowyer_watson::triangulate_bowyer_watson`]) and
//! a randomised-incremental construction with a history DAG
//! ([`berg::triangulate_berg`]) that doubles as a point-location reference
//! oracle. Both finish with the same hull-consistency guarantee: only the
//! input points remain as vertices, and every exposed hull edge is capped
//! with a ghost triangle so point location (inside or outside the hull)
//! never has to special-case the boundary.
//!
//! # Examples
//! ```
//! use incremental_delaunay::{triangulate, Point, TriangulationConfig};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//!     Point::new(2.0, 2.0),
//! ];
//! let (triangulation, _points) = triangulate(&points, &TriangulationConfig::default())
//!     .expect("triangulation of a simple convex point set never fails");
//! assert!(triangulation.triangles().iter().any(|t| !t.is_ghost()));
//! ```

pub mod berg;
pub mod bowyer_watson;
pub mod compare;
pub mod config;
mod constants;
pub mod data_structures;
pub mod error;
pub mod geometry;
pub mod ghost;
pub mod history;
pub mod location;
pub mod points;

pub use config::{DuplicatePolicy, TriangulationConfig};
pub use constants::{
    BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE, FIRST_POINT_INDEX, LOWER_LEFT_BOUNDING_INDEX,
    LOWER_RIGHT_BOUNDING_INDEX, UPPER_BOUNDING_INDEX,
};
pub use data_structures::{Point, PointIndex, Triangle};
pub use error::TriangulationError;
pub use points::PointStore;

/// Triangulates `points` with [`bowyer_watson::triangulate_bowyer_watson`],
/// the engine most callers want: deterministic insertion order, no RNG
/// dependency, and a history-free adjacency structure that is cheaper to keep
/// around than the de Berg reference oracle.
///
/// Use [`berg::triangulate_berg`] directly when the history DAG itself (for
/// point location or for cross-checking against this function's output) is
/// needed.
pub fn triangulate(
    points: &[Point],
    config: &TriangulationConfig,
) -> Result<(data_structures::Triangulation, PointStore), TriangulationError> {
    bowyer_watson::triangulate_bowyer_watson(points, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowyer_watson_and_berg_agree_on_a_small_point_set() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 5.0),
            Point::new(2.5, 2.5),
            Point::new(1.0, 4.0),
        ];
        let config = TriangulationConfig {
            seed: Some(1234),
            ..TriangulationConfig::default()
        };

        let (bowyer, _) = bowyer_watson::triangulate_bowyer_watson(&points, &config).unwrap();
        let (berg, _, _) = berg::triangulate_berg(&points, &config).unwrap();

        assert!(compare::compare_deberg_to_bowyerwatson(&berg, &bowyer));
    }
}
