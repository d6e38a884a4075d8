use thiserror::Error;

use crate::data_structures::{Point, PointIndex};

/// The error taxonomy for this crate.
///
/// Predicates and lookups never produce one of these: they return sentinels
/// (`PointIndex::NoAdjacent`) or booleans instead. Only the public construction and
/// insertion entry points surface a `TriangulationError`, and only for conditions a
/// caller can reasonably hit by passing bad input or calling things out of order —
/// genuine internal-invariant breaches are guarded by `debug_assert!` and panic
/// rather than returning one of these variants.
#[derive(Debug, Error)]
pub enum TriangulationError {
    /// A point index is neither a known sentinel nor `>= FirstPointIndex`, or an
    /// input index falls beyond the point container's length.
    #[error("point index {0} is out of range")]
    OutOfRange(i64),

    /// Point location reached a triangle whose three orientation tests were all
    /// zero; the core does not attempt to recover from this.
    #[error("location is degenerate: point {0:?} is collinear with every edge examined")]
    DegenerateInput(Point),

    /// `check_adjacent_is_adjacent2vertex_inverse` found `A` and `V` disagreeing.
    /// Only raised from debug/verification paths, never from normal insertion.
    #[error("adjacency map and reverse-adjacency map disagree at vertex {0}")]
    InvariantViolation(PointIndex),

    /// A point coincides with an already-inserted vertex and the active
    /// `DuplicatePolicy` is `Error`.
    #[error("point {0:?} duplicates an existing vertex")]
    DuplicatePoint(Point),
}
