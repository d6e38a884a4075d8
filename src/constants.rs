//! Stable sentinel constants exposed at the crate boundary.
//!
//! Internally these are never used for arithmetic; [`crate::data_structures::PointIndex`]
//! is the tagged representation the rest of the crate works with. The raw values below
//! exist only so external callers (and the scenario tests) have stable, documented
//! negative constants to compare against.

/// First valid index into the caller's input point array.
pub const FIRST_POINT_INDEX: i64 = 1;

/// Sentinel naming the ghost vertex used on the outer boundary.
pub const BOUNDARY_INDEX: i64 = -1;

/// Sentinel for the apex of the bounding triangle.
pub const UPPER_BOUNDING_INDEX: i64 = -2;

/// Sentinel for the lower-left vertex of the bounding triangle.
pub const LOWER_LEFT_BOUNDING_INDEX: i64 = -3;

/// Sentinel for the lower-right vertex of the bounding triangle.
pub const LOWER_RIGHT_BOUNDING_INDEX: i64 = -4;

/// Returned by adjacency lookups on a missing key. Distinct from every real index.
pub const DEFAULT_ADJACENT_VALUE: i64 = i64::MIN;

/// Floor applied to the input bounding box width/height when sizing the bounding
/// triangle, so a degenerate (collinear or single-point) input still yields a
/// non-degenerate bounding triangle.
pub const MIN_WIDTH_HEIGHT: f64 = 1.0;

/// Scale factor applied to the input bounding box extent when placing the bounding
/// triangle vertices, chosen so every input point lies strictly inside it.
pub const BOUNDING_TRIANGLE_SHIFT: f64 = 3.0;

/// Tolerance used by the orientation and in-circle predicates to treat
/// near-zero determinants as exactly zero.
pub const PREDICATE_EPSILON: f64 = 1e-9;
