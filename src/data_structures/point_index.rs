use std::cmp::Ordering;
use std::fmt;

use crate::constants::{
    BOUNDARY_INDEX, DEFAULT_ADJACENT_VALUE, FIRST_POINT_INDEX, LOWER_LEFT_BOUNDING_INDEX,
    LOWER_RIGHT_BOUNDING_INDEX, UPPER_BOUNDING_INDEX,
};
use crate::error::TriangulationError;

/// A vertex reference used throughout the triangulation.
///
/// Non-negative input indices interleave with four negative sentinels (the three
/// bounding-triangle corners, the outer `Boundary` ghost vertex, and the
/// `NoAdjacent` default-adjacency marker). A tagged enum is used internally instead
/// of raw signed integers so the sentinel space can never collide with a real input
/// index; [`PointIndex::to_raw`] and [`PointIndex::from_raw`] convert to/from the
/// stable constants in [`crate::constants`] for callers that need them.
///
/// `PointIndex` orders by its raw constant, used wherever a deterministic
/// tie-break is needed: picking a canonical triangle rotation, or the
/// "lexicographically-earlier child" rule in history-DAG descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointIndex {
    /// An input point. Stores the 1-based index matching `FirstPointIndex`.
    Input(u32),
    /// Lower-right corner of the bounding triangle.
    BoundingLowerRight,
    /// Lower-left corner of the bounding triangle.
    BoundingLowerLeft,
    /// Apex of the bounding triangle.
    BoundingUpper,
    /// The ghost vertex "at infinity" used to cap hull edges.
    Boundary,
    /// Sentinel returned by adjacency lookups on a missing key. Never stored as a
    /// triangle vertex.
    NoAdjacent,
}

impl PointIndex {
    /// Wraps a 1-based input index.
    pub fn input(index: u32) -> Self {
        PointIndex::Input(index)
    }

    /// True for the ghost vertex.
    pub fn is_boundary(self) -> bool {
        matches!(self, PointIndex::Boundary)
    }

    /// True for any of the three bounding-triangle corners.
    pub fn is_bounding(self) -> bool {
        matches!(
            self,
            PointIndex::BoundingLowerRight | PointIndex::BoundingLowerLeft | PointIndex::BoundingUpper
        )
    }

    /// True for an input point.
    pub fn is_input(self) -> bool {
        matches!(self, PointIndex::Input(_))
    }

    /// Zero-based offset into the caller's point slice, if this is an input index.
    pub fn array_index(self) -> Option<usize> {
        match self {
            PointIndex::Input(n) => Some(n as usize - FIRST_POINT_INDEX as usize),
            _ => None,
        }
    }

    /// The stable, documented raw constant for this index (see [`crate::constants`]).
    pub fn to_raw(self) -> i64 {
        match self {
            PointIndex::Input(n) => n as i64,
            PointIndex::BoundingLowerRight => LOWER_RIGHT_BOUNDING_INDEX,
            PointIndex::BoundingLowerLeft => LOWER_LEFT_BOUNDING_INDEX,
            PointIndex::BoundingUpper => UPPER_BOUNDING_INDEX,
            PointIndex::Boundary => BOUNDARY_INDEX,
            PointIndex::NoAdjacent => DEFAULT_ADJACENT_VALUE,
        }
    }

    /// Recovers a [`PointIndex`] from a raw constant, failing with `OutOfRange` for
    /// anything that is neither a known sentinel nor `>= FirstPointIndex`.
    pub fn from_raw(raw: i64) -> Result<Self, TriangulationError> {
        Ok(match raw {
            BOUNDARY_INDEX => PointIndex::Boundary,
            UPPER_BOUNDING_INDEX => PointIndex::BoundingUpper,
            LOWER_LEFT_BOUNDING_INDEX => PointIndex::BoundingLowerLeft,
            LOWER_RIGHT_BOUNDING_INDEX => PointIndex::BoundingLowerRight,
            DEFAULT_ADJACENT_VALUE => PointIndex::NoAdjacent,
            n if n >= FIRST_POINT_INDEX => PointIndex::Input(n as u32),
            other => return Err(TriangulationError::OutOfRange(other)),
        })
    }
}

impl fmt::Display for PointIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointIndex::Input(n) => write!(f, "{n}"),
            PointIndex::BoundingLowerRight => write!(f, "<bounding-lr>"),
            PointIndex::BoundingLowerLeft => write!(f, "<bounding-ll>"),
            PointIndex::BoundingUpper => write!(f, "<bounding-u>"),
            PointIndex::Boundary => write!(f, "<boundary>"),
            PointIndex::NoAdjacent => write!(f, "<none>"),
        }
    }
}

impl PartialOrd for PointIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PointIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_raw().cmp(&other.to_raw())
    }
}
