//! Grid store error type

use thiserror::Error;

use crate::coord::{Coordinate, HalfExtent};

/// Failures of grid store operations.
///
/// Apart from `InvalidExtent` these are expected outcomes of the brush's
/// idempotent guards rather than user-facing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {coord} is outside the {half_extent} level interior")]
    OutOfBounds {
        coord: Coordinate,
        half_extent: HalfExtent,
    },
    #[error("cell {0} already holds a tile")]
    AlreadyOccupied(Coordinate),
    #[error("cell {0} is empty")]
    NotFound(Coordinate),
    #[error("half-extent {0} must lie in 1..=2147483647 in both axes")]
    InvalidExtent(HalfExtent),
}
