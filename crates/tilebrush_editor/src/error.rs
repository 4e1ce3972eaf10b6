//! Placement engine error type

use thiserror::Error;
use tilebrush_core::{Coordinate, GridError};

/// Failures that abort a brush operation.
///
/// Expected outcomes such as painting an occupied cell are not errors; see
/// [`BrushOutcome`](crate::BrushOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// No rule fits the cell. The rule table is incomplete or corrupted;
    /// nothing is placed in its stead.
    #[error("no tile rule matches adjacency code {code:#010b} at {coord}")]
    ResolutionFailure { coord: Coordinate, code: u8 },
    #[error(transparent)]
    Grid(#[from] GridError),
}
