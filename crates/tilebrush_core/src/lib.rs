//! Core data structures for tilebrush
//!
//! This crate provides the fundamental types shared by the tile brush:
//! - `Coordinate` / `Direction` - Integer grid cells and their cardinal neighbors
//! - `HalfExtent` - Level bounds with the bedrock margin
//! - `TileCategory` - Closed set of connector shapes
//! - `PlacedTile` - A committed grid entry
//! - `Grid` - Sparse coordinate-to-tile store

mod coord;
mod error;
mod grid;
mod tile;

pub use coord::{Coordinate, Direction, HalfExtent};
pub use error::GridError;
pub use grid::Grid;
pub use tile::{PlacedTile, TileCategory};
