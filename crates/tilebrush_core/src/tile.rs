//! Tile categories and placed tile records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coord::Coordinate;

/// Class of tile, distinguished by how many and which sides connect.
///
/// Declaration order is the order in which the resolver tries categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileCategory {
    /// Neighbors on all 4 sides
    AllSides,
    /// Neighbors on 3 sides
    ThreeSides,
    /// Neighbors on 2 adjacent sides
    TwoAdjacentSides,
    /// Neighbors on 2 opposite sides
    TwoOppositeSides,
    /// Neighbor on 1 side
    OneSide,
    /// No neighbors
    NoSides,
    /// Merged/baked tile produced outside the brush. Never resolved.
    Fill,
}

impl TileCategory {
    /// Categories that take part in rule matching, in resolver order
    pub const RULED: [TileCategory; 6] = [
        TileCategory::AllSides,
        TileCategory::ThreeSides,
        TileCategory::TwoAdjacentSides,
        TileCategory::TwoOppositeSides,
        TileCategory::OneSide,
        TileCategory::NoSides,
    ];

    pub fn is_fill(self) -> bool {
        self == TileCategory::Fill
    }

    pub fn name(self) -> &'static str {
        match self {
            TileCategory::AllSides => "AllSides",
            TileCategory::ThreeSides => "ThreeSides",
            TileCategory::TwoAdjacentSides => "TwoAdjacentSides",
            TileCategory::TwoOppositeSides => "TwoOppositeSides",
            TileCategory::OneSide => "OneSide",
            TileCategory::NoSides => "NoSides",
            TileCategory::Fill => "Fill",
        }
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tile committed to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub coord: Coordinate,
    pub category: TileCategory,
    /// Quarter turns applied to the category's canonical orientation
    pub rotation: u8,
    /// Index into the category's visual variant list (0 = default model)
    #[serde(default)]
    pub variant: usize,
}

impl PlacedTile {
    pub fn new(coord: Coordinate, category: TileCategory, rotation: u8) -> Self {
        Self {
            coord,
            category,
            rotation,
            variant: 0,
        }
    }

    /// Orientation around the vertical axis, clockwise-negative
    pub fn orientation_degrees(&self) -> f32 {
        -90.0 * self.rotation as f32
    }
}
