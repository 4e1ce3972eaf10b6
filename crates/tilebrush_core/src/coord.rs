//! Grid coordinates, cardinal directions and level bounds

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer grid cell on the level's ground plane.
///
/// `x` grows towards East and `z` grows towards North. Display-space
/// conversion is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub z: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The adjacent cell in `direction`
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dz) = direction.offset();
        Self::new(self.x + dx, self.z + dz)
    }

    /// The four cardinal neighbors in `Direction::ALL` order
    pub fn neighbors(self) -> [Self; 4] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Cardinal direction of a neighboring cell
///
/// Each direction owns one bit of the 8-bit adjacency code. The bits are
/// spaced out by a zero so that a quarter turn is a 2-bit circular rotate:
///
/// ```text
///   bit: 7 6 5 4 3 2 1 0
///        N 0 E 0 S 0 W 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Grid offset `(dx, dz)` towards this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Adjacency-code bit set when the neighbor in this direction is solid
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 0b1000_0000,
            Direction::East => 0b0010_0000,
            Direction::South => 0b0000_1000,
            Direction::West => 0b0000_0010,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Half-size of the level in each axis.
///
/// The outermost ring of the half-extent is bedrock: a cell is addressable
/// only while `|x| < x` and `|z| < z`. Everything past that counts as solid
/// wall when neighbors are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfExtent {
    pub x: u32,
    pub z: u32,
}

impl HalfExtent {
    /// Largest usable half-extent per axis. Neighbors of every interior cell
    /// then still fit in an `i32`.
    pub const MAX_AXIS: u32 = i32::MAX as u32;

    pub const fn new(x: u32, z: u32) -> Self {
        Self { x, z }
    }

    /// Both axes positive and no larger than [`Self::MAX_AXIS`]
    pub fn is_valid(&self) -> bool {
        (1..=Self::MAX_AXIS).contains(&self.x) && (1..=Self::MAX_AXIS).contains(&self.z)
    }

    /// Whether `coord` is an addressable interior cell
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x.unsigned_abs() < self.x && coord.z.unsigned_abs() < self.z
    }

    /// Number of addressable cells
    pub fn cell_count(&self) -> u64 {
        let span = |half: u32| (2 * half as u64).saturating_sub(1);
        span(self.x) * span(self.z)
    }
}

impl Default for HalfExtent {
    fn default() -> Self {
        Self::new(16, 16)
    }
}

impl fmt::Display for HalfExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_follow_direction_order() {
        let c = Coordinate::new(2, -3);
        assert_eq!(
            c.neighbors(),
            [
                Coordinate::new(2, -2),
                Coordinate::new(3, -3),
                Coordinate::new(2, -4),
                Coordinate::new(1, -3),
            ]
        );
    }

    #[test]
    fn test_direction_bits_are_spaced() {
        let all = Direction::ALL.iter().fold(0u8, |acc, d| acc | d.bit());
        assert_eq!(all, 0b1010_1010);
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.bit().rotate_left(4), d.opposite().bit());
        }
    }

    #[test]
    fn test_half_extent_margin() {
        let bounds = HalfExtent::new(2, 1);
        assert!(bounds.contains(Coordinate::new(0, 0)));
        assert!(bounds.contains(Coordinate::new(-1, 0)));
        assert!(!bounds.contains(Coordinate::new(2, 0)));
        assert!(!bounds.contains(Coordinate::new(0, 1)));
        assert_eq!(bounds.cell_count(), 3);
    }

    #[test]
    fn test_half_extent_validity() {
        assert!(HalfExtent::new(1, 1).is_valid());
        assert!(HalfExtent::new(HalfExtent::MAX_AXIS, 1).is_valid());
        assert!(!HalfExtent::new(0, 1).is_valid());
        assert!(!HalfExtent::new(u32::MAX, 1).is_valid());
        assert!(!HalfExtent::new(1, HalfExtent::MAX_AXIS + 1).is_valid());
    }

    #[test]
    fn test_largest_extent_edge_neighbors_fit() {
        let bounds = HalfExtent::new(HalfExtent::MAX_AXIS, HalfExtent::MAX_AXIS);
        let edge = Coordinate::new(i32::MAX - 1, -(i32::MAX - 1));
        assert!(bounds.contains(edge));
        assert!(!bounds.contains(Coordinate::new(i32::MAX, 0)));
        assert!(!bounds.contains(Coordinate::new(i32::MIN, 0)));
        let [north, east, south, west] = edge.neighbors();
        assert_eq!(east, Coordinate::new(i32::MAX, -(i32::MAX - 1)));
        assert_eq!(south, Coordinate::new(i32::MAX - 1, -i32::MAX));
        assert!(!bounds.contains(east) && !bounds.contains(south));
        assert!(bounds.contains(north) && bounds.contains(west));
    }
}
