//! Adjacency encoding: which cardinal neighbors of a cell are solid

use tilebrush_core::{Coordinate, Direction, Grid};

/// Mask of the four bits that carry direction information
pub const DIRECTION_BITS: u8 = 0b1010_1010;

/// Compute the adjacency code of `coord` from the grid's current contents.
///
/// A neighbor is solid when it holds a tile or lies outside the level
/// interior, so tiles along the edge behave as if walled in.
pub fn encode(grid: &Grid, coord: Coordinate) -> u8 {
    encode_with(coord, |neighbor| {
        grid.is_occupied(neighbor) || !grid.is_within_bounds(neighbor)
    })
}

/// Compute the adjacency code of `coord` using a custom solidity test
pub fn encode_with<F>(coord: Coordinate, is_solid: F) -> u8
where
    F: Fn(Coordinate) -> bool,
{
    let mut code = 0u8;

    for direction in Direction::ALL {
        if is_solid(coord.neighbor(direction)) {
            code |= direction.bit();
        }
    }

    code
}

/// Directions whose bit is set in `code`
pub fn solid_directions(code: u8) -> impl Iterator<Item = Direction> {
    Direction::ALL
        .into_iter()
        .filter(move |direction| code & direction.bit() != 0)
}

/// Every well-formed adjacency code (one per subset of the 4 directions)
pub fn occupancy_codes() -> impl Iterator<Item = u8> {
    (0u8..16).map(|subset| {
        Direction::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| subset & (1 << i) != 0)
            .fold(0u8, |code, (_, direction)| code | direction.bit())
    })
}

/// Compact `N.S.`-style rendering of a code for log output
pub fn describe(code: u8) -> String {
    Direction::ALL
        .iter()
        .zip(['N', 'E', 'S', 'W'])
        .map(|(direction, letter)| {
            if code & direction.bit() != 0 {
                letter
            } else {
                '.'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tilebrush_core::{HalfExtent, TileCategory};

    #[test]
    fn test_encode_empty_interior() {
        let grid = Grid::new(HalfExtent::new(5, 5)).unwrap();
        assert_eq!(encode(&grid, Coordinate::ORIGIN), 0);
    }

    #[test]
    fn test_encode_counts_tiles() {
        let mut grid = Grid::new(HalfExtent::new(5, 5)).unwrap();
        grid.insert((0, 1).into(), TileCategory::NoSides, 0).unwrap();
        grid.insert((-1, 0).into(), TileCategory::NoSides, 0).unwrap();
        assert_eq!(encode(&grid, Coordinate::ORIGIN), 0b1000_0010);
    }

    #[test]
    fn test_encode_counts_fill_tiles() {
        let mut grid = Grid::new(HalfExtent::new(5, 5)).unwrap();
        grid.insert((1, 0).into(), TileCategory::NoSides, 0).unwrap();
        grid.mark_fill((1, 0).into()).unwrap();
        assert_eq!(encode(&grid, Coordinate::ORIGIN), Direction::East.bit());
    }

    #[test]
    fn test_encode_boundary_is_solid() {
        let grid = Grid::new(HalfExtent::new(3, 3)).unwrap();
        // Innermost valid cell in the north-east corner
        assert_eq!(encode(&grid, Coordinate::new(2, 2)), 0b1010_0000);
        // Single-cell level is walled in on every side
        let tiny = Grid::new(HalfExtent::new(1, 1)).unwrap();
        assert_eq!(encode(&tiny, Coordinate::ORIGIN), DIRECTION_BITS);
    }

    #[test]
    fn test_encode_with_predicate() {
        let code = encode_with(Coordinate::ORIGIN, |c| c.z < 0);
        assert_eq!(code, Direction::South.bit());
    }

    #[test]
    fn test_occupancy_codes() {
        let codes: HashSet<u8> = occupancy_codes().collect();
        assert_eq!(codes.len(), 16);
        assert!(codes.iter().all(|c| c & !DIRECTION_BITS == 0));
        assert!(codes.contains(&0) && codes.contains(&DIRECTION_BITS));
    }

    #[test]
    fn test_solid_directions_and_describe() {
        let code = 0b1000_1000;
        let dirs: Vec<Direction> = solid_directions(code).collect();
        assert_eq!(dirs, vec![Direction::North, Direction::South]);
        assert_eq!(describe(code), "N.S.");
        assert_eq!(describe(0), "....");
    }
}
