//! Pattern table: canonical connector bitmask per tile category
//!
//! Each category stores the adjacency code of its canonical orientation and
//! how many quarter turns it supports before the code repeats. Because the
//! direction bits are spaced by zeros, turning a tile is a 2-bit circular
//! rotate of its code.

use tilebrush_core::TileCategory;

/// Canonical bitmask of a category and its rotational permutation count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePattern {
    pub mask: u8,
    /// Distinct quarter-turn orientations (1, 2 or 4)
    pub rotations: u8,
}

impl TilePattern {
    pub const fn new(mask: u8, rotations: u8) -> Self {
        Self { mask, rotations }
    }

    /// The mask turned by `rotation` quarter turns
    pub fn rotated(&self, rotation: u8) -> u8 {
        rotate_pattern(self.mask, rotation)
    }

    /// Every orientation as `(rotation, mask)`
    pub fn orientations(self) -> impl Iterator<Item = (u8, u8)> {
        (0..self.rotations).map(move |rotation| (rotation, self.rotated(rotation)))
    }
}

/// Rotate an adjacency code by `quarter_turns`.
///
/// Equivalent to `(p << 2k | p >> (8 - 2k)) & 0xFF`.
pub fn rotate_pattern(pattern: u8, quarter_turns: u8) -> u8 {
    pattern.rotate_left(2 * u32::from(quarter_turns % 4))
}

/// Built-in pattern for `category`. `Fill` takes no part in matching.
pub fn pattern(category: TileCategory) -> Option<TilePattern> {
    let pattern = match category {
        TileCategory::AllSides => TilePattern::new(0b1010_1010, 1),
        TileCategory::ThreeSides => TilePattern::new(0b1010_1000, 4),
        TileCategory::TwoAdjacentSides => TilePattern::new(0b1010_0000, 4),
        TileCategory::TwoOppositeSides => TilePattern::new(0b1000_1000, 2),
        TileCategory::OneSide => TilePattern::new(0b1000_0000, 4),
        TileCategory::NoSides => TilePattern::new(0b0000_0000, 1),
        TileCategory::Fill => return None,
    };
    Some(pattern)
}

/// All `(category, rotation, mask)` triples of the built-in table, in
/// resolver order
pub fn rotated_patterns() -> impl Iterator<Item = (TileCategory, u8, u8)> {
    TileCategory::RULED.into_iter().flat_map(|category| {
        pattern(category)
            .into_iter()
            .flat_map(move |p| p.orientations().map(move |(r, mask)| (category, r, mask)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rotate_matches_shift_formula() {
        for p in [0b1010_1000u8, 0b1000_0000, 0b1010_0000] {
            for k in 1..4u8 {
                let shift = 2 * k as u32;
                let expected = ((p as u32) << shift | (p as u32) >> (8 - shift)) as u8;
                assert_eq!(rotate_pattern(p, k), expected);
            }
            assert_eq!(rotate_pattern(p, 0), p);
        }
    }

    #[test]
    fn test_one_side_turns_north_to_west() {
        // A quarter turn moves the North connector onto West
        assert_eq!(rotate_pattern(0b1000_0000, 1), 0b0000_0010);
        assert_eq!(rotate_pattern(0b1000_0000, 2), 0b0000_1000);
        assert_eq!(rotate_pattern(0b1000_0000, 3), 0b0010_0000);
    }

    #[test]
    fn test_rotation_closed_over_count() {
        for category in TileCategory::RULED {
            let p = pattern(category).unwrap();
            assert_eq!(p.rotated(p.rotations), p.mask, "{category}");
        }
    }

    #[test]
    fn test_rotation_counts_are_minimal() {
        for category in TileCategory::RULED {
            let p = pattern(category).unwrap();
            let distinct: HashSet<u8> = p.orientations().map(|(_, m)| m).collect();
            assert_eq!(distinct.len(), p.rotations as usize, "{category}");
        }
    }

    #[test]
    fn test_masks_use_only_direction_bits() {
        for (category, _, mask) in rotated_patterns() {
            assert_eq!(mask & 0b0101_0101, 0, "{category}");
        }
    }

    #[test]
    fn test_fill_has_no_pattern() {
        assert_eq!(pattern(TileCategory::Fill), None);
        assert_eq!(rotated_patterns().count(), 16);
    }
}
