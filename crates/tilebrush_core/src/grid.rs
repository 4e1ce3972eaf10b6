//! Sparse grid store for placed tiles

use std::collections::HashMap;

use crate::coord::{Coordinate, HalfExtent};
use crate::error::GridError;
use crate::tile::{PlacedTile, TileCategory};

/// Sparse mapping from coordinate to placed tile, bounded by a half-extent.
///
/// The store only holds data. Anything bound to a cell outside of it
/// (props, decorations) is released by the caller that owns those.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    half_extent: HalfExtent,
    tiles: HashMap<Coordinate, PlacedTile>,
    /// Merged tiles currently stored
    fill_count: usize,
}

impl Grid {
    /// Create an empty grid. Both half-extent axes must lie in
    /// `1..=HalfExtent::MAX_AXIS`.
    pub fn new(half_extent: HalfExtent) -> Result<Self, GridError> {
        if !half_extent.is_valid() {
            return Err(GridError::InvalidExtent(half_extent));
        }
        Ok(Self {
            half_extent,
            tiles: HashMap::new(),
            fill_count: 0,
        })
    }

    pub fn half_extent(&self) -> HalfExtent {
        self.half_extent
    }

    /// Whether `coord` is an addressable cell
    pub fn is_within_bounds(&self, coord: Coordinate) -> bool {
        self.half_extent.contains(coord)
    }

    pub fn get(&self, coord: Coordinate) -> Option<&PlacedTile> {
        self.tiles.get(&coord)
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.tiles.contains_key(&coord)
    }

    pub fn category_at(&self, coord: Coordinate) -> Option<TileCategory> {
        self.tiles.get(&coord).map(|tile| tile.category)
    }

    /// Store a new tile at `coord`
    pub fn insert(
        &mut self,
        coord: Coordinate,
        category: TileCategory,
        rotation: u8,
    ) -> Result<PlacedTile, GridError> {
        if !self.is_within_bounds(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                half_extent: self.half_extent,
            });
        }
        if self.is_occupied(coord) {
            return Err(GridError::AlreadyOccupied(coord));
        }
        let tile = PlacedTile::new(coord, category, rotation);
        self.tiles.insert(coord, tile);
        if category.is_fill() {
            self.fill_count += 1;
        }
        Ok(tile)
    }

    /// Remove and return the tile at `coord`
    pub fn remove(&mut self, coord: Coordinate) -> Result<PlacedTile, GridError> {
        let tile = self.tiles.remove(&coord).ok_or(GridError::NotFound(coord))?;
        if tile.category.is_fill() {
            self.fill_count -= 1;
        }
        Ok(tile)
    }

    /// Swap the tile at `coord` for a freshly built one.
    ///
    /// This is a remove followed by an insert, so the variant resets to 0.
    /// Returns the previous tile alongside the new one.
    pub fn replace(
        &mut self,
        coord: Coordinate,
        category: TileCategory,
        rotation: u8,
    ) -> Result<(PlacedTile, PlacedTile), GridError> {
        let old = self.remove(coord)?;
        let new = self.insert(coord, category, rotation)?;
        Ok((old, new))
    }

    /// Change which visual variant the tile at `coord` shows
    pub fn set_variant(
        &mut self,
        coord: Coordinate,
        variant: usize,
    ) -> Result<PlacedTile, GridError> {
        let tile = self.tiles.get_mut(&coord).ok_or(GridError::NotFound(coord))?;
        tile.variant = variant;
        Ok(*tile)
    }

    /// Turn an existing tile into a merged `Fill` tile.
    ///
    /// Called by the external merge process; the brush never produces `Fill`.
    pub fn mark_fill(&mut self, coord: Coordinate) -> Result<PlacedTile, GridError> {
        let tile = self.tiles.get_mut(&coord).ok_or(GridError::NotFound(coord))?;
        if !tile.category.is_fill() {
            self.fill_count += 1;
        }
        tile.category = TileCategory::Fill;
        tile.rotation = 0;
        tile.variant = 0;
        Ok(*tile)
    }

    /// Whether any merged tile is present
    pub fn has_fill(&self) -> bool {
        self.fill_count > 0
    }

    /// Number of merged tiles
    pub fn fill_count(&self) -> usize {
        self.fill_count
    }

    /// Drop every tile
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.fill_count = 0;
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate tiles in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.values()
    }

    /// Occupied coordinates, sorted so that bulk passes are reproducible
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut coords: Vec<Coordinate> = self.tiles.keys().copied().collect();
        coords.sort();
        coords
    }
}
