//! Placement engine: brush-driven insert/delete with one-hop neighbor refresh
//!
//! Every mutation runs to completion before the next request. After a cell
//! is filled or cleared, only its four cardinal neighbors can see a different
//! adjacency code, so exactly those are re-resolved and nothing further.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tilebrush_autotile::{describe, encode, BrushConfig, ConfigError, Resolution, RuleTable};
use tilebrush_core::{Coordinate, Grid, GridError, PlacedTile, TileCategory};

use crate::error::EditError;
use crate::events::{EventSink, TileEvent};
use crate::variant::{pick_variant, RandomSource};

/// Why a brush request left the grid untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Paint over a cell that already holds a tile
    Occupied,
    /// Erase over an empty cell
    Empty,
    /// Cell lies in the bedrock margin or beyond
    OutOfBounds,
    /// The level holds merged `Fill` tiles and must be unmerged first
    LevelMerged,
}

/// Result of a single place or delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushOutcome {
    Placed(PlacedTile),
    Removed(PlacedTile),
    Unchanged(SkipReason),
}

impl BrushOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, BrushOutcome::Unchanged(_))
    }
}

/// Owns the grid and keeps every placed tile connected to its neighbors
pub struct PlacementEngine<S = Vec<TileEvent>, R = SmallRng> {
    grid: Grid,
    rules: RuleTable,
    config: BrushConfig,
    sink: S,
    rng: R,
}

impl PlacementEngine<Vec<TileEvent>, SmallRng> {
    /// Engine collecting events into a `Vec`, with a seeded generator
    pub fn with_seed(config: BrushConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Vec::new(), SmallRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> PlacementEngine<Vec<TileEvent>, R> {
    /// Take the events collected so far
    pub fn take_events(&mut self) -> Vec<TileEvent> {
        std::mem::take(&mut self.sink)
    }
}

impl<S: EventSink, R: RandomSource> PlacementEngine<S, R> {
    pub fn new(config: BrushConfig, sink: S, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid =
            Grid::new(config.half_extent).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(Self {
            grid,
            rules: RuleTable::standard(),
            config,
            sink,
            rng,
        })
    }

    /// Swap the rule table used for resolution
    pub fn with_rule_table(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for the external merge process
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.grid.is_occupied(coord)
    }

    pub fn category_at(&self, coord: Coordinate) -> Option<TileCategory> {
        self.grid.category_at(coord)
    }

    pub fn is_within_bounds(&self, coord: Coordinate) -> bool {
        self.grid.is_within_bounds(coord)
    }

    /// Whether brush input is currently locked by merged tiles
    pub fn is_merged(&self) -> bool {
        self.grid.has_fill()
    }

    /// Create a tile at `coord` and refresh its neighbors
    pub fn place(&mut self, coord: Coordinate) -> Result<BrushOutcome, EditError> {
        if self.is_merged() {
            log::info!("tile brush cannot be used while tiles are merged; unmerge tiles before editing");
            return Ok(BrushOutcome::Unchanged(SkipReason::LevelMerged));
        }
        if self.grid.is_occupied(coord) {
            return Ok(BrushOutcome::Unchanged(SkipReason::Occupied));
        }
        if !self.grid.is_within_bounds(coord) {
            log::debug!("place {coord}: outside level interior {}", self.grid.half_extent());
            return Ok(BrushOutcome::Unchanged(SkipReason::OutOfBounds));
        }

        let fit = self.resolve_at(coord)?;
        self.grid.insert(coord, fit.category, fit.rotation)?;
        let tile = self.assign_variant(coord)?;

        self.refresh_neighbors(coord)?;
        Ok(BrushOutcome::Placed(tile))
    }

    /// Remove the tile at `coord`, release its decoration and refresh its
    /// neighbors
    pub fn delete(&mut self, coord: Coordinate) -> Result<BrushOutcome, EditError> {
        if self.is_merged() {
            log::info!("tile brush cannot be used while tiles are merged; unmerge tiles before editing");
            return Ok(BrushOutcome::Unchanged(SkipReason::LevelMerged));
        }
        if !self.grid.is_occupied(coord) {
            return Ok(BrushOutcome::Unchanged(SkipReason::Empty));
        }

        let removed = self.grid.remove(coord)?;
        self.sink.emit(TileEvent::DecorationReleased { coord });
        self.sink.emit(TileEvent::TileRemoved { coord });

        self.refresh_neighbors(coord)?;
        Ok(BrushOutcome::Removed(removed))
    }

    /// Re-resolve an existing tile from its current neighbors.
    ///
    /// Rebuilds the tile in place without releasing its decoration and
    /// never touches the neighbors of `coord`. Returns the rebuilt tile, or
    /// `None` when the cell is empty, merged, or unchanged with re-rolls off.
    pub fn refresh(&mut self, coord: Coordinate) -> Result<Option<PlacedTile>, EditError> {
        let Some(current) = self.grid.get(coord).copied() else {
            return Ok(None);
        };
        if current.category.is_fill() {
            return Ok(None);
        }

        let fit = self.resolve_at(coord)?;
        let unchanged = fit.category == current.category && fit.rotation == current.rotation;
        if unchanged && !self.config.reroll_on_refresh {
            return Ok(None);
        }

        self.grid.replace(coord, fit.category, fit.rotation)?;
        let tile = self.assign_variant(coord)?;
        Ok(Some(tile))
    }

    /// Re-pick the visual variant of every non-merged tile, keeping category
    /// and rotation. Returns how many tiles were re-rolled.
    pub fn bulk_reroll(&mut self) -> Result<usize, EditError> {
        let mut rerolled = 0;
        for coord in self.grid.coordinates() {
            match self.grid.category_at(coord) {
                Some(category) if !category.is_fill() => {
                    self.assign_variant(coord)?;
                    rerolled += 1;
                }
                _ => {}
            }
        }
        log::debug!("re-rolled variants of {rerolled} tiles");
        Ok(rerolled)
    }

    /// Release every decoration and drop every tile
    pub fn clear_all(&mut self) {
        let coords = self.grid.coordinates();
        for &coord in &coords {
            self.sink.emit(TileEvent::DecorationReleased { coord });
        }
        self.grid.clear();
        self.sink.emit(TileEvent::LevelCleared);
        log::info!("level cleared ({} tiles removed)", coords.len());
    }

    fn refresh_neighbors(&mut self, coord: Coordinate) -> Result<(), EditError> {
        for neighbor in coord.neighbors() {
            self.refresh(neighbor)?;
        }
        Ok(())
    }

    fn resolve_at(&self, coord: Coordinate) -> Result<Resolution, EditError> {
        let code = encode(&self.grid, coord);
        match self.rules.resolve(code) {
            Some(fit) => {
                log::debug!(
                    "{coord}: {} -> {} r{}",
                    describe(code),
                    fit.category,
                    fit.rotation
                );
                Ok(fit)
            }
            None => {
                log::error!(
                    "{coord}: no tile rule matches adjacency {} ({code:#010b}); rule table is incomplete",
                    describe(code)
                );
                Err(EditError::ResolutionFailure { coord, code })
            }
        }
    }

    /// Pick a variant for the tile at `coord` and announce it
    fn assign_variant(&mut self, coord: Coordinate) -> Result<PlacedTile, EditError> {
        let category = self
            .grid
            .category_at(coord)
            .ok_or(GridError::NotFound(coord))?;
        let variant = pick_variant(
            category,
            self.config.variants.count(category),
            self.config.default_variant_chance,
            &mut self.rng,
        );
        let tile = self.grid.set_variant(coord, variant)?;
        self.sink.emit(TileEvent::placed(&tile));
        Ok(tile)
    }
}
