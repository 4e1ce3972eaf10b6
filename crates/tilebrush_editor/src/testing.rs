//! Test helpers for the placement engine.
//!
//! Deterministic random sources and consistency checks, usable from this
//! crate's `#[cfg(test)]` modules and from downstream integration tests.

use std::collections::VecDeque;

use tilebrush_autotile::{encode, RuleTable};
use tilebrush_core::{Coordinate, Grid};

use crate::variant::RandomSource;

/// Random source replaying scripted draws.
///
/// Once a script runs dry, `unit` returns `0.0` (always the default model)
/// and `index` returns `low`. Scripted indices are clamped into range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    units: VecDeque<f32>,
    indices: VecDeque<usize>,
}

impl ScriptedRolls {
    pub fn new(units: &[f32], indices: &[usize]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
        }
    }

    /// Source whose every draw selects the default model
    pub fn always_default() -> Self {
        Self::default()
    }

    /// Unused `(units, indices)`
    pub fn remaining(&self) -> (usize, usize) {
        (self.units.len(), self.indices.len())
    }
}

impl RandomSource for ScriptedRolls {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn index(&mut self, low: usize, high: usize) -> usize {
        self.indices
            .pop_front()
            .map_or(low, |i| i.clamp(low, high.saturating_sub(1).max(low)))
    }
}

/// Cells whose stored category/rotation differs from what `rules` derives
/// from their current neighbors. Merged `Fill` cells are not checked.
pub fn inconsistent_cells(grid: &Grid, rules: &RuleTable) -> Vec<Coordinate> {
    grid.coordinates()
        .into_iter()
        .filter(|&coord| {
            let Some(tile) = grid.get(coord) else {
                return false;
            };
            if tile.category.is_fill() {
                return false;
            }
            match rules.resolve(encode(grid, coord)) {
                Some(fit) => fit.category != tile.category || fit.rotation != tile.rotation,
                None => true,
            }
        })
        .collect()
}
