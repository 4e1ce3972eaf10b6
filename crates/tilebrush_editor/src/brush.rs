//! Brush strokes: paint or erase many cells in one gesture

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};
use tilebrush_core::Coordinate;

use crate::engine::{BrushOutcome, PlacementEngine};
use crate::error::EditError;
use crate::events::EventSink;
use crate::variant::RandomSource;

/// What a stroke does to each cell it touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushMode {
    #[default]
    Paint,
    Erase,
}

impl BrushMode {
    /// Holding the delete modifier turns a paint gesture into erase
    pub fn from_modifier(delete_held: bool) -> Self {
        if delete_held {
            BrushMode::Erase
        } else {
            BrushMode::Paint
        }
    }
}

/// Square brush footprint centered on the cursor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushShape {
    /// Side length in cells; even sizes round up to the next odd size
    pub size: u32,
}

impl Default for BrushShape {
    fn default() -> Self {
        Self { size: 1 }
    }
}

impl BrushShape {
    pub fn new(size: u32) -> Self {
        Self { size: size.max(1) }
    }

    pub fn radius(&self) -> i32 {
        (self.size.max(1) / 2) as i32
    }

    /// Cells covered when centered on `center`, row by row from -z to +z
    pub fn footprint(&self, center: Coordinate) -> Vec<Coordinate> {
        let radius = self.radius();
        let mut cells = Vec::new();
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                cells.push(Coordinate::new(
                    center.x.saturating_add(dx),
                    center.z.saturating_add(dz),
                ));
            }
        }
        cells
    }
}

/// Tally of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrokeSummary {
    pub placed: usize,
    pub removed: usize,
    pub skipped: usize,
}

impl StrokeSummary {
    pub fn record(&mut self, outcome: &BrushOutcome) {
        match outcome {
            BrushOutcome::Placed(_) => self.placed += 1,
            BrushOutcome::Removed(_) => self.removed += 1,
            BrushOutcome::Unchanged(_) => self.skipped += 1,
        }
    }

    pub fn changed(&self) -> usize {
        self.placed + self.removed
    }
}

impl AddAssign for StrokeSummary {
    fn add_assign(&mut self, other: Self) {
        self.placed += other.placed;
        self.removed += other.removed;
        self.skipped += other.skipped;
    }
}

impl<S: EventSink, R: RandomSource> PlacementEngine<S, R> {
    /// Place or delete a single cell
    pub fn apply(
        &mut self,
        mode: BrushMode,
        coord: Coordinate,
    ) -> Result<BrushOutcome, EditError> {
        match mode {
            BrushMode::Paint => self.place(coord),
            BrushMode::Erase => self.delete(coord),
        }
    }

    /// Apply `mode` to every coordinate in order, each with its full
    /// neighbor refresh. Stops at the first error.
    pub fn apply_stroke<I>(
        &mut self,
        mode: BrushMode,
        coords: I,
    ) -> Result<StrokeSummary, EditError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut summary = StrokeSummary::default();
        if self.is_merged() {
            log::info!("tile brush cannot be used while tiles are merged; unmerge tiles before editing");
            summary.skipped = coords.into_iter().count();
            return Ok(summary);
        }
        for coord in coords {
            let outcome = self.apply(mode, coord)?;
            summary.record(&outcome);
        }
        Ok(summary)
    }
}

/// One press-drag-release gesture.
///
/// The mode is fixed when the gesture begins; dragging over the same cell
/// twice in a row applies it once.
#[derive(Debug, Clone)]
pub struct Stroke {
    mode: BrushMode,
    shape: BrushShape,
    last: Option<Coordinate>,
    summary: StrokeSummary,
}

impl Stroke {
    pub fn begin(delete_held: bool, shape: BrushShape) -> Self {
        Self {
            mode: BrushMode::from_modifier(delete_held),
            shape,
            last: None,
            summary: StrokeSummary::default(),
        }
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    /// Apply the brush footprint around `center`
    pub fn drag_to<S: EventSink, R: RandomSource>(
        &mut self,
        engine: &mut PlacementEngine<S, R>,
        center: Coordinate,
    ) -> Result<StrokeSummary, EditError> {
        if self.last == Some(center) {
            return Ok(StrokeSummary::default());
        }
        self.last = Some(center);
        let step = engine.apply_stroke(self.mode, self.shape.footprint(center))?;
        self.summary += step;
        Ok(step)
    }

    /// End the gesture and return its total tally
    pub fn finish(self) -> StrokeSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TileEvent;
    use crate::testing::{inconsistent_cells, ScriptedRolls};
    use tilebrush_autotile::BrushConfig;
    use tilebrush_core::{HalfExtent, TileCategory};

    fn engine(half: u32) -> PlacementEngine<Vec<TileEvent>, ScriptedRolls> {
        PlacementEngine::new(
            BrushConfig::new(HalfExtent::new(half, half)),
            Vec::new(),
            ScriptedRolls::always_default(),
        )
        .unwrap()
    }

    fn c(x: i32, z: i32) -> Coordinate {
        Coordinate::new(x, z)
    }

    #[test]
    fn test_mode_from_modifier() {
        assert_eq!(BrushMode::from_modifier(false), BrushMode::Paint);
        assert_eq!(BrushMode::from_modifier(true), BrushMode::Erase);
    }

    #[test]
    fn test_footprint_order() {
        assert_eq!(BrushShape::default().footprint(c(3, 3)), vec![c(3, 3)]);
        let cells = BrushShape::new(3).footprint(c(0, 0));
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], c(-1, -1));
        assert_eq!(cells[1], c(0, -1));
        assert_eq!(cells[8], c(1, 1));
        assert_eq!(BrushShape::new(2).footprint(c(0, 0)).len(), 9);
        assert_eq!(BrushShape::new(0).size, 1);

        let far = BrushShape::new(3).footprint(c(i32::MAX, i32::MIN));
        assert_eq!(far[0], c(i32::MAX - 1, i32::MIN));
        assert_eq!(far[8], c(i32::MAX, i32::MIN + 1));
    }

    #[test]
    fn test_stroke_fills_square_consistently() {
        let mut engine = engine(5);
        let summary = engine
            .apply_stroke(BrushMode::Paint, BrushShape::new(3).footprint(c(0, 0)))
            .unwrap();
        assert_eq!(summary, StrokeSummary { placed: 9, removed: 0, skipped: 0 });
        assert_eq!(engine.category_at(c(0, 0)), Some(TileCategory::AllSides));
        assert_eq!(engine.category_at(c(-1, -1)), Some(TileCategory::TwoAdjacentSides));
        assert_eq!(engine.category_at(c(0, 1)), Some(TileCategory::ThreeSides));
        assert!(inconsistent_cells(engine.grid(), engine.rules()).is_empty());
    }

    #[test]
    fn test_stroke_counts_skips() {
        let mut engine = engine(2);
        engine.place(c(0, 0)).unwrap();
        let summary = engine
            .apply_stroke(BrushMode::Paint, [c(0, 0), c(1, 0), c(2, 0)])
            .unwrap();
        assert_eq!(summary, StrokeSummary { placed: 1, removed: 0, skipped: 2 });

        let summary = engine
            .apply_stroke(BrushMode::Erase, [c(1, 0), c(1, 0)])
            .unwrap();
        assert_eq!(summary, StrokeSummary { placed: 0, removed: 1, skipped: 1 });
        assert_eq!(summary.changed(), 1);
    }

    #[test]
    fn test_stroke_on_merged_level_is_skipped() {
        let mut engine = engine(4);
        engine.place(c(0, 0)).unwrap();
        engine.grid_mut().mark_fill(c(0, 0)).unwrap();
        engine.take_events();

        let summary = engine
            .apply_stroke(BrushMode::Paint, [c(1, 1), c(2, 2)])
            .unwrap();
        assert_eq!(summary.skipped, 2);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_drag_gesture() {
        let mut engine = engine(5);
        let mut stroke = Stroke::begin(false, BrushShape::default());
        assert_eq!(stroke.mode(), BrushMode::Paint);
        for x in 0..3 {
            stroke.drag_to(&mut engine, c(x, 0)).unwrap();
            // Hovering the same cell again does nothing
            stroke.drag_to(&mut engine, c(x, 0)).unwrap();
        }
        assert_eq!(stroke.finish().placed, 3);
        assert_eq!(engine.category_at(c(1, 0)), Some(TileCategory::TwoOppositeSides));

        let mut erase = Stroke::begin(true, BrushShape::default());
        erase.drag_to(&mut engine, c(1, 0)).unwrap();
        assert_eq!(erase.finish().removed, 1);
        assert_eq!(engine.category_at(c(0, 0)), Some(TileCategory::NoSides));
        assert!(inconsistent_cells(engine.grid(), engine.rules()).is_empty());
    }
}
