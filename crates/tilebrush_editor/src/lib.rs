//! tilebrush_editor - Placement engine for connector-aware tile brushes
//!
//! The engine owns the level grid. Painting a cell resolves its category and
//! rotation from its four cardinal neighbors, then rebuilds those neighbors so
//! their connectors follow. Erasing does the same in reverse.
//!
//! - One-hop neighbor refresh after every place/delete
//! - Random visual variants with an injectable random source
//! - Decorations released only on explicit delete or clear
//! - Paint/erase strokes with square brush footprints
//!
//! # Usage
//!
//! ```
//! use tilebrush_editor::{BrushConfig, BrushOutcome, PlacementEngine, TileCategory};
//! use tilebrush_editor::tilebrush_core::{Coordinate, HalfExtent};
//!
//! let config = BrushConfig::new(HalfExtent::new(8, 8));
//! let mut engine = PlacementEngine::with_seed(config, 42).unwrap();
//!
//! engine.place(Coordinate::new(0, 0)).unwrap();
//! let outcome = engine.place(Coordinate::new(1, 0)).unwrap();
//! assert!(matches!(outcome, BrushOutcome::Placed(_)));
//! assert_eq!(engine.category_at(Coordinate::new(0, 0)), Some(TileCategory::OneSide));
//! ```

pub mod brush;
pub mod engine;
pub mod error;
pub mod events;
pub mod testing;
pub mod variant;

pub use brush::{BrushMode, BrushShape, Stroke, StrokeSummary};
pub use engine::{BrushOutcome, PlacementEngine, SkipReason};
pub use error::EditError;
pub use events::{EventSink, NullSink, TileEvent};
pub use variant::{pick_variant, RandomSource, DEFAULT_VARIANT};

pub use tilebrush_autotile::{BrushConfig, ConfigError, RuleTable, VariantCatalog};
pub use tilebrush_core::{PlacedTile, TileCategory};

// Re-export the lower layers
pub use tilebrush_autotile;
pub use tilebrush_core;
