//! Connector bitmask rules for tilebrush
//!
//! This crate decides which tile category and rotation fits a grid cell,
//! given which of its four cardinal neighbors are solid.
//!
//! # Features
//! - Built-in pattern table for the six connector categories
//! - Adjacency encoding with the level boundary treated as solid
//! - First-match resolution over all rotations, with table validation
//! - TOML/JSON brush configuration
//!
//! # Example
//!
//! ```rust
//! use tilebrush_autotile::{encode, RuleTable};
//! use tilebrush_core::{Grid, HalfExtent, TileCategory};
//!
//! let grid = Grid::new(HalfExtent::new(1, 1)).unwrap();
//! let code = encode(&grid, (0, 0).into());
//! let fit = RuleTable::standard().resolve(code).unwrap();
//! assert_eq!(fit.category, TileCategory::AllSides);
//! assert_eq!(fit.rotation, 0);
//! ```

pub mod adjacency;
pub mod config;
pub mod pattern;
pub mod resolve;

// Re-export main types at crate root
pub use adjacency::{describe, encode, encode_with, occupancy_codes, solid_directions};
pub use config::{BrushConfig, ConfigError, VariantCatalog};
pub use pattern::{pattern, rotate_pattern, rotated_patterns, TilePattern};
pub use resolve::{resolve, Resolution, RuleTable, RuleTableError};

// Re-export tilebrush_core
pub use tilebrush_core;
