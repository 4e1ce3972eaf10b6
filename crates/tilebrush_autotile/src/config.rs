//! Brush configuration
//!
//! Level bounds, default-model bias and the per-category variant counts
//! reported by the asset loader. Loadable from TOML or JSON.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tilebrush_core::{HalfExtent, TileCategory};

/// Error type for configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration consumed by the placement engine at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Level half-size; the outer ring is bedrock
    pub half_extent: HalfExtent,
    /// How likely (0-1) a new tile shows its category's default model
    pub default_variant_chance: f32,
    /// Re-roll the visual variant when a neighbor refresh keeps the same
    /// category and rotation. When off, unchanged cells are left alone.
    pub reroll_on_refresh: bool,
    pub variants: VariantCatalog,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            half_extent: HalfExtent::default(),
            default_variant_chance: 0.5,
            reroll_on_refresh: true,
            variants: VariantCatalog::default(),
        }
    }
}

impl BrushConfig {
    pub fn new(half_extent: HalfExtent) -> Self {
        Self {
            half_extent,
            ..Self::default()
        }
    }

    pub fn with_variants(mut self, variants: VariantCatalog) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_default_variant_chance(mut self, chance: f32) -> Self {
        self.default_variant_chance = chance;
        self
    }

    pub fn with_reroll_on_refresh(mut self, reroll: bool) -> Self {
        self.reroll_on_refresh = reroll;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.half_extent.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "half_extent axes must lie in 1..={}, got {}",
                HalfExtent::MAX_AXIS,
                self.half_extent
            )));
        }
        if !(0.0..=1.0).contains(&self.default_variant_chance) {
            return Err(ConfigError::Invalid(format!(
                "default_variant_chance must lie in [0, 1], got {}",
                self.default_variant_chance
            )));
        }
        Ok(())
    }
}

fn one() -> usize {
    1
}

/// Number of interchangeable visual variants loaded for each category.
///
/// Index 0 of every list is the default model. A count of 0 means the asset
/// loader found nothing for that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantCatalog {
    #[serde(default = "one")]
    pub all_sides: usize,
    #[serde(default = "one")]
    pub three_sides: usize,
    #[serde(default = "one")]
    pub two_adjacent_sides: usize,
    #[serde(default = "one")]
    pub two_opposite_sides: usize,
    #[serde(default = "one")]
    pub one_side: usize,
    #[serde(default = "one")]
    pub no_sides: usize,
}

impl Default for VariantCatalog {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl VariantCatalog {
    /// Same count for every category
    pub fn uniform(count: usize) -> Self {
        Self {
            all_sides: count,
            three_sides: count,
            two_adjacent_sides: count,
            two_opposite_sides: count,
            one_side: count,
            no_sides: count,
        }
    }

    /// Variant count for `category`. `Fill` tiles carry no variants.
    pub fn count(&self, category: TileCategory) -> usize {
        match category {
            TileCategory::AllSides => self.all_sides,
            TileCategory::ThreeSides => self.three_sides,
            TileCategory::TwoAdjacentSides => self.two_adjacent_sides,
            TileCategory::TwoOppositeSides => self.two_opposite_sides,
            TileCategory::OneSide => self.one_side,
            TileCategory::NoSides => self.no_sides,
            TileCategory::Fill => 0,
        }
    }

    /// Set the count for `category`; ignored for `Fill`
    pub fn set(&mut self, category: TileCategory, count: usize) {
        let slot = match category {
            TileCategory::AllSides => &mut self.all_sides,
            TileCategory::ThreeSides => &mut self.three_sides,
            TileCategory::TwoAdjacentSides => &mut self.two_adjacent_sides,
            TileCategory::TwoOppositeSides => &mut self.two_opposite_sides,
            TileCategory::OneSide => &mut self.one_side,
            TileCategory::NoSides => &mut self.no_sides,
            TileCategory::Fill => return,
        };
        *slot = count;
    }

    pub fn with(mut self, category: TileCategory, count: usize) -> Self {
        self.set(category, count);
        self
    }
}
