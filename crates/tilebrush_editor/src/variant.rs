//! Visual variant selection
//!
//! Every category ships a list of interchangeable models, index 0 being the
//! default. New tiles show the default model with probability
//! `default_chance`; otherwise one of the alternates is picked uniformly.

use rand::Rng;
use tilebrush_core::TileCategory;

/// Variant used when nothing better is available
pub const DEFAULT_VARIANT: usize = 0;

/// Source of the random draws used for variant selection.
///
/// Implemented for every `rand::Rng`; tests inject a scripted source.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f32;
    /// Uniform index in `low..high`, with `low < high`
    fn index(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn index(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

/// Pick the variant a newly assigned `category` tile shows.
///
/// `count` is the number of loaded variants. A count of 0 is reported and
/// falls back to [`DEFAULT_VARIANT`] so placement is never blocked.
pub fn pick_variant<R: RandomSource + ?Sized>(
    category: TileCategory,
    count: usize,
    default_chance: f32,
    rng: &mut R,
) -> usize {
    if count == 0 {
        log::warn!("no visual variants loaded for {category}; using the default model");
        return DEFAULT_VARIANT;
    }
    // Fully connected tiles always use the default model
    if count == 1 || category == TileCategory::AllSides {
        return DEFAULT_VARIANT;
    }

    if rng.unit() > default_chance {
        rng.index(1, count)
    } else {
        DEFAULT_VARIANT
    }
}
