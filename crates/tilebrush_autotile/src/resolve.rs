//! Rule resolver: adjacency code to category and rotation

use thiserror::Error;
use tilebrush_core::TileCategory;

use crate::adjacency::{describe, occupancy_codes};
use crate::pattern::{pattern, rotated_patterns, TilePattern};

/// A category and orientation that fits an adjacency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub category: TileCategory,
    pub rotation: u8,
}

/// Defects found by [`RuleTable::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("no rule matches adjacency code {code:#010b}")]
    Unmatched { code: u8 },
    #[error(
        "adjacency code {code:#010b} matches both {first:?} and {second:?}"
    )]
    Overlap {
        code: u8,
        first: Resolution,
        second: Resolution,
    },
    #[error("{0} cannot take part in rule matching")]
    UnruledCategory(TileCategory),
}

/// Ordered list of category patterns searched by the resolver.
///
/// Order is only a tie-break; a valid table never has two orientations
/// sharing a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<(TileCategory, TilePattern)>,
}

impl RuleTable {
    /// The built-in table covering all 16 occupancy codes
    pub fn standard() -> Self {
        let rules = TileCategory::RULED
            .into_iter()
            .filter_map(|category| pattern(category).map(|p| (category, p)))
            .collect();
        Self { rules }
    }

    /// Build a table from explicit rules, tried in the given order
    pub fn from_rules(rules: Vec<(TileCategory, TilePattern)>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[(TileCategory, TilePattern)] {
        &self.rules
    }

    /// Find the first category/rotation whose rotated pattern equals `code`
    pub fn resolve(&self, code: u8) -> Option<Resolution> {
        for &(category, pattern) in &self.rules {
            if category.is_fill() {
                continue;
            }
            for rotation in 0..pattern.rotations {
                if pattern.rotated(rotation) == code {
                    return Some(Resolution { category, rotation });
                }
            }
        }
        None
    }

    /// Check that every occupancy code resolves and that none is ambiguous
    pub fn validate(&self) -> Result<(), RuleTableError> {
        if let Some(&(category, _)) = self.rules.iter().find(|(c, _)| c.is_fill()) {
            return Err(RuleTableError::UnruledCategory(category));
        }

        for code in occupancy_codes() {
            let mut matches = self.rules.iter().flat_map(|&(category, pattern)| {
                (0..pattern.rotations)
                    .filter(move |&rotation| pattern.rotated(rotation) == code)
                    .map(move |rotation| Resolution { category, rotation })
            });

            let Some(first) = matches.next() else {
                return Err(RuleTableError::Unmatched { code });
            };
            if let Some(second) = matches.next() {
                return Err(RuleTableError::Overlap {
                    code,
                    first,
                    second,
                });
            }
            log::trace!(
                "rule table: {} -> {} r{}",
                describe(code),
                first.category,
                first.rotation
            );
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolve `code` against the built-in table
pub fn resolve(code: u8) -> Option<Resolution> {
    rotated_patterns()
        .find(|&(_, _, mask)| mask == code)
        .map(|(category, rotation, _)| Resolution { category, rotation })
}
