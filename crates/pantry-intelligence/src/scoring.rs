// ABOUTME: Recipe scoring: per-category ingredient coverage and the weighted match score
// ABOUTME: Applies cuisine bonus, diet penalty and time fit on top of weighted coverage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Scoring
//!
//! A recipe's score is the weighted sum of its six per-category coverage ratios
//! plus flat adjustments:
//!
//! ```text
//! score = Σ weight[c] · coverage(have[c], needed[c])
//!       + cuisine_bonus   if the cuisine is preferred
//!       - diet_penalty    if a required diet tag is missing
//!       + time_bonus      if time <= limit
//!       - time_penalty    otherwise
//! ```
//!
//! Scoring is pure: no state is kept between calls.

use std::collections::HashSet;

use pantry_core::models::{IngredientCategory, Pantry, PreferenceContext, Recipe};
use pantry_core::CanonicalName;
use serde::Serialize;

use crate::config::{ConfigError, ScoringConfig};

/// Fraction of `needed` that appears in `have`, in `[0, 1]`
///
/// An empty `needed` list scores 0.0: a category the recipe doesn't use grants
/// nothing. Duplicates in `needed` count once per occurrence.
#[must_use]
pub fn coverage(have: &HashSet<CanonicalName>, needed: &[CanonicalName]) -> f64 {
    if needed.is_empty() {
        return 0.0;
    }
    let matched = needed.iter().filter(|name| have.contains(*name)).count();
    matched as f64 / needed.len() as f64
}

/// Components of a recipe score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Coverage ratio per category, in [`IngredientCategory::ALL`] order
    pub coverage: [f64; 6],
    /// Weighted sum of the coverage ratios
    pub weighted_coverage: f64,
    /// Cuisine bonus applied (0.0 when not preferred)
    pub cuisine_bonus: f64,
    /// Diet penalty applied (0.0 when compatible)
    pub diet_penalty: f64,
    /// Time bonus (positive) or penalty (negative)
    pub time_adjustment: f64,
}

impl ScoreBreakdown {
    /// Final scalar score
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weighted_coverage + self.cuisine_bonus - self.diet_penalty + self.time_adjustment
    }

    /// Coverage ratio for a single category
    #[must_use]
    pub const fn coverage_for(&self, category: IngredientCategory) -> f64 {
        self.coverage[category.index()]
    }
}

/// Scores recipes against a normalized pantry
#[derive(Debug, Clone)]
pub struct RecipeScorer {
    config: ScoringConfig,
}

impl Default for RecipeScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeScorer {
    /// Create a scorer with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::global().clone(),
        }
    }

    /// Create a scorer with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`ScoringConfig::validate`]
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one recipe
    #[must_use]
    pub fn score(&self, recipe: &Recipe, pantry: &Pantry, prefs: &PreferenceContext) -> f64 {
        self.breakdown(recipe, pantry, prefs).total()
    }

    /// Score one recipe, keeping every component
    #[must_use]
    pub fn breakdown(
        &self,
        recipe: &Recipe,
        pantry: &Pantry,
        prefs: &PreferenceContext,
    ) -> ScoreBreakdown {
        let adj = &self.config.adjustments;

        let mut ratios = [0.0; 6];
        let mut weighted_coverage = 0.0;
        for category in IngredientCategory::ALL {
            let ratio = coverage(pantry.in_category(category), recipe.ingredients(category));
            ratios[category.index()] = ratio;
            weighted_coverage += self.config.weights.weight(category) * ratio;
        }

        let cuisine_bonus = if prefs.prefers_cuisine(recipe.cuisine()) {
            adj.cuisine_bonus
        } else {
            0.0
        };

        let diet_penalty = if prefs.diet.is_satisfied_by(recipe.diet()) {
            0.0
        } else {
            adj.diet_penalty
        };

        let time_adjustment = if prefs.fits_time(recipe.time_minutes()) {
            adj.time_bonus
        } else {
            -adj.time_penalty
        };

        ScoreBreakdown {
            coverage: ratios,
            weighted_coverage,
            cuisine_bonus,
            diet_penalty,
            time_adjustment,
        }
    }
}
