// ABOUTME: Catalog ranking: scores every recipe, stable-sorts by score, applies the cutoff policy
// ABOUTME: Produces suggestions with score, breakdown and missing-ingredient hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Ranking
//!
//! One request is one linear pass over the catalog. Recipes are sorted by
//! score, descending, with a stable sort so ties keep catalog order and the
//! output is identical for identical inputs.

use pantry_core::constants::ranking::POSITIVE_SCORE_CUTOFF;
use pantry_core::models::{Pantry, PreferenceContext, Recipe};
use pantry_core::CanonicalName;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RankingPolicy;
use crate::missing::missing_ingredients;
use crate::scoring::{RecipeScorer, ScoreBreakdown};

/// A ranked recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion<'a> {
    /// The catalog recipe
    pub recipe: &'a Recipe,
    /// Final score
    pub score: f64,
    /// How the score was assembled
    pub breakdown: ScoreBreakdown,
    /// Required ingredients the pantry lacks, sorted
    pub missing: Vec<CanonicalName>,
}

/// Rank `recipes` against a pantry and return the configured prefix
///
/// Under [`RankingPolicy::PositiveOnly`] an empty result means "no matches";
/// under [`RankingPolicy::AlwaysTopK`] the result is only empty for an empty
/// catalog.
#[must_use]
pub fn rank_recipes<'a>(
    scorer: &RecipeScorer,
    recipes: &'a [Recipe],
    pantry: &Pantry,
    prefs: &PreferenceContext,
) -> Vec<Suggestion<'a>> {
    let ranking = &scorer.config().ranking;

    let mut scored: Vec<(&'a Recipe, ScoreBreakdown, f64)> = recipes
        .iter()
        .map(|recipe| {
            let breakdown = scorer.breakdown(recipe, pantry, prefs);
            let score = breakdown.total();
            debug!(
                recipe = recipe.title(),
                score,
                coverage = breakdown.weighted_coverage,
                "Scored recipe"
            );
            (recipe, breakdown, score)
        })
        .collect();

    // `sort_by` is stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.2.total_cmp(&a.2));

    let suggestions: Vec<Suggestion<'a>> = scored
        .into_iter()
        .filter(|(_, _, score)| match ranking.policy {
            RankingPolicy::PositiveOnly => *score > POSITIVE_SCORE_CUTOFF,
            RankingPolicy::AlwaysTopK => true,
        })
        .take(ranking.top_k)
        .map(|(recipe, breakdown, score)| Suggestion {
            recipe,
            score,
            breakdown,
            missing: missing_ingredients(recipe, pantry),
        })
        .collect();

    info!(
        catalog_size = recipes.len(),
        pantry_size = pantry.len(),
        policy = %ranking.policy,
        returned = suggestions.len(),
        "Ranked recipes"
    );

    suggestions
}
