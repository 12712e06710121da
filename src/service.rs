// ABOUTME: End-to-end suggestion service combining catalog, normalization, scoring and ranking
// ABOUTME: Entry point used by the CLI; one call is one synchronous pass over the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use pantry_core::models::{IngredientCategory, Pantry, PantrySelection, PreferenceContext};
use pantry_core::CanonicalName;
use pantry_intelligence::{rank_recipes, RecipeScorer, ScoringConfig, Suggestion};
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::AppResult;

/// Recipe suggestion service over a read-only catalog
///
/// Holds no per-request state; `suggest_recipes` may be called any number of
/// times, from any thread, with identical inputs giving identical output.
#[derive(Debug, Clone)]
pub struct PantryChef {
    catalog: Catalog,
    scorer: RecipeScorer,
}

impl PantryChef {
    /// Create a service with the global scoring configuration
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            scorer: RecipeScorer::new(),
        }
    }

    /// Create a service with an explicit scoring configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(catalog: Catalog, config: ScoringConfig) -> AppResult<Self> {
        Ok(Self {
            catalog,
            scorer: RecipeScorer::with_config(config)?,
        })
    }

    /// Catalog being ranked
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scorer in use
    #[must_use]
    pub const fn scorer(&self) -> &RecipeScorer {
        &self.scorer
    }

    /// Canonicalize an ingredient label the same way the scorer does
    #[must_use]
    pub fn normalize(&self, text: &str) -> CanonicalName {
        self.catalog.synonyms().normalize(text)
    }

    /// Rank the catalog for a raw pantry selection
    ///
    /// The selection is normalized here, once, with the catalog's synonym
    /// table. An empty result means no recipe passed the cutoff.
    #[must_use]
    pub fn suggest_recipes(
        &self,
        selection: &PantrySelection,
        prefs: &PreferenceContext,
    ) -> Vec<Suggestion<'_>> {
        let pantry = Pantry::from_selection(selection, self.catalog.synonyms());
        debug!(
            pantry_size = pantry.len(),
            cuisines = ?prefs.cuisines,
            diet = %prefs.diet,
            time_limit = prefs.time_limit_minutes,
            "Suggesting recipes"
        );
        rank_recipes(&self.scorer, self.catalog.recipes(), &pantry, prefs)
    }

    /// Selectable ingredients per category
    #[must_use]
    pub fn ingredient_checklist(&self) -> BTreeMap<IngredientCategory, BTreeSet<CanonicalName>> {
        self.catalog.ingredient_checklist()
    }
}
