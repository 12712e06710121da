// ABOUTME: Recipe data models: raw catalog definitions and validated, canonicalized recipes
// ABOUTME: Recipes are built once from static data and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::category::IngredientCategory;
use super::diet::DietTag;
use crate::errors::CatalogError;
use crate::normalize::{CanonicalName, SynonymTable};

/// Recipe exactly as written in a catalog file
///
/// Ingredient names are free text here; [`Recipe::from_definition`] turns them
/// into canonical names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    /// Display title, unique within a catalog
    pub title: String,
    /// Free-form cuisine tag ("Indian", "Italian", ...)
    pub cuisine: String,
    /// Required ingredients per category, in display order
    #[serde(default)]
    pub ingredients: BTreeMap<IngredientCategory, Vec<String>>,
    /// Preparation time in minutes
    pub time_minutes: u32,
    /// Compatible diets
    pub diet: BTreeSet<DietTag>,
    /// Preparation steps, in order
    pub steps: Vec<String>,
}

/// Validated catalog recipe with canonical ingredient names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    title: String,
    cuisine: String,
    ingredients: BTreeMap<IngredientCategory, Vec<CanonicalName>>,
    time_minutes: u32,
    diet: BTreeSet<DietTag>,
    steps: Vec<String>,
}

impl Recipe {
    /// Validate a definition and canonicalize its ingredient names
    ///
    /// Ingredient lists keep their order and any duplicates; coverage is
    /// computed over the list, not the set.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the title or any ingredient name is blank,
    /// the time is zero, or the diet set or step list is empty.
    pub fn from_definition(
        index: usize,
        definition: RecipeDefinition,
        synonyms: &SynonymTable,
    ) -> Result<Self, CatalogError> {
        let title = definition.title.trim().to_owned();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle { index });
        }
        if definition.time_minutes == 0 {
            return Err(CatalogError::invalid_time(title));
        }
        if definition.diet.is_empty() {
            return Err(CatalogError::missing_diet(title));
        }
        if definition.steps.is_empty() {
            return Err(CatalogError::missing_steps(title));
        }

        let mut ingredients = BTreeMap::new();
        for (category, names) in &definition.ingredients {
            if names.is_empty() {
                continue;
            }
            let canonical = synonyms.normalize_all(names.iter().map(String::as_str));
            if canonical.iter().any(|name| name.as_str().is_empty()) {
                return Err(CatalogError::BlankIngredient {
                    title,
                    category: category.as_str().to_owned(),
                });
            }
            ingredients.insert(*category, canonical);
        }

        Ok(Self {
            title,
            cuisine: definition.cuisine.trim().to_owned(),
            ingredients,
            time_minutes: definition.time_minutes,
            diet: definition.diet,
            steps: definition.steps,
        })
    }

    /// Display title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cuisine tag
    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Required ingredients in one category (empty if the recipe doesn't use it)
    #[must_use]
    pub fn ingredients(&self, category: IngredientCategory) -> &[CanonicalName] {
        self.ingredients
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every required ingredient, deduplicated across categories
    #[must_use]
    pub fn all_ingredients(&self) -> BTreeSet<&CanonicalName> {
        self.ingredients.values().flatten().collect()
    }

    /// Preparation time in minutes
    #[must_use]
    pub const fn time_minutes(&self) -> u32 {
        self.time_minutes
    }

    /// Compatible diets
    #[must_use]
    pub const fn diet(&self) -> &BTreeSet<DietTag> {
        &self.diet
    }

    /// Preparation steps in display order
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}
