// ABOUTME: Missing-ingredient reporting for a recipe against a pantry
// ABOUTME: Informational only; the result never feeds back into scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::models::{Pantry, Recipe};
use pantry_core::CanonicalName;

/// Ingredients the recipe needs that the pantry lacks, sorted lexicographically
///
/// Both sides are flattened across categories first, so an ingredient held
/// under a different category than the recipe lists it still counts as held.
#[must_use]
pub fn missing_ingredients(recipe: &Recipe, pantry: &Pantry) -> Vec<CanonicalName> {
    let have = pantry.all_ingredients();
    recipe
        .all_ingredients()
        .into_iter()
        .filter(|name| !have.contains(name))
        .cloned()
        .collect()
}
