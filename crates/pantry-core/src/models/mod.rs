// ABOUTME: Domain models for recipes, pantries, diets, categories and request preferences
// ABOUTME: Re-exports every model type from its domain-specific submodule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient categories
pub mod category;
/// Diet tags and requirements
pub mod diet;
/// Raw and normalized pantries
pub mod pantry;
/// Per-request preferences
pub mod preferences;
/// Catalog recipe definitions and validated recipes
pub mod recipe;

pub use category::{IngredientCategory, UnknownCategory};
pub use diet::{DietPreference, DietTag, UnknownDiet};
pub use pantry::{Pantry, PantrySelection};
pub use preferences::PreferenceContext;
pub use recipe::{Recipe, RecipeDefinition};
