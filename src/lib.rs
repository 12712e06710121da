// ABOUTME: Main library entry point for the Pantry Chef recipe recommender
// ABOUTME: Loads the recipe catalog and ranks it against a user's pantry and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Suggests recipes from a small static catalog based on the ingredients a
//! user has, their diet, preferred cuisines and time budget.
//!
//! ## Architecture
//!
//! - **`pantry-core`**: domain models and ingredient normalization
//! - **`pantry-intelligence`**: coverage scoring and ranking
//! - **catalog**: loads and validates the recipe data asset
//! - **service**: `PantryChef::suggest_recipes`, the end-to-end entry point,
//!   and `PantryChef::normalize`, which canonicalizes with the loaded catalog's
//!   synonym table exactly as the scorer does
//! - **video**: video search link for a recipe
//! - **logging**: `tracing-subscriber` setup for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::catalog::Catalog;
//! use pantry_chef::errors::AppResult;
//! use pantry_chef::models::{IngredientCategory, PantrySelection, PreferenceContext};
//! use pantry_chef::service::PantryChef;
//!
//! fn main() -> AppResult<()> {
//!     let chef = PantryChef::new(Catalog::builtin()?);
//!     let pantry = PantrySelection::new()
//!         .with(IngredientCategory::Veggies, ["onion", "tomato"])
//!         .with(IngredientCategory::Proteins, ["egg"]);
//!
//!     for suggestion in chef.suggest_recipes(&pantry, &PreferenceContext::default()) {
//!         println!("{} ({:.2})", suggestion.recipe.title(), suggestion.score);
//!     }
//!     Ok(())
//! }
//! ```

/// Recipe catalog loading and validation
pub mod catalog;

/// Application error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// End-to-end suggestion service
pub mod service;

/// Video search links
pub mod video;

pub use pantry_core::models;
pub use pantry_core::{CanonicalName, SynonymTable};
pub use pantry_intelligence::{RankingPolicy, ScoringConfig, Suggestion};
