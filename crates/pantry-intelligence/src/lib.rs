// ABOUTME: Recipe scoring algorithms, coverage metrics, and ranking engine
// ABOUTME: Pure computation over pantry-core types with a validated scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Intelligence
//!
//! Scores catalog recipes against a normalized pantry and ranks them.
//!
//! - **config**: weights, adjustments and ranking policy, with env overrides
//! - **scoring**: coverage ratio and the weighted recipe score
//! - **missing**: missing-ingredient hints
//! - **ranking**: stable ranking and cutoff

/// Scoring configuration
pub mod config;
/// Missing-ingredient reporting
pub mod missing;
/// Catalog ranking
pub mod ranking;
/// Coverage and recipe scoring
pub mod scoring;

pub use config::{ConfigError, RankingPolicy, ScoringConfig};
pub use missing::missing_ingredients;
pub use ranking::{rank_recipes, Suggestion};
pub use scoring::{coverage, RecipeScorer, ScoreBreakdown};
