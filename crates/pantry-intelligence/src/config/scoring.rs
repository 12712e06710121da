// ABOUTME: Scoring configuration: category weights, cuisine/diet/time adjustments, ranking limits
// ABOUTME: Defaults come from pantry-core constants so tuning never touches scoring logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Scoring Configuration
//!
//! Weights for per-category ingredient coverage, the flat adjustments applied
//! for cuisine, diet and time, and the ranking cutoff policy.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use pantry_core::constants::{ranking, scoring};
use pantry_core::models::IngredientCategory;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Weight of each category's coverage in the final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    /// Vegetables and herbs
    pub veggies: f64,
    /// Proteins
    pub proteins: f64,
    /// Spices and masalas
    pub spices: f64,
    /// Sauces and condiments
    pub condiments: f64,
    /// Carbohydrates
    pub carbs: f64,
    /// Everything else
    pub others: f64,
}

impl CategoryWeights {
    /// Weight for one category
    #[must_use]
    pub const fn weight(&self, category: IngredientCategory) -> f64 {
        match category {
            IngredientCategory::Veggies => self.veggies,
            IngredientCategory::Proteins => self.proteins,
            IngredientCategory::Spices => self.spices,
            IngredientCategory::Condiments => self.condiments,
            IngredientCategory::Carbs => self.carbs,
            IngredientCategory::Others => self.others,
        }
    }

    /// Sum of all six weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        IngredientCategory::ALL
            .iter()
            .map(|category| self.weight(*category))
            .sum()
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            veggies: scoring::VEGGIES_WEIGHT,
            proteins: scoring::PROTEINS_WEIGHT,
            spices: scoring::SPICES_WEIGHT,
            condiments: scoring::CONDIMENTS_WEIGHT,
            carbs: scoring::CARBS_WEIGHT,
            others: scoring::OTHERS_WEIGHT,
        }
    }
}

/// Flat score adjustments applied after the weighted coverage sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAdjustments {
    /// Added when the recipe cuisine is in the preferred set
    pub cuisine_bonus: f64,
    /// Subtracted when the recipe lacks the required diet tag
    pub diet_penalty: f64,
    /// Added when the recipe fits in the time budget
    pub time_bonus: f64,
    /// Subtracted when the recipe exceeds the time budget
    pub time_penalty: f64,
}

impl Default for ScoreAdjustments {
    fn default() -> Self {
        Self {
            cuisine_bonus: scoring::CUISINE_BONUS,
            diet_penalty: scoring::DIET_PENALTY,
            time_bonus: scoring::TIME_BONUS,
            time_penalty: scoring::TIME_PENALTY,
        }
    }
}

/// Which prefix of the sorted catalog is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Top K among recipes scoring strictly above zero
    #[default]
    PositiveOnly,
    /// Top K regardless of score
    AlwaysTopK,
}

impl Display for RankingPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::PositiveOnly => f.write_str("positive_only"),
            Self::AlwaysTopK => f.write_str("always_top_k"),
        }
    }
}

impl FromStr for RankingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive_only" | "positive" => Ok(Self::PositiveOnly),
            "always_top_k" | "top_k" | "always" => Ok(Self::AlwaysTopK),
            other => Err(ConfigError::Parse(format!("Unknown ranking policy: {other}"))),
        }
    }
}

/// Ranking limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum number of suggestions returned
    pub top_k: usize,
    /// Cutoff policy
    pub policy: RankingPolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: ranking::DEFAULT_TOP_K,
            policy: RankingPolicy::PositiveOnly,
        }
    }
}
