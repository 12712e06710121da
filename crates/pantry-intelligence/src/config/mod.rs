// ABOUTME: Scoring configuration container with environment overrides and validation
// ABOUTME: Provides a process-wide validated ScoringConfig loaded once on first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration Module
//!
//! All tunables of the recipe scorer live here. Defaults come from
//! `pantry_core::constants`; any of them can be overridden with a
//! `PANTRY_SCORING_*` / `PANTRY_RANKING_*` environment variable. The merged
//! configuration is validated before use.

pub mod error;
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{CategoryWeights, RankingConfig, RankingPolicy, ScoreAdjustments};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use pantry_core::constants::scoring::WEIGHT_SUM_TOLERANCE;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Complete scoring and ranking configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Per-category coverage weights
    pub weights: CategoryWeights,
    /// Cuisine, diet and time adjustments
    pub adjustments: ScoreAdjustments,
    /// Result truncation and cutoff
    pub ranking: RankingConfig,
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a weight or adjustment is negative or non-finite,
    /// when the weights do not sum to 1.0, when the diet penalty is too small to
    /// push an incompatible recipe below every compatible one, or when `top_k`
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.weights.veggies,
            self.weights.proteins,
            self.weights.spices,
            self.weights.condiments,
            self.weights.carbs,
            self.weights.others,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Category weights must be finite and non-negative",
            ));
        }
        if (self.weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Category weights must sum to 1.0",
            ));
        }

        let adj = &self.adjustments;
        let adjustments = [
            adj.cuisine_bonus,
            adj.diet_penalty,
            adj.time_bonus,
            adj.time_penalty,
        ];
        if adjustments.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Score adjustments must be finite and non-negative",
            ));
        }

        // Best incompatible score: full coverage + both bonuses - penalty.
        // Worst compatible score: zero coverage - time penalty.
        let best_positive = self.weights.sum() + adj.cuisine_bonus + adj.time_bonus;
        if adj.diet_penalty <= best_positive + adj.time_penalty {
            return Err(ConfigError::InvalidRange(
                "diet_penalty must exceed full coverage plus cuisine/time bonuses and time penalty",
            ));
        }

        if self.ranking.top_k == 0 {
            return Err(ConfigError::ValueOutOfRange("top_k must be at least 1"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Category weights
        Self::apply_env_var("PANTRY_SCORING_WEIGHT_VEGGIES", &mut self.weights.veggies)?;
        Self::apply_env_var("PANTRY_SCORING_WEIGHT_PROTEINS", &mut self.weights.proteins)?;
        Self::apply_env_var("PANTRY_SCORING_WEIGHT_SPICES", &mut self.weights.spices)?;
        Self::apply_env_var(
            "PANTRY_SCORING_WEIGHT_CONDIMENTS",
            &mut self.weights.condiments,
        )?;
        Self::apply_env_var("PANTRY_SCORING_WEIGHT_CARBS", &mut self.weights.carbs)?;
        Self::apply_env_var("PANTRY_SCORING_WEIGHT_OTHERS", &mut self.weights.others)?;

        // Adjustments
        Self::apply_env_var(
            "PANTRY_SCORING_CUISINE_BONUS",
            &mut self.adjustments.cuisine_bonus,
        )?;
        Self::apply_env_var(
            "PANTRY_SCORING_DIET_PENALTY",
            &mut self.adjustments.diet_penalty,
        )?;
        Self::apply_env_var("PANTRY_SCORING_TIME_BONUS", &mut self.adjustments.time_bonus)?;
        Self::apply_env_var(
            "PANTRY_SCORING_TIME_PENALTY",
            &mut self.adjustments.time_penalty,
        )?;

        // Ranking
        Self::apply_env_var("PANTRY_RANKING_TOP_K", &mut self.ranking.top_k)?;
        if let Ok(val) = env::var("PANTRY_RANKING_POLICY") {
            self.ranking.policy = val.parse()?;
        }

        Ok(self)
    }
}
