// ABOUTME: Per-request preference context: preferred cuisines, diet requirement, time budget
// ABOUTME: Ephemeral value built by the caller for each suggestion request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::diet::DietPreference;
use crate::constants::preferences::DEFAULT_TIME_LIMIT_MINUTES;

/// Preferences that shape scoring for a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceContext {
    /// Preferred cuisines; empty means no cuisine filter
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
    /// Diet requirement
    #[serde(default)]
    pub diet: DietPreference,
    /// Maximum acceptable preparation time in minutes
    pub time_limit_minutes: u32,
}

impl Default for PreferenceContext {
    fn default() -> Self {
        Self {
            cuisines: BTreeSet::new(),
            diet: DietPreference::NoPreference,
            time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
        }
    }
}

impl PreferenceContext {
    /// Add a preferred cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.insert(cuisine.into());
        self
    }

    /// Set the diet requirement
    #[must_use]
    pub const fn with_diet(mut self, diet: DietPreference) -> Self {
        self.diet = diet;
        self
    }

    /// Set the time budget
    #[must_use]
    pub const fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit_minutes = minutes;
        self
    }

    /// Whether a recipe cuisine earns the preference bonus
    ///
    /// Comparison ignores ASCII case; an empty preference set never matches.
    #[must_use]
    pub fn prefers_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines
            .iter()
            .any(|preferred| preferred.trim().eq_ignore_ascii_case(cuisine))
    }

    /// Whether a recipe fits within the time budget
    #[must_use]
    pub const fn fits_time(&self, time_minutes: u32) -> bool {
        time_minutes <= self.time_limit_minutes
    }
}
