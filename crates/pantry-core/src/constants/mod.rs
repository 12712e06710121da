// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring weights, ranking limits, synonyms, and service identifiers for Pantry Chef
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Anything that tunes recipe ranking lives in
//! [`scoring`] and [`ranking`] and is surfaced through the scoring configuration,
//! so the scorer itself never carries literal numbers.

/// Default scoring weights, bonuses and penalties
pub mod scoring {
    /// Weight of vegetable coverage in the recipe score
    pub const VEGGIES_WEIGHT: f64 = 0.30;
    /// Weight of protein coverage in the recipe score
    pub const PROTEINS_WEIGHT: f64 = 0.30;
    /// Weight of spice/masala coverage in the recipe score
    pub const SPICES_WEIGHT: f64 = 0.20;
    /// Weight of sauce/condiment coverage in the recipe score
    pub const CONDIMENTS_WEIGHT: f64 = 0.10;
    /// Weight of carbohydrate coverage in the recipe score
    pub const CARBS_WEIGHT: f64 = 0.08;
    /// Weight of everything else (oils, butter, thickeners)
    pub const OTHERS_WEIGHT: f64 = 0.02;

    /// Bonus for a recipe whose cuisine is in the user's preferred set
    pub const CUISINE_BONUS: f64 = 0.10;
    /// Penalty for a recipe that does not carry the required diet tag.
    /// Exceeds the best attainable positive score (full coverage plus cuisine
    /// and time bonuses) so an incompatible recipe always lands below zero.
    pub const DIET_PENALTY: f64 = 1.5;
    /// Bonus for a recipe that fits within the time limit
    pub const TIME_BONUS: f64 = 0.05;
    /// Penalty for a recipe over the time limit (0.0 disables the strict variant)
    pub const TIME_PENALTY: f64 = 0.0;

    /// Tolerance used when checking that category weights sum to 1.0
    pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
}

/// Ranking and truncation limits
pub mod ranking {
    /// Number of suggestions returned per request
    pub const DEFAULT_TOP_K: usize = 3;
    /// Scores must be strictly above this to survive the positive-only filter
    pub const POSITIVE_SCORE_CUTOFF: f64 = 0.0;
}

/// Request defaults mirrored by the presentation shell
pub mod preferences {
    /// Default time budget in minutes
    pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 25;
    /// Smallest time budget the shell offers
    pub const MIN_TIME_LIMIT_MINUTES: u32 = 10;
    /// Largest time budget the shell offers
    pub const MAX_TIME_LIMIT_MINUTES: u32 = 60;
}

/// Built-in ingredient synonyms (raw lowercase text → canonical name)
pub mod synonyms {
    /// Synonym pairs used when a catalog does not provide its own table
    pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
        ("scallion", "spring onion"),
        ("green onion", "spring onion"),
        ("chili", "chilli"),
        ("chilies", "chilli"),
        ("soya sauce", "light soy sauce"),
        ("paneer cheese", "paneer"),
        ("bell pepper", "capsicum"),
    ];
}

/// External link construction
pub mod video {
    /// Search results page that recipe videos link to
    pub const SEARCH_RESULTS_URL: &str = "https://www.youtube.com/results";
    /// Query parameter carrying the search terms
    pub const SEARCH_QUERY_PARAM: &str = "search_query";
}

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the CLI in startup logs
    pub const PANTRY_CHEF: &str = "pantry-chef";
}
