// ABOUTME: Catalog validation error types raised while building recipes and synonym tables
// ABOUTME: Scoring itself is infallible; these errors only surface at initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Error Types
//!
//! Every failure in Pantry Chef happens while static data is turned into domain
//! values. Once the recipes and synonym table are built, ranking a pantry
//! cannot fail.

use thiserror::Error;

/// Errors raised while validating catalog data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Recipe title is empty after trimming
    #[error("Recipe at position {index} has an empty title")]
    EmptyTitle {
        /// Position of the offending recipe in the catalog
        index: usize,
    },

    /// Two recipes share a title
    #[error("Duplicate recipe title: {title}")]
    DuplicateTitle {
        /// The repeated title
        title: String,
    },

    /// Preparation time must be a positive number of minutes
    #[error("Recipe '{title}' has a non-positive preparation time")]
    InvalidTime {
        /// Title of the offending recipe
        title: String,
    },

    /// Recipe declares no compatible diet
    #[error("Recipe '{title}' declares no diet tags")]
    MissingDiet {
        /// Title of the offending recipe
        title: String,
    },

    /// Recipe has no preparation steps
    #[error("Recipe '{title}' has no preparation steps")]
    MissingSteps {
        /// Title of the offending recipe
        title: String,
    },

    /// Ingredient name is empty after trimming, so no pantry can ever hold it
    #[error("Recipe '{title}' lists a blank {category} ingredient")]
    BlankIngredient {
        /// Title of the offending recipe
        title: String,
        /// Category holding the blank entry
        category: String,
    },

    /// Synonym key or value is not already trimmed and lowercase
    #[error("Synonym entry '{alias}' -> '{canonical}' is not in canonical form")]
    NonCanonicalSynonym {
        /// Raw alias text
        alias: String,
        /// Target canonical name
        canonical: String,
    },

    /// Synonym target is itself an alias, which would break idempotence
    #[error("Synonym '{alias}' maps to '{canonical}', which is itself an alias")]
    ChainedSynonym {
        /// Raw alias text
        alias: String,
        /// Target that is also a key in the table
        canonical: String,
    },
}

impl CatalogError {
    /// Create a "duplicate title" error
    #[must_use]
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    /// Create an "invalid time" error
    #[must_use]
    pub fn invalid_time(title: impl Into<String>) -> Self {
        Self::InvalidTime {
            title: title.into(),
        }
    }

    /// Create a "missing diet" error
    #[must_use]
    pub fn missing_diet(title: impl Into<String>) -> Self {
        Self::MissingDiet {
            title: title.into(),
        }
    }

    /// Create a "missing steps" error
    #[must_use]
    pub fn missing_steps(title: impl Into<String>) -> Self {
        Self::MissingSteps {
            title: title.into(),
        }
    }
}
