// ABOUTME: Ingredient category enumeration used to partition recipes and pantries
// ABOUTME: Closed set of six categories with stable ordering and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ingredient category
///
/// The set is closed; catalogs and pantries are always partitioned into these
/// six buckets. The older `masalas_spices` and `sauces_condiments` spellings are
/// accepted when reading catalog data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Fresh vegetables and herbs
    Veggies,
    /// Eggs, meat, legumes, tofu
    Proteins,
    /// Dry spices and masalas
    #[serde(alias = "masalas_spices")]
    Spices,
    /// Sauces, condiments and seasonings
    #[serde(alias = "sauces_condiments")]
    Condiments,
    /// Rice, pasta, bread
    Carbs,
    /// Oils, butter, thickeners
    Others,
}

impl IngredientCategory {
    /// Every category, in display order
    pub const ALL: [Self; 6] = [
        Self::Veggies,
        Self::Proteins,
        Self::Spices,
        Self::Condiments,
        Self::Carbs,
        Self::Others,
    ];

    /// Position of this category in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Veggies => 0,
            Self::Proteins => 1,
            Self::Spices => 2,
            Self::Condiments => 3,
            Self::Carbs => 4,
            Self::Others => 5,
        }
    }

    /// Machine-readable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Veggies => "veggies",
            Self::Proteins => "proteins",
            Self::Spices => "spices",
            Self::Condiments => "condiments",
            Self::Carbs => "carbs",
            Self::Others => "others",
        }
    }

    /// Human-readable label for checklists
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Veggies => "Veggies",
            Self::Proteins => "Proteins",
            Self::Spices => "Masalas/Spices",
            Self::Condiments => "Sauces",
            Self::Carbs => "Carbs",
            Self::Others => "Others",
        }
    }
}

impl Display for IngredientCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown ingredient category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for IngredientCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veggies" => Ok(Self::Veggies),
            "proteins" => Ok(Self::Proteins),
            "spices" | "masalas_spices" => Ok(Self::Spices),
            "condiments" | "sauces_condiments" => Ok(Self::Condiments),
            "carbs" => Ok(Self::Carbs),
            "others" => Ok(Self::Others),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}
