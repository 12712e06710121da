// ABOUTME: Diet tag vocabulary and per-request diet requirement
// ABOUTME: Parses the user-facing spellings (veg, vegan, egg-veg, omnivore, no preference)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dietary compatibility tag carried by a recipe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DietTag {
    /// Vegetarian, no eggs
    Veg,
    /// No animal products
    Vegan,
    /// Vegetarian including eggs
    EggVeg,
    /// No restriction
    Omnivore,
}

impl DietTag {
    /// Every diet tag, in the order the shell offers them
    pub const ALL: [Self; 4] = [Self::Veg, Self::Vegan, Self::EggVeg, Self::Omnivore];

    /// Wire spelling of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::Vegan => "vegan",
            Self::EggVeg => "egg-veg",
            Self::Omnivore => "omnivore",
        }
    }
}

impl Display for DietTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown diet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown diet: {0} (expected one of: no preference, veg, vegan, egg-veg, omnivore)")]
pub struct UnknownDiet(pub String);

impl FromStr for DietTag {
    type Err = UnknownDiet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Ok(Self::Veg),
            "vegan" => Ok(Self::Vegan),
            "egg-veg" | "eggveg" | "egg_veg" => Ok(Self::EggVeg),
            "omnivore" => Ok(Self::Omnivore),
            other => Err(UnknownDiet(other.to_owned())),
        }
    }
}

/// Diet requirement for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "tag")]
pub enum DietPreference {
    /// Every recipe is acceptable
    #[default]
    NoPreference,
    /// The recipe must carry this tag
    Require(DietTag),
}

impl DietPreference {
    /// Whether a recipe with the given tags satisfies this requirement
    #[must_use]
    pub fn is_satisfied_by(&self, tags: &BTreeSet<DietTag>) -> bool {
        match self {
            Self::NoPreference => true,
            Self::Require(tag) => tags.contains(tag),
        }
    }
}

impl Display for DietPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::NoPreference => f.write_str("no preference"),
            Self::Require(tag) => Display::fmt(tag, f),
        }
    }
}

impl FromStr for DietPreference {
    type Err = UnknownDiet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "no preference" | "no-preference" | "none" | "any" => Ok(Self::NoPreference),
            other => other.parse().map(Self::Require),
        }
    }
}
