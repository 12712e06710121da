// ABOUTME: Request-scoped pantry types: raw user selections and their normalized form
// ABOUTME: Pantry::from_selection is the single boundary where user input gets canonicalized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::category::IngredientCategory;
use crate::normalize::{CanonicalName, SynonymTable};

/// Ingredients the user claims to have, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PantrySelection {
    items: BTreeMap<IngredientCategory, BTreeSet<String>>,
}

impl PantrySelection {
    /// Empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one raw ingredient name to a category
    pub fn insert(&mut self, category: IngredientCategory, name: impl Into<String>) {
        self.items.entry(category).or_default().insert(name.into());
    }

    /// Builder-style variant of [`Self::extend_category`]
    #[must_use]
    pub fn with<I, S>(mut self, category: IngredientCategory, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend_category(category, names);
        self
    }

    /// Add several raw ingredient names to a category
    pub fn extend_category<I, S>(&mut self, category: IngredientCategory, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items
            .entry(category)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    /// Raw names selected in one category
    pub fn names(&self, category: IngredientCategory) -> impl Iterator<Item = &str> {
        self.items
            .get(&category)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether nothing has been selected in any category
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.values().all(BTreeSet::is_empty)
    }
}

/// Normalized pantry: canonical ingredient names per category
///
/// Built fresh for each request and passed by reference into scoring and
/// missing-ingredient reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pantry {
    have: [HashSet<CanonicalName>; 6],
}

impl Pantry {
    /// Canonicalize a raw selection with the catalog's synonym table
    #[must_use]
    pub fn from_selection(selection: &PantrySelection, synonyms: &SynonymTable) -> Self {
        let mut pantry = Self::default();
        for category in IngredientCategory::ALL {
            pantry.have[category.index()] = selection
                .names(category)
                .map(|name| synonyms.normalize(name))
                .filter(|name| !name.as_str().is_empty())
                .collect();
        }
        pantry
    }

    /// Canonical names available in one category
    #[must_use]
    pub fn in_category(&self, category: IngredientCategory) -> &HashSet<CanonicalName> {
        &self.have[category.index()]
    }

    /// Every available ingredient, regardless of category
    #[must_use]
    pub fn all_ingredients(&self) -> BTreeSet<&CanonicalName> {
        self.have.iter().flatten().collect()
    }

    /// Total number of distinct (category, ingredient) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.have.iter().map(HashSet::len).sum()
    }

    /// Whether no category holds any ingredient
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.have.iter().all(HashSet::is_empty)
    }
}
