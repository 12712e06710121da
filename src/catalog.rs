// ABOUTME: Recipe catalog loading from the embedded data asset or an external JSON/YAML file
// ABOUTME: Canonicalizes every recipe at load time and builds the selectable ingredient checklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! The catalog is static content: a list of recipes, an optional synonym table
//! and an optional ingredient checklist (the choices a user can tick). It is
//! read once at startup and never mutated.
//!
//! ```text
//! {
//!   "synonyms":  { "scallion": "spring onion", ... },
//!   "checklist": { "veggies": ["onion", ...], ... },
//!   "recipes":   [ { "title": ..., "cuisine": ..., "ingredients": {...}, ... } ]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use pantry_core::errors::CatalogError;
use pantry_core::models::{IngredientCategory, Recipe, RecipeDefinition};
use pantry_core::{CanonicalName, SynonymTable};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    synonyms: Option<HashMap<String, String>>,
    #[serde(default)]
    checklist: BTreeMap<IngredientCategory, Vec<String>>,
    recipes: Vec<RecipeDefinition>,
}

/// Validated, read-only recipe catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    synonyms: SynonymTable,
    checklist: BTreeMap<IngredientCategory, BTreeSet<CanonicalName>>,
}

impl Catalog {
    /// Load the catalog embedded at build time
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails to parse or validate
    pub fn builtin() -> AppResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse or validate
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&contents)?,
            #[cfg(feature = "yaml-catalog")]
            "yaml" | "yml" => Self::from_yaml_str(&contents)?,
            other => return Err(AppError::UnsupportedFormat(other.to_owned())),
        };

        info!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            "Loaded recipe catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the content fails validation
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Parse a catalog from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the content fails validation
    #[cfg(feature = "yaml-catalog")]
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_file(file)
    }

    /// Build a catalog from recipe definitions and an explicit synonym table
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any recipe is invalid or titles repeat
    pub fn from_definitions(
        definitions: Vec<RecipeDefinition>,
        synonyms: SynonymTable,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut recipes = Vec::with_capacity(definitions.len());
        for (index, definition) in definitions.into_iter().enumerate() {
            let recipe = Recipe::from_definition(index, definition, &synonyms)?;
            if !seen.insert(recipe.title().to_owned()) {
                return Err(CatalogError::duplicate_title(recipe.title()));
            }
            recipes.push(recipe);
        }

        Ok(Self {
            recipes,
            synonyms,
            checklist: BTreeMap::new(),
        })
    }

    fn from_file(file: CatalogFile) -> AppResult<Self> {
        let synonyms = match file.synonyms {
            Some(entries) => SynonymTable::new(entries)?,
            None => SynonymTable::builtin().clone(),
        };

        let mut catalog = Self::from_definitions(file.recipes, synonyms)?;
        catalog.checklist = file
            .checklist
            .iter()
            .map(|(category, names)| {
                (
                    *category,
                    names
                        .iter()
                        .map(|name| catalog.synonyms.normalize(name))
                        .filter(|name| !name.as_str().is_empty())
                        .collect(),
                )
            })
            .collect();
        Ok(catalog)
    }

    /// Recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Synonym table shared by the catalog and every pantry scored against it
    #[must_use]
    pub const fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Look up a recipe by title (case-insensitive)
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Recipe> {
        let title = title.trim();
        self.recipes
            .iter()
            .find(|recipe| recipe.title().eq_ignore_ascii_case(title))
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Selectable ingredients per category, sorted and deduplicated
    ///
    /// Merges the declared checklist with every ingredient any recipe uses,
    /// so the list always offers what the catalog can match on.
    #[must_use]
    pub fn ingredient_checklist(&self) -> BTreeMap<IngredientCategory, BTreeSet<CanonicalName>> {
        let mut checklist = self.checklist.clone();
        for recipe in &self.recipes {
            for category in IngredientCategory::ALL {
                let needed = recipe.ingredients(category);
                if !needed.is_empty() {
                    checklist
                        .entry(category)
                        .or_default()
                        .extend(needed.iter().cloned());
                }
            }
        }
        checklist
    }
}
