// ABOUTME: Integration tests for ingredient normalization and synonym tables
// ABOUTME: Checks idempotence, case and whitespace folding, and symmetric pantry/recipe matching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use pantry_chef::catalog::Catalog;
use pantry_chef::models::{
    DietTag, IngredientCategory, Pantry, PantrySelection, PreferenceContext, Recipe,
    RecipeDefinition,
};
use pantry_chef::service::PantryChef;
use pantry_chef::{CanonicalName, ScoringConfig, SynonymTable};
use pantry_core::constants::synonyms::DEFAULT_SYNONYMS;
use pantry_core::errors::CatalogError;
use pantry_core::normalize;
use pantry_intelligence::coverage;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Onion",
    "  GARAM masala ",
    "\tgreen chilli\n",
    "Scallion",
    "GREEN ONION",
    "chili",
    "Soya Sauce",
    "bell pepper",
    "Jalapeño",
    "crème fraîche",
    "spring onion",
];

// ============================================================================
// Folding
// ============================================================================

#[test]
fn test_normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        let twice = normalize(once.as_str());
        assert_eq!(once, twice, "normalize not idempotent for {sample:?}");
    }
}

#[test]
fn test_case_and_whitespace_variants_agree() {
    let variants = ["garam masala", "Garam Masala", "  GARAM MASALA  ", "garam masala\n"];
    let names: HashSet<_> = variants.iter().map(|v| normalize(v)).collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn test_unicode_is_lowercased() {
    assert_eq!(normalize("Jalapeño"), "jalapeño");
    assert_eq!(normalize("CRÈME FRAÎCHE"), "crème fraîche");
}

#[test]
fn test_interior_whitespace_is_kept() {
    assert_eq!(normalize("green  chilli"), "green  chilli");
}

// ============================================================================
// Synonyms
// ============================================================================

#[test]
fn test_builtin_synonyms_map_to_their_canonical_form() {
    for (alias, canonical) in DEFAULT_SYNONYMS {
        assert_eq!(normalize(alias), *canonical);
        assert_eq!(normalize(&alias.to_uppercase()), *canonical);
        // The canonical side is a fixed point
        assert_eq!(normalize(canonical), *canonical);
    }
}

#[test]
fn test_custom_table_rejects_uppercase_entries() {
    let result = SynonymTable::new([("Courgette", "zucchini")]);
    assert!(matches!(
        result,
        Err(CatalogError::NonCanonicalSynonym { .. })
    ));
}

#[test]
fn test_custom_table_leaves_unknown_names_folded() {
    let table = SynonymTable::new([("courgette", "zucchini")]).unwrap();
    assert_eq!(table.normalize(" Courgette"), "zucchini");
    assert_eq!(table.normalize("Scallion"), "scallion");
    assert_eq!(table.len(), 1);
}

// ============================================================================
// Symmetric Matching
// ============================================================================

#[test]
fn test_alias_in_pantry_matches_canonical_in_recipe() {
    let table = SynonymTable::builtin();
    let recipe = Recipe::from_definition(
        0,
        RecipeDefinition {
            title: "Fried Rice".to_owned(),
            cuisine: "Chinese".to_owned(),
            ingredients: [(
                IngredientCategory::Veggies,
                vec!["Spring Onion".to_owned(), "Bell Pepper".to_owned()],
            )]
            .into_iter()
            .collect(),
            time_minutes: 15,
            diet: [DietTag::Vegan].into_iter().collect(),
            steps: vec!["Fry.".to_owned()],
        },
        table,
    )
    .unwrap();

    let selection =
        PantrySelection::new().with(IngredientCategory::Veggies, ["scallion", "CAPSICUM"]);
    let pantry = Pantry::from_selection(&selection, table);

    let ratio = coverage(
        pantry.in_category(IngredientCategory::Veggies),
        recipe.ingredients(IngredientCategory::Veggies),
    );
    assert!((ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_blank_pantry_entries_are_dropped() {
    let selection = PantrySelection::new().with(IngredientCategory::Spices, ["", "  ", "Salt"]);
    let pantry = Pantry::from_selection(&selection, SynonymTable::builtin());
    assert_eq!(pantry.len(), 1);
    assert!(pantry
        .in_category(IngredientCategory::Spices)
        .contains("salt"));
}

// ============================================================================
// Catalog-Bound Normalization
// ============================================================================

fn herb_chef() -> PantryChef {
    let json = r#"{
        "synonyms": { "coriander leaves": "cilantro" },
        "recipes": [{
            "title": "Herb Rice",
            "cuisine": "Indian",
            "ingredients": { "veggies": ["Cilantro"], "carbs": ["rice"] },
            "time_minutes": 15,
            "diet": ["vegan"],
            "steps": ["Cook rice.", "Fold in herbs."]
        }]
    }"#;
    PantryChef::with_config(Catalog::from_json_str(json).unwrap(), ScoringConfig::default())
        .unwrap()
}

#[test]
fn test_service_normalize_uses_catalog_synonyms() {
    let chef = herb_chef();
    assert_eq!(chef.normalize(" Coriander Leaves"), "cilantro");
    // The built-in table does not apply to a catalog with its own synonyms
    assert_eq!(chef.normalize("Scallion"), "scallion");
}

#[test]
fn test_service_normalize_agrees_with_scoring() {
    let chef = herb_chef();
    let raw = ["Coriander Leaves", "RICE"];
    let canonical: Vec<CanonicalName> = raw.iter().map(|name| chef.normalize(name)).collect();
    let recipe = &chef.catalog().recipes()[0];
    assert!(canonical.iter().all(|name| recipe.all_ingredients().contains(name)));

    let selection = PantrySelection::new()
        .with(IngredientCategory::Veggies, [raw[0]])
        .with(IngredientCategory::Carbs, [raw[1]]);
    let suggestions = chef.suggest_recipes(&selection, &PreferenceContext::default());
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].missing.is_empty());
}
