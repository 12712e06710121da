// ABOUTME: Integration tests for end-to-end recipe suggestions over the built-in catalog
// ABOUTME: Covers the empty, well-stocked and incompatible-diet pantries plus ranking policies
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tests for `PantryChef::suggest_recipes` including:
//! - Empty pantry and time-limit behaviour
//! - Well-stocked pantry ranking with cuisine preference
//! - Diet exclusion dominance
//! - Ranking policy and determinism

use pantry_chef::catalog::Catalog;
use pantry_chef::models::{
    DietPreference, DietTag, IngredientCategory, Pantry, PantrySelection, PreferenceContext,
    Recipe,
};
use pantry_chef::service::PantryChef;
use pantry_chef::{CanonicalName, RankingPolicy, ScoringConfig};
use pantry_core::constants::scoring::{CUISINE_BONUS, TIME_BONUS};

const EPSILON: f64 = 1e-9;

fn chef() -> PantryChef {
    PantryChef::with_config(Catalog::builtin().unwrap(), ScoringConfig::default()).unwrap()
}

fn chef_with_policy(policy: RankingPolicy, top_k: usize) -> PantryChef {
    let mut config = ScoringConfig::default();
    config.ranking.policy = policy;
    config.ranking.top_k = top_k;
    PantryChef::with_config(Catalog::builtin().unwrap(), config).unwrap()
}

fn indian_pantry() -> PantrySelection {
    PantrySelection::new()
        .with(
            IngredientCategory::Veggies,
            ["onion", "tomato", "green chilli", "cilantro"],
        )
        .with(IngredientCategory::Proteins, ["egg"])
        .with(
            IngredientCategory::Spices,
            ["turmeric", "cumin", "garam masala", "black pepper", "salt"],
        )
        .with(IngredientCategory::Others, ["oil"])
}

fn chicken_broccoli_pantry() -> PantrySelection {
    PantrySelection::new()
        .with(
            IngredientCategory::Veggies,
            ["broccoli", "garlic", "spring onion"],
        )
        .with(IngredientCategory::Proteins, ["chicken"])
        .with(IngredientCategory::Spices, ["white pepper", "salt"])
        .with(
            IngredientCategory::Condiments,
            ["light soy sauce", "oyster sauce", "cornstarch", "sesame oil"],
        )
        .with(IngredientCategory::Carbs, ["rice"])
        .with(IngredientCategory::Others, ["oil"])
}

fn titles(chef: &PantryChef, pantry: &PantrySelection, prefs: &PreferenceContext) -> Vec<String> {
    chef.suggest_recipes(pantry, prefs)
        .iter()
        .map(|s| s.recipe.title().to_owned())
        .collect()
}

// ============================================================================
// Empty Pantry
// ============================================================================

#[test]
fn test_empty_pantry_only_earns_time_bonus() {
    let chef = chef();
    let suggestions = chef.suggest_recipes(&PantrySelection::new(), &PreferenceContext::default());

    assert_eq!(suggestions.len(), 3);
    for suggestion in &suggestions {
        assert!((suggestion.score - TIME_BONUS).abs() < EPSILON);
        assert!(suggestion.breakdown.weighted_coverage.abs() < EPSILON);
    }

    // All tied: catalog order is kept
    let expected: Vec<&str> = chef
        .catalog()
        .recipes()
        .iter()
        .take(3)
        .map(Recipe::title)
        .collect();
    let got: Vec<&str> = suggestions.iter().map(|s| s.recipe.title()).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_empty_pantry_with_tight_time_limit_has_no_matches() {
    let prefs = PreferenceContext::default().with_time_limit(10);
    let chef = chef();
    let suggestions = chef.suggest_recipes(&PantrySelection::new(), &prefs);
    assert!(suggestions.is_empty());
}

#[test]
fn test_time_limit_is_inclusive() {
    let chef = chef();
    let recipe = chef.catalog().find("Indian Chana Masala").unwrap();
    assert_eq!(recipe.time_minutes(), 25);
    let pantry = Pantry::default();

    let at_limit = PreferenceContext::default().with_time_limit(25);
    let breakdown = chef.scorer().breakdown(recipe, &pantry, &at_limit);
    assert!((breakdown.time_adjustment - TIME_BONUS).abs() < EPSILON);

    let under_limit = PreferenceContext::default().with_time_limit(24);
    let breakdown = chef.scorer().breakdown(recipe, &pantry, &under_limit);
    assert!(breakdown.time_adjustment.abs() < EPSILON);
}

// ============================================================================
// Well-Stocked Pantry
// ============================================================================

#[test]
fn test_indian_pantry_ranks_masala_omelette_first() {
    let chef = chef();
    let prefs = PreferenceContext::default().with_cuisine("Indian");
    let suggestions = chef.suggest_recipes(&indian_pantry(), &prefs);

    let top = &suggestions[0];
    assert_eq!(top.recipe.title(), "Indian Masala Omelette");
    assert!(top.missing.is_empty());

    // Categories the recipe doesn't use contribute nothing
    let weights = &chef.scorer().config().weights;
    let used = weights.veggies + weights.proteins + weights.spices + weights.others;
    let expected = used + CUISINE_BONUS + TIME_BONUS;
    assert!((top.score - expected).abs() < EPSILON, "score {}", top.score);
    assert!((top.breakdown.coverage_for(IngredientCategory::Condiments)).abs() < EPSILON);
    assert!((top.breakdown.coverage_for(IngredientCategory::Spices) - 1.0).abs() < EPSILON);
}

#[test]
fn test_selection_is_normalized_before_scoring() {
    let chef = chef();
    let prefs = PreferenceContext::default().with_cuisine("indian");
    let messy = PantrySelection::new()
        .with(
            IngredientCategory::Veggies,
            [" ONION", "Tomato ", "Green Chilli", "CILANTRO"],
        )
        .with(IngredientCategory::Proteins, ["EGG"])
        .with(
            IngredientCategory::Spices,
            ["Turmeric", "cumin", "Garam Masala", "black pepper", "SALT"],
        )
        .with(IngredientCategory::Others, ["Oil"]);

    let clean = chef.suggest_recipes(&indian_pantry(), &prefs);
    let normalized = chef.suggest_recipes(&messy, &prefs);
    assert_eq!(clean, normalized);
}

#[test]
fn test_missing_ingredients_are_reported_sorted() {
    let pantry = PantrySelection::new()
        .with(IngredientCategory::Veggies, ["onion", "tomato"])
        .with(IngredientCategory::Proteins, ["egg"])
        .with(IngredientCategory::Spices, ["salt"]);
    let prefs = PreferenceContext::default().with_cuisine("Indian");
    let chef = chef();
    let suggestions = chef.suggest_recipes(&pantry, &prefs);

    let omelette = suggestions
        .iter()
        .find(|s| s.recipe.title() == "Indian Masala Omelette")
        .expect("omelette should be suggested");
    let missing: Vec<&str> = omelette.missing.iter().map(CanonicalName::as_str).collect();
    assert_eq!(
        missing,
        [
            "black pepper",
            "cilantro",
            "cumin",
            "garam masala",
            "green chilli",
            "oil",
            "turmeric"
        ]
    );
}

// ============================================================================
// Diet
// ============================================================================

#[test]
fn test_incompatible_diet_is_penalized_below_zero_and_excluded() {
    let chef = chef();
    let prefs = PreferenceContext::default().with_diet(DietPreference::Require(DietTag::Vegan));
    let pantry = chicken_broccoli_pantry();

    let recipe = chef
        .catalog()
        .find("Chinese Garlic Chicken & Broccoli")
        .unwrap();
    let pantry_norm =
        Pantry::from_selection(&pantry, chef.catalog().synonyms());
    let score = chef.scorer().score(recipe, &pantry_norm, &prefs);
    assert!(score < 0.0, "score {score}");

    let suggestions = chef.suggest_recipes(&pantry, &prefs);
    assert!(suggestions
        .iter()
        .all(|s| s.recipe.title() != "Chinese Garlic Chicken & Broccoli"));
    assert!(suggestions
        .iter()
        .all(|s| s.recipe.diet().contains(&DietTag::Vegan)));
}

#[test]
fn test_diet_exclusion_dominates_coverage() {
    let chef = chef();
    let prefs = PreferenceContext::default()
        .with_diet(DietPreference::Require(DietTag::Vegan))
        .with_cuisine("Chinese");
    let full = Pantry::from_selection(
        &chicken_broccoli_pantry(),
        chef.catalog().synonyms(),
    );
    let empty = Pantry::default();

    let incompatible = chef
        .scorer()
        .score(chef.catalog().find("Chinese Garlic Chicken & Broccoli").unwrap(), &full, &prefs);

    for recipe in chef.catalog().recipes() {
        if recipe.diet().contains(&DietTag::Vegan) {
            let compatible = chef.scorer().score(recipe, &empty, &prefs);
            assert!(
                incompatible < compatible,
                "{} at {compatible} should beat {incompatible}",
                recipe.title()
            );
        }
    }
}

// ============================================================================
// Ranking Policy and Determinism
// ============================================================================

#[test]
fn test_always_top_k_returns_non_positive_scores() {
    let chef = chef_with_policy(RankingPolicy::AlwaysTopK, 3);
    let prefs = PreferenceContext::default().with_time_limit(10);
    let suggestions = chef.suggest_recipes(&PantrySelection::new(), &prefs);

    assert_eq!(suggestions.len(), 3);
    assert!(suggestions.iter().all(|s| s.score.abs() < EPSILON));
}

#[test]
fn test_top_k_limits_results() {
    let chef = chef_with_policy(RankingPolicy::PositiveOnly, 5);
    let suggestions = chef.suggest_recipes(&PantrySelection::new(), &PreferenceContext::default());
    assert_eq!(suggestions.len(), 5);
}

#[test]
fn test_scores_are_sorted_descending() {
    let chef = chef_with_policy(RankingPolicy::AlwaysTopK, 8);
    let prefs = PreferenceContext::default().with_cuisine("Chinese");
    let suggestions = chef.suggest_recipes(&chicken_broccoli_pantry(), &prefs);

    assert_eq!(suggestions.len(), 8);
    assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(
        suggestions[0].recipe.title(),
        "Chinese Garlic Chicken & Broccoli"
    );
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let chef = chef();
    let prefs = PreferenceContext::default()
        .with_cuisine("Italian")
        .with_cuisine("Indian");
    let pantry = indian_pantry();

    let first = titles(&chef, &pantry, &prefs);
    for _ in 0..10 {
        assert_eq!(titles(&chef, &pantry, &prefs), first);
    }
}

#[test]
fn test_empty_catalog_returns_nothing() {
    let catalog = Catalog::from_json_str(r#"{ "recipes": [] }"#).unwrap();
    let chef = PantryChef::with_config(catalog, ScoringConfig::default()).unwrap();
    assert!(chef
        .suggest_recipes(&indian_pantry(), &PreferenceContext::default())
        .is_empty());
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = ScoringConfig::default();
    config.ranking.top_k = 0;
    assert!(PantryChef::with_config(Catalog::builtin().unwrap(), config).is_err());
}
