// ABOUTME: Terminal and JSON rendering for Pantry Chef CLI output
// ABOUTME: Formats ranked suggestions with steps, missing ingredients and a video search link
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use pantry_chef::models::IngredientCategory;
use pantry_chef::video::video_search_url;
use pantry_chef::{CanonicalName, Suggestion};
use serde_json::json;

const NO_MATCHES: &str = "No matches found. Try adding more basics like salt or oil.";

pub fn print_suggestions(suggestions: &[Suggestion<'_>]) {
    if suggestions.is_empty() {
        println!("{NO_MATCHES}");
        return;
    }

    for (rank, suggestion) in suggestions.iter().enumerate() {
        let recipe = suggestion.recipe;
        if rank > 0 {
            println!();
        }
        println!(
            "{}. {} ({}, {} min)  score {:.2}",
            rank + 1,
            recipe.title(),
            recipe.cuisine(),
            recipe.time_minutes(),
            suggestion.score
        );

        println!("   Steps:");
        for (number, step) in recipe.steps().iter().enumerate() {
            println!("     {}. {step}", number + 1);
        }

        if suggestion.missing.is_empty() {
            println!("   You have everything.");
        } else {
            let missing: Vec<&str> = suggestion.missing.iter().map(CanonicalName::as_str).collect();
            println!("   Missing: {}", missing.join(", "));
        }

        println!(
            "   Watch on YouTube: {}",
            video_search_url(recipe.title(), recipe.cuisine())
        );
    }
}

pub fn print_suggestions_json(suggestions: &[Suggestion<'_>]) -> Result<()> {
    let rendered: Vec<_> = suggestions
        .iter()
        .map(|suggestion| {
            let recipe = suggestion.recipe;
            json!({
                "title": recipe.title(),
                "cuisine": recipe.cuisine(),
                "time_minutes": recipe.time_minutes(),
                "diet": recipe.diet(),
                "score": suggestion.score,
                "breakdown": &suggestion.breakdown,
                "missing": &suggestion.missing,
                "steps": recipe.steps(),
                "video_url": video_search_url(recipe.title(), recipe.cuisine()),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

pub fn print_checklist(checklist: &BTreeMap<IngredientCategory, BTreeSet<CanonicalName>>) {
    for (category, names) in checklist {
        let names: Vec<&str> = names.iter().map(CanonicalName::as_str).collect();
        println!("{}: {}", category.label(), names.join(", "));
    }
}

pub fn print_checklist_json(
    checklist: &BTreeMap<IngredientCategory, BTreeSet<CanonicalName>>,
) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(checklist)?);
    Ok(())
}
