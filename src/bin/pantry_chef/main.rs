// ABOUTME: Pantry Chef CLI - pick the ingredients you have, get ranked recipe suggestions
// ABOUTME: Handles argument parsing, catalog selection, logging setup, and output rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Suggest recipes for what's in the pantry
//! pantry-chef suggest --veggies onion,tomato,"green chilli" --proteins egg \
//!     --spices turmeric,cumin,salt --cuisine Indian --time-limit 25
//!
//! # Vegan only, machine-readable output
//! pantry-chef suggest --veggies garlic,tomato --carbs pasta --diet vegan --json
//!
//! # List the ingredients the catalog knows about
//! pantry-chef ingredients
//!
//! # Use a different catalog file
//! pantry-chef --catalog ./my-recipes.yaml suggest --proteins chicken
//! ```

mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pantry_chef::catalog::Catalog;
use pantry_chef::logging::LoggingConfig;
use pantry_chef::models::{DietPreference, IngredientCategory, PantrySelection, PreferenceContext};
use pantry_chef::service::PantryChef;
use pantry_core::constants::preferences::{
    DEFAULT_TIME_LIMIT_MINUTES, MAX_TIME_LIMIT_MINUTES, MIN_TIME_LIMIT_MINUTES,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pantry-chef",
    about = "Pantry Chef - recipe suggestions from what you have",
    long_about = "Pick what you have. Pantry Chef ranks its recipe catalog by ingredient coverage, \
                  diet, cuisine and time, and suggests recipes with steps and a related video search."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file (.json, .yaml, .yml) to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest recipes for the selected ingredients
    Suggest(SuggestArgs),

    /// List selectable ingredients per category
    Ingredients {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SuggestArgs {
    /// Vegetables and herbs you have (comma-separated)
    #[arg(long, value_delimiter = ',')]
    veggies: Vec<String>,

    /// Proteins you have (comma-separated)
    #[arg(long, value_delimiter = ',')]
    proteins: Vec<String>,

    /// Masalas and spices you have (comma-separated)
    #[arg(long, value_delimiter = ',')]
    spices: Vec<String>,

    /// Sauces and condiments you have (comma-separated)
    #[arg(long, value_delimiter = ',')]
    condiments: Vec<String>,

    /// Carbs you have (comma-separated)
    #[arg(long, value_delimiter = ',')]
    carbs: Vec<String>,

    /// Anything else: oils, butter, thickeners (comma-separated)
    #[arg(long, value_delimiter = ',')]
    others: Vec<String>,

    /// Preferred cuisines (comma-separated, e.g. Indian,Chinese)
    #[arg(long = "cuisine", value_delimiter = ',')]
    cuisines: Vec<String>,

    /// Diet: no preference, veg, vegan, egg-veg, omnivore
    #[arg(long, default_value = "no preference")]
    diet: DietPreference,

    /// Time limit in minutes
    #[arg(
        long,
        default_value_t = DEFAULT_TIME_LIMIT_MINUTES,
        value_parser = clap::value_parser!(u32).range(
            i64::from(MIN_TIME_LIMIT_MINUTES)..=i64::from(MAX_TIME_LIMIT_MINUTES)
        )
    )]
    time_limit: u32,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

impl SuggestArgs {
    fn selection(&self) -> PantrySelection {
        let mut selection = PantrySelection::new();
        for (category, names) in [
            (IngredientCategory::Veggies, &self.veggies),
            (IngredientCategory::Proteins, &self.proteins),
            (IngredientCategory::Spices, &self.spices),
            (IngredientCategory::Condiments, &self.condiments),
            (IngredientCategory::Carbs, &self.carbs),
            (IngredientCategory::Others, &self.others),
        ] {
            selection.extend_category(category, names.iter().cloned());
        }
        selection
    }

    fn preferences(&self) -> PreferenceContext {
        PreferenceContext {
            cuisines: self
                .cuisines
                .iter()
                .map(|cuisine| cuisine.trim().to_owned())
                .filter(|cuisine| !cuisine.is_empty())
                .collect(),
            diet: self.diet,
            time_limit_minutes: self.time_limit,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    info!(recipes = catalog.len(), "Catalog ready");

    let chef = PantryChef::new(catalog);

    match cli.command {
        Command::Suggest(args) => {
            let selection = args.selection();
            let prefs = args.preferences();
            let suggestions = chef.suggest_recipes(&selection, &prefs);
            if args.json {
                render::print_suggestions_json(&suggestions)?;
            } else {
                render::print_suggestions(&suggestions);
            }
        }
        Command::Ingredients { json } => {
            let checklist = chef.ingredient_checklist();
            if json {
                render::print_checklist_json(&checklist)?;
            } else {
                render::print_checklist(&checklist);
            }
        }
    }

    Ok(())
}
