// ABOUTME: Core types and constants for the Pantry Chef recipe recommender
// ABOUTME: Foundation crate with domain models, ingredient normalization, errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types for Pantry Chef. Everything here is
//! plain data plus the ingredient normalizer; scoring lives in
//! `pantry-intelligence`.
//!
//! ## Modules
//!
//! - **models**: recipes, pantries, diet tags, categories, request preferences
//! - **normalize**: synonym table and the `CanonicalName` newtype
//! - **errors**: catalog validation errors
//! - **constants**: scoring defaults and other named values

/// Application constants organized by domain
pub mod constants;

/// Catalog validation errors
pub mod errors;

/// Domain data models
pub mod models;

/// Ingredient name normalization
pub mod normalize;

pub use normalize::{normalize, CanonicalName, SynonymTable};
