// ABOUTME: Application error type for catalog loading and configuration failures
// ABOUTME: Wraps I/O, parse, catalog validation and scoring configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Recipe suggestion itself cannot fail. Errors only arise while the catalog
//! file is read and validated, or while configuration is loaded.

use std::io;
use std::path::PathBuf;

use pantry_core::errors::CatalogError;
use pantry_intelligence::ConfigError;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Catalog JSON is malformed
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog YAML is malformed
    #[cfg(feature = "yaml-catalog")]
    #[error("Invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catalog file extension is not a supported format
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Catalog content failed validation
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Scoring configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for application operations
pub type AppResult<T> = Result<T, AppError>;
