// ABOUTME: Ingredient name normalization with case/whitespace folding and synonym resolution
// ABOUTME: Produces CanonicalName values, the only type the scorer compares ingredients with
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Normalization
//!
//! User selections and catalog entries spell the same ingredient differently
//! ("Scallion", "green onion", "spring onion"). Every ingredient name passes
//! through a [`SynonymTable`] exactly once, at the boundary where it enters the
//! system, and comes out as a [`CanonicalName`]. Because `CanonicalName` has no
//! public constructor other than the normalizer, comparing a raw name against a
//! normalized one does not type-check.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use serde::Serialize;

use crate::constants::synonyms::DEFAULT_SYNONYMS;
use crate::errors::CatalogError;

/// Built-in synonym table shared by every caller of [`normalize`]
static BUILTIN_SYNONYMS: LazyLock<SynonymTable> = LazyLock::new(|| SynonymTable {
    aliases: DEFAULT_SYNONYMS
        .iter()
        .map(|&(alias, canonical)| (alias.to_owned(), canonical.to_owned()))
        .collect(),
});

/// A trimmed, lowercased, synonym-resolved ingredient name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Borrow the canonical text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the canonical text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for CanonicalName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash/Eq of the newtype match those of `str`, so sets keyed by canonical
// names can be probed with plain string slices.
impl Borrow<str> for CanonicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Read-only mapping from raw lowercase ingredient text to its canonical alias
///
/// Construction guarantees idempotence: keys and values are already folded,
/// and no value is itself a key, so `normalize(normalize(s)) == normalize(s)`.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    aliases: HashMap<String, String>,
}

impl SynonymTable {
    /// Build a table from `(alias, canonical)` pairs
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NonCanonicalSynonym`] when an entry is not already
    /// trimmed and lowercase, and [`CatalogError::ChainedSynonym`] when a target
    /// is itself an alias.
    pub fn new<I, A, C>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        let aliases: HashMap<String, String> = entries
            .into_iter()
            .map(|(alias, canonical)| (alias.into(), canonical.into()))
            .collect();

        for (alias, canonical) in &aliases {
            if fold(alias) != *alias || fold(canonical) != *canonical {
                return Err(CatalogError::NonCanonicalSynonym {
                    alias: alias.clone(),
                    canonical: canonical.clone(),
                });
            }
            if aliases.contains_key(canonical) {
                return Err(CatalogError::ChainedSynonym {
                    alias: alias.clone(),
                    canonical: canonical.clone(),
                });
            }
        }

        Ok(Self { aliases })
    }

    /// The built-in table used when a catalog does not supply its own
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_SYNONYMS
    }

    /// Canonicalize a single ingredient name
    ///
    /// Total for every input: unknown names come back folded, and the empty
    /// string stays empty.
    #[must_use]
    pub fn normalize(&self, text: &str) -> CanonicalName {
        let folded = fold(text);
        match self.aliases.get(&folded) {
            Some(canonical) => CanonicalName(canonical.clone()),
            None => CanonicalName(folded),
        }
    }

    /// Canonicalize a sequence of names, preserving order and duplicates
    pub fn normalize_all<'a, I>(&self, names: I) -> Vec<CanonicalName>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|name| self.normalize(name)).collect()
    }

    /// Number of aliases in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no aliases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Iterate over `(alias, canonical)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }
}

/// Canonicalize an ingredient name with the built-in synonym table
///
/// Only matches the scorer for catalogs that use the built-in table. A catalog
/// that ships its own `synonyms` must normalize through that table instead.
#[must_use]
pub fn normalize(text: &str) -> CanonicalName {
    BUILTIN_SYNONYMS.normalize(text)
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}
