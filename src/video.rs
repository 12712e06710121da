// ABOUTME: Builds a video search-results link for a recipe
// ABOUTME: Pure string formatting; no lookup of real videos is performed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::constants::video::{SEARCH_QUERY_PARAM, SEARCH_RESULTS_URL};

/// Search-results URL for `"{title} {cuisine} recipe"`
///
/// The query is form-encoded: spaces become `+`, everything outside the
/// unreserved set is percent-encoded.
#[must_use]
pub fn video_search_url(title: &str, cuisine: &str) -> String {
    let query = format!("{title} {cuisine} recipe");
    let encoded = urlencoding::encode(&query).replace("%20", "+");
    format!("{SEARCH_RESULTS_URL}?{SEARCH_QUERY_PARAM}={encoded}")
}
