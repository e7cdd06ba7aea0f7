//! Loading word lists from disk.
//!
//! A word list is a plain text file of whitespace-separated words. Words are
//! lowercased so they match the `a..z` substitutions of the word ladder.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Reads every word in the file at `path`.
pub fn load_words(path: impl AsRef<Path>) -> Result<FxHashSet<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words = parse_words(&text);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Splits text on whitespace into a set of lowercase words.
pub fn parse_words(text: &str) -> FxHashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
