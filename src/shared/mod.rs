pub(crate) mod fuzzy;
pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

use rayon::prelude::*;
use serde::Serialize;
use std::{cmp::Ordering, fmt::Display, sync::Arc};

/// Minimum fuzzy score a name needs to show up in a search.
pub(crate) const SEARCH_THRESHOLD: f64 = 0.1;

/// Case-folded, trimmed form of a location used for lookups and equality.
/// Never shown to the user, the display string is kept by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NormalizedKey(Arc<str>);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in chars, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Display for NormalizedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalizes a free-text location. Every input has a normalized form,
/// the empty string normalizes to itself.
pub fn normalize(text: &str) -> NormalizedKey {
    NormalizedKey(text.trim().to_lowercase().into())
}

pub trait Named {
    fn normalized_name(&self) -> &NormalizedKey;
}

/// Fuzzy name search over anything [`Named`], scored in parallel.
/// Best matches come first.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Named,
{
    let needle = normalize(needle);
    if needle.is_empty() {
        return Vec::new();
    }
    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let score = fuzzy::score(needle.as_str(), hay.normalized_name().as_str());
            (score > SEARCH_THRESHOLD).then_some((hay, score))
        })
        .collect();

    // Stable so equal scores keep haystack order
    results.par_sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    results.into_iter().map(|(hay, _)| hay).collect()
}

#[test]
fn normalize_trims_and_folds() {
    assert_eq!(normalize("  PESU RR ").as_str(), "pesu rr");
}

#[test]
fn normalize_empty() {
    assert!(normalize("").is_empty());
    assert!(normalize("   ").is_empty());
}

#[test]
fn normalize_keeps_inner_spacing() {
    assert_eq!(normalize("Park  View").as_str(), "park  view");
}

#[test]
fn normalized_len_counts_chars() {
    assert_eq!(normalize("Café").len(), 4);
}
