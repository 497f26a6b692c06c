use std::{cmp, mem::swap};

/// Levenshtein edit distance, counted in chars.
pub(crate) fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let mut long: Vec<char> = a.chars().collect();
    let mut short: Vec<char> = b.chars().collect();
    if short.len() > long.len() {
        swap(&mut long, &mut short);
    }
    if short.is_empty() {
        return long.len();
    }

    // Two rows are enough, the full matrix is never read back
    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];
    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(lc != sc);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = cmp::min(substitution, cmp::min(deletion, insertion));
        }
        swap(&mut previous, &mut current);
    }
    previous[short.len()]
}

/// Token-wise similarity in `0.0..=1.0`, averaged over the needle's tokens.
/// A needle token that is a prefix of the matching hay token scores full,
/// so "down" finds "downtown" while typing.
pub(crate) fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    let total: f64 = needle_tokens
        .iter()
        .zip(hay_tokens.iter())
        .map(|(n, h)| token_score(n, h))
        .sum();
    total / needle_tokens.len() as f64
}

fn token_score(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    if longest == 0 {
        return 0.0;
    }
    1.0 - distance(needle, hay) as f64 / longest as f64
}

#[test]
fn fuzzy_empty_vs_empty() {
    assert_eq!(distance("", ""), 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("abc", ""), 3);
}

#[test]
fn fuzzy_substitution() {
    assert_eq!(distance("marina", "marine"), 1);
}

#[test]
fn fuzzy_insertion_and_deletion() {
    assert_eq!(distance("park", "parks"), 1);
    assert_eq!(distance("parks", "park"), 1);
}

#[test]
fn fuzzy_unicode() {
    assert_eq!(distance("café", "cafe"), 1);
}

#[test]
fn fuzzy_longer_sequence() {
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn score_prefix_is_full_match() {
    assert_eq!(score("down", "downtown"), 1.0);
}

#[test]
fn score_averages_over_needle_tokens() {
    // "green" matches, "lake" vs "park" shares a single char in place
    let s = score("green lake", "green park");
    assert!(s > 0.5 && s < 1.0);
}

#[test]
fn score_empty_needle() {
    assert_eq!(score("", "marina"), 0.0);
}
