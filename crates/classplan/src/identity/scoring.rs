//! Order-independent string similarity for names.
//!
//! `token_sort_ratio` splits both strings on whitespace, sorts the tokens and
//! scores the rejoined strings with rapidfuzz's indel ratio on a 0-100 scale.
//! Tokens are compared as written: case and punctuation count, so "Kirk Hays"
//! and "Hays Kirk" score 100 but "Hays, Kirk" does not. Spelling differences
//! like the comma form are covered by name variants, not by the scorer.

use rapidfuzz::fuzz;

/// Reduces a string to its sorted-token form.
///
/// Candidate names are keyed once with this so pool scans only pay for the
/// ratio itself.
pub fn sort_key(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Indel similarity of two strings, 0-100.
///
/// Either string being empty scores 0 so blank names can never match.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 100.0;
    }
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Token-sort-ratio of two raw strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sort_key(a), &sort_key(b))
}
