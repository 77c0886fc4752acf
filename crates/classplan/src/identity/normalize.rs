//! Instructor name variant generation.
//!
//! The registrar publishes names as "Last, First", "First Last", with
//! honorifics, with "Mc Cann" or "McCann", "O'Brien" or "O Brien", and with
//! hyphenated or unhyphenated compound surnames. None of this is reliable, so
//! instead of picking one canonical form we emit every plausible rewrite and
//! let the matcher score all of them.

use regex::Regex;
use std::sync::LazyLock;

// Static patterns - compiled once
static HONORIFICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:dr|prof|professor|mr|ms|mrs|jr|sr|ii|iii|iv)\b\.?").unwrap()
});
static MC_SPACED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(Mc|Mac) ([A-Z])").unwrap());
static MC_JOINED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(Mc|Mac)([A-Z])").unwrap());
static O_APOSTROPHE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bO['’]\s*([A-Z])").unwrap());
static O_SPACED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bO ([A-Z])").unwrap());
static HYPHEN_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());

/// Ordered, duplicate-free list of variants.
#[derive(Default)]
struct Variants {
    list: Vec<String>,
}

impl Variants {
    fn push(&mut self, candidate: &str) {
        if !candidate.is_empty() && !self.list.iter().any(|v| v == candidate) {
            self.list.push(candidate.to_string());
        }
    }
}

/// Expands one raw instructor name into its plausible spellings.
///
/// The first entry is always the whitespace-collapsed input, so the list is
/// never empty. Later entries come from, in order: stripping honorifics and
/// suffixes, Mc/Mac spacing, O'/O spacing, "Last, First" reordering, hyphen
/// handling and a hyphenated compound-surname guess.
pub fn name_variations(raw: &str) -> Vec<String> {
    let cleaned = collapse_whitespace(raw);
    let mut variants = Variants {
        list: vec![cleaned.clone()],
    };
    if cleaned.is_empty() {
        return variants.list;
    }

    let stripped = tidy(&HONORIFICS.replace_all(&cleaned, " "));
    variants.push(&stripped);
    let base = if stripped.is_empty() { cleaned } else { stripped };

    // Spelling-level rewrites
    let mut surface = vec![base.clone()];
    surface.extend(mc_forms(&base));
    for form in surface.clone() {
        surface.extend(o_forms(&form));
    }
    for form in &surface {
        variants.push(form);
    }

    // Structure-level rewrites, applied on top of every spelling
    let mut structural = surface.clone();
    for form in &surface {
        structural.extend(comma_forms(form));
    }
    for form in structural.clone() {
        structural.extend(hyphen_forms(&form));
    }
    for form in &structural {
        variants.push(form);
    }

    for form in &structural {
        if let Some(guess) = compound_surname_guess(form) {
            variants.push(&guess);
        }
    }

    variants.list
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapses whitespace and cleans up commas left behind by token removal.
fn tidy(s: &str) -> String {
    let collapsed = collapse_whitespace(s).replace(" ,", ",");
    collapsed
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

/// "Mc Cann" -> "McCann" and "McCann" -> "Mc Cann".
fn mc_forms(name: &str) -> Vec<String> {
    let mut forms = Vec::new();
    if MC_SPACED.is_match(name) {
        forms.push(MC_SPACED.replace_all(name, "${1}${2}").into_owned());
    }
    if MC_JOINED.is_match(name) {
        forms.push(MC_JOINED.replace_all(name, "${1} ${2}").into_owned());
    }
    forms
}

/// "O'Brien" -> "O Brien" and "O Brien" -> "O'Brien".
fn o_forms(name: &str) -> Vec<String> {
    let mut forms = Vec::new();
    if O_APOSTROPHE.is_match(name) {
        forms.push(O_APOSTROPHE.replace_all(name, "O ${1}").into_owned());
    }
    if O_SPACED.is_match(name) {
        forms.push(O_SPACED.replace_all(name, "O'${1}").into_owned());
    }
    forms
}

/// "Last, First" -> "First Last" and "Last First".
fn comma_forms(name: &str) -> Vec<String> {
    let Some((last, first)) = name.split_once(',') else {
        return Vec::new();
    };
    let (last, first) = (last.trim(), first.trim());
    if last.is_empty() || first.is_empty() {
        return Vec::new();
    }
    vec![format!("{} {}", first, last), format!("{} {}", last, first)]
}

/// "Smith - Jones" -> "Smith Jones", "SmithJones" and "Smith-Jones".
fn hyphen_forms(name: &str) -> Vec<String> {
    if !name.contains('-') {
        return Vec::new();
    }
    let normalized = HYPHEN_SPACING.replace_all(name, "-").into_owned();
    vec![
        collapse_whitespace(&normalized.replace('-', " ")),
        normalized.replace('-', ""),
        normalized,
    ]
}

/// "Maria Garcia Lopez" -> "Maria Garcia-Lopez".
fn compound_surname_guess(name: &str) -> Option<String> {
    if name.contains('-') || name.contains(',') {
        return None;
    }
    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    let split = tokens.len() - 2;
    let surname = format!("{}-{}", tokens[split], tokens[split + 1]);
    let mut parts: Vec<&str> = tokens[..split].to_vec();
    parts.push(&surname);
    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(variants: &[String], expected: &str) -> bool {
        variants.iter().any(|v| v == expected)
    }

    #[test]
    fn test_first_variant_is_collapsed_input() {
        let variants = name_variations("  Hays,   Kirk ");
        assert_eq!(variants[0], "Hays, Kirk");
    }

    #[test]
    fn test_never_empty() {
        assert_eq!(name_variations(""), vec![String::new()]);
        assert_eq!(name_variations("   ").len(), 1);
        assert!(!name_variations("Dr.").is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let variants = name_variations("Sean O'Brien-McCann, Jr.");
        let mut seen = std::collections::HashSet::new();
        for v in &variants {
            assert!(seen.insert(v.clone()), "duplicate variant {v}");
        }
    }

    #[test]
    fn test_last_first_reordered() {
        let variants = name_variations("Hays, Kirk");
        assert!(has(&variants, "Kirk Hays"));
        assert!(has(&variants, "Hays Kirk"));
    }

    #[test]
    fn test_honorifics_stripped() {
        let variants = name_variations("Dr. Jonathan Kern Jr.");
        assert!(has(&variants, "Jonathan Kern"));

        let variants = name_variations("Prof Smith, Anna III");
        assert!(has(&variants, "Smith, Anna"));
        assert!(has(&variants, "Anna Smith"));
    }

    #[test]
    fn test_honorific_inside_word_kept() {
        let variants = name_variations("Drew Mrsic");
        assert_eq!(variants[0], "Drew Mrsic");
        assert!(!has(&variants, "ew Mrsic"));
    }

    #[test]
    fn test_mc_spacing_both_directions() {
        assert!(has(&name_variations("Amy Mc Cann"), "Amy McCann"));
        assert!(has(&name_variations("Amy McCann"), "Amy Mc Cann"));
        assert!(has(&name_variations("Ian MacDonald"), "Ian Mac Donald"));
    }

    #[test]
    fn test_o_apostrophe_both_directions() {
        assert!(has(&name_variations("Sean O'Brien"), "Sean O Brien"));
        assert!(has(&name_variations("Sean O Brien"), "Sean O'Brien"));
    }

    #[test]
    fn test_hyphenated_forms() {
        let variants = name_variations("Ana Smith - Jones");
        assert!(has(&variants, "Ana Smith Jones"));
        assert!(has(&variants, "Ana SmithJones"));
        assert!(has(&variants, "Ana Smith-Jones"));
    }

    #[test]
    fn test_compound_surname_guess() {
        let variants = name_variations("Maria Garcia Lopez");
        assert!(has(&variants, "Maria Garcia-Lopez"));
    }

    #[test]
    fn test_comma_and_mc_combine() {
        let variants = name_variations("Mc Cann, Amy");
        assert!(has(&variants, "Amy McCann"));
        assert!(has(&variants, "Amy Mc Cann"));
    }
}
