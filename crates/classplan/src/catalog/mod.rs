/// Registrar catalog helpers: offerings, course codes, semesters and department counts
mod semester;
mod types;

pub use semester::*;
pub use types::*;

use crate::cache::TtlCache;
use std::collections::BTreeMap;

/// Department counts per semester, owned by whichever service renders them.
pub type DepartmentCountCache<C> = TtlCache<SemesterCode, Vec<DepartmentCount>, C>;

/// Uppercases, trims and collapses internal whitespace: " c  s 2413 " -> "C S 2413".
pub fn normalize_course_code(code: &str) -> String {
    code.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// The code with all whitespace removed: "C S 2413" -> "CS2413".
pub fn compact_course_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Splits a catalog code into subject and number.
///
/// Handles multi-word subjects like "C S", "A HI" or "B AD": with three or
/// more tokens and a first token of at most two characters, the first two
/// tokens form the subject.
///
/// # Examples
/// * "C S 2414" -> ("C S", "2414")
/// * "MATH 3333" -> ("MATH", "3333")
pub fn split_course_code(code: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = code.split_whitespace().collect();
    match parts.len() {
        0 | 1 => None,
        2 => Some((parts[0].to_string(), parts[1].to_string())),
        _ if parts[0].len() <= 2 => {
            Some((format!("{} {}", parts[0], parts[1]), parts[2].to_string()))
        }
        _ => Some((parts[0].to_string(), parts[1].to_string())),
    }
}

/// Tidies a feed title for display.
///
/// Drops a trailing campus annotation like " (Norman @ Main)" and a leading
/// "Lab-" prefix.
pub fn clean_title(title: &str) -> String {
    let mut title = title;
    if title.contains(" (") && title.contains('@') {
        if let Some((head, _)) = title.split_once(" (") {
            title = head;
        }
    }
    if let Some(rest) = title.strip_prefix("Lab-") {
        title = rest;
    }
    title.trim().to_string()
}

/// Counts a semester's offerings per subject, sorted by subject code.
pub fn count_by_department(offerings: &[CourseOffering], semester: &SemesterCode) -> Vec<DepartmentCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for offering in offerings {
        if offering.semester == semester.as_str() && !offering.subject.is_empty() {
            *counts.entry(offering.subject.as_str()).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(code, count)| DepartmentCount {
            code: code.to_string(),
            count,
        })
        .collect()
}
