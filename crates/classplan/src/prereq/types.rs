/// Types for prerequisite evaluation
use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course the student has finished, as recorded on their transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub course_code: String, // e.g., "C S 2413", spacing not guaranteed
    pub credits: f32,
    pub grade: String,
    pub semester: String, // e.g., "Fall 2024"
}

/// Declared type of a prerequisite group.
///
/// Only affects the wording of the missing-prerequisite message; a group of
/// either kind is satisfied by any one of its courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupKind {
    Required,
    Or,
}

impl From<&str> for GroupKind {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("or") {
            GroupKind::Or
        } else {
            GroupKind::Required
        }
    }
}

impl From<String> for GroupKind {
    fn from(value: String) -> Self {
        GroupKind::from(value.as_str())
    }
}

impl From<GroupKind> for String {
    fn from(kind: GroupKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Required => write!(f, "required"),
            GroupKind::Or => write!(f, "or"),
        }
    }
}

/// A course named by a prerequisite group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrereqCourse {
    pub subject: String,
    pub number: String,
}

impl PrereqCourse {
    pub fn new(subject: &str, number: &str) -> Self {
        Self {
            subject: subject.to_string(),
            number: number.to_string(),
        }
    }

    /// "SUBJECT NUMBER", e.g. "MATH 1914".
    pub fn code(&self) -> String {
        format!("{} {}", self.subject.trim(), self.number.trim())
    }
}

/// A set of interchangeable courses; groups are ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteGroup {
    pub group: u32,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub courses: Vec<PrereqCourse>,
}

/// One stored prerequisite row, before grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteRow {
    /// Rows without a group number belong to group 1
    pub group: Option<u32>,
    pub kind: String,
    pub subject: String,
    pub number: String,
}

/// An unsatisfied prerequisite group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPrerequisite {
    pub group: u32,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub courses: Vec<PrereqCourse>,
    /// e.g. "One of: MATH 1914 or MATH 1823", "PHYS 2514 and MATH 2924"
    pub message: String,
}

/// Result of evaluating a course's prerequisites for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteReport {
    pub prerequisites_met: bool,
    pub missing: Vec<MissingPrerequisite>,
}

impl PrerequisiteReport {
    /// The report for a course with no prerequisites.
    pub fn satisfied() -> Self {
        Self {
            prerequisites_met: true,
            missing: Vec::new(),
        }
    }

    pub fn from_missing(missing: Vec<MissingPrerequisite>) -> Self {
        Self {
            prerequisites_met: missing.is_empty(),
            missing,
        }
    }
}

/// Everything the evaluator needs to know about a student's coursework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentHistory {
    pub completions: Vec<CompletionRecord>,
    /// All of the student's schedules; the evaluator picks the relevant ones
    pub schedules: Vec<Schedule>,
}
