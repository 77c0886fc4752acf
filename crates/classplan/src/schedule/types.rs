/// Types for student schedules and conflict results
use crate::catalog::CourseOffering;
use serde::{Deserialize, Serialize};

/// An offering placed on a schedule, with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub offering: CourseOffering,
    pub color: String, // e.g., "#3b82f6"
}

/// One student's schedule for one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub semester: String, // zero-padded code, e.g. "202510"
    pub entries: Vec<ScheduleEntry>,
}

/// An existing offering that overlaps the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub class_id: String,
    pub subject: String,
    #[serde(rename = "number")]
    pub course_number: String,
    pub title: String,
    /// Formatted meeting times of the existing offering
    pub time: String,
    pub days: Vec<String>,
}

impl ConflictRecord {
    pub fn from_offering(offering: &CourseOffering) -> Self {
        Self {
            class_id: offering.id.clone(),
            subject: offering.subject.clone(),
            course_number: offering.course_number.clone(),
            title: offering.title.clone(),
            time: offering.formatted_time(),
            days: offering.days(),
        }
    }

    /// User-facing message, e.g. "Time conflict with MATH 1914".
    pub fn message(&self) -> String {
        format!("Time conflict with {} {}", self.subject, self.course_number)
    }
}

/// Result of checking a candidate against a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConflictReport {
    pub has_conflict: bool,
    pub conflicts: Vec<ConflictRecord>,
}

impl ConflictReport {
    pub fn from_conflicts(conflicts: Vec<ConflictRecord>) -> Self {
        Self {
            has_conflict: !conflicts.is_empty(),
            conflicts,
        }
    }
}
