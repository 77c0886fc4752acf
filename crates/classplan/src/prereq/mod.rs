//! Prerequisite evaluation against a student's completed and scheduled courses.
//!
//! A course's prerequisites are stored as numbered groups. Every group must be
//! satisfied, and a group is satisfied by any one of its courses appearing
//! either on the student's transcript or on a schedule for the current or an
//! earlier semester.

pub mod grades;
mod types;

pub use types::*;

use crate::catalog::{compact_course_code, normalize_course_code};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Decides whether a student may take a course given its prerequisite groups.
pub trait PrerequisiteChecker {
    fn check_prerequisites(
        &self,
        groups: &[PrerequisiteGroup],
        history: &StudentHistory,
        current_semester: &str,
    ) -> PrerequisiteReport;
}

/// Folds flat stored rows into groups ordered by group number.
///
/// Rows keep their stored order within a group, and the first row seen for a
/// group decides its type.
pub fn group_prerequisite_rows(rows: &[PrerequisiteRow]) -> Vec<PrerequisiteGroup> {
    let mut groups: BTreeMap<u32, PrerequisiteGroup> = BTreeMap::new();

    for row in rows {
        let number = row.group.unwrap_or(1);
        groups
            .entry(number)
            .or_insert_with(|| PrerequisiteGroup {
                group: number,
                kind: GroupKind::from(row.kind.as_str()),
                courses: Vec::new(),
            })
            .courses
            .push(PrereqCourse::new(&row.subject, &row.number));
    }

    groups.into_values().collect()
}

/// Course codes stored both spaced and unspaced, so "C S 2413" and "CS2413"
/// find each other.
#[derive(Debug, Default)]
pub struct CourseCodeSet {
    codes: HashSet<String>,
}

impl CourseCodeSet {
    pub fn insert(&mut self, code: &str) {
        let normalized = normalize_course_code(code);
        if normalized.is_empty() {
            return;
        }
        self.codes.insert(compact_course_code(&normalized));
        self.codes.insert(normalized);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&normalize_course_code(code))
            || self.codes.contains(&compact_course_code(code))
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// The prerequisite evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrerequisiteEvaluator;

impl PrerequisiteEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Codes from the student's transcript.
    pub fn completed_codes(history: &StudentHistory) -> CourseCodeSet {
        let mut codes = CourseCodeSet::default();
        for record in &history.completions {
            codes.insert(&record.course_code);
        }
        codes
    }

    /// Codes scheduled in `current_semester` or any earlier semester.
    ///
    /// Semester codes are zero-padded `YYYYTT`, so string order is
    /// chronological order.
    pub fn scheduled_codes(history: &StudentHistory, current_semester: &str) -> CourseCodeSet {
        let mut codes = CourseCodeSet::default();
        for schedule in history
            .schedules
            .iter()
            .filter(|s| s.semester.as_str() <= current_semester)
        {
            for entry in &schedule.entries {
                codes.insert(&entry.offering.course_code());
            }
        }
        codes
    }

    /// Message for an unsatisfied group.
    pub fn missing_message(group: &PrerequisiteGroup) -> String {
        let codes: Vec<String> = group.courses.iter().map(PrereqCourse::code).collect();
        match group.kind {
            GroupKind::Or => format!("One of: {}", codes.join(" or ")),
            GroupKind::Required => codes.join(" and "),
        }
    }
}

impl PrerequisiteChecker for PrerequisiteEvaluator {
    fn check_prerequisites(
        &self,
        groups: &[PrerequisiteGroup],
        history: &StudentHistory,
        current_semester: &str,
    ) -> PrerequisiteReport {
        if groups.is_empty() {
            return PrerequisiteReport::satisfied();
        }

        let completed = Self::completed_codes(history);
        let scheduled = Self::scheduled_codes(history, current_semester);

        let mut missing = Vec::new();
        for group in groups {
            if group.courses.is_empty() {
                debug!("Skipping prerequisite group {} with no courses", group.group);
                continue;
            }

            let satisfied = group.courses.iter().any(|course| {
                let code = course.code();
                completed.contains(&code) || scheduled.contains(&code)
            });

            if !satisfied {
                let message = Self::missing_message(group);
                debug!("Prerequisite group {} not met: {}", group.group, message);
                missing.push(MissingPrerequisite {
                    group: group.group,
                    kind: group.kind,
                    courses: group.courses.clone(),
                    message,
                });
            }
        }

        PrerequisiteReport::from_missing(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseOffering;
    use crate::schedule::{Schedule, ScheduleEntry};

    fn completion(code: &str) -> CompletionRecord {
        CompletionRecord {
            course_code: code.to_string(),
            credits: 3.0,
            grade: "A".to_string(),
            semester: "Fall 2024".to_string(),
        }
    }

    fn schedule(semester: &str, courses: &[(&str, &str)]) -> Schedule {
        Schedule {
            id: 1,
            semester: semester.to_string(),
            entries: courses
                .iter()
                .map(|(subject, number)| ScheduleEntry {
                    offering: CourseOffering::from_feed(
                        "x", subject, number, "001", "", semester, "TBA", "",
                    ),
                    color: "#10b981".to_string(),
                })
                .collect(),
        }
    }

    fn group(number: u32, kind: GroupKind, courses: &[(&str, &str)]) -> PrerequisiteGroup {
        PrerequisiteGroup {
            group: number,
            kind,
            courses: courses.iter().map(|(s, n)| PrereqCourse::new(s, n)).collect(),
        }
    }

    fn check(groups: &[PrerequisiteGroup], history: &StudentHistory, semester: &str) -> PrerequisiteReport {
        PrerequisiteEvaluator::new().check_prerequisites(groups, history, semester)
    }

    #[test]
    fn test_no_prerequisites_is_satisfied() {
        let report = check(&[], &StudentHistory::default(), "202510");
        assert_eq!(report, PrerequisiteReport::satisfied());
    }

    #[test]
    fn test_spaced_subject_matches_completion() {
        let history = StudentHistory {
            completions: vec![completion("C S 2413")],
            ..Default::default()
        };
        let groups = vec![group(1, GroupKind::Required, &[("C S", "2413")])];
        assert!(check(&groups, &history, "202510").prerequisites_met);
    }

    #[test]
    fn test_inconsistent_spacing_still_matches() {
        let history = StudentHistory {
            completions: vec![completion("cs2413")],
            ..Default::default()
        };
        let groups = vec![group(1, GroupKind::Required, &[("C S", "2413")])];
        assert!(check(&groups, &history, "202510").prerequisites_met);
    }

    #[test]
    fn test_or_group_satisfied_by_one_member() {
        let history = StudentHistory {
            completions: vec![completion("MATH 1823")],
            ..Default::default()
        };
        let groups = vec![group(1, GroupKind::Or, &[("MATH", "1914"), ("MATH", "1823")])];
        let report = check(&groups, &history, "202510");
        assert!(report.prerequisites_met);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_required_group_satisfied_by_any_member() {
        let history = StudentHistory {
            completions: vec![completion("PHYS 2514")],
            ..Default::default()
        };
        let groups = vec![group(1, GroupKind::Required, &[("PHYS", "2514"), ("MATH", "2924")])];
        assert!(check(&groups, &history, "202510").prerequisites_met);
    }

    #[test]
    fn test_missing_messages_by_kind() {
        let groups = vec![
            group(1, GroupKind::Or, &[("MATH", "1914"), ("MATH", "1823")]),
            group(2, GroupKind::Required, &[("PHYS", "2514"), ("MATH", "2924")]),
        ];
        let report = check(&groups, &StudentHistory::default(), "202510");
        assert!(!report.prerequisites_met);
        assert_eq!(report.missing.len(), 2);
        assert_eq!(report.missing[0].kind, GroupKind::Or);
        assert_eq!(report.missing[0].message, "One of: MATH 1914 or MATH 1823");
        assert_eq!(report.missing[1].kind, GroupKind::Required);
        assert_eq!(report.missing[1].message, "PHYS 2514 and MATH 2924");
    }

    #[test]
    fn test_earlier_and_current_schedules_count() {
        let history = StudentHistory {
            completions: vec![],
            schedules: vec![
                schedule("202420", &[("MATH", "1914")]),
                schedule("202510", &[("PHYS", "2514")]),
                schedule("202520", &[("C S", "2413")]),
            ],
        };
        let groups = vec![
            group(1, GroupKind::Required, &[("MATH", "1914")]),
            group(2, GroupKind::Required, &[("PHYS", "2514")]),
            group(3, GroupKind::Required, &[("C S", "2413")]),
        ];
        let report = check(&groups, &history, "202510");
        assert!(!report.prerequisites_met);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].group, 3);
    }

    #[test]
    fn test_group_rows() {
        let rows = vec![
            PrerequisiteRow { group: Some(2), kind: "required".into(), subject: "PHYS".into(), number: "2514".into() },
            PrerequisiteRow { group: None, kind: "or".into(), subject: "MATH".into(), number: "1914".into() },
            PrerequisiteRow { group: Some(1), kind: "required".into(), subject: "MATH".into(), number: "1823".into() },
        ];
        let groups = group_prerequisite_rows(&rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, 1);
        assert_eq!(groups[0].kind, GroupKind::Or);
        assert_eq!(
            groups[0].courses,
            vec![PrereqCourse::new("MATH", "1914"), PrereqCourse::new("MATH", "1823")]
        );
        assert_eq!(groups[1].group, 2);
        assert_eq!(groups[1].kind, GroupKind::Required);
    }

    #[test]
    fn test_report_json_shape() {
        let groups = vec![group(1, GroupKind::Or, &[("MATH", "1914")])];
        let report = check(&groups, &StudentHistory::default(), "202510");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["prerequisites_met"], false);
        assert_eq!(json["missing"][0]["type"], "or");
        assert_eq!(json["missing"][0]["courses"][0]["number"], "1914");

        let parsed: PrerequisiteGroup =
            serde_json::from_str(r#"{"group": 4, "type": "OR", "courses": []}"#).unwrap();
        assert_eq!(parsed.kind, GroupKind::Or);
    }
}
