//! Checks run before an offering is added to a schedule.

use crate::catalog::CourseOffering;
use crate::prereq::{PrerequisiteChecker, PrerequisiteGroup, PrerequisiteReport, StudentHistory};
use crate::schedule::{ConflictChecker, ConflictReport, Schedule};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Combined outcome of the conflict and prerequisite checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionReport {
    pub conflicts: ConflictReport,
    pub prerequisites: PrerequisiteReport,
    /// No conflicts and every prerequisite group met
    pub allowed: bool,
}

/// Runs both checks for an "add course" request.
#[derive(Debug, Clone, Default)]
pub struct AdditionValidator<C, P> {
    conflicts: C,
    prerequisites: P,
}

impl<C: ConflictChecker, P: PrerequisiteChecker> AdditionValidator<C, P> {
    pub fn new(conflicts: C, prerequisites: P) -> Self {
        Self {
            conflicts,
            prerequisites,
        }
    }

    /// Validates adding `candidate` to `schedule`.
    ///
    /// Prerequisites are evaluated as of the schedule's semester.
    pub fn validate(
        &self,
        candidate: &CourseOffering,
        schedule: &Schedule,
        prerequisite_groups: &[PrerequisiteGroup],
        history: &StudentHistory,
    ) -> AdditionReport {
        let conflicts = self.conflicts.check_conflicts(candidate, &schedule.entries);
        let prerequisites =
            self.prerequisites
                .check_prerequisites(prerequisite_groups, history, &schedule.semester);
        let allowed = !conflicts.has_conflict && prerequisites.prerequisites_met;

        info!(
            "Validated {} for schedule {}: {} conflicts, {} missing prerequisite groups",
            candidate.course_code(),
            schedule.id,
            conflicts.conflicts.len(),
            prerequisites.missing.len()
        );

        AdditionReport {
            conflicts,
            prerequisites,
            allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prereq::{CompletionRecord, GroupKind, PrereqCourse, PrerequisiteEvaluator};
    use crate::schedule::{ScheduleConflictDetector, ScheduleEntry};

    fn offering(id: &str, subject: &str, number: &str, raw_times: &str) -> CourseOffering {
        CourseOffering::from_feed(id, subject, number, "001", "Title", "202510", "TBA", raw_times)
    }

    fn validator() -> AdditionValidator<ScheduleConflictDetector, PrerequisiteEvaluator> {
        AdditionValidator::new(ScheduleConflictDetector::new(), PrerequisiteEvaluator::new())
    }

    fn calc_one_schedule() -> Schedule {
        Schedule {
            id: 7,
            semester: "202510".to_string(),
            entries: vec![ScheduleEntry {
                offering: offering(
                    "e1",
                    "MATH",
                    "1914",
                    "Aug 25 , Dec 12 , 9:00 am , 9:50 am , Physical Sciences , 201 , MWF , CLAS",
                ),
                color: "#3b82f6".to_string(),
            }],
        }
    }

    fn needs_calc_one() -> Vec<PrerequisiteGroup> {
        vec![PrerequisiteGroup {
            group: 1,
            kind: GroupKind::Required,
            courses: vec![PrereqCourse::new("MATH", "1914")],
        }]
    }

    #[test]
    fn test_allowed_when_clear() {
        let candidate = offering(
            "new",
            "MATH",
            "1924",
            "Aug 25 , Dec 12 , 10:00 am , 10:50 am , Physical Sciences , 201 , MWF , CLAS",
        );
        let history = StudentHistory {
            completions: vec![],
            schedules: vec![calc_one_schedule()],
        };

        let report = validator().validate(&candidate, &calc_one_schedule(), &needs_calc_one(), &history);
        assert!(!report.conflicts.has_conflict);
        assert!(report.prerequisites.prerequisites_met);
        assert!(report.allowed);
    }

    #[test]
    fn test_conflict_blocks_addition() {
        let candidate = offering(
            "new",
            "PHYS",
            "2514",
            "Aug 25 , Dec 12 , 9:30 am , 10:20 am , Nielsen Hall , 170 , W , CLAS",
        );
        let report = validator().validate(&candidate, &calc_one_schedule(), &[], &StudentHistory::default());
        assert!(report.conflicts.has_conflict);
        assert!(report.prerequisites.prerequisites_met);
        assert!(!report.allowed);
    }

    #[test]
    fn test_missing_prerequisite_blocks_addition() {
        let candidate = offering("new", "MATH", "1924", "");
        let history = StudentHistory {
            completions: vec![CompletionRecord {
                course_code: "ENGL 1113".to_string(),
                credits: 3.0,
                grade: "B".to_string(),
                semester: "Fall 2024".to_string(),
            }],
            schedules: vec![],
        };
        let empty = Schedule {
            id: 8,
            semester: "202510".to_string(),
            entries: vec![],
        };

        let report = validator().validate(&candidate, &empty, &needs_calc_one(), &history);
        assert!(!report.conflicts.has_conflict);
        assert!(!report.prerequisites.prerequisites_met);
        assert_eq!(report.prerequisites.missing[0].message, "MATH 1914");
        assert!(!report.allowed);
    }
}
