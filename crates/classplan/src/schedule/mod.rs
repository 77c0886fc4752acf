//! Day/time conflict detection between a candidate offering and a schedule.

mod types;

pub use types::*;

use crate::catalog::CourseOffering;
use crate::meeting::MeetingBlock;
use tracing::debug;

/// Checks a candidate offering against the offerings already on a schedule.
pub trait ConflictChecker {
    fn check_conflicts(&self, candidate: &CourseOffering, existing: &[ScheduleEntry]) -> ConflictReport;
}

/// Returns true if two blocks share a day and their `[start, end)` intervals overlap.
///
/// Back-to-back blocks (one ends exactly when the other starts) don't
/// overlap. Blocks without days, or with a time token that can't be parsed,
/// never overlap.
pub fn blocks_overlap(a: &MeetingBlock, b: &MeetingBlock) -> bool {
    let days_a = a.day_set();
    if days_a.is_empty() || days_a.is_disjoint(&b.day_set()) {
        return false;
    }

    let (Some((start1, end1)), Some((start2, end2))) = (a.interval(), b.interval()) else {
        debug!(
            "Unparseable meeting time in '{}-{}' or '{}-{}', treating as no conflict",
            a.start_time, a.end_time, b.start_time, b.end_time
        );
        return false;
    };

    !(end1 <= start2 || end2 <= start1)
}

/// Returns true if any block of `a` overlaps any block of `b`.
pub fn offerings_conflict(a: &CourseOffering, b: &CourseOffering) -> bool {
    a.meetings
        .iter()
        .any(|block_a| b.meetings.iter().any(|block_b| blocks_overlap(block_a, block_b)))
}

/// Flags every scheduled offering that overlaps the candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleConflictDetector;

impl ScheduleConflictDetector {
    pub fn new() -> Self {
        Self
    }
}

impl ConflictChecker for ScheduleConflictDetector {
    fn check_conflicts(&self, candidate: &CourseOffering, existing: &[ScheduleEntry]) -> ConflictReport {
        if candidate.meetings.is_empty() {
            return ConflictReport::default();
        }

        let conflicts: Vec<ConflictRecord> = existing
            .iter()
            .map(|entry| &entry.offering)
            .filter(|offering| offerings_conflict(candidate, offering))
            .map(ConflictRecord::from_offering)
            .collect();

        if !conflicts.is_empty() {
            debug!(
                "{} conflicts with {} scheduled offerings",
                candidate.course_code(),
                conflicts.len()
            );
        }

        ConflictReport::from_conflicts(conflicts)
    }
}
