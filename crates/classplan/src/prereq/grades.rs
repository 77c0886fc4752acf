/// Grade scale and transcript totals
use super::CompletionRecord;

/// Letter-grade helper
#[derive(Debug, Clone)]
pub struct GradeScale;

impl GradeScale {
    /// Quality points for a letter grade; `None` for grades outside the A-F scale
    pub fn grade_points(grade: &str) -> Option<f64> {
        match grade.trim().to_ascii_uppercase().as_str() {
            "A" => Some(4.0),
            "B" => Some(3.0),
            "C" => Some(2.0),
            "D" => Some(1.0),
            "F" => Some(0.0),
            _ => None,
        }
    }

    /// Checks if a grade earns credit (D or better, or a pass/satisfactory mark)
    pub fn is_passing_grade(grade: &str) -> bool {
        matches!(
            grade.trim().to_ascii_uppercase().as_str(),
            "A" | "B" | "C" | "D" | "P" | "S"
        )
    }
}

/// Sum of credits over all records, whatever the grade.
pub fn total_credits(records: &[CompletionRecord]) -> f32 {
    records.iter().map(|r| r.credits).sum()
}

/// Sum of credits over records with a passing grade.
pub fn earned_credits(records: &[CompletionRecord]) -> f32 {
    records
        .iter()
        .filter(|r| GradeScale::is_passing_grade(&r.grade))
        .map(|r| r.credits)
        .sum()
}

/// Credit-weighted GPA over letter-graded records.
///
/// Pass/fail, withdrawals and in-progress marks don't count toward either
/// side. Returns `None` when no graded credits remain.
pub fn gpa(records: &[CompletionRecord]) -> Option<f64> {
    let mut points = 0.0;
    let mut credits = 0.0;

    for record in records {
        if let Some(value) = GradeScale::grade_points(&record.grade) {
            points += value * f64::from(record.credits);
            credits += f64::from(record.credits);
        }
    }

    if credits > 0.0 {
        Some(points / credits)
    } else {
        None
    }
}

/// GPA rendered to two decimals, "0.00" when there is none.
pub fn format_gpa(gpa: Option<f64>) -> String {
    format!("{:.2}", gpa.unwrap_or(0.0))
}
