/// Types for registrar catalog data
use crate::meeting::{self, MeetingBlock};
use serde::{Deserialize, Serialize};

/// One section of a course in one term, as published by the registrar feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    pub id: String,
    pub subject: String,       // e.g., "C S", "MATH"
    pub course_number: String, // e.g., "2413"
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub semester: String, // e.g., "202510"
    /// Raw instructor name exactly as the feed publishes it
    #[serde(default)]
    pub instructor: String,
    /// Empty for async and TBA sections
    #[serde(default)]
    pub meetings: Vec<MeetingBlock>,
}

impl CourseOffering {
    /// Builds an offering from feed fields, parsing the meeting-time string.
    ///
    /// This is the single point where the raw encoding is parsed; everything
    /// downstream works on the structured blocks.
    #[allow(clippy::too_many_arguments)]
    pub fn from_feed(
        id: &str,
        subject: &str,
        course_number: &str,
        section: &str,
        title: &str,
        semester: &str,
        instructor: &str,
        raw_meeting_times: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            subject: subject.trim().to_string(),
            course_number: course_number.trim().to_string(),
            section: section.trim().to_string(),
            title: super::clean_title(title),
            semester: semester.trim().to_string(),
            instructor: instructor.trim().to_string(),
            meetings: meeting::parse_meeting_times(raw_meeting_times),
        }
    }

    /// "SUBJECT NUMBER", e.g. "C S 2413".
    pub fn course_code(&self) -> String {
        format!("{} {}", self.subject, self.course_number)
    }

    /// Display string for the meeting times, "TBA" when there are none.
    pub fn formatted_time(&self) -> String {
        meeting::format_meeting_times(&self.meetings)
    }

    pub fn days(&self) -> Vec<String> {
        meeting::extract_days(&self.meetings)
    }

    pub fn location(&self) -> String {
        meeting::primary_location(&self.meetings)
    }

    /// Instructor name for display, "TBA" when unassigned.
    pub fn instructor_display(&self) -> &str {
        if self.instructor.trim().is_empty() {
            meeting::TBA
        } else {
            &self.instructor
        }
    }
}

/// Number of offerings a subject has in one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub code: String,
    pub count: usize,
}
