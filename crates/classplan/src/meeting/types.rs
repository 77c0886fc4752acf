/// Types for class meeting times
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One recurring day/time/location slot of an offering.
///
/// Times are kept as the registrar publishes them ("10:00 am") so they can be
/// echoed back for display; `interval` parses them on demand. The interval is
/// half-open, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingBlock {
    pub days: String,       // e.g., "MWF", "TR"
    pub start_time: String, // e.g., "10:00 am"
    pub end_time: String,   // e.g., "10:50 am"
    pub building: String,
    pub room: String,
}

impl MeetingBlock {
    /// Building and room joined for display, e.g. "Felgar Hall 300".
    pub fn location(&self) -> String {
        format!("{} {}", self.building, self.room).trim().to_string()
    }

    /// The set of single-letter day codes this block meets on.
    pub fn day_set(&self) -> HashSet<char> {
        self.days.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Parsed `[start, end)` interval, or `None` if either token is unparseable.
    pub fn interval(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = super::parse_time(&self.start_time)?;
        let end = super::parse_time(&self.end_time)?;
        Some((start, end))
    }
}
