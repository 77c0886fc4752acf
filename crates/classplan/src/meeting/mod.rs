/// Meeting-time parsing and display formatting
///
/// The registrar feed encodes an offering's meetings as `#`-separated blocks,
/// each a tuple of fields separated by `" , "` (space, comma, space):
///
/// ```text
/// startDate , endDate , startTime , endTime , building , room , days , scheduleType
/// ```
///
/// e.g. `Aug 25 , Dec 12 , 10:00 am , 10:50 am , Felgar Hall , 300 , MWF , CLAS`.
mod types;

pub use types::*;

use chrono::NaiveTime;
use tracing::debug;

/// Placeholder rendered for offerings without any meeting blocks.
pub const TBA: &str = "TBA";

/// Separator between meeting blocks in the raw encoding.
const BLOCK_SEPARATOR: char = '#';

/// Separator between fields of a block. Bare commas may appear inside a field.
const FIELD_SEPARATOR: &str = " , ";

/// Minimum number of fields a block needs to be usable (through `days`).
const MIN_BLOCK_FIELDS: usize = 7;

/// Parses the raw meeting-time encoding into structured blocks.
///
/// Blocks with fewer than seven fields are dropped. Blank input yields no
/// blocks, which callers render as "TBA".
///
/// # Arguments
/// * `raw` - The meeting-time string as published by the registrar feed
///
/// # Returns
/// * Blocks in the order they appear in the input
pub fn parse_meeting_times(raw: &str) -> Vec<MeetingBlock> {
    let mut blocks = Vec::new();

    for (index, block) in raw.split(BLOCK_SEPARATOR).enumerate() {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let fields: Vec<&str> = block.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() < MIN_BLOCK_FIELDS {
            debug!(
                "Dropping meeting block {} with {} fields: {:?}",
                index,
                fields.len(),
                block
            );
            continue;
        }

        // fields[0..2] are the term's start/end dates, fields[7] the schedule type
        blocks.push(MeetingBlock {
            start_time: fields[2].to_string(),
            end_time: fields[3].to_string(),
            building: fields[4].to_string(),
            room: fields[5].to_string(),
            days: fields[6].to_string(),
        });
    }

    blocks
}

/// Parses an "h:mm", "h:mm am" or "h:mm PM" token into a time of day.
///
/// Missing minutes default to zero. A blank token is midnight. Returns `None`
/// for anything that doesn't yield a valid time, including hours above 12
/// alongside an am/pm marker.
pub fn parse_time(token: &str) -> Option<NaiveTime> {
    let upper = token.trim().to_uppercase();
    if upper.is_empty() {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }

    let is_pm = upper.contains("PM");
    let has_marker = is_pm || upper.contains("AM");
    let bare = upper.replace("AM", "").replace("PM", "");

    let mut parts = bare.trim().split(':');
    let mut hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    if has_marker && hours > 12 {
        return None;
    }

    if is_pm && hours != 12 {
        hours += 12;
    } else if !is_pm && hours == 12 {
        hours = 0;
    }

    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Renders blocks as a compact display string.
///
/// Blocks sharing a start/end pair are merged: their day strings are
/// deduplicated, sorted and concatenated, giving e.g. "MW 10:00 am-10:50 am".
/// Groups keep first-seen order and are joined with ", ".
pub fn format_meeting_times(blocks: &[MeetingBlock]) -> String {
    let mut groups: Vec<((&str, &str), Vec<&str>)> = Vec::new();

    for block in blocks {
        let key = (block.start_time.as_str(), block.end_time.as_str());
        let position = match groups.iter().position(|(k, _)| *k == key) {
            Some(position) => position,
            None => {
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        if !block.days.is_empty() {
            groups[position].1.push(block.days.as_str());
        }
    }

    let formatted: Vec<String> = groups
        .into_iter()
        .map(|((start, end), mut days)| {
            days.sort_unstable();
            days.dedup();
            if days.is_empty() {
                format!("{}-{}", start, end)
            } else {
                format!("{} {}-{}", days.concat(), start, end)
            }
        })
        .collect();

    if formatted.is_empty() {
        TBA.to_string()
    } else {
        formatted.join(", ")
    }
}

/// Day strings of every block that has any, in block order.
pub fn extract_days(blocks: &[MeetingBlock]) -> Vec<String> {
    blocks
        .iter()
        .filter(|b| !b.days.is_empty())
        .map(|b| b.days.clone())
        .collect()
}

/// Location of the first block, or "TBA" when there are none.
pub fn primary_location(blocks: &[MeetingBlock]) -> String {
    blocks
        .first()
        .map(MeetingBlock::location)
        .unwrap_or_else(|| TBA.to_string())
}
