/// Types for rated instructor identities
use serde::{Deserialize, Serialize};

/// An instructor record from the ratings feed.
///
/// Populated by the ETL side and read-only here. The ratings feed shares no
/// identifier with the registrar feed, so these are only ever correlated with
/// offerings by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub avg_difficulty: f64,
    #[serde(default)]
    pub would_take_again_percent: f64,
    #[serde(default)]
    pub num_ratings: u32,
    /// Counts of 1-star through 5-star ratings
    #[serde(default)]
    pub rating_distribution: [u32; 5],
    /// Comma-joined tag list, e.g. "Tough grader,Clear lectures"
    #[serde(default)]
    pub teacher_tags: String,
}

impl Identity {
    /// "First Last", the form candidates are scored against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Splits the stored tag string, dropping blanks.
    pub fn tags(&self) -> Vec<String> {
        self.teacher_tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Only identities with a positive rating take part in matching.
    pub fn is_rated(&self) -> bool {
        self.avg_rating > 0.0
    }
}

/// A successful name resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityMatch {
    pub identity: Identity,
    /// Token-sort-ratio of the winning variant against the identity, 0-100
    pub score: f64,
    /// The name variant that produced the score
    pub variant: String,
}

/// Rating data attached to an offering for display.
///
/// `RatingSummary::empty()` is the "no identity" sentinel used for TBA
/// instructors, unmatched names and failed lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub identity_id: Option<String>,
    pub rating: f64,
    pub difficulty: f64,
    pub would_take_again: f64,
    pub num_ratings: u32,
    pub rating_distribution: [u32; 5],
    pub tags: Vec<String>,
}

impl RatingSummary {
    /// The sentinel: zeroed stats, zeroed distribution, no tags.
    pub fn empty() -> Self {
        Self {
            identity_id: None,
            rating: 0.0,
            difficulty: 0.0,
            would_take_again: 0.0,
            num_ratings: 0,
            rating_distribution: [0; 5],
            tags: Vec::new(),
        }
    }

    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            identity_id: Some(identity.id.clone()),
            rating: identity.avg_rating,
            difficulty: identity.avg_difficulty,
            would_take_again: identity.would_take_again_percent,
            num_ratings: identity.num_ratings,
            rating_distribution: identity.rating_distribution,
            tags: identity.tags(),
        }
    }

    /// Returns true for the sentinel.
    pub fn is_empty(&self) -> bool {
        self.identity_id.is_none()
    }
}

impl Default for RatingSummary {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Option<&IdentityMatch>> for RatingSummary {
    fn from(resolved: Option<&IdentityMatch>) -> Self {
        resolved
            .map(|m| RatingSummary::from_identity(&m.identity))
            .unwrap_or_else(RatingSummary::empty)
    }
}
