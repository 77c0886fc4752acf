/// Configuration for the planner engine
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Tunables shared by the identity matcher, the listing layer and the caches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Minimum token-sort-ratio (0-100) a candidate needs to be accepted
    pub fuzzy_match_threshold: u8,
    /// Upper bound on how many rated identities are scored per name
    pub max_candidates: Option<usize>,
    /// Listings longer than this skip rating resolution entirely
    pub skip_ratings_threshold: usize,
    /// Lifetime of cached department counts, in seconds
    pub department_cache_ttl_secs: u64,
    /// Semester used when a request names none
    pub default_semester: String,
}

impl PlannerConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults and unknown fields are
    /// ignored. The loaded configuration is validated before it is returned.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON configuration file
    ///
    /// # Returns
    /// * `Ok(PlannerConfig)` - Loaded and validated configuration
    /// * `Err` - If the file can't be read, parsed, or holds out-of-range values
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is within its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.fuzzy_match_threshold > 100 {
            return Err(PlannerError::InvalidConfigValue {
                field: "fuzzy_match_threshold".to_string(),
                value: self.fuzzy_match_threshold.to_string(),
                reason: "must be between 0 and 100".to_string(),
            });
        }

        if self.max_candidates == Some(0) {
            return Err(PlannerError::InvalidConfigValue {
                field: "max_candidates".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1 when set".to_string(),
            });
        }

        if crate::catalog::SemesterCode::parse(&self.default_semester).is_err() {
            return Err(PlannerError::InvalidConfigValue {
                field: "default_semester".to_string(),
                value: self.default_semester.clone(),
                reason: "expected a six digit YYYYTT code".to_string(),
            });
        }

        Ok(())
    }

    /// Whether a listing of `listing_len` offerings should carry rating data.
    pub fn should_resolve_ratings(&self, listing_len: usize) -> bool {
        listing_len <= self.skip_ratings_threshold
    }

    /// Lifetime of cached department counts.
    pub fn department_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.department_cache_ttl_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuzzy_match_threshold: 100,
            max_candidates: None,
            skip_ratings_threshold: 500,
            department_cache_ttl_secs: 300,
            default_semester: "202510".to_string(),
        }
    }
}
