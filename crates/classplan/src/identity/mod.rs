//! Instructor identity resolution.
//!
//! Maps a free-text instructor name from the registrar feed onto a rated
//! identity from the ratings feed by scoring every name variant against every
//! candidate and keeping the best score that clears the configured threshold.

pub mod normalize;
pub mod scoring;
mod types;

pub use types::*;

use crate::config::PlannerConfig;
use normalize::name_variations;
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Score at which a variant can't be beaten and scanning stops.
const PERFECT_SCORE: f64 = 100.0;

/// Resolves raw instructor names to rated identities.
pub trait NameResolver {
    /// Resolves one name, or `None` for placeholders and unmatched names.
    fn resolve(&self, raw_name: &str) -> Option<IdentityMatch>;

    /// Resolves many names at once, keyed by the raw name as given.
    ///
    /// Each distinct name is resolved once no matter how often it repeats.
    fn resolve_batch(&self, raw_names: &[&str]) -> HashMap<String, Option<IdentityMatch>> {
        resolve_each_once(raw_names, |name| self.resolve(name))
    }

    /// Rating data for a name, falling back to the empty sentinel.
    fn rating_for(&self, raw_name: &str) -> RatingSummary {
        RatingSummary::from(self.resolve(raw_name).as_ref())
    }
}

/// Resolves each distinct name once, keyed by the raw name as given.
fn resolve_each_once<F>(raw_names: &[&str], mut resolve: F) -> HashMap<String, Option<IdentityMatch>>
where
    F: FnMut(&str) -> Option<IdentityMatch>,
{
    let mut resolved = HashMap::new();
    for name in raw_names {
        if !resolved.contains_key(*name) {
            resolved.insert(name.to_string(), resolve(name));
        }
    }
    resolved
}

/// Returns true for names that mean "no instructor assigned".
pub fn is_placeholder_name(raw_name: &str) -> bool {
    let trimmed = raw_name.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("TBA")
}

/// Rated identities prepared for repeated scoring.
///
/// Each candidate's "First Last" is reduced to its sorted-token key once,
/// when the pool is built, so a batch of names pays that cost only once.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    identities: Vec<Identity>,
    keys: Vec<String>,
}

impl CandidatePool {
    /// Builds a pool from identities, keeping only those with a positive rating.
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        let identities: Vec<Identity> = identities.into_iter().filter(Identity::is_rated).collect();
        let keys = identities
            .iter()
            .map(|i| scoring::sort_key(&i.full_name()))
            .collect();
        Self { identities, keys }
    }

    /// Builds a pool from the caller's lookup result.
    ///
    /// A failed lookup is logged and becomes an empty pool, so every name
    /// resolves to the sentinel instead of the failure reaching the caller's
    /// rendering path.
    pub fn from_lookup<E: Display>(lookup: Result<Vec<Identity>, E>) -> Self {
        match lookup {
            Ok(identities) => Self::new(identities),
            Err(e) => {
                warn!("Identity lookup failed, resolving against an empty pool: {}", e);
                Self::default()
            }
        }
    }

    /// Keeps at most `max` candidates, in the order they were supplied.
    pub fn truncate(mut self, max: usize) -> Self {
        self.identities.truncate(max);
        self.keys.truncate(max);
        self
    }

    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Best-scoring candidate for a sorted-token key; earliest wins ties.
    fn best_for_key(&self, key: &str) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in self.keys.iter().enumerate() {
            let score = scoring::ratio(key, candidate);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((index, score));
                if score >= PERFECT_SCORE {
                    break;
                }
            }
        }
        best
    }
}

/// Fuzzy matcher over a candidate pool.
///
/// Every variant of a name is scored and the global best above the threshold
/// wins. Ties go to the earlier variant, then the earlier candidate.
#[derive(Debug, Clone)]
pub struct IdentityMatcher {
    pool: CandidatePool,
    threshold: u8,
}

impl IdentityMatcher {
    /// Creates a matcher. Thresholds above 100 are clamped to 100.
    pub fn new(pool: CandidatePool, threshold: u8) -> Self {
        Self {
            pool,
            threshold: threshold.min(100),
        }
    }

    /// Creates a matcher honoring the configured threshold and pool bound.
    pub fn from_config(pool: CandidatePool, config: &PlannerConfig) -> Self {
        let pool = match config.max_candidates {
            Some(max) => pool.truncate(max),
            None => pool,
        };
        Self::new(pool, config.fuzzy_match_threshold)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }
}

impl NameResolver for IdentityMatcher {
    fn resolve(&self, raw_name: &str) -> Option<IdentityMatch> {
        if is_placeholder_name(raw_name) || self.pool.is_empty() {
            return None;
        }

        let threshold = f64::from(self.threshold);
        let mut best: Option<(usize, f64, String)> = None;

        for variant in name_variations(raw_name) {
            let Some((index, score)) = self.pool.best_for_key(&scoring::sort_key(&variant)) else {
                continue;
            };
            if score < threshold {
                continue;
            }
            if best.as_ref().map_or(true, |(_, s, _)| score > *s) {
                best = Some((index, score, variant));
                if score >= PERFECT_SCORE {
                    break;
                }
            }
        }

        match best {
            Some((index, score, variant)) => {
                let identity = self.pool.identities[index].clone();
                debug!(
                    "Resolved instructor '{}' to {} ({}) via '{}' with score {:.1}",
                    raw_name,
                    identity.full_name(),
                    identity.id,
                    variant,
                    score
                );
                Some(IdentityMatch {
                    identity,
                    score,
                    variant,
                })
            }
            None => {
                debug!(
                    "No identity for instructor '{}' at threshold {}",
                    raw_name, self.threshold
                );
                None
            }
        }
    }

    fn resolve_batch(&self, raw_names: &[&str]) -> HashMap<String, Option<IdentityMatch>> {
        let resolved = resolve_each_once(raw_names, |name| self.resolve(name));

        let matched = resolved.values().filter(|m| m.is_some()).count();
        info!(
            "Resolved {} of {} distinct instructor names against {} candidates",
            matched,
            resolved.len(),
            self.pool.len()
        );

        resolved
    }
}
