//! Zero-padded semester codes.
//!
//! Codes are `YYYYTT` where `TT` is `10` (Fall of `YYYY`), `20` (Spring of
//! `YYYY + 1`) or `30` (Summer of `YYYY + 1`). Because the year comes first and
//! is zero-padded, plain string comparison is chronological comparison.

use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic term within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Spring,
    Summer,
}

impl Term {
    fn suffix(self) -> &'static str {
        match self {
            Term::Fall => "10",
            Term::Spring => "20",
            Term::Summer => "30",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
        };
        write!(f, "{}", name)
    }
}

/// A validated semester code such as "202510".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemesterCode(String);

impl SemesterCode {
    /// Parses a code, rejecting anything that isn't six digits ending in 10, 20 or 30.
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        let valid = code.len() == 6
            && code.chars().all(|c| c.is_ascii_digit())
            && matches!(&code[4..], "10" | "20" | "30");
        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(PlannerError::InvalidSemesterCode {
                code: code.to_string(),
            })
        }
    }

    /// Builds the code for a display label like "Spring 2025".
    pub fn from_label(label: &str) -> Option<Self> {
        let mut parts = label.split_whitespace();
        let term = match parts.next()?.to_ascii_lowercase().as_str() {
            "fall" => Term::Fall,
            "spring" => Term::Spring,
            "summer" => Term::Summer,
            _ => return None,
        };
        let year: u32 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        let code_year = match term {
            Term::Fall => year,
            Term::Spring | Term::Summer => year.checked_sub(1)?,
        };
        Self::parse(&format!("{:04}{}", code_year, term.suffix())).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn code_year(&self) -> u32 {
        // Validated as ASCII digits on construction
        self.0[..4].parse().unwrap_or(0)
    }

    pub fn term(&self) -> Term {
        match &self.0[4..] {
            "10" => Term::Fall,
            "20" => Term::Spring,
            _ => Term::Summer,
        }
    }

    /// Calendar year the term takes place in.
    pub fn calendar_year(&self) -> u32 {
        match self.term() {
            Term::Fall => self.code_year(),
            Term::Spring | Term::Summer => self.code_year() + 1,
        }
    }

    pub fn is_summer(&self) -> bool {
        self.term() == Term::Summer
    }

    /// Display label, e.g. "Fall 2025".
    pub fn label(&self) -> String {
        format!("{} {}", self.term(), self.calendar_year())
    }
}

impl fmt::Display for SemesterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SemesterCode {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SemesterCode> for String {
    fn from(code: SemesterCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_label() {
        let fall = SemesterCode::parse("202510").unwrap();
        assert_eq!(fall.term(), Term::Fall);
        assert_eq!(fall.label(), "Fall 2025");

        let spring = SemesterCode::parse("202420").unwrap();
        assert_eq!(spring.label(), "Spring 2025");
        assert!(!spring.is_summer());

        let summer = SemesterCode::parse("202430").unwrap();
        assert_eq!(summer.label(), "Summer 2025");
        assert!(summer.is_summer());
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(SemesterCode::parse("2025").is_err());
        assert!(SemesterCode::parse("202540").is_err());
        assert!(SemesterCode::parse("20251O").is_err());
        assert!(SemesterCode::parse("").is_err());
    }

    #[test]
    fn test_from_label_round_trips() {
        for label in ["Fall 2024", "Spring 2025", "Summer 2025", "Fall 2025"] {
            let code = SemesterCode::from_label(label).unwrap();
            assert_eq!(code.label(), label);
        }
        assert_eq!(SemesterCode::from_label("Spring 2025").unwrap().as_str(), "202420");
        assert!(SemesterCode::from_label("Winter 2025").is_none());
        assert!(SemesterCode::from_label("Fall").is_none());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut codes: Vec<SemesterCode> = ["202510", "202420", "202410", "202430"]
            .iter()
            .map(|c| SemesterCode::parse(c).unwrap())
            .collect();
        codes.sort();
        let labels: Vec<String> = codes.iter().map(SemesterCode::label).collect();
        assert_eq!(labels, vec!["Fall 2024", "Spring 2025", "Summer 2025", "Fall 2025"]);
    }

    #[test]
    fn test_serde_validates() {
        let code: SemesterCode = serde_json::from_str("\"202520\"").unwrap();
        assert_eq!(code.as_str(), "202520");
        assert!(serde_json::from_str::<SemesterCode>("\"spring\"").is_err());
    }
}
