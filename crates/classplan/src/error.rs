//! Error types for the planner engine.
//!
//! The matching, parsing, conflict and prerequisite paths never fail; they
//! degrade to empty or sentinel results instead. Errors only come out of
//! configuration loading and the strict parsing helpers.

use thiserror::Error;

/// Errors that can occur while configuring or feeding the engine.
#[derive(Debug, Error, Clone)]
pub enum PlannerError {
    /// Reading a configuration file failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Configuration file was not valid JSON for the expected shape
    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    /// A configuration value is outside its allowed range
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    /// A semester code was not a zero-padded `YYYYTT` string
    #[error("Invalid semester code: {code}")]
    InvalidSemesterCode { code: String },
}

impl PlannerError {
    /// Returns true if this error came from bad configuration rather than I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PlannerError::ConfigParse { .. } | PlannerError::InvalidConfigValue { .. }
        )
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::ConfigParse {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
