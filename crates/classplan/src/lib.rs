//! Validation and identity-resolution engine for a course planner.
//!
//! Course data comes from a registrar feed and instructor ratings from a
//! separate ratings feed with no shared identifier. This crate parses the
//! registrar's meeting-time encoding, resolves free-text instructor names to
//! rated identities, detects schedule conflicts and evaluates prerequisites.
//! Fetching and persisting the data is left to the caller.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod identity;
pub mod meeting;
pub mod prereq;
pub mod schedule;
pub mod validation;

pub use catalog::{CourseOffering, SemesterCode};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use identity::{CandidatePool, Identity, IdentityMatch, IdentityMatcher, NameResolver, RatingSummary};
pub use meeting::MeetingBlock;
pub use prereq::{PrerequisiteChecker, PrerequisiteEvaluator, PrerequisiteReport, StudentHistory};
pub use schedule::{ConflictChecker, ConflictReport, ScheduleConflictDetector};
pub use validation::{AdditionReport, AdditionValidator};
