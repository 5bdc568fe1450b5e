//! Stable DTOs and IDs used across the speclint workspace.
//!
//! This crate is intentionally boring:
//! - the severity vocabulary and its inclusion predicate
//! - stable rule names
//! - JSON pointer construction for violation locations
//! - violations, the grouped violation accumulator, and the emitted report

#![forbid(unsafe_code)]

pub mod ids;
pub mod pointer;
pub mod report;
pub mod severity;
pub mod violation;

pub use pointer::{JsonPointer, escape_segment, operation_pointer, schema_pointer};
pub use report::{
    LintData, LintReport, SCHEMA_REPORT_V1, ToolMeta, Verdict, VerdictCounts, ViolationRecord,
};
pub use severity::{Severity, SeverityError};
pub use violation::{PolicyViolation, PolicyViolationsSet, PolicyViolationsSets};
