//! Use case orchestration for speclint.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and rendering steps. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod document;
mod lint;
mod render;
mod report;

pub use document::{DocumentFormat, parse_document};
pub use lint::{LintInput, LintOutput, build_policy, run_lint, verdict_exit_code};
pub use render::render_markdown;
pub use report::{parse_report_json, runtime_error_report, serialize_report};
