use crate::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for speclint reports.
pub const SCHEMA_REPORT_V1: &str = "speclint.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl VerdictCounts {
    pub fn from_records(records: &[ViolationRecord]) -> Self {
        let mut counts = VerdictCounts::default();
        for r in records {
            match r.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// A violation as emitted in the report, annotated with the policy severity of its rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ViolationRecord {
    pub rule_name: String,
    pub severity: Severity,
    pub location: String,

    /// Stable identifier intended for dedup and trending: a hash of `rule_name|location`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Speclint-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintData {
    pub profile: String,
    pub filter_severity: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pointer_base: String,

    pub rules_evaluated: u32,
    pub operations_scanned: u32,
    pub schemas_scanned: u32,

    pub violations_total: u32,

    /// Set when the run failed before producing violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LintReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub counts: VerdictCounts,
    pub violations: Vec<ViolationRecord>,
    pub data: LintData,
}
