//! Report (de)serialization and the report emitted when a run fails.

use anyhow::Context;
use speclint_types::{
    LintData, LintReport, SCHEMA_REPORT_V1, ToolMeta, Verdict, VerdictCounts,
};
use time::OffsetDateTime;

pub fn serialize_report(report: &LintReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<LintReport> {
    let report: LintReport = serde_json::from_str(text).context("parse report JSON")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unsupported report schema: {} (expected {SCHEMA_REPORT_V1})",
            report.schema
        );
    }
    Ok(report)
}

/// A failing report carrying the error message and no violations.
pub fn runtime_error_report(message: &str) -> LintReport {
    let now = OffsetDateTime::now_utc();
    LintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "speclint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        counts: VerdictCounts::default(),
        violations: Vec::new(),
        data: LintData {
            error: Some(message.to_string()),
            ..LintData::default()
        },
    }
}
