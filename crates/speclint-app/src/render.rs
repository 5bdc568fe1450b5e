//! Markdown rendering of a report.

use speclint_types::{LintReport, Severity, Verdict};

pub fn render_markdown(report: &LintReport) -> String {
    let mut out = String::new();

    out.push_str("# Speclint report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Violations: {} (error: {}, warning: {}, info: {})\n- Filter severity: {}\n\n",
        verdict,
        report.violations.len(),
        report.counts.error,
        report.counts.warning,
        report.counts.info,
        report.data.filter_severity,
    ));

    if let Some(err) = &report.data.error {
        out.push_str(&format!("> Error: {}\n\n", err));
    }

    if report.violations.is_empty() {
        out.push_str("No violations.\n");
        return out;
    }

    out.push_str("## Violations\n\n");
    for v in &report.violations {
        let sev = match v.severity {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        };
        out.push_str(&format!("- [{}] `{}` at `{}`\n", sev, v.rule_name, v.location));
    }

    out
}
