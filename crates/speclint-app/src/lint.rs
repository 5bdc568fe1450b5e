//! The `lint` use case: resolve config, build the policy, evaluate the document, produce a report.

use anyhow::Context;
use speclint_domain::Policy;
use speclint_domain::fingerprint::fingerprint_for_violation;
use speclint_domain::model::Document;
use speclint_domain::rules::builtin_rule;
use speclint_settings::{Overrides, ResolvedConfig};
use speclint_types::{
    LintData, LintReport, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, VerdictCounts,
    ViolationRecord, severity,
};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the lint use case.
#[derive(Clone, Debug)]
pub struct LintInput<'a> {
    /// Already-parsed document.
    pub document: &'a Document,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the lint use case.
#[derive(Clone, Debug)]
pub struct LintOutput {
    pub report: LintReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Register every enabled rule of `resolved` at its configured severity.
pub fn build_policy(resolved: &ResolvedConfig) -> anyhow::Result<Policy> {
    let mut policy = Policy::new();
    for (name, sev) in resolved.enabled_rules() {
        let rule = builtin_rule(name).with_context(|| format!("unknown rule: {name}"))?;
        policy
            .add_rule(rule, sev.as_str(), true)
            .with_context(|| format!("register rule {name}"))?;
    }
    Ok(policy)
}

pub fn run_lint(input: LintInput<'_>) -> anyhow::Result<LintOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        speclint_settings::SpeclintConfigV1::default()
    } else {
        speclint_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        speclint_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let policy = build_policy(&resolved).context("build policy")?;
    debug!(
        profile = %resolved.profile,
        rules = policy.len(),
        filter = %resolved.filter_severity,
        "policy built"
    );

    let vsets = policy
        .validate_spec(
            input.document,
            &resolved.pointer_base,
            &resolved.filter_severity,
        )
        .context("validate document")?;

    let mut violations: Vec<ViolationRecord> = vsets
        .violations()
        .into_iter()
        .map(|v| ViolationRecord {
            severity: policy.severity_of(&v.rule_name).unwrap_or(Severity::Error),
            fingerprint: Some(fingerprint_for_violation(&v)),
            rule_name: v.rule_name,
            location: v.location,
        })
        .collect();
    violations.sort_by(compare_records);

    let counts = VerdictCounts::from_records(&violations);
    let verdict = compute_verdict(&counts);

    let rules_evaluated = policy
        .iter()
        .filter(|pr| severity::include(&resolved.filter_severity, pr.severity).unwrap_or(false))
        .count();

    let data = LintData {
        profile: resolved.profile.clone(),
        filter_severity: resolved.filter_severity.clone(),
        pointer_base: resolved.pointer_base.clone(),
        rules_evaluated: rules_evaluated as u32,
        operations_scanned: input.document.operation_count() as u32,
        schemas_scanned: input.document.schemas().count() as u32,
        violations_total: violations.len() as u32,
        error: None,
    };

    info!(
        violations = violations.len(),
        verdict = ?verdict,
        "lint finished"
    );

    let report = LintReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "speclint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        counts,
        violations,
        data,
    };

    Ok(LintOutput {
        report,
        resolved_config: resolved,
    })
}

fn compute_verdict(counts: &VerdictCounts) -> Verdict {
    if counts.error > 0 {
        Verdict::Fail
    } else if counts.warning > 0 {
        Verdict::Warn
    } else {
        Verdict::Pass
    }
}

fn compare_records(a: &ViolationRecord, b: &ViolationRecord) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location
    // 3) rule_name
    b.severity
        .cmp(&a.severity)
        .then(a.location.cmp(&b.location))
        .then(a.rule_name.cmp(&b.rule_name))
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
