use crate::{model::SpeclintConfigV1, presets};
use anyhow::Context;
use speclint_domain::rules::builtin_rule;
use speclint_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub filter_severity: Option<String>,
    pub pointer_base: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSetting {
    pub enabled: bool,
    pub severity: Severity,
}

impl RuleSetting {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    /// Canonical severity name; evaluation receives it verbatim.
    pub filter_severity: String,
    pub pointer_base: String,
    pub rules: BTreeMap<String, RuleSetting>,
}

impl ResolvedConfig {
    /// Enabled rules in name order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, Severity)> {
        self.rules
            .iter()
            .filter(|(_, s)| s.enabled)
            .map(|(name, s)| (name.as_str(), s.severity))
    }
}

pub fn resolve_config(
    cfg: SpeclintConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let (profile, mut rules) = presets::preset(&profile);

    // per-rule overrides
    for (rule_name, rc) in cfg.rules.iter() {
        if builtin_rule(rule_name).is_none() {
            anyhow::bail!("unknown rule in config: {rule_name}");
        }
        let entry = rules
            .entry(rule_name.clone())
            .or_insert(RuleSetting::enabled(Severity::Error));

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                Severity::parse(sev).with_context(|| format!("invalid severity for {rule_name}"))?;
        }
    }

    let filter_severity = match overrides.filter_severity.or(cfg.filter_severity) {
        Some(raw) => Severity::parse(&raw)
            .context("invalid filter_severity")?
            .as_str()
            .to_string(),
        None => Severity::Info.as_str().to_string(),
    };

    let pointer_base = overrides
        .pointer_base
        .or(cfg.pointer_base)
        .unwrap_or_default();

    Ok(ResolvedConfig {
        profile,
        filter_severity,
        pointer_base,
        rules,
    })
}
