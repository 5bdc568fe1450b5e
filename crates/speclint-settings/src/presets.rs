use crate::resolve::RuleSetting;
use speclint_domain::rules::builtin_rules;
use speclint_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> (String, BTreeMap<String, RuleSetting>) {
    match profile {
        "warn" => ("warn".to_string(), default_rules(Severity::Warning)),
        // default
        _ => ("strict".to_string(), default_rules(Severity::Error)),
    }
}

fn default_rules(default_severity: Severity) -> BTreeMap<String, RuleSetting> {
    builtin_rules()
        .iter()
        .map(|r| (r.name().to_string(), RuleSetting::enabled(default_severity)))
        .collect()
}
