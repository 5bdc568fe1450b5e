use crate::error::PolicyError;
use crate::rule::{Rule, is_kebab_case};
use speclint_types::Severity;
use std::collections::BTreeMap;
use std::fmt;

/// A rule together with the severity one policy assigns to it.
///
/// Severity belongs to the policy: the same rule can be registered in two policies at different
/// levels.
pub struct PolicyRule {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

impl fmt::Debug for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRule")
            .field("name", &self.rule.name())
            .field("scope", &self.rule.scope())
            .field("severity", &self.severity)
            .finish()
    }
}

/// Named rules and their effective severities.
///
/// Keys always equal `PolicyRule::rule.name()`. Populate fully with [`Policy::add_rule`] before
/// evaluating; evaluation borrows the policy immutably.
#[derive(Debug, Default)]
pub struct Policy {
    rules: BTreeMap<String, PolicyRule>,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` at `severity` (blank means `error`).
    ///
    /// A rejected call leaves the policy unchanged.
    pub fn add_rule(
        &mut self,
        rule: Box<dyn Rule>,
        severity: &str,
        error_on_collision: bool,
    ) -> Result<(), PolicyError> {
        let name = rule.name().to_string();
        if name.trim().is_empty() {
            return Err(PolicyError::EmptyRuleName);
        }
        if !is_kebab_case(&name) {
            return Err(PolicyError::RuleNameNotKebabCase(name));
        }
        if error_on_collision && self.rules.contains_key(&name) {
            return Err(PolicyError::DuplicateRule(name));
        }

        let severity = if severity.trim().is_empty() {
            Severity::Error
        } else {
            Severity::parse(severity).map_err(|_| PolicyError::UnknownSeverity {
                rule: name.clone(),
                severity: severity.to_string(),
            })?
        };

        self.rules.insert(name, PolicyRule { rule, severity });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PolicyRule> {
        self.rules.get(name)
    }

    pub fn severity_of(&self, name: &str) -> Option<Severity> {
        self.rules.get(name).map(|r| r.severity)
    }

    /// Registered names in case-sensitive lexicographic order.
    pub fn rule_names(&self) -> Vec<String> {
        self.rules.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
