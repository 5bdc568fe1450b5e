use thiserror::Error;

/// Configuration failures raised while building or evaluating a policy.
///
/// Violations are never errors; they are returned as results.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("rule has no name")]
    EmptyRuleName,

    #[error("rule name must be in kebab-case format [{0}]")]
    RuleNameNotKebabCase(String),

    #[error("duplicate rule [{0}]")]
    DuplicateRule(String),

    #[error("severity not found [{severity}] for rule [{rule}]")]
    UnknownSeverity { rule: String, severity: String },

    #[error(
        "rules with unknown severities rules[{}] severities[{}] valid[{}]",
        .rules.join(","),
        .severities.join(","),
        .valid.join(",")
    )]
    SeverityInclusion {
        rules: Vec<String>,
        severities: Vec<String>,
        valid: Vec<String>,
    },
}
