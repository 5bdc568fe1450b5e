use crate::error::PolicyError;
use crate::model::Document;
use crate::policy::{Policy, PolicyRule};
use crate::scope::Scope;
use speclint_types::{PolicyViolationsSets, Severity, operation_pointer, severity};
use tracing::{debug, trace};

/// Rules whose severity could not be checked against the filter.
#[derive(Debug, Default)]
struct InclusionFailures {
    rules: Vec<String>,
    severities: Vec<String>,
}

impl InclusionFailures {
    fn record(&mut self, rule: &str, severity: &str) {
        self.rules.push(rule.to_string());
        self.severities.push(severity.to_string());
    }

    fn into_result(mut self) -> Result<(), PolicyError> {
        if self.rules.is_empty() {
            return Ok(());
        }
        self.rules.sort();
        self.rules.dedup();
        self.severities.sort();
        self.severities.dedup();
        Err(PolicyError::SeverityInclusion {
            rules: self.rules,
            severities: self.severities,
            valid: Severity::all_names().iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl Policy {
    /// Run every admitted rule against `doc` and merge the results.
    ///
    /// `filter_severity` is the minimum configured severity a rule needs to run; blank admits
    /// all rules. Inclusion failures from both passes are reported together in one
    /// [`PolicyError::SeverityInclusion`] before any rule runs, and no partial result is returned.
    pub fn validate_spec(
        &self,
        doc: &Document,
        pointer_base: &str,
        filter_severity: &str,
    ) -> Result<PolicyViolationsSets, PolicyError> {
        let mut failures = InclusionFailures::default();
        let operation_rules = self.admitted(Scope::Operation, filter_severity, &mut failures);
        let specification_rules =
            self.admitted(Scope::Specification, filter_severity, &mut failures);
        failures.into_result()?;

        let mut vsets = PolicyViolationsSets::new();
        vsets.upsert_sets(process_rules_operation(doc, pointer_base, &operation_rules));
        vsets.upsert_sets(process_rules_specification(
            doc,
            pointer_base,
            &specification_rules,
        ));

        debug!(
            operation_rules = operation_rules.len(),
            specification_rules = specification_rules.len(),
            violations = vsets.count(),
            "policy evaluated"
        );
        Ok(vsets)
    }

    fn admitted(
        &self,
        scope: Scope,
        filter_severity: &str,
        failures: &mut InclusionFailures,
    ) -> Vec<&PolicyRule> {
        self.iter()
            .filter(|pr| scope.matches(pr.rule.scope()))
            .filter(|pr| match severity::include(filter_severity, pr.severity) {
                Ok(true) => true,
                Ok(false) => {
                    debug!(
                        rule = pr.rule.name(),
                        severity = %pr.severity,
                        filter = filter_severity,
                        "rule below filter severity"
                    );
                    false
                }
                Err(_) => {
                    failures.record(pr.rule.name(), filter_severity);
                    false
                }
            })
            .collect()
    }
}

fn process_rules_operation(
    doc: &Document,
    pointer_base: &str,
    rules: &[&PolicyRule],
) -> PolicyViolationsSets {
    let mut vsets = PolicyViolationsSets::new();
    if rules.is_empty() {
        return vsets;
    }

    for (path, method, op) in doc.operations() {
        let op_pointer = operation_pointer(pointer_base, path, method.as_str());
        trace!(path, method = method.as_str(), "visiting operation");
        for policy_rule in rules {
            vsets.add_violations(
                policy_rule
                    .rule
                    .process_operation(doc, op, &op_pointer, path, method),
            );
        }
    }
    vsets
}

fn process_rules_specification(
    doc: &Document,
    pointer_base: &str,
    rules: &[&PolicyRule],
) -> PolicyViolationsSets {
    let mut vsets = PolicyViolationsSets::new();
    for policy_rule in rules {
        vsets.add_violations(policy_rule.rule.process_spec(doc, pointer_base));
    }
    vsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SchemaObjectPropsExist;
    use crate::test_support::{
        FlagTaggedOperations, document, object_schema, op, policy_with, ops_and_spec_policy,
    };
    use speclint_types::ids;

    #[test]
    fn widget_without_properties_yields_one_violation() {
        let doc = document(vec![("Widget", object_schema(&[], None))], vec![]);
        let policy = policy_with(Box::new(SchemaObjectPropsExist::new()), "error");

        let vsets = policy.validate_spec(&doc, "", "error").unwrap();

        assert_eq!(vsets.count(), 1);
        assert_eq!(
            vsets.locations_by_rule()[ids::RULE_SCHEMA_OBJECT_PROPS_EXIST],
            vec!["#/components/schemas/Widget"]
        );
    }

    #[test]
    fn operation_rule_flags_only_matching_operations() {
        let doc = document(
            vec![],
            vec![
                ("/widgets", "get", op(&["flag"])),
                ("/widgets", "post", op(&[])),
                ("/widgets/{id}", "delete", op(&["flag"])),
                ("/health", "get", op(&[])),
            ],
        );
        let policy = policy_with(Box::new(FlagTaggedOperations::new("flag-ops")), "warning");

        let vsets = policy.validate_spec(&doc, "api.yaml", "").unwrap();

        assert_eq!(
            vsets.locations_by_rule()["flag-ops"],
            vec![
                "api.yaml#/paths/~1widgets/get",
                "api.yaml#/paths/~1widgets~1{id}/delete",
            ]
        );
    }

    #[test]
    fn both_passes_merge_into_one_set() {
        let doc = document(
            vec![("Widget", object_schema(&[], None))],
            vec![("/widgets", "get", op(&["flag"]))],
        );
        let policy = ops_and_spec_policy("error", "error");

        let vsets = policy.validate_spec(&doc, "", "info").unwrap();

        assert_eq!(vsets.count(), 2);
        assert_eq!(
            vsets.rule_names(),
            vec!["flag-ops", ids::RULE_SCHEMA_OBJECT_PROPS_EXIST]
        );
    }

    #[test]
    fn filter_skips_rules_below_threshold() {
        let doc = document(
            vec![("Widget", object_schema(&[], None))],
            vec![("/widgets", "get", op(&["flag"]))],
        );
        let policy = ops_and_spec_policy("warning", "error");

        let vsets = policy.validate_spec(&doc, "", "error").unwrap();

        assert_eq!(vsets.rule_names(), vec![ids::RULE_SCHEMA_OBJECT_PROPS_EXIST]);
    }

    #[test]
    fn unknown_filter_severity_names_every_rule_and_returns_nothing() {
        let doc = document(
            vec![("Widget", object_schema(&[], None))],
            vec![("/widgets", "get", op(&["flag"]))],
        );
        let policy = ops_and_spec_policy("warning", "error");

        let err = policy.validate_spec(&doc, "", "fatal").unwrap_err();

        assert_eq!(
            err,
            PolicyError::SeverityInclusion {
                rules: vec![
                    "flag-ops".to_string(),
                    ids::RULE_SCHEMA_OBJECT_PROPS_EXIST.to_string()
                ],
                severities: vec!["fatal".to_string()],
                valid: vec![
                    "error".to_string(),
                    "warning".to_string(),
                    "info".to_string()
                ],
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("flag-ops"));
        assert!(msg.contains("fatal"));
        assert!(msg.contains("error,warning,info"));
    }

    #[test]
    fn empty_policy_and_empty_document() {
        let policy = Policy::new();
        let vsets = policy
            .validate_spec(&Document::default(), "", "info")
            .unwrap();
        assert!(vsets.is_empty());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let doc = document(
            vec![("A", object_schema(&[], None)), ("B", object_schema(&[], None))],
            vec![("/a", "get", op(&["flag"])), ("/b", "put", op(&["flag"]))],
        );
        let policy = ops_and_spec_policy("error", "error");

        let first = policy.validate_spec(&doc, "base", "info").unwrap();
        let second = policy.validate_spec(&doc, "base", "info").unwrap();
        assert_eq!(first.violations(), second.violations());
    }
}
