//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Rule registration (kebab-case names, collisions, severities)
//! - Severity filtering monotonicity
//! - Violation counts and pointers for both evaluation scopes

use crate::model::ReferenceOr;
use crate::policy::Policy;
use crate::rule::is_kebab_case;
use crate::rules::SchemaObjectPropsExist;
use crate::test_support::{FlagTaggedOperations, document, object_schema, op, ops_and_spec_policy};
use proptest::prelude::*;
use speclint_types::{Severity, escape_segment, ids};
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_kebab_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}").unwrap()
}

/// Names that are not kebab-case but are not blank either.
fn arb_non_kebab_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_ -]{1,16}")
        .unwrap()
        .prop_filter("must not be kebab-case", |s| {
            !is_kebab_case(s) && !s.trim().is_empty()
        })
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(/[a-z{}~]{1,6}){1,3}").unwrap()
}

fn arb_method() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("get"),
        Just("put"),
        Just("post"),
        Just("delete"),
        Just("patch"),
    ]
}

// ============================================================================
// Registration
// ============================================================================

proptest! {
    #[test]
    fn kebab_names_register_with_configured_severity(
        name in arb_kebab_name(),
        severity in arb_severity(),
    ) {
        let mut policy = Policy::new();
        policy
            .add_rule(Box::new(FlagTaggedOperations::new(&name)), severity.as_str(), true)
            .unwrap();
        prop_assert_eq!(policy.severity_of(&name), Some(severity));
        prop_assert_eq!(policy.rule_names(), vec![name]);
    }

    #[test]
    fn non_kebab_names_are_rejected_without_change(name in arb_non_kebab_name()) {
        let mut policy = Policy::new();
        policy
            .add_rule(Box::new(FlagTaggedOperations::new("existing")), "", true)
            .unwrap();

        let res = policy.add_rule(Box::new(FlagTaggedOperations::new(&name)), "error", false);
        prop_assert!(res.is_err());
        prop_assert_eq!(policy.len(), 1);
    }

    #[test]
    fn collision_keeps_first_configuration(
        name in arb_kebab_name(),
        first in arb_severity(),
        second in arb_severity(),
    ) {
        let mut policy = Policy::new();
        policy
            .add_rule(Box::new(FlagTaggedOperations::new(&name)), first.as_str(), true)
            .unwrap();
        let res = policy.add_rule(Box::new(FlagTaggedOperations::new(&name)), second.as_str(), true);
        prop_assert!(res.is_err());
        prop_assert_eq!(policy.severity_of(&name), Some(first));
    }
}

// ============================================================================
// Evaluation
// ============================================================================

proptest! {
    #[test]
    fn stricter_filter_yields_subset(
        ops_severity in arb_severity(),
        spec_severity in arb_severity(),
        loose in arb_severity(),
        strict in arb_severity(),
    ) {
        prop_assume!(loose <= strict);
        let doc = document(
            vec![("Widget", object_schema(&[], None))],
            vec![("/widgets", "get", op(&["flag"])), ("/widgets", "put", op(&["flag"]))],
        );
        let policy = ops_and_spec_policy(ops_severity.as_str(), spec_severity.as_str());

        let loose_set: BTreeSet<_> = policy
            .validate_spec(&doc, "", loose.as_str())
            .unwrap()
            .violations()
            .into_iter()
            .collect();
        let strict_set: BTreeSet<_> = policy
            .validate_spec(&doc, "", strict.as_str())
            .unwrap()
            .violations()
            .into_iter()
            .collect();

        prop_assert!(strict_set.is_subset(&loose_set));
    }

    #[test]
    fn spec_rule_yields_one_violation_per_bare_schema(
        bare in prop::collection::btree_set("[A-Z][a-z]{0,6}", 0..8),
        described in prop::collection::btree_set("[A-Z][a-z]{0,6}X", 0..8),
    ) {
        let mut schemas = Vec::new();
        for name in &bare {
            schemas.push((name.as_str(), object_schema(&[], None)));
        }
        for name in &described {
            schemas.push((name.as_str(), object_schema(&["id"], None)));
        }
        let doc = document(schemas, vec![]);

        let mut policy = Policy::new();
        policy.add_rule(Box::new(SchemaObjectPropsExist::new()), "error", true).unwrap();
        let vsets = policy.validate_spec(&doc, "", "error").unwrap();

        prop_assert_eq!(vsets.count(), bare.len());
        let expected: Vec<String> = bare
            .iter()
            .map(|n| format!("#/components/schemas/{n}"))
            .collect();
        let actual = vsets
            .locations_by_rule()
            .remove(ids::RULE_SCHEMA_OBJECT_PROPS_EXIST)
            .unwrap_or_default();
        prop_assert_eq!(actual, expected);
        prop_assert!(doc.schemas().all(|(_, s)| matches!(s, ReferenceOr::Item(_))));
    }

    #[test]
    fn operation_rule_yields_pointer_per_flagged_operation(
        ops in prop::collection::btree_map((arb_path(), arb_method()), any::<bool>(), 0..12),
        base in "[a-z]{0,6}(\\.yaml)?",
    ) {
        let triples: Vec<(&str, &str, _)> = ops
            .iter()
            .map(|((path, method), flagged)| {
                let tags: &[&str] = if *flagged { &["flag"] } else { &[] };
                (path.as_str(), *method, op(tags))
            })
            .collect();
        let doc = document(vec![], triples);

        let mut policy = Policy::new();
        policy.add_rule(Box::new(FlagTaggedOperations::new("flag-ops")), "info", true).unwrap();
        let vsets = policy.validate_spec(&doc, &base, "info").unwrap();

        let mut expected: Vec<String> = ops
            .iter()
            .filter(|(_, flagged)| **flagged)
            .map(|((path, method), _)| format!("{base}#/paths/{}/{method}", escape_segment(path)))
            .collect();
        expected.sort();

        prop_assert_eq!(vsets.count(), expected.len());
        let actual = vsets.locations_by_rule().remove("flag-ops").unwrap_or_default();
        prop_assert_eq!(actual, expected);
    }
}
