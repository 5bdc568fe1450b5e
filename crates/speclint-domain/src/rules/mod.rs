//! Built-in rule catalog.

use crate::rule::Rule;
use crate::scope::Scope;

mod operation_operationid_exist;
mod operation_summary_exist;
mod schema_object_props_exist;


pub use operation_operationid_exist::OperationOperationIdExist;
pub use operation_summary_exist::OperationSummaryExist;
pub use schema_object_props_exist::SchemaObjectPropsExist;

/// Every built-in rule, sorted by name.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = vec![
        Box::new(OperationOperationIdExist::new()),
        Box::new(OperationSummaryExist::new()),
        Box::new(SchemaObjectPropsExist::new()),
    ];
    rules.sort_by(|a, b| a.name().cmp(b.name()));
    rules
}

pub fn builtin_rule(name: &str) -> Option<Box<dyn Rule>> {
    builtin_rules().into_iter().find(|r| r.name() == name)
}

/// `(name, scope)` for every built-in rule, optionally restricted to one scope.
pub fn builtin_rule_summaries(scope: Option<Scope>) -> Vec<(String, Scope)> {
    builtin_rules()
        .into_iter()
        .filter(|r| scope.is_none_or(|s| s.matches(r.scope())))
        .map(|r| (r.name().to_string(), r.scope()))
        .collect()
}
