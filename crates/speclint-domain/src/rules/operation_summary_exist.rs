use crate::model::{Document, HttpMethod, Operation};
use crate::rule::Rule;
use crate::scope::Scope;
use speclint_types::{PolicyViolation, ids};

/// Every operation needs a non-blank `summary`.
#[derive(Clone, Debug, Default)]
pub struct OperationSummaryExist;

impl OperationSummaryExist {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for OperationSummaryExist {
    fn name(&self) -> &str {
        ids::RULE_OPERATION_SUMMARY_EXIST
    }

    fn scope(&self) -> Scope {
        Scope::Operation
    }

    fn process_operation(
        &self,
        _doc: &Document,
        op: &Operation,
        op_pointer: &str,
        _path: &str,
        _method: HttpMethod,
    ) -> Vec<PolicyViolation> {
        match op.summary.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Vec::new(),
            _ => vec![PolicyViolation::new(
                self.name(),
                format!("{op_pointer}/summary"),
            )],
        }
    }
}
