use crate::model::{Document, HttpMethod, Operation};
use crate::rule::Rule;
use crate::scope::Scope;
use speclint_types::{PolicyViolation, ids};

/// Every operation needs a non-blank `operationId`.
#[derive(Clone, Debug, Default)]
pub struct OperationOperationIdExist;

impl OperationOperationIdExist {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for OperationOperationIdExist {
    fn name(&self) -> &str {
        ids::RULE_OPERATION_OPERATIONID_EXIST
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
        let present = op
            .operation_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());
        if present {
            return Vec::new();
        }
        vec![PolicyViolation::new(
            self.name(),
            format!("{op_pointer}/operationId"),
        )]
    }
}
