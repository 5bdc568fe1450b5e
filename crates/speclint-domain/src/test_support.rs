use crate::model::{
    Components, Document, HttpMethod, Operation, PathItem, ReferenceOr, Schema, SchemaType,
};
use crate::policy::Policy;
use crate::rule::Rule;
use crate::rules::SchemaObjectPropsExist;
use crate::scope::Scope;
use serde_json::{Value, json};
use speclint_types::PolicyViolation;
use std::collections::BTreeMap;

/// Operation-scope rule that flags every operation tagged `flag`, at the operation pointer.
pub struct FlagTaggedOperations {
    name: String,
}

impl FlagTaggedOperations {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Rule for FlagTaggedOperations {
    fn name(&self) -> &str {
        &self.name
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
        if op.tags.iter().any(|t| t == "flag") {
            vec![PolicyViolation::new(&self.name, op_pointer)]
        } else {
            Vec::new()
        }
    }
}

pub fn object_schema(props: &[&str], additional: Option<Value>) -> Schema {
    Schema {
        schema_type: Some(SchemaType::Single("object".to_string())),
        properties: props
            .iter()
            .map(|p| (p.to_string(), json!({ "type": "string" })))
            .collect(),
        additional_properties: additional,
    }
}

pub fn op(tags: &[&str]) -> Operation {
    Operation {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Operation::default()
    }
}

pub fn set_operation(item: &mut PathItem, method: HttpMethod, op: Operation) {
    let slot = match method {
        HttpMethod::Get => &mut item.get,
        HttpMethod::Put => &mut item.put,
        HttpMethod::Post => &mut item.post,
        HttpMethod::Delete => &mut item.delete,
        HttpMethod::Options => &mut item.options,
        HttpMethod::Head => &mut item.head,
        HttpMethod::Patch => &mut item.patch,
        HttpMethod::Trace => &mut item.trace,
    };
    *slot = Some(op);
}

pub fn method(lower: &str) -> HttpMethod {
    HttpMethod::ALL
        .into_iter()
        .find(|m| m.as_lower() == lower)
        .unwrap_or_else(|| panic!("unknown method {lower}"))
}

pub fn document(schemas: Vec<(&str, Schema)>, ops: Vec<(&str, &str, Operation)>) -> Document {
    let mut paths: BTreeMap<String, PathItem> = BTreeMap::new();
    for (path, m, operation) in ops {
        set_operation(
            paths.entry(path.to_string()).or_default(),
            method(m),
            operation,
        );
    }

    let components = if schemas.is_empty() {
        None
    } else {
        Some(Components {
            schemas: schemas
                .into_iter()
                .map(|(name, s)| (name.to_string(), ReferenceOr::Item(s)))
                .collect(),
        })
    };

    Document {
        openapi: "3.0.3".to_string(),
        paths,
        components,
        ..Document::default()
    }
}

pub fn policy_with(rule: Box<dyn Rule>, severity: &str) -> Policy {
    let mut policy = Policy::new();
    policy
        .add_rule(rule, severity, true)
        .expect("test rule registers");
    policy
}

/// `flag-ops` at `operation_severity` plus `schema-object-props-exist` at
/// `specification_severity`.
pub fn ops_and_spec_policy(operation_severity: &str, specification_severity: &str) -> Policy {
    let mut policy = policy_with(
        Box::new(FlagTaggedOperations::new("flag-ops")),
        operation_severity,
    );
    policy
        .add_rule(
            Box::new(SchemaObjectPropsExist::new()),
            specification_severity,
            true,
        )
        .expect("builtin rule registers");
    policy
}
