use crate::model::Document;
use crate::rule::Rule;
use crate::scope::Scope;
use speclint_types::{PolicyViolation, ids, schema_pointer};

/// Object schemas must declare `properties` or an `additionalProperties` marker.
///
/// `$ref` entries are skipped; only inline component schemas are inspected.
#[derive(Clone, Debug, Default)]
pub struct SchemaObjectPropsExist;

impl SchemaObjectPropsExist {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SchemaObjectPropsExist {
    fn name(&self) -> &str {
        ids::RULE_SCHEMA_OBJECT_PROPS_EXIST
    }

    fn scope(&self) -> Scope {
        Scope::Specification
    }

    fn process_spec(&self, doc: &Document, pointer_base: &str) -> Vec<PolicyViolation> {
        doc.schemas()
            .filter_map(|(name, schema)| {
                let schema = schema.as_item()?;
                let bare = schema.is_object()
                    && schema.properties.is_empty()
                    && schema.additional_properties.is_none();
                bare.then(|| PolicyViolation::new(self.name(), schema_pointer(pointer_base, name)))
            })
            .collect()
    }
}
