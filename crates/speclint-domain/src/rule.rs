use crate::model::{Document, HttpMethod, Operation};
use crate::scope::Scope;
use speclint_types::PolicyViolation;

/// A named, scoped unit of validation logic.
///
/// Implementations must be pure: they never mutate the document, never depend on the order in
/// which other rules run, and return identical violations for identical inputs.
pub trait Rule: Send + Sync {
    /// Kebab-case identifier. Registration key and the name stamped on every violation.
    fn name(&self) -> &str;

    fn scope(&self) -> Scope;

    /// Called once per evaluation for [`Scope::Specification`] rules.
    ///
    /// Locations are relative to `pointer_base`.
    fn process_spec(&self, _doc: &Document, _pointer_base: &str) -> Vec<PolicyViolation> {
        Vec::new()
    }

    /// Called once per operation for [`Scope::Operation`] rules.
    ///
    /// `op_pointer` already combines the pointer base, the escaped path and the lowercased method.
    fn process_operation(
        &self,
        _doc: &Document,
        _op: &Operation,
        _op_pointer: &str,
        _path: &str,
        _method: HttpMethod,
    ) -> Vec<PolicyViolation> {
        Vec::new()
    }
}

/// `^[a-z0-9]+(-[a-z0-9]+)*$`
pub fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}
