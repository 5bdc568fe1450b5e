//! Stable identifiers for built-in rules.
//!
//! Rule names are kebab-case. They are the registration key inside a policy and the value
//! stamped on every violation a rule produces.

// Specification scope
pub const RULE_SCHEMA_OBJECT_PROPS_EXIST: &str = "schema-object-props-exist";

// Operation scope
pub const RULE_OPERATION_OPERATIONID_EXIST: &str = "operation-operationid-exist";
pub const RULE_OPERATION_SUMMARY_EXIST: &str = "operation-summary-exist";
