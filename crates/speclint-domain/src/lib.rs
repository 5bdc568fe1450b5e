//! Pure policy evaluation (no IO).
//!
//! Input: a parsed OpenAPI document and a policy of registered rules.
//! Output: violations grouped by rule.

#![forbid(unsafe_code)]

pub mod error;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod rule;
pub mod rules;
pub mod scope;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use error::PolicyError;
pub use policy::{Policy, PolicyRule};
pub use rule::{Rule, is_kebab_case};
pub use scope::{Scope, ScopeParseError};
