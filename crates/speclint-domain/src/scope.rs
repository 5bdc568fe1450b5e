use std::fmt;
use std::str::FromStr;

/// Where a rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Inspects the whole document once.
    Specification,
    /// Inspects each operation once.
    Operation,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope: {0} (expected 'specification' or 'operation')")]
pub struct ScopeParseError(pub String);

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::Specification, Scope::Operation];

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Specification => "specification",
            Scope::Operation => "operation",
        }
    }

    /// True iff `rule_scope` is the scope currently being processed.
    pub fn matches(self, rule_scope: Scope) -> bool {
        self == rule_scope
    }
}

impl FromStr for Scope {
    type Err = ScopeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "specification" | "spec" => Ok(Scope::Specification),
            "operation" => Ok(Scope::Operation),
            _ => Err(ScopeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
