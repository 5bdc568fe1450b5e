//! Violations and the accumulator that merges them across evaluation passes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One finding: which rule produced it and where in the document.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct PolicyViolation {
    pub rule_name: String,
    pub location: String,
}

impl PolicyViolation {
    pub fn new<R: Into<String>, L: Into<String>>(rule_name: R, location: L) -> Self {
        Self {
            rule_name: rule_name.into(),
            location: location.into(),
        }
    }
}

/// All locations flagged by a single rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyViolationsSet {
    pub rule_name: String,
    pub locations: Vec<String>,
}

/// Violations grouped by rule name.
///
/// Passes accumulate independently and are folded together with [`upsert_sets`](Self::upsert_sets);
/// neither pass needs to know about the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyViolationsSets {
    pub by_rule: BTreeMap<String, PolicyViolationsSet>,
}

impl PolicyViolationsSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_violation(&mut self, violation: PolicyViolation) {
        let PolicyViolation {
            rule_name,
            location,
        } = violation;
        self.by_rule
            .entry(rule_name.clone())
            .or_insert_with(|| PolicyViolationsSet {
                rule_name,
                locations: Vec::new(),
            })
            .locations
            .push(location);
    }

    pub fn add_violations<I>(&mut self, violations: I)
    where
        I: IntoIterator<Item = PolicyViolation>,
    {
        for v in violations {
            self.add_violation(v);
        }
    }

    /// Merge another accumulator into this one.
    pub fn upsert_sets(&mut self, other: PolicyViolationsSets) {
        for (rule_name, set) in other.by_rule {
            self.by_rule
                .entry(rule_name.clone())
                .or_insert_with(|| PolicyViolationsSet {
                    rule_name,
                    locations: Vec::new(),
                })
                .locations
                .extend(set.locations);
        }
    }

    pub fn count(&self) -> usize {
        self.by_rule.values().map(|s| s.locations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.by_rule.keys().cloned().collect()
    }

    pub fn locations_by_rule(&self) -> BTreeMap<String, Vec<String>> {
        self.by_rule
            .iter()
            .map(|(name, set)| {
                let mut locations = set.locations.clone();
                locations.sort();
                (name.clone(), locations)
            })
            .collect()
    }

    /// Flattened view ordered by rule name, then location.
    pub fn violations(&self) -> Vec<PolicyViolation> {
        self.locations_by_rule()
            .into_iter()
            .flat_map(|(rule_name, locations)| {
                locations
                    .into_iter()
                    .map(move |location| PolicyViolation::new(rule_name.clone(), location))
            })
            .collect()
    }
}
