use sha2::{Digest, Sha256};
use speclint_types::PolicyViolation;

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - rule_name
/// - location (including the pointer base)
pub fn fingerprint_for_violation(violation: &PolicyViolation) -> String {
    let canonical = [violation.rule_name.as_str(), violation.location.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
