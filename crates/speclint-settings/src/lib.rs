//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{RuleConfig, SpeclintConfigV1};
pub use resolve::{Overrides, ResolvedConfig, RuleSetting};

/// Parse `speclint.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SpeclintConfigV1> {
    let cfg: SpeclintConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective rule table (profiles + per-rule config + overrides).
pub fn resolve_config(
    cfg: SpeclintConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
