//! Developer tasks: generated artifacts (JSON schemas, rule catalog) and drift checks.
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use speclint_domain::rules::builtin_rule_summaries;
use std::fs;
use std::path::{Path, PathBuf};

/// A file under the repository root that is derived from Rust types.
struct Artifact {
    path: &'static str,
    render: fn() -> anyhow::Result<String>,
}

const ARTIFACTS: &[Artifact] = &[
    Artifact {
        path: "schemas/speclint.report.v1.json",
        render: report_schema,
    },
    Artifact {
        path: "schemas/speclint.config.v1.json",
        render: config_schema,
    },
    Artifact {
        path: "docs/rules.md",
        render: rules_doc,
    },
];

fn workspace_root() -> anyhow::Result<PathBuf> {
    let start = match std::env::var_os("CARGO_MANIFEST_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("determine current directory")?,
    };
    if start.ends_with("xtask") {
        return start
            .parent()
            .map(Path::to_path_buf)
            .context("xtask directory has no parent");
    }
    Ok(start)
}

fn pretty_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn report_schema() -> anyhow::Result<String> {
    pretty_json(&schema_for!(speclint_types::LintReport))
}

fn config_schema() -> anyhow::Result<String> {
    pretty_json(&schema_for!(speclint_settings::SpeclintConfigV1))
}

fn rules_doc() -> anyhow::Result<String> {
    let mut out = String::from("# Built-in rules\n\n| Rule | Scope |\n|---|---|\n");
    for (name, scope) in builtin_rule_summaries(None) {
        out.push_str(&format!("| `{name}` | {scope} |\n"));
    }
    Ok(out)
}

fn generate(root: &Path) -> anyhow::Result<()> {
    for artifact in ARTIFACTS {
        let path = root.join(artifact.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, (artifact.render)()?)
            .with_context(|| format!("write {}", path.display()))?;
        println!("wrote {}", artifact.path);
    }
    Ok(())
}

/// Names of artifacts that are missing or differ from what `generate` would write.
fn stale(root: &Path) -> anyhow::Result<Vec<&'static str>> {
    let mut stale = Vec::new();
    for artifact in ARTIFACTS {
        let expected = (artifact.render)()?;
        match fs::read_to_string(root.join(artifact.path)) {
            Ok(actual) if actual == expected => {}
            _ => stale.push(artifact.path),
        }
    }
    Ok(stale)
}

fn check(root: &Path) -> anyhow::Result<()> {
    let stale = stale(root)?;
    if stale.is_empty() {
        println!("generated files are up to date");
        return Ok(());
    }
    for path in &stale {
        eprintln!("stale: {path}");
    }
    bail!("{} generated file(s) out of date; run `cargo xtask generate`", stale.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help             Show this message");
    eprintln!("  generate         Write JSON schemas and docs/rules.md");
    eprintln!("  check-generated  Fail if any generated file is missing or stale (for CI)");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());
    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "generate" => generate(&workspace_root()?),
        "check-generated" => check(&workspace_root()?),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_then_check_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(stale(dir.path()).unwrap().len(), ARTIFACTS.len());

        generate(dir.path()).unwrap();
        assert!(stale(dir.path()).unwrap().is_empty());

        fs::write(dir.path().join("docs/rules.md"), "edited\n").unwrap();
        assert_eq!(stale(dir.path()).unwrap(), vec!["docs/rules.md"]);
    }

    #[test]
    fn committed_generated_files_are_current() {
        let root = workspace_root().unwrap();
        assert!(stale(&root).unwrap().is_empty(), "run `cargo xtask generate`");
    }

    #[test]
    fn rules_doc_lists_every_builtin_rule() {
        let doc = rules_doc().unwrap();
        assert!(doc.contains("| `schema-object-props-exist` | specification |"));
        assert!(doc.contains("| `operation-summary-exist` | operation |"));
    }
}
