//! CLI entry point for speclint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `speclint-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use speclint_app::{
    DocumentFormat, LintInput, parse_document, parse_report_json, render_markdown, run_lint,
    runtime_error_report, serialize_report, verdict_exit_code,
};
use speclint_domain::Scope;
use speclint_domain::rules::builtin_rule_summaries;
use speclint_settings::Overrides;
use speclint_types::LintReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "speclint",
    version,
    about = "Policy-driven lint for OpenAPI 3 specifications"
)]
struct Cli {
    /// Log at debug level unless SPECLINT_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the policy against a document and write the report.
    Check {
        /// OpenAPI document (JSON or YAML).
        #[arg(long)]
        spec: Utf8PathBuf,

        /// Path to speclint config TOML (missing file means defaults).
        #[arg(long, default_value = "speclint.toml")]
        config: Utf8PathBuf,

        /// Override profile (strict|warn).
        #[arg(long)]
        profile: Option<String>,

        /// Override minimum rule severity to evaluate (info|warning|error).
        #[arg(long)]
        filter_severity: Option<String>,

        /// Override the prefix stamped on every violation location.
        #[arg(long)]
        pointer_base: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/speclint/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/speclint/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/speclint/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// List built-in rules.
    Rules {
        /// Only rules of this scope (specification|operation).
        #[arg(long)]
        scope: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            spec,
            config,
            profile,
            filter_severity,
            pointer_base,
            report_out,
            write_markdown,
            markdown_out,
        } => {
            let overrides = Overrides {
                profile,
                filter_severity,
                pointer_base,
            };
            let markdown_out = write_markdown.then_some(markdown_out);
            cmd_check(&spec, &config, overrides, &report_out, markdown_out.as_deref())
        }
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Rules { scope } => cmd_rules(scope.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SPECLINT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_check(
    spec: &Utf8Path,
    config: &Utf8Path,
    overrides: Overrides,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let text =
            std::fs::read_to_string(spec).with_context(|| format!("read document: {}", spec))?;
        let document = parse_document(&text, DocumentFormat::from_path(spec))
            .with_context(|| format!("parse document: {}", spec))?;

        let config_text = read_config(config)?;

        let output = run_lint(LintInput {
            document: &document,
            config_text: &config_text,
            overrides,
        })?;

        write_outputs(report_out, markdown_out, &output.report)?;
        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_outputs(report_out, markdown_out, &report);
            eprintln!("speclint error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config file is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn write_outputs(
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    report: &LintReport,
) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_file(report_out, &data).context("write report json")?;
    if let Some(md_path) = markdown_out {
        write_file(md_path, render_markdown(report).as_bytes()).context("write markdown")?;
    }
    Ok(())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_rules(scope: Option<&str>) -> anyhow::Result<()> {
    let scope = scope.map(str::parse::<Scope>).transpose()?;
    for (name, rule_scope) in builtin_rule_summaries(scope) {
        println!("{name}\t{rule_scope}");
    }
    Ok(())
}
