//! CLI entry point for prolayout.
//!
//! This module stays thin: it handles argument parsing, logging setup, I/O, and exit codes.
//! All business logic lives in the `prolayout-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use prolayout_app::{
    finding_line, format_explanation, format_not_found, parse_report_json, render_annotations,
    render_markdown, run_check, run_explain, run_validate, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code, CheckInput, ExplainOutput,
};
use prolayout_settings::{ConfigFormat, Overrides, DEFAULT_CONFIG_FILE};
use prolayout_types::ProlayoutReport;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PROLAYOUT_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "prolayout",
    version,
    about = "Project layout checker: directory and file names against a declared policy tree"
)]
struct Cli {
    /// Repository root (units are discovered below it).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to the policy file, relative to the repo root (`.toml` selects TOML).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log level when PROLAYOUT_LOG is unset.
    #[arg(
        long,
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the layout policy and write artifacts.
    Check {
        /// JSON unit listing (`[{"path": ..., "files": [...]}]`) to check instead of discovering.
        #[arg(long)]
        units: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/prolayout/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/prolayout/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Compile every pattern in the policy and list the invalid ones.
    Validate,

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/prolayout/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/prolayout/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "layout.files") or code (e.g., "directory_not_allowed").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.cmd {
        Commands::Check {
            units,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(
            &cli,
            units.as_deref(),
            report_out,
            *write_markdown,
            markdown_out,
        ),
        Commands::Validate => cmd_validate(&cli),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

/// Logs go to stderr so stdout stays clean for findings and rendered output.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn repo_root(cli: &Cli) -> Utf8PathBuf {
    cli.repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone())
}

/// Read the policy file. A missing policy is an error: there is nothing to check against.
fn read_config(cli: &Cli, repo_root: &Utf8Path) -> anyhow::Result<(String, ConfigFormat)> {
    let cfg_path = repo_root.join(&cli.config);
    let text = std::fs::read_to_string(&cfg_path)
        .with_context(|| format!("read config: {cfg_path}"))?;
    Ok((text, ConfigFormat::from_path(cfg_path.as_str())))
}

fn cmd_check(
    cli: &Cli,
    units_path: Option<&Utf8Path>,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let repo_root = repo_root(cli);

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        let (cfg_text, config_format) = read_config(cli, &repo_root)?;

        let units = match units_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read units: {path}"))?;
                Some(prolayout_repo::load_units_json(&text)?)
            }
            None => None,
        };

        let input = CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            config_format,
            overrides: Overrides {
                profile: cli.profile.clone(),
                max_findings: cli.max_findings,
            },
            units,
        };

        let output = run_check(input)?;

        for finding in &output.report.findings {
            println!("{}", finding_line(finding));
        }

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

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
            let report = runtime_error_report(&err);
            if let Err(write_err) = write_report_file(report_out, &report) {
                tracing::warn!(error = %write_err, "could not write runtime error report");
            }
            eprintln!("prolayout error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_validate(cli: &Cli) -> anyhow::Result<()> {
    let repo_root = repo_root(cli);
    let (cfg_text, config_format) = read_config(cli, &repo_root)?;
    let output = run_validate(&cfg_text, config_format)?;

    if output.is_valid() {
        println!(
            "policy ok: {} rules, {} patterns",
            output.rules, output.patterns
        );
        return Ok(());
    }

    for err in &output.errors {
        println!("{err}");
    }
    eprintln!(
        "prolayout: {} of {} patterns are invalid",
        output.errors.len(),
        output.patterns
    );
    std::process::exit(1);
}

fn write_report_file(path: &Utf8Path, report: &ProlayoutReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(explained) => {
            print!("{}", format_explanation(&explained));
            Ok(())
        }
        ExplainOutput::NotFound { identifier } => {
            eprint!("{}", format_not_found(&identifier));
            std::process::exit(1);
        }
    }
}
