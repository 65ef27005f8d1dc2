//! The `check` use case: evaluate the layout policy and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use prolayout_domain::UnitInput;
use prolayout_settings::{ConfigFormat, Overrides, ResolvedConfig};
use prolayout_types::{ProlayoutReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

use crate::observe::TracingObserver;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root path; units are discovered below it unless `units` is given.
    pub repo_root: &'a Utf8Path,
    /// Config file contents.
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Host-supplied units. Skips discovery when present.
    pub units: Option<Vec<UnitInput>>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ProlayoutReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, collect units, evaluate policy, produce report.
///
/// An invalid pattern surfaces as an error whose chain holds a
/// [`prolayout_domain::PolicyError`].
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    if input.config_text.trim().is_empty() {
        anyhow::bail!("config is empty: a layout policy is required");
    }
    let cfg = prolayout_settings::parse_config(input.config_text, input.config_format)
        .context("parse config")?;
    let resolved = prolayout_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let units = match input.units {
        Some(units) => units,
        None => prolayout_repo::discover_units(
            input.repo_root,
            &resolved.policy.module,
            &resolved.discovery,
        )
        .context("discover units")?,
    };

    let domain_report = prolayout_domain::evaluate(
        &resolved.policy,
        &units,
        &resolved.effective,
        &TracingObserver,
    )
    .context("evaluate layout policy")?;

    tracing::info!(
        profile = %domain_report.data.profile,
        units = domain_report.data.units_scanned,
        files = domain_report.data.files_scanned,
        findings = domain_report.data.findings_total,
        errors = domain_report.counts.error,
        warnings = domain_report.counts.warning,
        verdict = ?domain_report.verdict,
        "layout check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "prolayout".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
