use crate::model::{DirConfig, ProlayoutConfigV1};
use crate::presets;
use anyhow::Context;
use globset::Glob;
use prolayout_domain::files::FileCheckOptions;
use prolayout_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use prolayout_domain::{PolicyNode, PolicyTree};
use prolayout_types::Severity;

const DEFAULT_EXTENSIONS: &[&str] = &["go"];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

/// How the host adapter finds units on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Source file extensions, without the leading dot.
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: PolicyTree,
    pub effective: EffectiveConfig,
    pub discovery: DiscoveryConfig,
}

pub fn resolve_config(
    cfg: ProlayoutConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    if let Some(skip) = cfg.skip_unmatched_without_files {
        effective.resolve.skip_unmatched_without_files = skip;
    }

    if let Some(suffix) = cfg.file_suffix.clone() {
        effective.files = FileCheckOptions::with_suffix(suffix);
    }

    validate_exclude(&cfg.exclude)?;
    let discovery = DiscoveryConfig {
        extensions: cfg
            .extensions
            .clone()
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect(),
        exclude: cfg.exclude.clone(),
    };

    // Patterns are compiled lazily by the engine; nothing to validate here.
    let policy = PolicyTree::new(cfg.module.clone(), cfg.root.iter().map(to_node).collect());

    Ok(ResolvedConfig {
        policy,
        effective,
        discovery,
    })
}

fn to_node(dir: &DirConfig) -> PolicyNode {
    PolicyNode::new(dir.name.clone())
        .with_files(dir.files.iter().map(|f| f.pattern().to_string()))
        .with_dirs(dir.dirs.iter().map(to_node).collect())
}

fn validate_exclude(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
