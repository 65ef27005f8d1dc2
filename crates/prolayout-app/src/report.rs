use anyhow::Context;
use prolayout_domain::PolicyError;
use prolayout_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use prolayout_types::{
    ids, Finding, ProlayoutData, ProlayoutReport, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<ProlayoutReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse prolayout report")
}

pub fn serialize_report(report: &ProlayoutReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ProlayoutReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            units_scanned: report.data.units_scanned,
            files_scanned: report.data.files_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        path: f.location.as_ref().map(|l| l.path.as_str().to_string()),
        help: f.help.clone(),
    }
}

/// The policy error anywhere in `err`'s chain, if the failure was a bad pattern.
pub fn policy_error(err: &anyhow::Error) -> Option<&PolicyError> {
    err.chain().find_map(|e| e.downcast_ref::<PolicyError>())
}

/// A failing receipt carrying a single `tool.runtime` finding for `err`.
pub fn runtime_error_report(err: &anyhow::Error) -> ProlayoutReport {
    let now = OffsetDateTime::now_utc();

    let (code, message, help, data) = match policy_error(err) {
        Some(policy) => (
            ids::CODE_INVALID_PATTERN,
            policy.to_string(),
            "Fix the pattern in the policy file; `prolayout validate` lists every invalid pattern.",
            serde_json::json!({
                "kind": policy.kind().to_string(),
                "pattern": policy.pattern(),
            }),
        ),
        None => (
            ids::CODE_RUNTIME_ERROR,
            format!("{err:#}"),
            "Fix the tool error and re-run prolayout.",
            serde_json::Value::Null,
        ),
    };

    ProlayoutReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "prolayout".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: code.to_string(),
            message,
            location: None,
            help: Some(help.to_string()),
            url: None,
            fingerprint: None,
            data,
        }],
        data: ProlayoutData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..ProlayoutData::default()
        },
    }
}
