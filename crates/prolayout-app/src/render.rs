//! Render use cases: markdown, GitHub annotations, and terminal lines from in-memory reports.

use prolayout_render::RenderableReport;
use prolayout_types::{Finding, Severity};

pub fn render_markdown(report: &RenderableReport) -> String {
    prolayout_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    prolayout_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

/// One terminal line per finding: `{severity} {path}: {message} [{check_id}/{code}]`.
pub fn finding_line(f: &Finding) -> String {
    let sev = match f.severity {
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    match &f.location {
        Some(loc) => format!(
            "{sev} {}: {} [{}/{}]",
            loc.path.as_str(),
            f.message,
            f.check_id,
            f.code
        ),
        None => format!("{sev}: {} [{}/{}]", f.message, f.check_id, f.code),
    }
}
