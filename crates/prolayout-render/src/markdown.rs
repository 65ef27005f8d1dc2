use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

const DIRECTORIES: &str = "layout.directories";
const FILES: &str = "layout.files";

/// Render a report as a PR-comment friendly Markdown summary.
///
/// Findings are grouped by check: directories first, then files, then anything else
/// (runtime errors). Order within a group is the report's order.
pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Prolayout report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let d = &report.data;
    out.push_str(&format!("- Verdict: **{verdict}**\n"));
    out.push_str(&format!("- Profile: `{}`\n", d.profile));
    out.push_str(&format!(
        "- Scanned: {} units / {} files\n",
        d.units_scanned, d.files_scanned
    ));
    out.push_str(&format!(
        "- Findings: {} (emitted) / {} (total)\n\n",
        d.findings_emitted, d.findings_total
    ));

    if let Some(r) = &d.truncated_reason {
        out.push_str(&format!("> Note: {r}\n\n"));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    for title in ["Directories", "Files", "Other"] {
        let group: Vec<&RenderableFinding> = report
            .findings
            .iter()
            .filter(|f| section(&f.check_id) == title)
            .collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("## {title}\n\n"));
        for f in group {
            push_finding(&mut out, f);
        }
        out.push('\n');
    }

    out
}

fn section(check_id: &str) -> &'static str {
    match check_id {
        DIRECTORIES => "Directories",
        FILES => "Files",
        _ => "Other",
    }
}

fn push_finding(out: &mut String, f: &RenderableFinding) {
    let sev = match f.severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    };
    match &f.path {
        Some(path) => out.push_str(&format!(
            "- [{sev}] `{path}`: {} (`{}`)\n",
            f.message, f.code
        )),
        None => out.push_str(&format!("- [{sev}] {} (`{}`)\n", f.message, f.code)),
    }
    if let Some(help) = &f.help {
        out.push_str(&format!("  - help: {help}\n"));
    }
}
