use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},title={check_id}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut props = Vec::new();
        if let Some(path) = &f.path {
            props.push(format!("file={}", escape_property(path)));
        }
        props.push(format!("title={}", escape_property(&f.check_id)));

        let message = escape_data(&format!("[{}] {}", f.code, f.message));
        out.push(format!("::{} {}::{}", level, props.join(","), message));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableVerdictStatus};

    fn report(findings: Vec<RenderableFinding>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            data: RenderableData {
                profile: "strict".to_string(),
                units_scanned: 1,
                files_scanned: 1,
                findings_emitted: findings.len() as u32,
                findings_total: findings.len() as u32,
                truncated_reason: None,
            },
            findings,
        }
    }

    #[test]
    fn renders_file_annotation() {
        let lines = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Error,
            check_id: "layout.files".to_string(),
            code: "file_not_allowed".to_string(),
            message: "file 'Bad' not allowed in folder 'internal/model'".to_string(),
            path: Some("internal/model/Bad".to_string()),
            help: None,
        }]));
        insta::assert_snapshot!(lines.join("\n"), @"::error file=internal/model/Bad,title=layout.files::[file_not_allowed] file 'Bad' not allowed in folder 'internal/model'");
    }

    #[test]
    fn escapes_newlines_and_percent() {
        let lines = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Warning,
            check_id: "tool.runtime".to_string(),
            code: "runtime_error".to_string(),
            message: "100% broken\nsecond line".to_string(),
            path: None,
            help: None,
        }]));
        assert_eq!(
            lines,
            vec!["::warning title=tool.runtime::[runtime_error] 100%25 broken%0Asecond line"]
        );
    }

    #[test]
    fn escapes_property_separators() {
        assert_eq!(escape_property("a,b:c"), "a%2Cb%3Ac");
    }
}
