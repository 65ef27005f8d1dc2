//! The `explain` use case: documentation for layout checks and their codes.

use prolayout_domain::PatternKind;
use prolayout_types::explain::{lookup_explanation, Explanation};
use prolayout_types::ids;

/// Codes reported under each check, in report order.
const CATALOG: &[(&str, &[&str])] = &[
    (ids::CHECK_LAYOUT_DIRECTORIES, &[ids::CODE_DIRECTORY_NOT_ALLOWED]),
    (ids::CHECK_LAYOUT_FILES, &[ids::CODE_FILE_NOT_ALLOWED]),
    (ids::CHECK_TOOL_RUNTIME, &[ids::CODE_INVALID_PATTERN]),
];

/// An explanation together with the check it belongs to.
#[derive(Clone, Debug)]
pub struct Explained {
    pub check_id: &'static str,
    pub code: &'static str,
    pub explanation: Explanation,
}

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explained),
    NotFound { identifier: String },
}

/// Look up a check id or code.
///
/// A check id resolves to the first code reported under it.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let entry = CATALOG.iter().find_map(|(check_id, codes)| {
        if *check_id == identifier {
            codes.first().map(|code| (*check_id, *code))
        } else {
            codes
                .iter()
                .find(|code| **code == identifier)
                .map(|code| (*check_id, *code))
        }
    });

    match entry.and_then(|(check_id, code)| Some((check_id, code, lookup_explanation(code)?))) {
        Some((check_id, code, explanation)) => ExplainOutput::Found(Explained {
            check_id,
            code,
            explanation,
        }),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(explained: &Explained) -> String {
    let exp = &explained.explanation;
    let mut out = format!(
        "{} [{} / {}]\n\n{}\n",
        exp.title, explained.check_id, explained.code, exp.description
    );
    if explained.code == ids::CODE_INVALID_PATTERN {
        out.push_str(&format!(
            "\nApplies to {} patterns and {} patterns.\n",
            PatternKind::Directory,
            PatternKind::File
        ));
    }
    out.push_str(&format!("\nFix:\n{}\n", exp.remediation));
    out.push_str("\nPolicy that reports it:\n");
    out.push_str(&indent(exp.examples.before));
    out.push_str("\nPolicy that accepts it:\n");
    out.push_str(&indent(exp.examples.after));
    out
}

/// Format the unknown-identifier message, listing codes under their check.
pub fn format_not_found(identifier: &str) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\nAvailable check_ids:\n");
    for (check_id, codes) in CATALOG {
        out.push_str(&format!("  {check_id}\n"));
        for code in *codes {
            out.push_str(&format!("    - {code}\n"));
        }
    }
    out
}

fn indent(block: &str) -> String {
    block.lines().map(|line| format!("    {line}\n")).collect()
}
