//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after policy examples.
    pub examples: ExamplePair,
}

/// Before and after policy examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Policy/layout combination that would trigger a finding.
    pub before: &'static str,
    /// Policy that accepts the same layout.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_LAYOUT_DIRECTORIES | ids::CODE_DIRECTORY_NOT_ALLOWED => {
            Some(explain_directories())
        }
        ids::CHECK_LAYOUT_FILES | ids::CODE_FILE_NOT_ALLOWED => Some(explain_files()),
        ids::CODE_INVALID_PATTERN => Some(explain_invalid_pattern()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_LAYOUT_DIRECTORIES, ids::CHECK_LAYOUT_FILES]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DIRECTORY_NOT_ALLOWED,
        ids::CODE_FILE_NOT_ALLOWED,
        ids::CODE_INVALID_PATTERN,
    ]
}

fn explain_directories() -> Explanation {
    Explanation {
        title: "Directory Not Allowed",
        description: "\
Each path segment of a unit is matched against the directory rules configured at
that depth, in declaration order. The first rule whose `name` pattern matches wins.

A finding is emitted when a segment matches none of the sibling rules and the unit
declares at least one source file. Descent stops at that segment, so nothing
below it is checked.

Patterns are regular expressions evaluated as a search: `model` also matches
`datamodels`. Anchor with `^` and `$` for exact names.",
        remediation: "\
Either move the unit under a permitted directory, or add a rule for it:
- add a sibling entry whose `name` matches the directory
- order specific patterns before catch-alls, since the first match wins
- use `name: \"\"` (or `^$`) to describe the module root itself",
        examples: ExamplePair {
            before: r#"root:
  - name: "^internal$"
    dirs:
      - name: "^model$"
# internal/service/handler.go -> 'service' not allowed"#,
            after: r#"root:
  - name: "^internal$"
    dirs:
      - name: "^model$"
      - name: "^service$""#,
        },
    }
}

fn explain_files() -> Explanation {
    Explanation {
        title: "File Not Allowed",
        description: "\
When the directory rule a unit resolves to lists `files` patterns, every declared
file name of that unit must match at least one of them. Rules without `files`
accept any file name.

Each file is checked independently; one failing file does not hide the others.
If `file_suffix` is configured it is appended to the name before matching.",
        remediation: "\
Rename the file so it matches one of the configured patterns, or extend the
`files` list of the directory rule.",
        examples: ExamplePair {
            before: r#"- name: "^model$"
  files: ["^[a-z]+$"]
# internal/model/Root.go -> 'Root' not allowed"#,
            after: r#"- name: "^model$"
  files: ["^[a-z]+$", "^[A-Z][a-z]+$"]"#,
        },
    }
}

fn explain_invalid_pattern() -> Explanation {
    Explanation {
        title: "Invalid Pattern",
        description: "\
A `name` or `files` entry in the policy is not a valid regular expression.
This is a configuration error, not a layout violation: the run aborts and the
report carries a single `tool.runtime` finding.

Patterns are validated lazily, when resolution first tries them. Run
`prolayout validate` to compile every pattern up front.",
        remediation: "\
Fix the regular expression. Escape literal metacharacters such as `[`, `(`, `.`.",
        examples: ExamplePair {
            before: r#"- name: "internal[""#,
            after: r#"- name: "^internal\\[$""#,
        },
    }
}
