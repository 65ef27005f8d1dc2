use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `.prolayout.yml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProlayoutConfigV1 {
    /// Optional schema string for tooling (`prolayout.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Module/base prefix stripped from unit paths before matching.
    #[serde(default)]
    pub module: String,

    /// Top-level directory rules.
    #[serde(default)]
    pub root: Vec<DirConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Appended to declared file names before matching (e.g. `.go`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_suffix: Option<String>,

    /// Extensions of source files when discovering units on disk. Defaults to `["go"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Glob patterns (repo-relative) excluded from discovery.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Skip unmatched segments of units that declare no files. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_unmatched_without_files: Option<bool>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// One directory rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DirConfig {
    /// Regular expression for the directory name. Empty matches the module root.
    #[serde(default)]
    pub name: String,

    /// Allowed file names (regular expressions). Empty allows any file.
    #[serde(default)]
    pub files: Vec<FileRule>,

    /// Nested directory rules, in priority order.
    #[serde(default)]
    pub dirs: Vec<DirConfig>,
}

/// A file rule is either a bare pattern or `{ name: pattern }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FileRule {
    Pattern(String),
    Named { name: String },
}

impl FileRule {
    pub fn pattern(&self) -> &str {
        match self {
            FileRule::Pattern(p) => p,
            FileRule::Named { name } => name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
