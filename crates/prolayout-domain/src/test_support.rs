use crate::files::FileCheckOptions;
use crate::model::{PolicyNode, PolicyTree, UnitInput};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use crate::resolve::ResolveOptions;
use prolayout_types::{ids, Severity};
use std::collections::BTreeMap;

pub fn dir(name: &str) -> PolicyNode {
    PolicyNode::new(name)
}

pub fn dirs_with(name: &str, dirs: Vec<PolicyNode>) -> PolicyNode {
    PolicyNode::new(name).with_dirs(dirs)
}

pub fn files_dir(name: &str, files: &[&str]) -> PolicyNode {
    PolicyNode::new(name).with_files(files.iter().copied())
}

/// `internal/model`, where model files must be lowercase.
pub fn sample_forest() -> Vec<PolicyNode> {
    vec![dirs_with(
        "^internal$",
        vec![files_dir("^model$", &["^[a-z]+$"])],
    )]
}

pub fn sample_tree() -> PolicyTree {
    PolicyTree::new("github.com/acme/app", sample_forest())
}

pub fn unit(path: &str, files: &[&str]) -> UnitInput {
    UnitInput::new(path, files.iter().copied())
}

pub fn config() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_LAYOUT_DIRECTORIES.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    checks.insert(
        ids::CHECK_LAYOUT_FILES.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
        resolve: ResolveOptions::default(),
        files: FileCheckOptions::default(),
    }
}
