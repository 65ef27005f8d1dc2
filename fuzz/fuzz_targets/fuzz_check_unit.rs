//! Fuzz target for checking one unit against an arbitrary policy.
//!
//! Goal: arbitrary patterns, paths, and file names must **never panic**. Invalid regexes
//! come back as `PolicyError`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_check_unit
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;
use prolayout_domain::files::FileCheckOptions;
use prolayout_domain::policy::{EffectiveConfig, FailOn};
use prolayout_domain::resolve::ResolveOptions;
use prolayout_domain::{check_unit, NoopObserver, PolicyNode, PolicyTree, UnitInput};

#[derive(Arbitrary, Debug)]
struct Rule {
    name: String,
    files: Vec<String>,
    child: Option<Box<Rule>>,
}

#[derive(Arbitrary, Debug)]
struct CheckInput {
    module: String,
    rules: Vec<Rule>,
    path: String,
    files: Vec<String>,
    skip_unmatched_without_files: bool,
}

fn to_node(rule: &Rule) -> PolicyNode {
    PolicyNode::new(rule.name.clone())
        .with_files(rule.files.iter().cloned())
        .with_dirs(rule.child.iter().map(|c| to_node(c)).collect())
}

fuzz_target!(|input: CheckInput| {
    // Keep inputs small so regex compilation stays fast.
    if input.rules.len() > 8 || input.files.len() > 16 || input.path.len() > 256 {
        return;
    }
    if input.rules.iter().any(|r| r.name.len() > 64) {
        return;
    }

    let tree = PolicyTree::new(input.module, input.rules.iter().map(to_node).collect());
    let unit = UnitInput::new(input.path, input.files);

    let cfg = EffectiveConfig {
        profile: "fuzz".to_string(),
        fail_on: FailOn::Error,
        max_findings: 100,
        checks: BTreeMap::new(),
        resolve: ResolveOptions {
            skip_unmatched_without_files: input.skip_unmatched_without_files,
        },
        files: FileCheckOptions::default(),
    };

    let _ = check_unit(&tree, &unit, &cfg, &NoopObserver);
});
