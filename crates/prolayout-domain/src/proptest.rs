//! Property-based tests for the conformance engine.
//!
//! These tests use proptest to verify invariants around:
//! - determinism of resolution and file checks
//! - permissiveness of rules without file patterns
//! - first-match-wins and silent acceptance below the configured depth

use crate::engine::check_unit;
use crate::files::{check_files, FileCheckOptions};
use crate::model::{PolicyNode, PolicyTree};
use crate::observe::NoopObserver;
use crate::resolve::{resolve, ResolveOptions};
use crate::test_support::{config, dir, sample_tree, unit};
use crate::violation::ViolationKind;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A single path segment (may be empty).
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_.-]{0,12}").unwrap()
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..6).prop_map(|segs| segs.join("/"))
}

fn arb_file_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z0-9_]{1,16}").unwrap(),
        0..8,
    )
}

fn unit_of(path: &str, files: &[String]) -> crate::model::UnitInput {
    let names: Vec<&str> = files.iter().map(String::as_str).collect();
    unit(path, &names)
}

proptest! {
    #[test]
    fn resolution_is_deterministic(path in arb_path(), files in arb_file_names()) {
        let tree = sample_tree();
        let u = unit_of(&format!("github.com/acme/app/{path}"), &files);
        let first = check_unit(&tree, &u, &config(), &NoopObserver).unwrap();
        let second = check_unit(&tree, &u, &config(), &NoopObserver).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_directory_violation_per_unit(path in arb_path(), files in arb_file_names()) {
        let tree = sample_tree();
        let u = unit_of(&format!("github.com/acme/app/{path}"), &files);
        let out = check_unit(&tree, &u, &config(), &NoopObserver).unwrap();
        let dirs = out.iter().filter(|v| v.kind == ViolationKind::Directory).count();
        prop_assert!(dirs <= 1);
    }

    #[test]
    fn file_violations_do_not_depend_on_directory_outcome(
        segment in arb_segment(),
        files in arb_file_names(),
    ) {
        let tree = PolicyTree::new(
            "m",
            vec![PolicyNode::new("^internal$")
                .with_files(["^[a-z0-9_]+$"])
                .with_dirs(vec![PolicyNode::new("^model$").with_files(["^[a-z0-9_]+$"])])],
        );
        let out = check_unit(
            &tree,
            &unit_of(&format!("m/internal/{segment}"), &files),
            &config(),
            &NoopObserver,
        )
        .unwrap();
        let reported = out.iter().filter(|v| v.kind == ViolationKind::File).count();
        let expected = files
            .iter()
            .filter(|f| f.chars().any(|c| c.is_ascii_uppercase()))
            .count();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn rules_without_file_patterns_accept_any_names(files in arb_file_names()) {
        let node = dir("^x$");
        let out = check_files(
            Some(&node),
            "x",
            &files,
            &FileCheckOptions::default(),
            &NoopObserver,
        )
        .unwrap();
        prop_assert!(out.is_empty());
    }

    #[test]
    fn first_declared_match_wins(rest in "[a-z]{0,6}") {
        let forest = vec![dir("^a.*$"), dir("^ab$")];
        let segment = format!("a{rest}");
        let res = resolve(&forest, &segment, true, &ResolveOptions::default(), &NoopObserver)
            .unwrap();
        prop_assert_eq!(res.resolved.terminal().map(|n| n.name.as_str()), Some("^a.*$"));
    }

    #[test]
    fn segments_below_the_policy_are_never_reported(
        extra in prop::collection::vec(arb_segment(), 1..5),
        files in arb_file_names(),
    ) {
        let tree = PolicyTree::new("m", vec![PolicyNode::new("^internal$")]);
        let path = format!("m/internal/{}", extra.join("/"));
        let out = check_unit(&tree, &unit_of(&path, &files), &config(), &NoopObserver).unwrap();
        prop_assert!(out.is_empty());
    }

    #[test]
    fn units_without_files_never_report_directories(path in arb_path()) {
        let tree = sample_tree();
        let u = unit_of(&format!("github.com/acme/app/{path}"), &[]);
        let out = check_unit(&tree, &u, &config(), &NoopObserver).unwrap();
        prop_assert!(out.is_empty());
    }
}
