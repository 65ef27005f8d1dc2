//! Integration tests for unit discovery against the checked-in Go layout fixture.

use camino::Utf8PathBuf;
use prolayout_repo::discover_units;
use prolayout_settings::DiscoveryConfig;
use std::path::PathBuf;

/// Repo root / tests / fixtures.
fn fixtures_dir() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .parent()
        .expect("prolayout-repo should have parent (crates)")
        .parent()
        .expect("crates should have parent (repo root)");
    Utf8PathBuf::from_path_buf(repo_root.join("tests").join("fixtures"))
        .expect("fixture path should be valid UTF-8")
}

fn go_discovery() -> DiscoveryConfig {
    DiscoveryConfig {
        extensions: vec!["go".to_string()],
        exclude: Vec::new(),
    }
}

#[test]
fn fixture_units_are_sorted_and_prefixed_with_module() {
    let root = fixtures_dir().join("go_layout");
    let units = discover_units(&root, "github.com/acme/app", &go_discovery()).expect("discover");

    let paths: Vec<&str> = units.iter().map(|u| u.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "github.com/acme/app",
            "github.com/acme/app/cmd",
            "github.com/acme/app/cmd/server",
            "github.com/acme/app/internal",
            "github.com/acme/app/internal/model",
            "github.com/acme/app/internal/service",
        ]
    );
}

#[test]
fn fixture_files_are_extension_filtered_base_names() {
    let root = fixtures_dir().join("go_layout");
    let units = discover_units(&root, "github.com/acme/app", &go_discovery()).expect("discover");

    let model = units
        .iter()
        .find(|u| u.path.ends_with("internal/model"))
        .expect("model unit");
    assert_eq!(model.files, vec!["order".to_string(), "user".to_string()]);

    let root_unit = &units[0];
    assert_eq!(root_unit.files, vec!["main".to_string()]);
}

#[test]
fn discovery_is_deterministic() {
    let root = fixtures_dir().join("go_layout");
    let a = discover_units(&root, "m", &go_discovery()).expect("discover");
    let b = discover_units(&root, "m", &go_discovery()).expect("discover");
    assert_eq!(a, b);
}
