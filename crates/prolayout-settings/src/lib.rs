//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, DirConfig, FileRule, ProlayoutConfigV1};
pub use resolve::{DiscoveryConfig, Overrides, ResolvedConfig};

/// Default policy file name, looked up relative to the repository root.
pub const DEFAULT_CONFIG_FILE: &str = ".prolayout.yml";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` selects TOML; everything else is read as YAML.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".toml") {
            ConfigFormat::Toml
        } else {
            ConfigFormat::Yaml
        }
    }
}

/// Parse `.prolayout.yml` into a typed model.
pub fn parse_config_yaml(input: &str) -> anyhow::Result<ProlayoutConfigV1> {
    let cfg: ProlayoutConfigV1 = serde_yaml::from_str(input)?;
    Ok(cfg)
}

/// Parse the TOML spelling of the same document.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ProlayoutConfigV1> {
    let cfg: ProlayoutConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<ProlayoutConfigV1> {
    match format {
        ConfigFormat::Yaml => parse_config_yaml(input),
        ConfigFormat::Toml => parse_config_toml(input),
    }
}

/// Resolve the policy tree and the effective config used by the engine
/// (profiles + overrides + per-check config).
pub fn resolve_config(
    cfg: ProlayoutConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
module: github.com/wimspaargaren/prolayout
root:
  - name: ""
  - name: "^internal$"
    dirs:
      - name: "^model$"
        files:
          - "^[a-z]+$"
          - name: "^doc$"
  - name: "^tests$"
checks:
  layout.files:
    severity: warning
"#;

    #[test]
    fn parses_yaml_policy_with_both_file_rule_spellings() {
        let cfg = parse_config_yaml(YAML).unwrap();
        assert_eq!(cfg.module, "github.com/wimspaargaren/prolayout");
        assert_eq!(cfg.root.len(), 3);
        assert_eq!(cfg.root[0].name, "");
        let model = &cfg.root[1].dirs[0];
        assert_eq!(model.files[0], FileRule::Pattern("^[a-z]+$".to_string()));
        assert_eq!(model.files[1].pattern(), "^doc$");
        assert_eq!(
            cfg.checks["layout.files"].severity.as_deref(),
            Some("warning")
        );
    }

    #[test]
    fn parses_toml_policy() {
        let cfg = parse_config_toml(
            r#"
module = "example.com/app"
file_suffix = ".go"

[[root]]
name = "^cmd$"
files = ["^main$"]
"#,
        )
        .unwrap();
        assert_eq!(cfg.module, "example.com/app");
        assert_eq!(cfg.root[0].files[0].pattern(), "^main$");
        assert_eq!(cfg.file_suffix.as_deref(), Some(".go"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = parse_config_yaml("name: Example\nversion: 1.0.0\ninvalid field").unwrap_err();
        assert!(err.to_string().contains("could not find expected ':'"));
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(ConfigFormat::from_path("prolayout.toml"), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(".prolayout.yml"), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path("policy.yaml"), ConfigFormat::Yaml);
    }
}
