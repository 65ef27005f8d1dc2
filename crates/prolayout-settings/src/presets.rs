use prolayout_domain::files::FileCheckOptions;
use prolayout_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use prolayout_domain::resolve::ResolveOptions;
use prolayout_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Error),
        resolve: ResolveOptions::default(),
        files: FileCheckOptions::default(),
    }
}

fn warn_profile() -> EffectiveConfig {
    // Reports every violation but only fails when the config asks for it.
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
        resolve: ResolveOptions::default(),
        files: FileCheckOptions::default(),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use prolayout_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_LAYOUT_DIRECTORIES.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_LAYOUT_FILES.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use prolayout_types::ids;

    #[test]
    fn unknown_profile_falls_back_to_strict() {
        let cfg = preset("nope");
        assert_eq!(cfg.profile, "strict");
        let files = cfg.check_policy(ids::CHECK_LAYOUT_FILES).unwrap();
        assert_eq!(files.severity, Severity::Error);
    }

    #[test]
    fn warn_profile_downgrades_severity() {
        let cfg = preset("warn");
        let dirs = cfg.check_policy(ids::CHECK_LAYOUT_DIRECTORIES).unwrap();
        assert_eq!(dirs.severity, Severity::Warning);
        assert_eq!(cfg.fail_on, FailOn::Error);
    }
}
