use crate::error::PolicyError;
use crate::files::check_files;
use crate::fingerprint::fingerprint_for_violation;
use crate::model::{PolicyTree, UnitInput};
use crate::observe::ResolutionObserver;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::resolve::{resolve, strip_module, Resolution};
use crate::violation::{Violation, ViolationKind};
use prolayout_types::{ids, Finding, Location, ProlayoutData, RepoPath, Severity, Verdict};
use rayon::prelude::*;

/// Check one compilation unit: resolve its path, then its files.
///
/// Files are checked against the deepest matched rule, even when descent failed below it.
/// Directory and file violations are reported independently.
pub fn check_unit(
    tree: &PolicyTree,
    unit: &UnitInput,
    cfg: &EffectiveConfig,
    observer: &dyn ResolutionObserver,
) -> Result<Vec<Violation>, PolicyError> {
    let path = strip_module(&unit.path, &tree.module);
    let Resolution {
        resolved,
        mut violations,
    } = resolve(
        &tree.root,
        path,
        !unit.files.is_empty(),
        &cfg.resolve,
        observer,
    )?;

    violations.extend(check_files(
        resolved.terminal(),
        path,
        &unit.files,
        &cfg.files,
        observer,
    )?);
    Ok(violations)
}

/// Check every unit and fold the violations into a report.
///
/// Units are checked in parallel against the shared tree. The first configuration error,
/// in unit order, aborts the evaluation.
pub fn evaluate(
    tree: &PolicyTree,
    units: &[UnitInput],
    cfg: &EffectiveConfig,
    observer: &dyn ResolutionObserver,
) -> Result<DomainReport, PolicyError> {
    let per_unit: Vec<Result<Vec<Violation>, PolicyError>> = units
        .par_iter()
        .map(|unit| check_unit(tree, unit, cfg, observer))
        .collect();

    let mut findings: Vec<Finding> = Vec::new();
    for result in per_unit {
        for violation in result? {
            if let Some(finding) = to_finding(&violation, cfg) {
                findings.push(finding);
            }
        }
    }

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = count(findings.len());

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = ProlayoutData {
        profile: cfg.profile.clone(),
        units_scanned: count(units.len()),
        files_scanned: count(units.iter().map(|u| u.files.len()).sum()),
        findings_total: total,
        findings_emitted: count(emitted.len()),
        truncated_reason,
    };

    Ok(DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    })
}

/// Saturating conversion for report counters.
fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn to_finding(violation: &Violation, cfg: &EffectiveConfig) -> Option<Finding> {
    let (check_id, code, location, help) = match violation.kind {
        ViolationKind::Directory => (
            ids::CHECK_LAYOUT_DIRECTORIES,
            ids::CODE_DIRECTORY_NOT_ALLOWED,
            RepoPath::new(&violation.path),
            "Move the unit under a permitted directory or add a matching rule to the policy.",
        ),
        ViolationKind::File => (
            ids::CHECK_LAYOUT_FILES,
            ids::CODE_FILE_NOT_ALLOWED,
            RepoPath::new(&violation.path)
                .join(&format!("{}{}", violation.segment, cfg.files.suffix)),
            "Rename the file to match an allowed pattern or extend the rule's files list.",
        ),
    };
    let policy = cfg.check_policy(check_id)?;

    Some(Finding {
        severity: policy.severity,
        check_id: check_id.to_string(),
        code: code.to_string(),
        message: violation.to_string(),
        location: Some(Location::path(location)),
        help: Some(help.to_string()),
        url: None,
        fingerprint: Some(fingerprint_for_violation(
            check_id,
            code,
            &violation.path,
            &violation.segment,
        )),
        data: serde_json::to_value(violation).unwrap_or_default(),
    })
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) check_id
    // 4) code
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let path = |f: &Finding| {
        f.location
            .as_ref()
            .map(|l| l.path.as_str().to_string())
            .unwrap_or_else(|| "~".to_string())
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then_with(|| path(a).cmp(&path(b)))
        .then_with(|| a.check_id.cmp(&b.check_id))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.message.cmp(&b.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileCheckOptions;
    use crate::model::PolicyNode;
    use crate::observe::NoopObserver;
    use crate::policy::CheckPolicy;
    use crate::test_support::{config, dir, sample_tree, unit};

    fn check(tree: &PolicyTree, u: &UnitInput) -> Vec<Violation> {
        check_unit(tree, u, &config(), &NoopObserver).expect("valid policy")
    }

    #[test]
    fn report_counters_saturate() {
        assert_eq!(count(3), 3);
        assert_eq!(count(u32::MAX as usize), u32::MAX);
        assert_eq!(count(usize::MAX), u32::MAX);
    }

    #[test]
    fn conforming_unit_has_no_violations() {
        let tree = sample_tree();
        let u = unit("github.com/acme/app/internal/model", &["root"]);
        assert!(check(&tree, &u).is_empty());
    }

    #[test]
    fn wrongly_named_file_is_reported() {
        let tree = sample_tree();
        let out = check(&tree, &unit("github.com/acme/app/internal/model", &["Root"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::File);
        assert_eq!(out[0].segment, "Root");
        assert_eq!(out[0].path, "internal/model");
    }

    #[test]
    fn unknown_directory_is_reported_once() {
        let tree = sample_tree();
        let out = check(&tree, &unit("github.com/acme/app/internal/service", &["Main"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::Directory);
        assert_eq!(out[0].segment, "service");
        assert_eq!(out[0].candidates, vec!["^model$".to_string()]);
    }

    #[test]
    fn files_are_checked_against_the_parent_of_an_unknown_directory() {
        let tree = PolicyTree::new(
            "m",
            vec![PolicyNode::new("^internal$")
                .with_files(["^[a-z]+$"])
                .with_dirs(vec![dir("^model$")])],
        );
        let out = check(&tree, &unit("m/internal/service", &["Main", "ok"]));
        let kinds: Vec<(ViolationKind, &str)> =
            out.iter().map(|v| (v.kind, v.segment.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                (ViolationKind::Directory, "service"),
                (ViolationKind::File, "Main"),
            ]
        );
        assert_eq!(out[1].path, "internal/service");
        assert_eq!(out[1].candidates, vec!["^[a-z]+$".to_string()]);
    }

    #[test]
    fn files_below_an_exhausted_policy_use_the_deepest_rule() {
        let tree = PolicyTree::new(
            "m",
            vec![PolicyNode::new("^pkg$").with_files(["^[a-z]+$"])],
        );
        let out = check(&tree, &unit("m/pkg/nested", &["ok", "NotOk"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].segment, "NotOk");
    }

    #[test]
    fn suffix_from_config_is_used_for_files_and_locations() {
        let tree = PolicyTree::new(
            "m",
            vec![PolicyNode::new("^pkg$").with_files(["^[a-z]+\\.go$"])],
        );
        let mut cfg = config();
        cfg.files = FileCheckOptions::with_suffix(".go");
        let units = vec![unit("m/pkg", &["good", "Bad"])];
        let report = evaluate(&tree, &units, &cfg, &NoopObserver).unwrap();
        assert_eq!(report.findings.len(), 1);
        let loc = report.findings[0].location.as_ref().unwrap();
        assert_eq!(loc.path.as_str(), "pkg/Bad.go");
    }

    #[test]
    fn evaluate_builds_findings_verdict_and_counts() {
        let tree = sample_tree();
        let units = vec![
            unit("github.com/acme/app/internal/model", &["root", "Root"]),
            unit("github.com/acme/app/internal/service", &["svc"]),
            unit("github.com/acme/app/internal/empty", &[]),
        ];
        let report = evaluate(&tree, &units, &config(), &NoopObserver).unwrap();

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.counts.error, 2);
        assert_eq!(report.data.units_scanned, 3);
        assert_eq!(report.data.files_scanned, 3);

        // Sorted by path: internal/model/Root before internal/service.
        assert_eq!(report.findings[0].code, ids::CODE_FILE_NOT_ALLOWED);
        assert_eq!(report.findings[1].code, ids::CODE_DIRECTORY_NOT_ALLOWED);
        assert_eq!(report.findings[1].data["candidates"][0], "^model$");
        assert!(report.findings.iter().all(|f| f.fingerprint.is_some()));
    }

    #[test]
    fn warnings_fail_only_when_fail_on_warning() {
        let tree = sample_tree();
        let units = vec![unit("github.com/acme/app/internal/model", &["Root"])];

        let mut cfg = config();
        cfg.checks.insert(
            ids::CHECK_LAYOUT_FILES.to_string(),
            CheckPolicy::enabled(Severity::Warning),
        );
        let report = evaluate(&tree, &units, &cfg, &NoopObserver).unwrap();
        assert_eq!(report.verdict, Verdict::Warn);

        cfg.fail_on = FailOn::Warning;
        let report = evaluate(&tree, &units, &cfg, &NoopObserver).unwrap();
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn disabled_check_drops_its_findings() {
        let tree = sample_tree();
        let units = vec![unit("github.com/acme/app/internal/model", &["Root"])];
        let mut cfg = config();
        cfg.checks
            .insert(ids::CHECK_LAYOUT_FILES.to_string(), CheckPolicy::disabled());
        let report = evaluate(&tree, &units, &cfg, &NoopObserver).unwrap();
        assert!(report.findings.is_empty());
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn findings_are_truncated_after_sorting() {
        let tree = PolicyTree::new("", vec![dir("^only$")]);
        let units: Vec<UnitInput> = ["c", "a", "b"].iter().map(|p| unit(p, &["f"])).collect();
        let mut cfg = config();
        cfg.max_findings = 2;
        let report = evaluate(&tree, &units, &cfg, &NoopObserver).unwrap();
        assert_eq!(report.data.findings_total, 3);
        assert_eq!(report.data.findings_emitted, 2);
        assert!(report.data.truncated_reason.is_some());
        let paths: Vec<&str> = report
            .findings
            .iter()
            .map(|f| f.location.as_ref().unwrap().path.as_str())
            .collect();
        assert_eq!(paths, vec!["a", "b"]);
    }

    #[test]
    fn invalid_pattern_aborts_evaluation() {
        let tree = PolicyTree::new("", vec![dir("[")]);
        let units = vec![unit("x", &["f"])];
        let err = evaluate(&tree, &units, &config(), &NoopObserver).unwrap_err();
        assert_eq!(err.pattern(), "[");
    }
}
