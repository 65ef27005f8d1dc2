//! The `validate` use case: compile every pattern of the policy up front.
//!
//! `check` only compiles the patterns it reaches. This walks the whole tree so authors
//! learn about a broken pattern before a unit happens to hit it.

use anyhow::Context;
use prolayout_domain::pattern::validate_pattern;
use prolayout_domain::{PatternKind, PolicyError};
use prolayout_settings::ConfigFormat;

#[derive(Debug)]
pub struct ValidateOutput {
    /// Directory rules visited.
    pub rules: usize,
    /// Patterns compiled (directory names plus file patterns).
    pub patterns: usize,
    /// Every pattern that failed to compile, in tree order.
    pub errors: Vec<PolicyError>,
}

impl ValidateOutput {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn run_validate(config_text: &str, format: ConfigFormat) -> anyhow::Result<ValidateOutput> {
    let cfg = prolayout_settings::parse_config(config_text, format).context("parse config")?;
    let resolved = prolayout_settings::resolve_config(cfg, Default::default())
        .context("resolve config")?;

    let mut out = ValidateOutput {
        rules: 0,
        patterns: 0,
        errors: Vec::new(),
    };
    resolved.policy.walk(|node, _depth| {
        out.rules += 1;
        let names = std::iter::once((PatternKind::Directory, node.name.as_str()))
            .chain(node.files.iter().map(|f| (PatternKind::File, f.as_str())));
        for (kind, pattern) in names {
            out.patterns += 1;
            if let Err(err) = validate_pattern(kind, pattern) {
                out.errors.push(err);
            }
        }
    });

    tracing::debug!(
        rules = out.rules,
        patterns = out.patterns,
        invalid = out.errors.len(),
        "validated policy patterns"
    );
    Ok(out)
}
