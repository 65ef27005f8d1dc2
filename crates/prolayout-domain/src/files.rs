//! File-name conformance for a resolved directory rule.

use crate::error::{PatternKind, PolicyError};
use crate::model::PolicyNode;
use crate::observe::{ResolutionObserver, ResolutionStep};
use crate::pattern::first_match;
use crate::violation::Violation;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileCheckOptions {
    /// Appended to each declared name before matching (e.g. `.go`). Empty for none.
    pub suffix: String,
}

impl FileCheckOptions {
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

/// Check every declared file of the unit at `path` against `node`'s file patterns.
///
/// No rule, or a rule without file patterns, accepts every name. Each file is checked on
/// its own; a failing file does not stop the others.
pub fn check_files<S: AsRef<str>>(
    node: Option<&PolicyNode>,
    path: &str,
    declared: &[S],
    options: &FileCheckOptions,
    observer: &dyn ResolutionObserver,
) -> Result<Vec<Violation>, PolicyError> {
    let Some(node) = node.filter(|n| n.restricts_files()) else {
        return Ok(Vec::new());
    };

    let mut violations = Vec::new();
    for file in declared {
        let file = file.as_ref();
        let candidate = format!("{file}{}", options.suffix);
        let patterns = node.files.iter().map(String::as_str);
        match first_match(PatternKind::File, patterns, &candidate)? {
            Some(i) => observer.on_step(
                path,
                &ResolutionStep::FileMatched {
                    file,
                    pattern: &node.files[i],
                },
            ),
            None => {
                observer.on_step(path, &ResolutionStep::FileUnmatched { file });
                violations.push(Violation::file(path, file, node.files.clone()));
            }
        }
    }
    Ok(violations)
}
