//! Regular-expression matching for directory and file rules.
//!
//! Patterns are searched, not anchored: `model` matches `datamodel`. Authors anchor with
//! `^`/`$`. Matching is case-sensitive. The empty pattern stands for the empty segment
//! (module root) and compiles as `^$`.

use crate::error::{PatternKind, PolicyError};
use regex::Regex;

const EMPTY_SEGMENT: &str = "^$";

/// Compile a policy pattern.
pub fn compile(kind: PatternKind, pattern: &str) -> Result<Regex, PolicyError> {
    let source = if pattern.is_empty() {
        EMPTY_SEGMENT
    } else {
        pattern
    };
    Regex::new(source).map_err(|source| PolicyError::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        source,
    })
}

/// Check a pattern compiles, without matching anything.
pub fn validate_pattern(kind: PatternKind, pattern: &str) -> Result<(), PolicyError> {
    compile(kind, pattern).map(|_| ())
}

/// Does `pattern` match anywhere in `candidate`?
pub fn matches(kind: PatternKind, pattern: &str, candidate: &str) -> Result<bool, PolicyError> {
    Ok(compile(kind, pattern)?.is_match(candidate))
}

/// Index of the first pattern (in order) matching `candidate`.
///
/// Patterns after the first match are never compiled.
pub fn first_match<'p, I>(
    kind: PatternKind,
    patterns: I,
    candidate: &str,
) -> Result<Option<usize>, PolicyError>
where
    I: IntoIterator<Item = &'p str>,
{
    for (idx, pattern) in patterns.into_iter().enumerate() {
        if matches(kind, pattern, candidate)? {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}
