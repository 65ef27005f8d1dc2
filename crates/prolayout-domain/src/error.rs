use std::fmt;

/// Which part of a rule a pattern came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Directory,
    File,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Directory => f.write_str("directory name"),
            PatternKind::File => f.write_str("file name"),
        }
    }
}

/// Configuration errors raised by the engine.
///
/// Layout violations are never errors; they are returned as values.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("{kind} {pattern:?} is not a valid regular expression")]
    InvalidPattern {
        kind: PatternKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PolicyError {
    /// The offending pattern as written in the policy.
    pub fn pattern(&self) -> &str {
        match self {
            PolicyError::InvalidPattern { pattern, .. } => pattern,
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            PolicyError::InvalidPattern { kind, .. } => *kind,
        }
    }
}
