use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Directory,
    File,
}

/// A mismatch between the actual layout and the policy.
///
/// Carries everything needed to render a message without going back to the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Module-relative unit path.
    pub path: String,
    /// The unmatched segment, or the offending file name.
    pub segment: String,
    /// Patterns that were tried, in declaration order.
    pub candidates: Vec<String>,
}

impl Violation {
    pub fn directory(path: &str, segment: &str, candidates: Vec<String>) -> Self {
        Self {
            kind: ViolationKind::Directory,
            path: path.to_string(),
            segment: segment.to_string(),
            candidates,
        }
    }

    pub fn file(path: &str, file: &str, candidates: Vec<String>) -> Self {
        Self {
            kind: ViolationKind::File,
            path: path.to_string(),
            segment: file.to_string(),
            candidates,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let candidates = self.candidates.join(",");
        match self.kind {
            ViolationKind::Directory => write!(
                f,
                "path '{}' not allowed: folder '{}' was not found in allowed names: [{}]",
                self.path, self.segment, candidates
            ),
            ViolationKind::File => write!(
                f,
                "file '{}' not allowed in folder '{}': allowed names: [{}]",
                self.segment, self.path, candidates
            ),
        }
    }
}
