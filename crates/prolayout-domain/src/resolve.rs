//! Descent of a unit path through the policy tree.

use crate::error::{PatternKind, PolicyError};
use crate::model::PolicyNode;
use crate::observe::{ResolutionObserver, ResolutionStep};
use crate::pattern::first_match;
use crate::violation::Violation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Silently skip an unmatched segment when the unit declares no files.
    ///
    /// Units without files are often synthetic or placeholder directories. The skipped
    /// segment consumes no rule: the next segment is tried against the same siblings.
    pub skip_unmatched_without_files: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            skip_unmatched_without_files: true,
        }
    }
}

/// How descent ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Every segment was matched or skipped.
    Completed,
    /// The policy has no rules below the last matched node; `remaining` segments were not checked.
    PolicyExhausted { remaining: usize },
    /// `segment` matched no sibling rule; descent stopped there.
    Unmatched { segment: String },
}

/// The rules matched along one path, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPath<'a> {
    pub nodes: Vec<&'a PolicyNode>,
    pub outcome: ResolveOutcome,
}

impl<'a> ResolvedPath<'a> {
    /// Deepest matched rule, if any segment matched.
    ///
    /// The unit's files are checked against this rule whatever the outcome: a failed
    /// descent still leaves the last rule that did match.
    pub fn terminal(&self) -> Option<&'a PolicyNode> {
        self.nodes.last().copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub resolved: ResolvedPath<'a>,
    /// Zero or one directory violation.
    pub violations: Vec<Violation>,
}

/// Split a module-relative path into segments.
///
/// `""` is the module root and yields one empty segment.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

/// Remove the module prefix and one leading `/` from a unit path.
///
/// Only a whole-segment prefix is stripped; other paths are returned unchanged.
/// A trailing `/` on the module is ignored.
pub fn strip_module<'p>(unit_path: &'p str, module: &str) -> &'p str {
    let module = module.trim_end_matches('/');
    let rest = match unit_path.strip_prefix(module) {
        Some(rest) if !module.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => unit_path,
    };
    rest.strip_prefix('/').unwrap_or(rest)
}

/// Walk `path` against `forest`, first-match-wins at every depth.
pub fn resolve<'a>(
    forest: &'a [PolicyNode],
    path: &str,
    has_files: bool,
    options: &ResolveOptions,
    observer: &dyn ResolutionObserver,
) -> Result<Resolution<'a>, PolicyError> {
    let segments = split_segments(path);
    let mut children = forest;
    let mut nodes: Vec<&'a PolicyNode> = Vec::new();
    let mut violations = Vec::new();
    let mut outcome = ResolveOutcome::Completed;

    for (idx, segment) in segments.iter().copied().enumerate() {
        let depth = nodes.len();

        if children.is_empty() {
            observer.on_step(path, &ResolutionStep::PolicyExhausted { depth, segment });
            outcome = ResolveOutcome::PolicyExhausted {
                remaining: segments.len() - idx,
            };
            break;
        }

        let names = children.iter().map(|n| n.name.as_str());
        match first_match(PatternKind::Directory, names, segment)? {
            Some(i) => {
                let node = &children[i];
                observer.on_step(
                    path,
                    &ResolutionStep::SegmentMatched {
                        depth,
                        segment,
                        pattern: &node.name,
                    },
                );
                nodes.push(node);
                children = &node.dirs;
            }
            None if options.skip_unmatched_without_files && !has_files => {
                observer.on_step(path, &ResolutionStep::SegmentSkipped { depth, segment });
            }
            None => {
                observer.on_step(path, &ResolutionStep::SegmentUnmatched { depth, segment });
                let candidates = children.iter().map(|n| n.name.clone()).collect();
                violations.push(Violation::directory(path, segment, candidates));
                outcome = ResolveOutcome::Unmatched {
                    segment: segment.to_string(),
                };
                break;
            }
        }
    }

    Ok(Resolution {
        resolved: ResolvedPath { nodes, outcome },
        violations,
    })
}
