//! Optional step-by-step visibility into resolution.
//!
//! The engine never logs. Callers that want a trace pass an observer.

/// One step taken by the resolver or the file checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionStep<'a> {
    /// `segment` matched the rule `pattern` at `depth`.
    SegmentMatched {
        depth: usize,
        segment: &'a str,
        pattern: &'a str,
    },
    /// `segment` matched nothing but the unit has no files, so it was skipped.
    SegmentSkipped { depth: usize, segment: &'a str },
    /// `segment` matched nothing; a directory violation was recorded.
    SegmentUnmatched { depth: usize, segment: &'a str },
    /// The policy has no rules below this depth; `segment` and the rest are unchecked.
    PolicyExhausted { depth: usize, segment: &'a str },
    /// `file` (with suffix) matched `pattern`.
    FileMatched { file: &'a str, pattern: &'a str },
    /// `file` matched none of the rule's file patterns.
    FileUnmatched { file: &'a str },
}

pub trait ResolutionObserver: Send + Sync {
    fn on_step(&self, path: &str, step: &ResolutionStep<'_>);
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {
    fn on_step(&self, _path: &str, _step: &ResolutionStep<'_>) {}
}
