use prolayout_domain::{ResolutionObserver, ResolutionStep};

/// Forwards every resolution step to `tracing` at trace level.
///
/// Enable with `PROLAYOUT_LOG=prolayout_app=trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn on_step(&self, path: &str, step: &ResolutionStep<'_>) {
        match step {
            ResolutionStep::SegmentMatched {
                depth,
                segment,
                pattern,
            } => tracing::trace!(unit = path, depth, segment, pattern, "segment matched"),
            ResolutionStep::SegmentSkipped { depth, segment } => {
                tracing::trace!(unit = path, depth, segment, "segment skipped (no files)")
            }
            ResolutionStep::SegmentUnmatched { depth, segment } => {
                tracing::trace!(unit = path, depth, segment, "segment not allowed")
            }
            ResolutionStep::PolicyExhausted { depth, segment } => {
                tracing::trace!(unit = path, depth, segment, "policy exhausted")
            }
            ResolutionStep::FileMatched { file, pattern } => {
                tracing::trace!(unit = path, file, pattern, "file matched")
            }
            ResolutionStep::FileUnmatched { file } => {
                tracing::trace!(unit = path, file, "file not allowed")
            }
        }
    }
}
