//! Pure layout policy evaluation (no IO).
//!
//! Input: a policy tree and the compilation units supplied by a host.
//! Output: violations, or findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod error;
pub mod files;
pub mod model;
pub mod observe;
pub mod pattern;
pub mod policy;
pub mod report;
pub mod resolve;
pub mod violation;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{check_unit, evaluate};
pub use error::{PatternKind, PolicyError};
pub use model::{PolicyNode, PolicyTree, UnitInput};
pub use observe::{NoopObserver, ResolutionObserver, ResolutionStep};
pub use violation::{Violation, ViolationKind};
