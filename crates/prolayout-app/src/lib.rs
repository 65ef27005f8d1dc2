//! Use case orchestration for prolayout.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo,
//! settings, and render layers. It stays thin and delegates the real work to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod observe;
mod render;
mod report;
mod validate;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput, Explained};
pub use observe::TracingObserver;
pub use render::{finding_line, render_annotations, render_markdown};
pub use report::{
    parse_report_json, policy_error, runtime_error_report, serialize_report, to_renderable,
};
pub use validate::{run_validate, ValidateOutput};
