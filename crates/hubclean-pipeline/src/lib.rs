//! Fetch → normalize → classify → format → dispatch, once per trigger.

pub mod error;
pub mod pipeline;

pub use error::{Outcome, PipelineError};
pub use pipeline::{build_report, run_analysis, Report};
