//! Submission collaborators: collector transport, pipeline, trait seams

mod client;
mod pipeline;
pub mod traits;

pub use client::{CollectorClient, CollectorError};
pub use pipeline::{SubmissionPipeline, TracingTracker};
