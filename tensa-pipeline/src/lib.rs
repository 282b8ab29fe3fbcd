//! # tensa-pipeline
//!
//! Client-side orchestration of the tense analyzer: debounced full analysis,
//! low-latency quick classification on minor edits, and a local fallback
//! that recomputes the same rule set whenever the remote service fails.
//! Every failure path degrades to a deterministic, locally computed result.

pub mod error;
pub mod orchestrator;
pub mod transport;

pub use error::TransportError;
pub use orchestrator::{Orchestrator, PipelineUpdate};
pub use transport::{AnalysisTransport, HttpTransport, LocalTransport};
