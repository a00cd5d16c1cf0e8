//! Causal trace recorder.
//!
//! The recorder observes every delivery in a run and appends one
//! [`Edge`] per delivered message, in delivery order. A [`Snapshot`]
//! is a pure projection of the recorded edges plus the run's node
//! order — flat and self-describing, so a renderer can draw a
//! left-to-right causal diagram ordered by clock without any
//! protocol-specific knowledge.

mod recorder;
mod snapshot;

pub use recorder::{TraceError, TraceRecorder};
pub use snapshot::{Edge, Snapshot};
