//! The recorder itself.

use crate::{Edge, Snapshot};
use rehearse_core::{Body, Envelope};
use rehearse_types::NodeId;
use thiserror::Error;

/// Errors from the trace recorder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// An envelope reached the recorder without a delivery stamp.
    #[error("cannot record {kind:?} to {dst}: delivery clock not stamped")]
    Undelivered {
        /// Kind of the offending message.
        kind: String,
        /// Its recipient.
        dst: NodeId,
    },
}

/// Append-only record of every delivery in a run.
///
/// Edges are never dropped or reordered; edge order equals delivery
/// order.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    edges: Vec<Edge>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one delivery.
    ///
    /// The caller (the execution engine) must have stamped
    /// `envelope.dst_clock` immediately before invoking the handler.
    pub fn observe<B: Body>(
        &mut self,
        envelope: &Envelope<B>,
        handler: &str,
    ) -> Result<(), TraceError> {
        let dst_clock = envelope.dst_clock.ok_or_else(|| TraceError::Undelivered {
            kind: envelope.message.kind().to_string(),
            dst: envelope.message.recipient,
        })?;

        self.edges.push(Edge {
            src: envelope.message.sender,
            src_clock: envelope.src_clock,
            message_kind: envelope.message.kind().to_string(),
            dst: envelope.message.recipient,
            dst_handler: handler.to_string(),
            dst_clock,
        });
        Ok(())
    }

    /// Number of recorded edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Project the recorded edges into a [`Snapshot`].
    ///
    /// Pure and repeatable; may be called mid-run for a partial trace.
    pub fn snapshot(&self, nodes: Vec<NodeId>) -> Snapshot {
        Snapshot {
            nodes,
            edges: self.edges.clone(),
        }
    }
}
