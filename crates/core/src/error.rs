//! Error types for protocol definitions.

use rehearse_types::NodeId;
use thiserror::Error;

/// Fatal protocol-definition errors raised during dispatch.
///
/// Both variants indicate a bug in the script or the harness wiring,
/// not a runtime condition: the run aborts at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Handler name not declared by the node's protocol.
    #[error("node {node} declares no handler named {handler:?}")]
    UnknownHandler {
        /// Node the action targeted.
        node: NodeId,
        /// Handler name that failed to resolve.
        handler: String,
    },

    /// A handler received a message addressed to a different node.
    #[error("{handler} on node {node} received a message addressed to {recipient}")]
    RecipientMismatch {
        /// Node whose handler was invoked.
        node: NodeId,
        /// Handler that rejected the message.
        handler: &'static str,
        /// Recipient the message actually names.
        recipient: NodeId,
    },
}
