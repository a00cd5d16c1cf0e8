//! Error taxonomy for the execution engine.
//!
//! Every variant is fatal at the point of detection. The harness
//! exists for deterministic, fully-specified replay: a failure means
//! the script does not match the protocol's actual behavior, not that
//! a future delivery might succeed, so there is deliberately no retry
//! layer.

use rehearse_core::ProtocolError;
use rehearse_trace::TraceError;
use rehearse_types::NodeId;
use thiserror::Error;

/// Action-script parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Neither the short form nor the call form.
    #[error("malformed action {action:?}: {detail}")]
    Malformed {
        /// The offending action text.
        action: String,
        /// What the parser expected.
        detail: &'static str,
    },

    /// Node id is not a bare integer.
    #[error("malformed action {action:?}: node id {id:?} is not an integer")]
    InvalidNodeId {
        /// The offending action text.
        action: String,
        /// The text that failed to parse as a node id.
        id: String,
    },

    /// Extra argument is neither a quoted string nor a bare integer.
    #[error("malformed action {action:?}: literal {literal:?} is neither a quoted string nor a bare integer")]
    InvalidLiteral {
        /// The offending action text.
        action: String,
        /// The text that failed literal sniffing.
        literal: String,
    },
}

/// Mailbox lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailboxError {
    /// No queued message of the required kind for the recipient.
    #[error("no queued {kind:?} message for node {recipient}")]
    NoMatchingMessage {
        /// Recipient whose queue was scanned.
        recipient: NodeId,
        /// Kind name derived from the handler.
        kind: String,
    },

    /// Exact-match lookup found no structurally equal message.
    #[error("no queued message for node {recipient} equals the preferred message")]
    PreferredMessageNotFound {
        /// Recipient whose queue was scanned.
        recipient: NodeId,
    },
}

/// Fatal errors surfaced while driving a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Action references a node id absent from the run.
    #[error("action {action:?} targets unknown node {id}")]
    UnknownNode {
        /// Node id the action named.
        id: NodeId,
        /// The offending action text.
        action: String,
    },

    /// Two nodes with the same id at run construction.
    #[error("duplicate node id {id} in run construction")]
    DuplicateNode {
        /// The repeated id.
        id: NodeId,
    },

    /// The action text failed to parse.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// No message satisfied the action's lookup.
    #[error("cannot resolve {action:?}: {source}")]
    Unresolved {
        /// The offending action text.
        action: String,
        /// The mailbox failure.
        #[source]
        source: MailboxError,
    },

    /// The node's protocol rejected the dispatch.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The trace recorder rejected the delivery.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
