//! The protocol-node contract.

use crate::{Body, Message, Outbound, ProtocolError};
use rehearse_types::{Literal, NodeId};

/// A participant in the protocol under test.
///
/// Implementations are synchronous and deterministic: same state plus
/// same message yields the same outbound messages. Handlers never
/// touch the mailbox or the trace recorder — the execution engine owns
/// every enqueue, dequeue, and record operation, which keeps protocol
/// definitions decoupled from the scheduling mechanism.
///
/// Dispatch is by handler name through an explicit registry: each node
/// declares the handler names it understands up front, and the engine
/// looks the name up instead of discovering methods reflectively.
pub trait ProtocolNode {
    /// Closed message enumeration for this protocol.
    type Body: Body;

    /// This node's identity.
    fn id(&self) -> NodeId;

    /// Handler names this node dispatches, e.g. `["HandlePetition",
    /// "HandleVote"]`. A name absent from this set is an
    /// [`UnknownHandler`](ProtocolError::UnknownHandler) error.
    fn handlers(&self) -> &'static [&'static str];

    /// Produce this node's initial outbound messages.
    ///
    /// Optional; protocols that do not send anything at startup keep
    /// the default empty implementation.
    fn initialize(&mut self) -> Vec<Outbound<Self::Body>> {
        Vec::new()
    }

    /// Invoke the named handler with a delivered message.
    ///
    /// `extra` is an optional script-supplied argument, passed through
    /// positionally after the message. A handler may enforce that
    /// `message.recipient == self.id()`; a violation is a fatal
    /// [`RecipientMismatch`](ProtocolError::RecipientMismatch) that
    /// signals misconfigured mailbox routing, never a condition to
    /// recover from.
    fn dispatch(
        &mut self,
        handler: &str,
        message: Message<Self::Body>,
        extra: Option<&Literal>,
    ) -> Result<Vec<Outbound<Self::Body>>, ProtocolError>;
}
