//! Typed message records and their in-flight envelope.

use rehearse_types::{LogicalTime, NodeId};
use std::fmt;

/// Protocol-specific message payload.
///
/// Implemented by the closed message enumeration of a protocol
/// (e.g. `Petition` / `Vote`). The kind tag is what action scripts
/// resolve against: a handler named `Handle<Kind>` targets payloads
/// whose `kind()` matches `<Kind>`.
pub trait Body: Clone + PartialEq + fmt::Debug {
    /// Closed tag distinguishing message variants within the protocol.
    fn kind(&self) -> &'static str;
}

/// A fully addressed message, immutable once handed to the mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<B> {
    /// Node that sent this message.
    pub sender: NodeId,
    /// Node this message is addressed to.
    pub recipient: NodeId,
    /// Protocol-specific payload.
    pub body: B,
}

impl<B: Body> Message<B> {
    /// Create a fully addressed message.
    pub fn new(sender: NodeId, recipient: NodeId, body: B) -> Self {
        Self {
            sender,
            recipient,
            body,
        }
    }

    /// Kind tag of the payload.
    pub fn kind(&self) -> &'static str {
        self.body.kind()
    }
}

/// A message as built by a handler, before enqueue.
///
/// The sender may be left unset; the engine fills it in with the
/// invoking node's id before the message reaches the mailbox. The
/// recipient must always be named — there is no context to infer one
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound<B> {
    /// Sending node, or `None` to be auto-populated at enqueue.
    pub sender: Option<NodeId>,
    /// Node this message is addressed to.
    pub recipient: NodeId,
    /// Protocol-specific payload.
    pub body: B,
}

impl<B: Body> Outbound<B> {
    /// Address a message to `recipient`, leaving the sender to be
    /// filled in from the invoking node.
    pub fn to(recipient: NodeId, body: B) -> Self {
        Self {
            sender: None,
            recipient,
            body,
        }
    }

    /// Address a message with an explicit sender.
    pub fn from(sender: NodeId, recipient: NodeId, body: B) -> Self {
        Self {
            sender: Some(sender),
            recipient,
            body,
        }
    }

    /// Seal into a [`Message`], resolving an unset sender to `origin`.
    pub fn seal(self, origin: NodeId) -> Message<B> {
        Message {
            sender: self.sender.unwrap_or(origin),
            recipient: self.recipient,
            body: self.body,
        }
    }
}

/// A message in flight, owned by the mailbox until delivery.
///
/// `src_clock` is stamped at enqueue with the run's current clock;
/// `dst_clock` stays unset until the engine resolves the delivery.
/// Once delivered, `dst_clock >= src_clock` always holds because the
/// clock only moves forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<B> {
    /// The sealed message.
    pub message: Message<B>,
    /// Logical time of send.
    pub src_clock: LogicalTime,
    /// Logical time of delivery; `None` while in flight.
    pub dst_clock: Option<LogicalTime>,
}

impl<B: Body> Envelope<B> {
    /// Wrap a sealed message at send time.
    pub fn new(message: Message<B>, src_clock: LogicalTime) -> Self {
        Self {
            message,
            src_clock,
            dst_clock: None,
        }
    }
}
