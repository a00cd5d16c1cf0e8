//! Run-scoped store of in-flight messages.

use crate::MailboxError;
use indexmap::IndexMap;
use rehearse_core::{Body, Envelope, Message, Outbound};
use rehearse_types::{kind_matches, LogicalTime, NodeId};
use std::collections::VecDeque;

/// Shared, run-scoped store of messages awaiting delivery.
///
/// Messages are keyed by recipient and kept in enqueue order. Removal
/// through [`take`](Mailbox::take) / [`take_exact`](Mailbox::take_exact)
/// is immediate and is the only way a message leaves the mailbox, so a
/// message is either queued or delivered, never both.
///
/// Selection among several eligible messages is always FIFO-within-kind:
/// the earliest-enqueued one wins. A script that needs a specific one
/// among same-kind duplicates must rely on queue order, or use the
/// exact-match lookup.
#[derive(Debug, Default)]
pub struct Mailbox<B> {
    queues: IndexMap<NodeId, VecDeque<Envelope<B>>>,
}

impl<B: Body> Mailbox<B> {
    /// Create an empty mailbox.
    pub fn new() -> Self {
        Self {
            queues: IndexMap::new(),
        }
    }

    /// Enqueue a handler-built message.
    ///
    /// An unset sender is filled in with `origin` (the invoking node),
    /// and the envelope is stamped with `now` as its send clock. The
    /// clock is not advanced by enqueue.
    pub fn post(&mut self, origin: NodeId, outbound: Outbound<B>, now: LogicalTime) {
        let message = outbound.seal(origin);
        tracing::trace!(
            sender = %message.sender,
            recipient = %message.recipient,
            kind = message.kind(),
            clock = %now,
            "message enqueued"
        );
        self.queues
            .entry(message.recipient)
            .or_default()
            .push_back(Envelope::new(message, now));
    }

    /// Remove and return the earliest queued message for `recipient`
    /// whose kind matches `kind` (case-insensitive, suffix-tolerant).
    pub fn take(&mut self, recipient: NodeId, kind: &str) -> Result<Envelope<B>, MailboxError> {
        self.take_where(recipient, |env| kind_matches(env.message.kind(), kind))
            .ok_or_else(|| MailboxError::NoMatchingMessage {
                recipient,
                kind: kind.to_string(),
            })
    }

    /// Remove and return the earliest queued message for `recipient`
    /// structurally equal to `preferred` (all fields).
    pub fn take_exact(
        &mut self,
        recipient: NodeId,
        preferred: &Message<B>,
    ) -> Result<Envelope<B>, MailboxError> {
        self.take_where(recipient, |env| env.message == *preferred)
            .ok_or(MailboxError::PreferredMessageNotFound { recipient })
    }

    fn take_where(
        &mut self,
        recipient: NodeId,
        pred: impl Fn(&Envelope<B>) -> bool,
    ) -> Option<Envelope<B>> {
        let queue = self.queues.get_mut(&recipient)?;
        let idx = queue.iter().position(pred)?;
        queue.remove(idx)
    }

    /// Number of messages queued for `recipient`.
    pub fn pending(&self, recipient: NodeId) -> usize {
        self.queues.get(&recipient).map_or(0, VecDeque::len)
    }

    /// Total number of in-flight messages.
    pub fn len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Whether no messages are in flight.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
