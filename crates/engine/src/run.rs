//! The run: nodes, mailbox, clock, and trace under one owner.

use crate::{Action, EngineError, Mailbox};
use indexmap::IndexMap;
use rehearse_core::{Envelope, Message, Outbound, ProtocolError, ProtocolNode};
use rehearse_trace::{Snapshot, TraceRecorder};
use rehearse_types::{Literal, LogicalTime, NodeId};

/// One deterministic simulation run.
///
/// A run owns its node map, mailbox, logical clock, and trace
/// recorder; constructing a second run shares nothing with the first.
/// The action script is the scheduler: actions resolve strictly in the
/// order given, and the clock advances exactly once per resolved
/// action.
#[derive(Debug)]
pub struct Run<N: ProtocolNode> {
    nodes: IndexMap<NodeId, N>,
    mailbox: Mailbox<N::Body>,
    recorder: TraceRecorder,
    clock: LogicalTime,
}

enum Lookup<'a, B> {
    Kind(&'a str),
    Exact(&'a Message<B>),
}

impl<N: ProtocolNode> Run<N> {
    /// Build a run from protocol nodes.
    ///
    /// Node order is preserved for the snapshot; ids must be unique.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Result<Self, EngineError> {
        let mut map = IndexMap::new();
        for node in nodes {
            let id = node.id();
            if map.insert(id, node).is_some() {
                return Err(EngineError::DuplicateNode { id });
            }
        }
        Ok(Self {
            nodes: map,
            mailbox: Mailbox::new(),
            recorder: TraceRecorder::new(),
            clock: LogicalTime::START,
        })
    }

    /// Invoke one node's `initialize`, enqueueing whatever it sends.
    ///
    /// Must be called explicitly before any action that consumes the
    /// node's initial messages; initialization does not advance the
    /// clock.
    pub fn initialize(&mut self, id: NodeId) -> Result<(), EngineError> {
        let node = self.nodes.get_mut(&id).ok_or(EngineError::UnknownNode {
            id,
            action: format!("initialize({id})"),
        })?;
        tracing::debug!(node = %id, "initializing");
        for outbound in node.initialize() {
            self.mailbox.post(id, outbound, self.clock);
        }
        Ok(())
    }

    /// Invoke `initialize` on every node, in construction order.
    pub fn initialize_all(&mut self) -> Result<(), EngineError> {
        let ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        for id in ids {
            self.initialize(id)?;
        }
        Ok(())
    }

    /// Parse and resolve one action.
    pub fn step(&mut self, text: &str) -> Result<(), EngineError> {
        let action = Action::parse(text)?;
        self.deliver(
            action.node(),
            action.handler(),
            Lookup::Kind(action.kind()),
            action.extra(),
            action.text(),
        )
    }

    /// Resolve a delivery against a concrete preferred message instead
    /// of a kind lookup.
    ///
    /// The message must be structurally equal to a queued one
    /// (exact-match on every field), or the run fails with
    /// [`MailboxError::PreferredMessageNotFound`].
    pub fn step_exact(
        &mut self,
        id: NodeId,
        handler: &str,
        preferred: &Message<N::Body>,
        extra: Option<&Literal>,
    ) -> Result<(), EngineError> {
        let text = format!("{handler}({id}, <preferred>)");
        self.deliver(id, handler, Lookup::Exact(preferred), extra, &text)
    }

    /// Consume an ordered action script, aborting on the first error.
    ///
    /// A malformed or unresolvable action never silently skips: the
    /// remaining script is not executed.
    pub fn execute<S: AsRef<str>>(&mut self, actions: &[S]) -> Result<(), EngineError> {
        for action in actions {
            self.step(action.as_ref())?;
        }
        Ok(())
    }

    fn deliver(
        &mut self,
        id: NodeId,
        handler: &str,
        lookup: Lookup<'_, N::Body>,
        extra: Option<&Literal>,
        text: &str,
    ) -> Result<(), EngineError> {
        // Validate the target before touching mailbox or clock, so a
        // failed action leaves the run untouched.
        let node = self.nodes.get_mut(&id).ok_or_else(|| EngineError::UnknownNode {
            id,
            action: text.to_string(),
        })?;
        if !node.handlers().contains(&handler) {
            return Err(ProtocolError::UnknownHandler {
                node: id,
                handler: handler.to_string(),
            }
            .into());
        }

        let mut envelope: Envelope<N::Body> = match lookup {
            Lookup::Kind(kind) => self.mailbox.take(id, kind),
            Lookup::Exact(preferred) => self.mailbox.take_exact(id, preferred),
        }
        .map_err(|source| EngineError::Unresolved {
            action: text.to_string(),
            source,
        })?;

        // The message is resolved; logical time advances exactly here.
        self.clock = self.clock.next();
        envelope.dst_clock = Some(self.clock);
        self.recorder.observe(&envelope, handler)?;

        tracing::debug!(
            node = %id,
            handler,
            kind = envelope.message.kind(),
            sender = %envelope.message.sender,
            clock = %self.clock,
            "delivering message"
        );

        let outbounds = node.dispatch(handler, envelope.message, extra)?;
        for outbound in outbounds {
            self.mailbox.post(id, outbound, self.clock);
        }
        Ok(())
    }

    /// Current logical clock.
    pub fn clock(&self) -> LogicalTime {
        self.clock
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Node ids in construction order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Nodes in construction order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    /// Messages still queued for `id`.
    pub fn pending(&self, id: NodeId) -> usize {
        self.mailbox.pending(id)
    }

    /// Total number of in-flight messages.
    pub fn in_flight(&self) -> usize {
        self.mailbox.len()
    }

    /// Number of deliveries recorded so far.
    pub fn deliveries(&self) -> usize {
        self.recorder.len()
    }

    /// Project the run's causal trace, complete or partial.
    pub fn snapshot(&self) -> Snapshot {
        self.recorder.snapshot(self.node_ids())
    }

    /// Re-enqueue a message directly, sender auto-populated from
    /// `origin`. Test scaffolding for driving the mailbox without a
    /// handler invocation.
    pub fn post(&mut self, origin: NodeId, outbound: Outbound<N::Body>) {
        self.mailbox.post(origin, outbound, self.clock);
    }
}
