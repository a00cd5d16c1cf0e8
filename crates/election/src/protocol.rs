//! The election protocol's messages and node state machine.

use rehearse_core::{Body, Message, Outbound, ProtocolError, ProtocolNode};
use rehearse_types::{Literal, NodeId};

/// Messages of the election protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElectionBody {
    /// Ask the ring successor for its vote.
    Petition,
    /// Answer to a petition.
    Vote {
        /// Whether the petitioner was accepted.
        accepted: bool,
    },
}

impl Body for ElectionBody {
    fn kind(&self) -> &'static str {
        match self {
            ElectionBody::Petition => "Petition",
            ElectionBody::Vote { .. } => "Vote",
        }
    }
}

/// One participant in the ring election.
#[derive(Debug)]
pub struct ElectionNode {
    id: NodeId,
    /// Ring successor this node petitions.
    right: NodeId,
    is_leader: bool,
}

impl ElectionNode {
    /// Create a node with an explicit ring successor.
    pub fn new(id: NodeId, right: NodeId) -> Self {
        Self {
            id,
            right,
            is_leader: false,
        }
    }

    /// Whether this node has declared itself leader.
    pub fn is_leader(&self) -> bool {
        self.is_leader
    }

    fn expect_addressed_to_self(
        &self,
        handler: &'static str,
        message: &Message<ElectionBody>,
    ) -> Result<(), ProtocolError> {
        if message.recipient != self.id {
            return Err(ProtocolError::RecipientMismatch {
                node: self.id,
                handler,
                recipient: message.recipient,
            });
        }
        Ok(())
    }

    fn on_petition(
        &mut self,
        petition: Message<ElectionBody>,
    ) -> Result<Vec<Outbound<ElectionBody>>, ProtocolError> {
        self.expect_addressed_to_self("HandlePetition", &petition)?;

        // Reject petitioners with higher ids; lowest id wins. A node
        // that already declared itself leader rejects everyone.
        let mut vote = Outbound::to(petition.sender, ElectionBody::Vote { accepted: false });
        if !self.is_leader && petition.sender < self.id {
            if let ElectionBody::Vote { accepted } = &mut vote.body {
                *accepted = true;
            }
        }
        tracing::trace!(node = %self.id, petitioner = %petition.sender, vote = ?vote.body, "petition handled");
        Ok(vec![vote])
    }

    fn on_vote(
        &mut self,
        vote: Message<ElectionBody>,
        extra: Option<&Literal>,
    ) -> Result<Vec<Outbound<ElectionBody>>, ProtocolError> {
        self.expect_addressed_to_self("HandleVote", &vote)?;

        if let Some(extra) = extra {
            tracing::trace!(node = %self.id, %extra, "vote carried an extra argument");
        }

        // Idempotent: a second accepting vote leaves the node leader.
        if let ElectionBody::Vote { accepted: true } = vote.body {
            self.is_leader = true;
        }
        Ok(Vec::new())
    }
}

impl ProtocolNode for ElectionNode {
    type Body = ElectionBody;

    fn id(&self) -> NodeId {
        self.id
    }

    fn handlers(&self) -> &'static [&'static str] {
        &["HandlePetition", "HandleVote"]
    }

    fn initialize(&mut self) -> Vec<Outbound<ElectionBody>> {
        vec![Outbound::to(self.right, ElectionBody::Petition)]
    }

    fn dispatch(
        &mut self,
        handler: &str,
        message: Message<ElectionBody>,
        extra: Option<&Literal>,
    ) -> Result<Vec<Outbound<ElectionBody>>, ProtocolError> {
        match handler {
            "HandlePetition" => self.on_petition(message),
            "HandleVote" => self.on_vote(message, extra),
            other => Err(ProtocolError::UnknownHandler {
                node: self.id,
                handler: other.to_string(),
            }),
        }
    }
}

/// Build election nodes from an ordered id list.
///
/// Ring adjacency follows list order, wrapping: each node's successor
/// is the next id in the list.
pub fn ring(ids: &[u64]) -> Vec<ElectionNode> {
    ids.iter()
        .enumerate()
        .map(|(i, &id)| {
            let right = ids[(i + 1) % ids.len()];
            ElectionNode::new(NodeId(id), NodeId(right))
        })
        .collect()
}
