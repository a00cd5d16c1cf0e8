//! End-to-end scripted scenarios for the ring election fixture.
//!
//! These drive the full pipeline: construction, initialization, script
//! execution, and trace export.

use rehearse_core::{Message, Outbound, ProtocolNode};
use rehearse_election::{ring, ElectionBody, ElectionNode};
use rehearse_engine::{EngineError, Run};
use rehearse_trace::Snapshot;
use rehearse_types::{LogicalTime, NodeId};

fn run_of(ids: &[u64]) -> Run<ElectionNode> {
    let mut run = Run::new(ring(ids)).unwrap();
    run.initialize_all().unwrap();
    run
}

fn leaders(run: &Run<ElectionNode>) -> Vec<u64> {
    run.nodes()
        .filter(|n| n.is_leader())
        .map(|n| n.id().get())
        .collect()
}

/// Two disjoint ascending adjacent pairs in the ring (0→1 and 1→2)
/// elect two leaders under an adversarial delivery order.
#[test]
fn dual_leader_split() {
    let mut run = run_of(&[0, 1, 2]);
    run.execute(&[
        "1: HandlePetition",
        "0: HandleVote",
        "2: HandlePetition",
        "1: HandleVote",
    ])
    .unwrap();

    assert_eq!(leaders(&run), vec![0, 1]);
    assert!(!run.node(NodeId(2)).unwrap().is_leader());
}

/// A ring with a single ascending adjacent pair (0→2 only) elects
/// exactly one leader even when every message is delivered.
#[test]
fn single_leader_when_one_ascending_pair() {
    let mut run = run_of(&[0, 2, 1]);
    run.execute(&[
        "1: HandlePetition",
        "0: HandlePetition",
        "2: HandlePetition",
        "0: HandleVote",
        "1: HandleVote",
        "2: HandleVote",
    ])
    .unwrap();

    assert_eq!(leaders(&run), vec![0]);
}

/// The call form resolves the same deliveries as the short form, and
/// extra arguments pass through without changing protocol behavior.
#[test]
fn call_form_with_extra_arguments() {
    let mut run = run_of(&[0, 1, 2]);
    run.execute(&[
        "HandlePetition(1, _)",
        "HandleVote(0, _, \"foo\")",
        "HandlePetition(2, _)",
        "HandleVote(1, _, 3)",
    ])
    .unwrap();

    assert_eq!(leaders(&run), vec![0, 1]);
}

/// Delivering two accepting votes leaves `is_leader` exactly as after
/// one.
#[test]
fn leader_declaration_is_idempotent() {
    let mut run = run_of(&[0, 1, 2]);
    run.execute(&["1: HandlePetition", "0: HandleVote"]).unwrap();
    assert!(run.node(NodeId(0)).unwrap().is_leader());

    // Hand node 0 a second accepting vote directly.
    run.post(
        NodeId(1),
        Outbound::to(NodeId(0), ElectionBody::Vote { accepted: true }),
    );
    run.step("0: HandleVote").unwrap();
    assert_eq!(leaders(&run), vec![0]);
}

/// An action naming an absent node fails with `UnknownNode` and leaves
/// node state and clock untouched.
#[test]
fn unknown_node_aborts_without_side_effects() {
    let mut run = run_of(&[0, 1, 2]);
    let err = run.step("5: HandlePetition").unwrap_err();

    assert!(matches!(err, EngineError::UnknownNode { id: NodeId(5), .. }));
    assert_eq!(run.clock(), LogicalTime::START);
    assert!(leaders(&run).is_empty());
    assert_eq!(run.in_flight(), 3);
}

/// The exact-match entry point delivers a specific petition instance.
#[test]
fn preferred_message_delivery() {
    let mut run = run_of(&[0, 1, 2]);
    let petition = Message::new(NodeId(0), NodeId(1), ElectionBody::Petition);
    run.step_exact(NodeId(1), "HandlePetition", &petition, None)
        .unwrap();

    run.step("0: HandleVote").unwrap();
    assert!(run.node(NodeId(0)).unwrap().is_leader());
}

/// The exported snapshot reproduces the run edge-for-edge after a JSON
/// round trip, and edge count equals resolved action count.
#[test]
fn snapshot_round_trip() {
    let mut run = run_of(&[0, 1, 2]);
    run.execute(&[
        "1: HandlePetition",
        "0: HandleVote",
        "2: HandlePetition",
        "1: HandleVote",
    ])
    .unwrap();

    let snapshot = run.snapshot();
    assert_eq!(snapshot.nodes, vec![NodeId(0), NodeId(1), NodeId(2)]);
    assert_eq!(snapshot.edges.len(), 4);
    assert_eq!(snapshot.edges[0].message_kind, "Petition");
    assert_eq!(snapshot.edges[0].dst_handler, "HandlePetition");
    assert_eq!(snapshot.edges[3].dst_clock, LogicalTime(4));

    let json = snapshot.to_json().unwrap();
    assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
}

/// A petition never delivered stays in flight and produces no edge.
#[test]
fn undelivered_petition_is_no_phantom() {
    let mut run = run_of(&[0, 1, 2]);
    run.execute(&["1: HandlePetition", "0: HandleVote"]).unwrap();

    // Node 2's petition from node 1 and node 0's petition from node 2
    // are still queued.
    assert_eq!(run.pending(NodeId(2)), 1);
    assert_eq!(run.pending(NodeId(0)), 1);
    let snapshot = run.snapshot();
    assert_eq!(snapshot.edges.len(), 2);
    assert!(snapshot
        .edges
        .iter()
        .all(|e| !(e.dst == NodeId(2) && e.message_kind == "Petition")));
}
