//! Serializable trace records.

use rehearse_types::{LogicalTime, NodeId};
use serde::{Deserialize, Serialize};

/// One delivered message: a directed edge in the causal graph.
///
/// `src_clock` and `dst_clock` give ordering along the time axis; a
/// renderer that places smaller clocks to the left of larger ones
/// displays the run correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Sending node.
    pub src: NodeId,
    /// Logical time of send.
    pub src_clock: LogicalTime,
    /// Kind tag of the delivered message.
    pub message_kind: String,
    /// Receiving node.
    pub dst: NodeId,
    /// Handler the receiving node invoked.
    pub dst_handler: String,
    /// Logical time of delivery.
    pub dst_clock: LogicalTime,
}

/// The full serializable trace of a run.
///
/// Never mutated after creation; field names are stable for external
/// rendering tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Nodes in the run, in construction order (render top to bottom).
    pub nodes: Vec<NodeId>,
    /// Delivered messages, in delivery order.
    pub edges: Vec<Edge>,
}

impl Snapshot {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            nodes: vec![NodeId(0), NodeId(1)],
            edges: vec![Edge {
                src: NodeId(0),
                src_clock: LogicalTime(0),
                message_kind: "Petition".into(),
                dst: NodeId(1),
                dst_handler: "HandlePetition".into(),
                dst_clock: LogicalTime(1),
            }],
        }
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_export_is_flat_and_self_describing() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"], serde_json::json!([0, 1]));
        let edge = &value["edges"][0];
        for field in [
            "src",
            "src_clock",
            "message_kind",
            "dst",
            "dst_handler",
            "dst_clock",
        ] {
            assert!(edge.get(field).is_some(), "missing field {field}");
        }
    }
}
