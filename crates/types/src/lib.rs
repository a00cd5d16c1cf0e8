//! Identity and vocabulary types for the rehearse replay harness.
//!
//! Everything here is shared by every other crate in the workspace:
//! node identity, the logical clock used for causal ordering, the
//! literal values an action script can pass to a handler, and the
//! rule for matching a message kind against a handler-derived name.

mod clock;
mod id;
mod kind;
mod literal;

pub use clock::LogicalTime;
pub use id::NodeId;
pub use kind::kind_matches;
pub use literal::Literal;
