//! Ring leader-election fixture.
//!
//! A deliberately unsound single-vote election on a ring, kept as a
//! test fixture for the execution engine — not a protocol to fix.
//!
//! The protocol:
//!
//! 1. On `initialize`, every node petitions its ring successor.
//! 2. A node accepts a petition iff the petitioner's id is strictly
//!    less than its own and it has not already declared itself leader;
//!    otherwise it rejects.
//! 3. On an accepting vote, a node declares itself leader.
//!
//! Any ring admitting two disjoint ascending adjacent pairs can elect
//! two leaders, and a scripted delivery order is exactly the mechanism
//! to force that outcome deterministically.

mod protocol;

pub use protocol::{ring, ElectionBody, ElectionNode};
