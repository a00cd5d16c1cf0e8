//! Message model and protocol-node contract.
//!
//! This crate defines the two seams between a protocol under test and
//! the execution engine that replays it:
//!
//! - [`Body`] / [`Message`] / [`Outbound`] / [`Envelope`] — the typed,
//!   immutable-once-sent message model.
//! - [`ProtocolNode`] — the unit of protocol state, with an explicit
//!   handler registry and a synchronous, deterministic dispatch
//!   contract. All I/O is performed by the engine; handlers only mutate
//!   their own node and return new outbound messages.

mod error;
mod message;
mod node;

pub use error::ProtocolError;
pub use message::{Body, Envelope, Message, Outbound};
pub use node::ProtocolNode;
