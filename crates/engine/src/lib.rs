//! Deterministic execution engine.
//!
//! This crate is the scheduler: an externally supplied action script
//! is the *only* source of delivery order. There is no autonomous or
//! concurrent delivery, no suspension points, and no wall-clock time —
//! just a logical clock that advances exactly once per resolved
//! action.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                       Run                            │
//! │                                                      │
//! │  action text ──► Action::parse ──► resolve           │
//! │                                     │                │
//! │        ┌────────────────────────────┤                │
//! │        ▼                            ▼                │
//! │  ┌───────────┐  take         ┌──────────────┐        │
//! │  │  Mailbox  │─────────────► │ node handler │        │
//! │  └───────────┘  ▲            └──────┬───────┘        │
//! │        ▲        │ observe           │ outbound       │
//! │        │  ┌─────┴───────┐           │                │
//! │        └──│TraceRecorder│◄──────────┘ post           │
//! │           └─────────────┘                            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Each [`Run`] owns an independent mailbox, clock, and trace
//! recorder; nothing is shared across runs in the same process.

mod error;
mod mailbox;
mod run;
mod script;

pub use error::{EngineError, MailboxError, ScriptError};
pub use mailbox::Mailbox;
pub use run::Run;
pub use script::Action;
