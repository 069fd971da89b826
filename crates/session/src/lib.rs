//! Session layer - drives the core engine under a fixed tick cadence.
//!
//! The chat transport is an external collaborator with two seams into this
//! crate: it feeds [`chatris_types::Command`] values into the
//! [`SessionManager`], and it drains rendered [`Frame`] snapshots from the
//! channel the manager hands out at construction. Everything between those
//! seams (the tick loop, the pending-input mailbox, the Idle/Playing/
//! GameOver lifecycle) lives here.
//!
//! Concurrency contract:
//!
//! - one session may be Playing process-wide; a concurrent `Start` is
//!   rejected without side effects
//! - the tick loop exclusively owns the board and piece; input producers
//!   only touch the guarded single-slot mailbox
//! - frame delivery is fire-and-forget; a slow consumer never delays a tick
//! - `Stop` cancels the inter-tick wait immediately

pub mod mailbox;
pub mod manager;
mod runner;

pub use chatris_core::snapshot::Frame;
pub use mailbox::{Mailbox, PendingInput};
pub use manager::{SessionError, SessionManager};
