//! Chatris (workspace facade crate).
//!
//! The falling-block puzzle engine embedded in a chat bot. This package
//! keeps a single `chatris::{core,session,types}` public surface while the
//! implementation lives in dedicated crates under `crates/`.

pub use chatris_core as core;
pub use chatris_session as session;
pub use chatris_types as types;
