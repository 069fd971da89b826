//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state for the falling-block
//! engine. It has zero dependencies on I/O, timers, or the chat transport,
//! making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule has unit tests with no async machinery
//! - **Portable**: the session layer drives it from any runtime
//!
//! # Module structure
//!
//! - [`board`]: 18x10 grid with occupancy queries, row collapse, snapshots
//! - [`catalog`]: static shape definitions and the active [`catalog::Piece`]
//! - [`rotate`]: pivot rotation with tuned corrections and ordered wall kicks
//! - [`fall`]: per-tick movement resolution and lock detection
//! - [`scoring`]: full-row scan, collapse, and the fixed reward table
//! - [`rng`]: independent uniform shape draws (no bag scheme)
//! - [`game`]: [`GameSession`], the single owner of all mutable state
//! - [`snapshot`]: the renderable [`Frame`] handed to the transport

pub mod board;
pub mod catalog;
pub mod fall;
pub mod game;
pub mod rng;
pub mod rotate;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use catalog::{Piece, PieceSpec};
pub use fall::TickInput;
pub use game::{GameSession, StepOutcome};
pub use rng::ShapeRng;
pub use rotate::try_rotate;
pub use scoring::{clear_full_rows, line_clear_score};
pub use snapshot::Frame;
