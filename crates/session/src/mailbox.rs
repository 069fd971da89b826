//! Single-slot pending-input mailbox.
//!
//! Producers (the transport's button/reaction handlers) overwrite individual
//! fields; nothing is queued. The tick loop drains the whole slot atomically
//! once per tick, so two rapid opposite inputs inside one tick window
//! collapse to whichever arrived last.

use std::sync::{Mutex, PoisonError};

use chatris_core::TickInput;

/// The three independently-overwritten input fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingInput {
    /// Horizontal intent: -1, 0 or +1.
    pub dx: i8,
    pub soft_drop: bool,
    pub rotate: bool,
}

impl PendingInput {
    /// The movement portion handed to the core resolver.
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            dx: self.dx,
            soft_drop: self.soft_drop,
        }
    }
}

/// Guarded single-slot mailbox shared between producers and the tick loop.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Mutex<PendingInput>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PendingInput> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the horizontal intent.
    pub fn set_move(&self, dx: i8) {
        self.lock().dx = dx.clamp(-1, 1);
    }

    /// Request a clockwise rotation for the next tick.
    pub fn request_rotate(&self) {
        self.lock().rotate = true;
    }

    /// Overwrite the soft-drop flag.
    pub fn set_soft_drop(&self, on: bool) {
        self.lock().soft_drop = on;
    }

    /// Read and clear the slot in one guarded operation.
    pub fn take(&self) -> PendingInput {
        std::mem::take(&mut *self.lock())
    }

    /// Drop any input left over from a previous session.
    pub fn reset(&self) {
        let _ = self.take();
    }
}
