//! Session state machine and process-wide mutual exclusion.
//!
//! At most one session is Playing at a time. `Start` while Playing is
//! rejected with [`SessionError::Busy`] and no state change; every other
//! out-of-state command is a silent no-op. `Stop` forcibly tears down to
//! Idle from any state and abandons the tick loop's pending wait.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chatris_types::{Command, SessionConfig, SessionState};
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::mailbox::Mailbox;
use crate::runner;
use crate::Frame;

/// Errors surfaced to the command caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `Start` while a session is already Playing.
    Busy,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Busy => write!(f, "a session is already playing"),
        }
    }
}

impl std::error::Error for SessionError {}

/// State shared between the manager and the running tick-loop task.
pub(crate) struct Shared {
    /// Mutual-exclusion flag: true while a session is Playing.
    playing: AtomicBool,
    /// Incremented on every start and stop so a stale task cannot clobber
    /// a successor session's state.
    epoch: AtomicU64,
    phase: Mutex<SessionState>,
    pub(crate) mailbox: Mailbox,
}

impl Shared {
    fn new() -> Self {
        Self {
            playing: AtomicBool::new(false),
            epoch: AtomicU64::new(0),
            phase: Mutex::new(SessionState::Idle),
            mailbox: Mailbox::new(),
        }
    }

    fn set_phase(&self, phase: SessionState) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
    }

    fn phase(&self) -> SessionState {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Called by the tick loop on natural game over. Ignored when the
    /// session has already been superseded by a stop or a new start.
    pub(crate) fn finish(&self, epoch: u64) {
        if self.epoch.load(Ordering::SeqCst) == epoch {
            self.set_phase(SessionState::GameOver);
            self.playing.store(false, Ordering::SeqCst);
        }
    }
}

/// Owns the session lifecycle. Commands arrive from the transport layer;
/// frames leave through the channel handed out at construction.
///
/// Must live inside a tokio runtime: `Start` spawns the tick-loop task.
pub struct SessionManager {
    shared: Arc<Shared>,
    frames: mpsc::UnboundedSender<Frame>,
    config: SessionConfig,
    stop_tx: Mutex<Option<watch::Sender<bool>>>,
}

impl SessionManager {
    /// Create a manager and the frame stream its sessions render into.
    pub fn new(config: SessionConfig) -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (frames, frames_rx) = mpsc::unbounded_channel();
        let manager = Self {
            shared: Arc::new(Shared::new()),
            frames,
            config,
            stop_tx: Mutex::new(None),
        };
        (manager, frames_rx)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.shared.phase()
    }

    /// Apply one command. Only `Start` can fail; movement, rotation, and
    /// soft-drop commands outside Playing are silent no-ops.
    pub fn command(&self, cmd: Command) -> Result<(), SessionError> {
        match cmd {
            Command::Start => self.start(),
            Command::Stop => {
                self.stop();
                Ok(())
            }
            Command::RotateClockwise => {
                if self.shared.is_playing() {
                    self.shared.mailbox.request_rotate();
                }
                Ok(())
            }
            Command::MoveLeft => {
                if self.shared.is_playing() {
                    self.shared.mailbox.set_move(-1);
                }
                Ok(())
            }
            Command::MoveRight => {
                if self.shared.is_playing() {
                    self.shared.mailbox.set_move(1);
                }
                Ok(())
            }
            Command::SetSoftDrop(on) => {
                if self.shared.is_playing() {
                    self.shared.mailbox.set_soft_drop(on);
                }
                Ok(())
            }
        }
    }

    fn start(&self) -> Result<(), SessionError> {
        if self.shared.playing.swap(true, Ordering::SeqCst) {
            return Err(SessionError::Busy);
        }

        let epoch = self.shared.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.mailbox.reset();
        self.shared.set_phase(SessionState::Playing);

        let (stop_tx, stop_rx) = watch::channel(false);
        *self
            .stop_tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(stop_tx);

        tokio::spawn(runner::run(
            Arc::clone(&self.shared),
            self.frames.clone(),
            self.config,
            stop_rx,
            epoch,
        ));
        Ok(())
    }

    /// Tear down to Idle from any state. Safe to call when nothing runs.
    fn stop(&self) {
        // Invalidate the running task before it can report a game over.
        self.shared.epoch.fetch_add(1, Ordering::SeqCst);
        if let Some(stop_tx) = self
            .stop_tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            let _ = stop_tx.send(true);
            info!("session stopped");
        }
        self.shared.set_phase(SessionState::Idle);
        self.shared.playing.store(false, Ordering::SeqCst);
    }
}
