//! The tick loop task.
//!
//! One task per playing session. The loop is explicitly iterative: a session
//! of any length uses constant stack. Each iteration drains the mailbox,
//! applies at most one rotation, resolves movement, and emits a frame. The
//! only suspension point is the inter-tick sleep, which a stop signal
//! cancels immediately; ticks that spawned a piece skip the sleep so a
//! spawn never costs a double delay.

use std::sync::Arc;

use chatris_core::GameSession;
use chatris_types::SessionConfig;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::manager::Shared;
use crate::Frame;

pub(crate) async fn run(
    shared: Arc<Shared>,
    frames: mpsc::UnboundedSender<Frame>,
    config: SessionConfig,
    mut stop: watch::Receiver<bool>,
    epoch: u64,
) {
    let mut game = GameSession::new(config.seed);
    info!(seed = config.seed, "session started");

    loop {
        if *stop.borrow() {
            return;
        }

        let pending = shared.mailbox.take();
        if pending.rotate {
            game.rotate();
        }
        let outcome = game.step(pending.tick_input());

        if game.game_over() {
            // Terminal summary frame over the frozen board.
            let _ = frames.send(game.frame());
            break;
        }

        if outcome.locked {
            debug!(
                cleared = outcome.cleared,
                score = game.score(),
                "piece locked"
            );
        }
        if outcome.mutated {
            // Fire-and-forget: a slow or gone consumer never blocks a tick.
            let _ = frames.send(game.frame());
        }

        if !outcome.spawned {
            tokio::select! {
                _ = stop.changed() => return,
                _ = tokio::time::sleep(config.tick_interval) => {}
            }
        }
    }

    info!(score = game.score(), lines = game.lines(), "game over");
    shared.finish(epoch);
}
