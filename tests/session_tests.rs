//! Session tests - lifecycle, frame stream, and a full game played out
//! against the public command surface

use std::time::Duration;

use chatris::session::SessionManager;
use chatris::types::{Command, SessionConfig, SessionState};

fn fast_config(seed: u32) -> SessionConfig {
    SessionConfig {
        tick_interval: Duration::from_millis(1),
        seed,
    }
}

#[tokio::test]
async fn test_second_start_rejected_until_stop() {
    let (manager, _frames) = SessionManager::new(fast_config(3));

    manager.command(Command::Start).unwrap();
    assert!(manager.command(Command::Start).is_err());

    manager.command(Command::Stop).unwrap();
    assert_eq!(manager.state(), SessionState::Idle);
    assert!(manager.command(Command::Start).is_ok());
    manager.command(Command::Stop).unwrap();
}

#[tokio::test]
async fn test_frame_scores_never_decrease() {
    let (manager, mut frames) = SessionManager::new(fast_config(9));
    manager.command(Command::Start).unwrap();

    let mut last_score = 0;
    for _ in 0..50 {
        manager.command(Command::SetSoftDrop(true)).unwrap();
        let frame = tokio::time::timeout(Duration::from_secs(1), frames.recv())
            .await
            .expect("frame within a second")
            .expect("channel open");
        assert!(frame.score >= last_score);
        last_score = frame.score;
        if frame.game_over() {
            break;
        }
    }
    manager.command(Command::Stop).unwrap();
}

#[tokio::test]
async fn test_soft_dropped_session_reaches_game_over() {
    let (manager, mut frames) = SessionManager::new(fast_config(7));
    manager.command(Command::Start).unwrap();

    // Keep soft drop latched; the mailbox clears on every tick.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(30);
    while manager.state() != SessionState::GameOver {
        assert!(
            tokio::time::Instant::now() < deadline,
            "session should end within the deadline"
        );
        manager.command(Command::SetSoftDrop(true)).unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    // The terminal frame carries the frozen board and final tallies.
    let mut last = None;
    while let Ok(frame) = frames.try_recv() {
        last = Some(frame);
    }
    let last = last.expect("at least one frame was rendered");
    assert!(last.game_over());
    assert!(last.rows.iter().flatten().any(|cell| cell.is_some()));

    // A finished session releases the playing slot.
    assert!(manager.command(Command::Start).is_ok());
    manager.command(Command::Stop).unwrap();
}
