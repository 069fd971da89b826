//! Game session - owns all mutable engine state
//!
//! One `GameSession` lives per play-through. The session layer drives it:
//! at most one rotation per tick via [`GameSession::rotate`], then one call
//! to [`GameSession::step`] which resolves movement, locks, clears lines,
//! and spawns replacement pieces. The active piece is painted on the board;
//! locking simply leaves its cells in place.

use chatris_types::{SessionState, Shape};

use crate::board::Board;
use crate::catalog::Piece;
use crate::fall::{self, TickInput};
use crate::rng::ShapeRng;
use crate::rotate;
use crate::scoring;
use crate::snapshot::Frame;

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The piece could not descend and became permanent board content.
    pub locked: bool,
    /// Rows completed and collapsed by this tick's lock.
    pub cleared: usize,
    /// A new piece entered the board this tick. The session loop skips the
    /// inter-tick wait when set, so spawns do not cost a double delay.
    pub spawned: bool,
    /// Whether the board changed at all (drives frame emission).
    pub mutated: bool,
}

/// Complete state of one play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    piece: Option<Piece>,
    score: u32,
    lines: u32,
    /// Fallback: once a spawn has collided, later spawns start one row
    /// higher. Sticky for the rest of the session.
    spawn_higher: bool,
    game_over: bool,
    rng: ShapeRng,
}

impl GameSession {
    /// Create a fresh session with an empty board. No piece is active until
    /// the first `step`.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            piece: None,
            score: 0,
            lines: 0,
            spawn_higher: false,
            game_over: false,
            rng: ShapeRng::new(seed),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Force the next spawn to use `shape` instead of a random draw.
    pub fn set_next_shape(&mut self, shape: Shape) {
        self.rng.set_next(shape);
    }

    /// Apply a rotate-clockwise request. Returns false when the rotation is
    /// rejected or there is nothing to rotate; neither is an error.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.piece else {
            return false;
        };
        let rotated = rotate::try_rotate(&mut self.board, &mut piece);
        self.piece = Some(piece);
        rotated
    }

    /// Run one tick: resolve pending motion, lock and clear when the piece
    /// can no longer descend, and spawn a replacement.
    pub fn step(&mut self, input: TickInput) -> StepOutcome {
        if self.game_over {
            return StepOutcome::default();
        }

        let Some(mut piece) = self.piece else {
            // A previous spawn was blocked (or this is the first tick);
            // retry from the catalog.
            let spawned = self.try_spawn();
            return StepOutcome {
                spawned,
                mutated: spawned,
                ..StepOutcome::default()
            };
        };

        match fall::resolve(&self.board, &piece, input) {
            Some((dr, dc)) => {
                fall::apply_shift(&mut self.board, &mut piece, dr, dc);
                self.piece = Some(piece);
                StepOutcome {
                    mutated: true,
                    ..StepOutcome::default()
                }
            }
            None => {
                // Lock: the painted cells become permanent.
                self.piece = None;
                let cleared = scoring::clear_full_rows(&mut self.board).len();
                self.score += scoring::line_clear_score(cleared);
                self.lines += cleared as u32;

                let spawned = self.try_spawn();
                StepOutcome {
                    locked: true,
                    cleared,
                    spawned,
                    mutated: true,
                }
            }
        }
    }

    /// Spawn the next piece at its canonical start cells, one row higher
    /// under the spawn-higher fallback. A blocked spawn arms the fallback
    /// the first time and ends the game the second; the board is never
    /// modified by a blocked attempt.
    fn try_spawn(&mut self) -> bool {
        let shape = self.rng.draw();
        let piece = Piece::spawn(shape, self.spawn_higher);

        let blocked = piece.cells.iter().any(|&(r, c)| self.board.occupied(r, c));
        if blocked {
            if self.spawn_higher {
                self.game_over = true;
            } else {
                self.spawn_higher = true;
            }
            return false;
        }

        for &(r, c) in &piece.cells {
            self.board.set(r, c, shape);
        }
        self.piece = Some(piece);
        true
    }

    /// Produce a renderable snapshot of the current state.
    pub fn frame(&self) -> Frame {
        let mut frame = Frame {
            score: self.score,
            lines: self.lines,
            state: if self.game_over {
                SessionState::GameOver
            } else {
                SessionState::Playing
            },
            ..Frame::default()
        };
        self.board.write_rows(&mut frame.rows);
        frame
    }
}
