//! Rotation tests - cyclic invariant and wall-kick behavior through the
//! session-facing API

use chatris::core::{GameSession, TickInput};
use chatris::types::Shape;

fn sorted_cells(game: &GameSession) -> Vec<(i8, i8)> {
    let mut cells = game.piece().expect("active piece").cells.to_vec();
    cells.sort();
    cells
}

#[test]
fn test_four_rotations_return_to_spawn_cells() {
    for shape in Shape::ALL {
        if shape == Shape::O {
            continue;
        }
        let mut game = GameSession::new(1);
        game.set_next_shape(shape);
        game.step(TickInput::default());
        let original = sorted_cells(&game);

        for turn in 0..4 {
            assert!(game.rotate(), "{shape:?} rotation {turn} should fit");
        }
        assert_eq!(sorted_cells(&game), original, "{shape:?} cyclic invariant");
    }
}

#[test]
fn test_o_shape_bypasses_rotation() {
    let mut game = GameSession::new(1);
    game.set_next_shape(Shape::O);
    game.step(TickInput::default());

    let before = sorted_cells(&game);
    assert!(!game.rotate());
    assert_eq!(sorted_cells(&game), before);
}

#[test]
fn test_rotation_against_wall_kicks_back_in() {
    let mut game = GameSession::new(1);
    game.set_next_shape(Shape::T);
    game.step(TickInput::default());

    // Walk the T into the left wall, falling as it goes.
    for _ in 0..4 {
        game.step(TickInput {
            dx: -1,
            soft_drop: false,
        });
    }
    let min_col = game.piece().unwrap().cells.iter().map(|c| c.1).min();
    assert_eq!(min_col, Some(0));

    // A rotation here needs a kick; whatever it picks must stay on board.
    if game.rotate() {
        for &(r, c) in &game.piece().unwrap().cells {
            assert!((0..18).contains(&r), "row {r} out of bounds");
            assert!((0..10).contains(&c), "col {c} out of bounds");
        }
    }
    assert_eq!(game.board().filled_count(), 4);
}

#[test]
fn test_rejected_rotation_changes_nothing() {
    let mut game = GameSession::new(1);
    game.set_next_shape(Shape::T);
    game.step(TickInput::default());

    // Box the piece in completely.
    let piece = *game.piece().unwrap();
    for row in 0..18 {
        for col in 0..10 {
            if !piece.contains(row, col) {
                game.board_mut().set(row, col, Shape::I);
            }
        }
    }

    let before = sorted_cells(&game);
    assert!(!game.rotate());
    assert_eq!(sorted_cells(&game), before);
}
