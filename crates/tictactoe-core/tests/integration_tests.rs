//! Integration tests for the tic-tac-toe engine.
//!
//! These tests play whole games through the public API and check the
//! counting, alternation and outcome rules over many random move orders.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tictactoe_core::*;

/// A random ordering of all nine cells
fn shuffled_cells(seed: u64) -> Vec<CellIndex> {
    let mut cells: Vec<CellIndex> = (0..CELL_COUNT).collect();
    cells.shuffle(&mut StdRng::seed_from_u64(seed));
    cells
}

/// Play cells in order until the game ends, returning every result
fn play_until_end(game: &mut GameState, cells: &[CellIndex]) -> Vec<MoveResult> {
    let mut results = Vec::new();
    for &cell in cells {
        let result = game.apply_move(cell).expect("distinct cells are always free");
        results.push(result);
        if result != MoveResult::Continue {
            break;
        }
    }
    results
}

#[test]
fn test_filled_count_tracks_accepted_moves() {
    for seed in 0..200 {
        let mut game = GameState::new();
        let results = play_until_end(&mut game, &shuffled_cells(seed));

        assert_eq!(game.filled_count(), results.len(), "seed {}", seed);
        assert_eq!(game.turn() as usize, results.len(), "seed {}", seed);
        assert_eq!(game.board().filled_count(), game.filled_count(), "seed {}", seed);
    }
}

#[test]
fn test_marks_alternate_by_move_number() {
    for seed in 0..200 {
        let mut game = GameState::new();
        let cells = shuffled_cells(seed);
        let results = play_until_end(&mut game, &cells);

        for (k, &cell) in cells.iter().take(results.len()).enumerate() {
            let expected = if k % 2 == 0 { Mark::Player } else { Mark::Computer };
            assert_eq!(
                game.board().get(cell),
                Some(Cell::Marked(expected)),
                "seed {} move {}",
                seed,
                k
            );
        }
    }
}

#[test]
fn test_occupied_cell_never_changes_state() {
    for seed in 0..100 {
        let mut game = GameState::new();
        let cells = shuffled_cells(seed);
        // Four moves can never finish a game
        for &cell in &cells[..4] {
            game.apply_move(cell).unwrap();
        }

        for &taken in &cells[..4] {
            let before = game.clone();
            assert_eq!(game.apply_move(taken), Err(GameError::CellOccupied(taken)));
            assert_eq!(game, before);
        }
    }
}

#[test]
fn test_outcome_matches_final_board() {
    for seed in 0..300 {
        let mut game = GameState::new();
        let results = play_until_end(&mut game, &shuffled_cells(seed));
        let last = *results.last().unwrap();

        // Only the final move may end the game
        assert!(results[..results.len() - 1]
            .iter()
            .all(|r| *r == MoveResult::Continue));

        match last {
            MoveResult::Win(mark) => {
                assert!(game.check_winner(mark));
                assert_eq!(game.phase(), GamePhase::Won { winner: mark });
            }
            MoveResult::Draw => {
                assert!(game.is_full());
                assert!(!game.check_winner(Mark::Player));
                assert!(!game.check_winner(Mark::Computer));
                assert_eq!(game.phase(), GamePhase::Drawn);
            }
            MoveResult::Continue => panic!("seed {}: game never ended", seed),
        }
    }
}

#[test]
fn test_check_winner_matches_line_definition() {
    for seed in 0..200 {
        let mut game = GameState::new();
        play_until_end(&mut game, &shuffled_cells(seed));

        for mark in Mark::ALL {
            let expected = WINNING_LINES.iter().any(|line| {
                line.iter()
                    .all(|&i| game.board().get(i) == Some(Cell::Marked(mark)))
            });
            assert_eq!(game.check_winner(mark), expected, "seed {}", seed);
        }
    }
}

#[test]
fn test_reset_from_any_state() {
    for seed in 0..50 {
        let mut game = GameState::new();
        let cells = shuffled_cells(seed);
        let moves = (seed as usize) % (CELL_COUNT + 1);
        for &cell in &cells[..moves] {
            let _ = game.apply_move(cell);
        }

        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert!(game.board().cells().iter().all(Cell::is_empty));
    }
}

#[test]
fn test_reset_after_draw() {
    let mut game = GameState::new();
    let results = play_until_end(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(results.last(), Some(&MoveResult::Draw));
    assert_eq!(game.phase(), GamePhase::Drawn);

    game.reset();
    assert_eq!(game, GameState::new());
    assert_eq!(game.apply_move(4), Ok(MoveResult::Continue));
}

#[test]
fn test_scenario_player_top_row() {
    let mut game = GameState::new();
    let results = play_until_end(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        results,
        vec![
            MoveResult::Continue,
            MoveResult::Continue,
            MoveResult::Continue,
            MoveResult::Continue,
            MoveResult::Win(Mark::Player),
        ]
    );
    assert_eq!(game.filled_count(), 5);
    assert_eq!(game.winning_line(), Some([0, 1, 2]));
}

#[test]
fn test_scenario_full_board_draw() {
    // X X O / O O X / X O X
    let mut game = GameState::new();
    let results = play_until_end(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(results.len(), 9);
    assert_eq!(results[8], MoveResult::Draw);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_scenario_repeat_cell() {
    let mut game = GameState::new();
    game.apply_move(6).unwrap();

    let err = game.apply_move(6).unwrap_err();
    assert!(err.is_invalid_move());
    assert_eq!(err.to_string(), "Cell 6 is already occupied");
    assert_eq!(game.filled_count(), 1);
    assert_eq!(game.current_mark(), Mark::Computer);
}

#[test]
fn test_state_json_round_trip_keeps_game_playable() {
    let mut game = GameState::new();
    game.apply_move(4).unwrap();
    game.apply_move(0).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.apply_move(8), Ok(MoveResult::Continue));
}
