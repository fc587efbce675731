//! Tests for the board engine's public contract.

use proptest::prelude::*;
use tictactoe_engine::{BoardEngine, Cell, EngineError, Mark, Outcome, PlaceError};

fn engine_from(marks: &str) -> BoardEngine {
    let mut cells = [Cell::Empty; 9];
    for (cell, ch) in cells.iter_mut().zip(marks.chars().filter(|c| !c.is_whitespace() && *c != '/')) {
        *cell = match ch {
            'X' => Cell::Cross,
            'O' => Cell::Nought,
            _ => Cell::Empty,
        };
    }
    BoardEngine::from_cells(cells)
}

fn place_all(engine: &mut BoardEngine, mark: Mark, indices: &[usize]) {
    for &index in indices {
        engine.place_mark(index, mark).expect("Valid placement");
    }
}

#[test]
fn test_place_every_index_on_empty_board() {
    for index in 0..9 {
        let mut engine = BoardEngine::new();
        assert!(engine.place_mark(index, Mark::Cross).is_ok());
        assert_eq!(engine.cells()[index], Cell::Cross);
        let others = engine.cells().iter().filter(|c| **c != Cell::Empty).count();
        assert_eq!(others, 1, "Only the target cell changes");
    }
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = BoardEngine::new();
    engine.place_mark(4, Mark::Cross).unwrap();
    let before = engine.cells();

    let result = engine.place_mark(4, Mark::Nought);
    assert!(matches!(result, Err(PlaceError::CellOccupied { index: 4, .. })));
    assert_eq!(engine.cells(), before);

    let result = engine.place_mark(4, Mark::Cross);
    assert!(matches!(result, Err(PlaceError::CellOccupied { .. })));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_reset_yields_playing() {
    let mut engine = engine_from("XOX/XOO/OXX");
    assert_eq!(engine.outcome(), Outcome::Tie);

    engine.reset();
    assert_eq!(engine.outcome(), Outcome::Playing);
    assert!(engine.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_outcome_is_idempotent() {
    let mut engine = BoardEngine::new();
    place_all(&mut engine, Mark::Nought, &[2, 4, 6]);
    let first = engine.outcome();
    let second = engine.outcome();
    assert_eq!(first, second);
    assert_eq!(first, Outcome::NoughtWin);
}

#[test]
fn test_cross_top_row_wins() {
    let mut engine = BoardEngine::new();
    place_all(&mut engine, Mark::Cross, &[0, 1, 2]);
    assert_eq!(engine.outcome(), Outcome::CrossWin);
    assert_eq!(engine.winning_line().unwrap().indices(), [0, 1, 2]);
}

#[test]
fn test_nought_diagonal_wins() {
    let mut engine = BoardEngine::new();
    place_all(&mut engine, Mark::Nought, &[0, 4, 8]);
    assert_eq!(engine.outcome(), Outcome::NoughtWin);
    assert_eq!(engine.winning_line().unwrap().indices(), [0, 4, 8]);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let engine = engine_from("XOX/XOO/OXX");
    assert_eq!(engine.outcome(), Outcome::Tie);
    assert_eq!(
        engine.winning_line(),
        Err(EngineError::NoWinningLine { outcome: Outcome::Tie })
    );
}

#[test]
fn test_another_full_board_is_tie() {
    let engine = engine_from("OXO/OXX/XOX");
    assert_eq!(engine.outcome(), Outcome::Tie);
}

#[test]
fn test_single_mark_is_playing() {
    let mut engine = BoardEngine::new();
    engine.place_mark(5, Mark::Nought).unwrap();
    assert_eq!(engine.outcome(), Outcome::Playing);
    assert!(engine.winning_line().is_err());
}

#[test]
fn test_full_board_with_line_is_win() {
    // X X O / O X O / X O X: full, and X holds the main diagonal.
    let engine = engine_from("XXO/OXO/XOX");
    assert_eq!(engine.outcome(), Outcome::CrossWin);
    assert_eq!(engine.winning_line().unwrap().indices(), [0, 4, 8]);
}

#[test]
fn test_winning_lines_in_natural_order() {
    let cases: [(&[usize], [usize; 3]); 4] = [
        (&[8, 7, 6], [6, 7, 8]),
        (&[7, 1, 4], [1, 4, 7]),
        (&[6, 2, 4], [2, 4, 6]),
        (&[5, 8, 2], [2, 5, 8]),
    ];
    for (placed, expected) in cases {
        let mut engine = BoardEngine::new();
        place_all(&mut engine, Mark::Cross, placed);
        assert_eq!(engine.winning_line().unwrap().indices(), expected);
    }
}

#[test]
fn test_cross_takes_precedence_over_nought() {
    // Unreachable in alternating play, but constructible.
    let engine = engine_from("XXX/OOO/...");
    assert_eq!(engine.outcome(), Outcome::CrossWin);
    assert_eq!(engine.winning_line().unwrap().indices(), [0, 1, 2]);
}

#[test]
fn test_winning_line_needs_no_prior_outcome_call() {
    let mut engine = BoardEngine::new();
    place_all(&mut engine, Mark::Nought, &[1, 4, 7]);
    assert_eq!(engine.winning_line().unwrap().indices(), [1, 4, 7]);
}

#[test]
fn test_evaluate_pairs_outcome_with_line() {
    let mut engine = BoardEngine::new();
    place_all(&mut engine, Mark::Cross, &[3, 4, 5]);
    let evaluation = engine.evaluate();
    assert_eq!(evaluation.outcome(), Outcome::CrossWin);
    assert_eq!(evaluation.winning_line().map(|l| l.indices()), Some([3, 4, 5]));
}

#[test]
fn test_snapshot_serializes_cells() {
    let mut engine = BoardEngine::new();
    engine.place_cross(0).unwrap();
    let value = serde_json::to_value(&engine).unwrap();
    assert_eq!(value["board"]["cells"][0], "Cross");
    assert_eq!(value["board"]["cells"][8], "Empty");
}

proptest! {
    #[test]
    fn prop_out_of_range_rejected(index in 9usize..=usize::MAX, cross in any::<bool>()) {
        let mut engine = BoardEngine::new();
        engine.place_mark(4, Mark::Nought).unwrap();
        let before = engine.cells();
        let mark = if cross { Mark::Cross } else { Mark::Nought };

        prop_assert_eq!(engine.place_mark(index, mark), Err(PlaceError::OutOfRange { index }));
        prop_assert_eq!(engine.cells(), before);
    }

    #[test]
    fn prop_queries_agree(moves in proptest::collection::vec((0usize..9, any::<bool>()), 0..16)) {
        let mut engine = BoardEngine::new();
        for (index, cross) in moves {
            let mark = if cross { Mark::Cross } else { Mark::Nought };
            let _ = engine.place_mark(index, mark);
        }

        let evaluation = engine.evaluate();
        prop_assert_eq!(evaluation.outcome(), engine.outcome());
        prop_assert_eq!(evaluation.winning_line(), engine.winning_line().ok());
        prop_assert_eq!(evaluation.winning_line().is_some(), evaluation.outcome().winner().is_some());

        if evaluation.outcome() == Outcome::Tie {
            prop_assert!(engine.open_cells().is_empty());
        }
        if let Some(line) = evaluation.winning_line() {
            let winner = Cell::from(evaluation.outcome().winner().unwrap());
            for index in line.indices() {
                prop_assert_eq!(engine.cells()[index], winner);
            }
        }
    }
}
