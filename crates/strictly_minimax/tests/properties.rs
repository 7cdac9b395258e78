//! Property-based tests over positions reachable by alternating play.

use proptest::prelude::*;
use std::ops::RangeInclusive;
use strictly_minimax::{Board, IllegalMove, Player, Position, SearchEngine, Square};

/// A board reached by alternating legal moves from the empty board, plus the side to move.
///
/// Stops early if a move ends the game.
fn arb_played_board(moves: RangeInclusive<usize>) -> impl Strategy<Value = (Board, Player)> {
    moves.prop_flat_map(|num_moves| {
        proptest::collection::vec(0usize..9, num_moves).prop_map(|choices| {
            let mut board = Board::new();
            let mut side = Player::X;
            for choice in choices {
                if board.outcome().is_terminal() {
                    break;
                }
                let empty = board.list_empty_cells();
                let pos = empty[choice % empty.len()];
                board.place_at(pos, side).unwrap();
                side = side.opponent();
            }
            (board, side)
        })
    })
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #[test]
    fn marked_count_tracks_occupied_squares((board, _) in arb_played_board(0..=9)) {
        let occupied = board.squares().iter().filter(|s| **s != Square::Empty).count();
        prop_assert_eq!(board.marked(), occupied);
        prop_assert_eq!(board.list_empty_cells().len(), 9 - occupied);
    }

    #[test]
    fn empty_cells_are_sorted_and_empty((board, _) in arb_played_board(0..=9)) {
        let cells = board.list_empty_cells();
        prop_assert!(cells.windows(2).all(|w| w[0] < w[1]));
        for pos in cells {
            prop_assert!(board.is_empty_cell(pos.row(), pos.col()));
        }
    }

    #[test]
    fn placing_on_occupied_square_changes_nothing(
        (board, _) in arb_played_board(0..=9),
        index in 0usize..9,
        player in arb_player(),
    ) {
        let pos = Position::from_index(index).unwrap();
        let mut after = board;
        let result = after.place(pos.row(), pos.col(), player);
        if board.get(pos) == Square::Empty {
            prop_assert!(result.is_ok());
            prop_assert_eq!(after.marked(), board.marked() + 1);
        } else {
            prop_assert_eq!(result, Err(IllegalMove::Occupied(pos)));
            prop_assert_eq!(after, board);
        }
    }

    #[test]
    fn placing_off_board_changes_nothing(
        (board, side) in arb_played_board(0..=9),
        any_coord in 0usize..6,
        off_coord in 3usize..6,
    ) {
        let mut after = board;
        prop_assert_eq!(
            after.place(off_coord, any_coord, side),
            Err(IllegalMove::OutOfRange { row: off_coord, col: any_coord })
        );
        prop_assert_eq!(
            after.place(any_coord, off_coord, side),
            Err(IllegalMove::OutOfRange { row: any_coord, col: off_coord })
        );
        prop_assert_eq!(after, board);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn best_move_is_legal_and_deterministic((board, side) in arb_played_board(1..=9)) {
        prop_assume!(!board.outcome().is_terminal());
        let first = SearchEngine::best_move(&board, side).unwrap();
        prop_assert!(board.get(first) == Square::Empty);
        prop_assert_eq!(SearchEngine::best_move(&board, side), Ok(first));
    }

    #[test]
    fn best_move_preserves_the_score((board, side) in arb_played_board(1..=9)) {
        prop_assume!(!board.outcome().is_terminal());
        let result = SearchEngine::evaluate(&board, side);
        let pos = result.best_move().unwrap();
        let mut child = board;
        child.place_at(pos, side).unwrap();
        prop_assert_eq!(SearchEngine::evaluate(&child, side.opponent()).score(), result.score());
    }
}
