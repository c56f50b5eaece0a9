//! Tests for the minimax move oracle.

use std::collections::HashSet;
use strum::IntoEnumIterator;
use unbeatable_tictactoe::{
    Board, COMPUTER_WIN_SCORE, Cell, Evaluation, Player, TIE_SCORE, WIN_COMBINATIONS, best_spot,
    check_win, is_full, minimax, minimax_with_stats,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Every distinct board reachable by alternating play with the human opening.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board) {
            return;
        }
        if check_win(&board, Player::Human).is_some()
            || check_win(&board, Player::Computer).is_some()
            || is_full(&board)
        {
            return;
        }
        for index in board.empty_cells() {
            let mut next = board;
            next.apply_move(index, to_move).unwrap();
            walk(next, to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Player::Human, &mut seen);
    seen
}

#[test]
fn test_corner_opening_answered_in_center() {
    let evaluation = minimax(&board("H........"), Player::Computer);
    assert_eq!(evaluation.index(), Some(4));
    assert_eq!(evaluation.score(), TIE_SCORE);
}

#[test]
fn test_center_opening_answered_in_first_corner() {
    assert_eq!(best_spot(&board("....H....")), Some(0));
}

#[test]
fn test_edge_openings() {
    assert_eq!(best_spot(&board(".H.......")), Some(0));
    assert_eq!(best_spot(&board(".....H...")), Some(2));
    assert_eq!(best_spot(&board(".......H.")), Some(1));
}

#[test]
fn test_immediate_win_taken() {
    let evaluation = minimax(&board("CC. HH. ..."), Player::Computer);
    assert_eq!(evaluation.index(), Some(2));
    assert_eq!(evaluation.score(), COMPUTER_WIN_SCORE);
}

#[test]
fn test_blocks_human_row() {
    // Cell 5 would win at once, but blocking at 2 also forces a win and is
    // scanned first. Depth is not scored, so the earlier cell is kept.
    let evaluation = minimax(&board("HH. CC. ..."), Player::Computer);
    assert_eq!(evaluation.index(), Some(2));
    assert_eq!(evaluation.score(), COMPUTER_WIN_SCORE);
}

#[test]
fn test_empty_board_computer_to_move() {
    let (evaluation, stats) = minimax_with_stats(&Board::new(), Player::Computer);
    assert_eq!(evaluation.index(), Some(0));
    assert_eq!(evaluation.score(), TIE_SCORE);
    assert_eq!(*stats.nodes(), 549_946);
}

#[test]
fn test_deterministic() {
    let b = board("H...C...H");
    let first = minimax_with_stats(&b, Player::Computer);
    for _ in 0..5 {
        assert_eq!(minimax_with_stats(&b, Player::Computer), first);
    }
    assert_eq!(first.0.index(), Some(1));
}

#[test]
fn test_search_leaves_board_untouched() {
    let b = board("HC.......");
    let copy = b;
    let _ = minimax(&b, Player::Computer);
    assert_eq!(b, copy);
}

#[test]
fn test_never_picks_occupied_cell() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);
    for b in boards {
        for player in Player::iter() {
            if let Some(index) = minimax(&b, player).index() {
                assert_eq!(b.get(index), Some(Cell::Empty), "board {} picked {}", b, index);
            }
        }
    }
}

#[test]
fn test_check_win_iff_line_complete() {
    for b in reachable_boards() {
        for player in Player::iter() {
            let complete: Vec<_> = WIN_COMBINATIONS
                .iter()
                .filter(|combo| {
                    combo
                        .cells
                        .iter()
                        .all(|&i| b.get(i) == Some(Cell::Occupied(player)))
                })
                .collect();
            assert_eq!(check_win(&b, player), complete.first().map(|c| **c), "board {}", b);
        }
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    let b = board("HCH HCC CHH");
    assert!(is_full(&b));
    assert_eq!(check_win(&b, Player::Human), None);
    assert_eq!(check_win(&b, Player::Computer), None);
    assert_eq!(minimax(&b, Player::Computer), Evaluation::Terminal(TIE_SCORE));
    assert_eq!(best_spot(&b), None);
}
