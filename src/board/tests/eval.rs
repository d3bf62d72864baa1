//! Static evaluation tests.

use crate::board::{Board, CHECKMATE_SCORE, STALEMATE_SCORE};

#[test]
fn test_initial_position_is_balanced() {
    let board = Board::new();
    assert_eq!(board.evaluate(), 0);
    assert_eq!(board.material_balance(), 0);
}

#[test]
fn test_lone_pawn_scores_material_plus_table() {
    // Pawn on e2: 10 material, 0 positional on its home square.
    let board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("valid fen");
    assert_eq!(board.evaluate(), 10);
    assert_eq!(board.material_balance(), 10);
}

#[test]
fn test_advanced_pawn_outscores_home_pawn() {
    let home = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("valid fen");
    let advanced = Board::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1").expect("valid fen");
    assert!(advanced.evaluate() > home.evaluate());
    assert_eq!(advanced.material_balance(), home.material_balance());
}

#[test]
fn test_black_material_counts_negative() {
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").expect("valid fen");
    assert!(board.evaluate() < 0);
    assert_eq!(board.material_balance(), -80);
}

#[test]
fn test_mirrored_position_is_balanced() {
    // Knights developed symmetrically cancel exactly.
    let board =
        Board::from_fen("r1bqkb1r/pppppppp/2n2n2/8/8/2N2N2/PPPPPPPP/R1BQKB1R w KQkq - 0 3")
            .expect("valid fen");
    assert_eq!(board.evaluate(), 0);
}

#[test]
fn test_checkmate_score_dwarfs_material() {
    let mut board =
        Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .expect("valid fen");
    board.legal_moves();
    assert_eq!(board.evaluate(), CHECKMATE_SCORE);
    assert!(CHECKMATE_SCORE > 2 * 8 * 80);
}

#[test]
fn test_stalemate_scores_zero_despite_material() {
    // White is a full queen up, but the position is drawn.
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");
    board.legal_moves();
    assert_eq!(board.evaluate(), STALEMATE_SCORE);
}
