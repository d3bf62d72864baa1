//! Special positions: mates, stalemate, promotion.

use super::play;
use crate::board::{Board, Color, Piece, Square, CHECKMATE_SCORE};

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    play(&mut board, Square(6, 5), Square(5, 5)); // f3
    play(&mut board, Square(1, 4), Square(3, 4)); // e5
    play(&mut board, Square(6, 6), Square(4, 6)); // g4
    play(&mut board, Square(0, 3), Square(4, 7)); // Qh4#

    assert!(board.legal_moves().is_empty());
    assert!(board.in_check());
    assert!(board.checkmate());
    assert!(!board.stalemate());
    assert_eq!(board.evaluate(), -CHECKMATE_SCORE);
}

#[test]
fn test_scholars_mate() {
    let mut board =
        Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .expect("valid fen");
    assert!(board.legal_moves().is_empty());
    assert!(board.checkmate());
    assert_eq!(board.evaluate(), CHECKMATE_SCORE);
}

#[test]
fn test_stalemate_position() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");
    assert!(board.legal_moves().is_empty());
    assert!(!board.in_check());
    assert!(!board.checkmate());
    assert!(board.stalemate());
    assert_eq!(board.evaluate(), 0);
}

#[test]
fn test_terminal_flags_clear_after_undo() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1").expect("valid fen");
    play(&mut board, Square(1, 5), Square(1, 6)); // Qg7#
    assert!(board.legal_moves().is_empty());
    assert!(board.checkmate());

    board.undo_move().expect("one move to undo");
    assert!(!board.checkmate());
    assert!(!board.stalemate());
    assert!(!board.legal_moves().is_empty());
}

#[test]
fn test_promotion_is_always_a_queen() {
    let mut board = Board::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("valid fen");
    let moves = board.legal_moves();
    let promos: Vec<_> = moves.iter().filter(|m| m.is_promotion).collect();
    // One move per promotion push; there is no underpromotion choice.
    assert_eq!(promos.len(), 1);
    board.make_move(promos[0]);
    assert_eq!(
        board.piece_at(Square(0, 0)),
        Some((Color::White, Piece::Queen))
    );
}

#[test]
fn test_promotion_by_capture() {
    let mut board = Board::from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1").expect("valid fen");
    let moves = board.legal_moves();
    let capture_promo = moves
        .iter()
        .find(|m| m.is_promotion && m.is_capture())
        .expect("axb8 promotes by capture");
    assert_eq!(capture_promo.to, Square(0, 1));
    board.make_move(capture_promo);
    assert_eq!(
        board.piece_at(Square(0, 1)),
        Some((Color::White, Piece::Queen))
    );
}

#[test]
fn test_black_promotion_row() {
    let mut board = Board::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1").expect("valid fen");
    let promo = board
        .legal_moves()
        .into_iter()
        .find(|m| m.is_promotion)
        .expect("black promotes on row 7");
    board.make_move(&promo);
    assert_eq!(
        board.piece_at(Square(7, 6)),
        Some((Color::Black, Piece::Queen))
    );
}
