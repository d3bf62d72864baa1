//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Applying a random move sequence and undoing all of it restores
    /// the starting position exactly.
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial_fen = board.to_fen();

        let mut applied = 0;
        for _ in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(&mv);
            applied += 1;
        }

        for _ in 0..applied {
            board.undo_move().expect("history holds every applied move");
        }
        prop_assert_eq!(board.to_fen(), initial_fen);
        prop_assert!(board.undo_move().is_err());
    }

    /// No generated move ever leaves the mover's own king attacked.
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let mover = board.side_to_move();
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(&mv);
            prop_assert!(
                !board.is_square_attacked(board.king_square(mover), mover),
                "{mv} left the {mover} king attacked"
            );
        }
    }

    /// The three history logs move in lockstep with the applied moves.
    #[test]
    fn prop_history_logs_stay_parallel(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for ply in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(&mv);
            prop_assert_eq!(board.move_log().len(), ply + 1);
            prop_assert_eq!(board.castle_rights_log.len(), ply + 1);
            prop_assert_eq!(board.en_passant_log.len(), ply + 1);
        }
    }

    /// FEN serialization round-trips through parsing.
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(&mv);
        }

        let fen = board.to_fen();
        let reparsed = Board::from_fen(&fen).expect("generated FEN must parse");
        prop_assert_eq!(reparsed.grid(), board.grid());
        prop_assert_eq!(reparsed.side_to_move(), board.side_to_move());
        prop_assert_eq!(reparsed.castle_rights(), board.castle_rights());
        prop_assert_eq!(reparsed.en_passant_target(), board.en_passant_target());
    }
}
