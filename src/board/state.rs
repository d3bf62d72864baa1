use super::{CastleRights, Color, Move, Piece, Square};

/// The full game position: an 8x8 mailbox board plus everything needed
/// to apply and exactly undo moves.
///
/// Row 0 of `squares` is Black's back rank. The three history vectors
/// (`move_log`, `castle_rights_log`, `en_passant_log`) always have
/// equal length, one entry per applied-and-not-undone move; each entry
/// records the state *after* its move, so empty logs mean the position
/// is at its lineage root.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
    /// Cached king locations, indexed by [`Color::index`]. Invariant:
    /// always equal to the actual king squares on `squares`.
    pub(crate) king_square: [Square; 2],
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castle_rights_log: Vec<CastleRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    /// State at the lineage root, restored when undo empties the logs.
    pub(crate) root_castle_rights: CastleRights,
    pub(crate) root_en_passant: Option<Square>,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Board {
    /// Create a board in the standard initial arrangement with full
    /// castle rights and no en-passant target.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.squares[0][file] = Some((Color::Black, *piece));
            board.squares[1][file] = Some((Color::Black, Piece::Pawn));
            board.squares[6][file] = Some((Color::White, Piece::Pawn));
            board.squares[7][file] = Some((Color::White, *piece));
        }
        board.king_square = [Square(7, 4), Square(0, 4)];
        board.castle_rights = CastleRights::all();
        board.root_castle_rights = CastleRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            king_square: [Square(7, 4), Square(0, 4)],
            castle_rights: CastleRights::none(),
            en_passant_target: None,
            move_log: Vec::new(),
            castle_rights_log: Vec::new(),
            en_passant_log: Vec::new(),
            root_castle_rights: CastleRights::none(),
            root_en_passant: None,
            in_check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Get the piece (color and type) on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.file()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.row()][sq.file()].is_none()
    }

    /// The side whose turn it is
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// King location for a color
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    /// Current castle-rights snapshot
    #[inline]
    #[must_use]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// Square where an en-passant capture is currently possible, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Whether the side to move is in check, as of the last
    /// [`Board::legal_moves`] call
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Whether the position is checkmate, as of the last
    /// [`Board::legal_moves`] call
    #[inline]
    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// Whether the position is stalemate, as of the last
    /// [`Board::legal_moves`] call
    #[inline]
    #[must_use]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    /// Applied moves, oldest first (for move-list display)
    #[inline]
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Snapshot of the raw board grid, row 0 = Black's back rank
    /// (for rendering)
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &[[Option<(Color, Piece)>; 8]; 8] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
