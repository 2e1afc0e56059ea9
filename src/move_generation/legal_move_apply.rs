//! Board mutation for one generated target.
//!
//! The same routine applies hypothetical moves to scratch boards and confirmed
//! moves to the live board, so a move is simulated exactly as it will later be
//! played. Attacker counters are left stale; callers recompute them.

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_rules::{castled_rook_file, castling_rook_file};
use crate::game_state::chess_types::ActionKind;
use crate::game_state::piece_record::Piece;
use crate::moves::move_descriptions::{MoveTag, Target};

/// What a mutation did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChange {
    /// Moving piece before the move.
    pub piece_before: Piece,
    /// Moving piece after the move (its move count already incremented).
    pub piece_after: Piece,
    pub captured: Option<(Square, Piece)>,
    /// Rook relocation of a castling move.
    pub rook_move: Option<(Square, Square)>,
}

impl BoardChange {
    pub fn action(&self) -> ActionKind {
        if self.captured.is_some() {
            ActionKind::Take
        } else {
            ActionKind::Move
        }
    }
}

/// Play `target` for the piece on `from`: relocate it, remove whatever it
/// captures (the en passant victim stands beside the destination), and move
/// the rook when castling. Returns `None` when `from` is empty.
pub fn apply_target(board: &mut Board, from: Square, target: &Target) -> Option<BoardChange> {
    let piece_before = *board.piece_at(from)?;
    let to = target.square;

    let mut rook_move = None;
    let captured = match target.tag {
        MoveTag::EnPassant { captured } => {
            let victim = board.remove(captured).map(|piece| (captured, piece));
            board.relocate(from, to);
            victim
        }
        MoveTag::Castle(side) => {
            board.relocate(from, to);
            let rook_from = Square::new(from.rank() as i8, castling_rook_file(side) as i8);
            let rook_to = Square::new(from.rank() as i8, castled_rook_file(side) as i8);
            if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                board.relocate(rook_from, rook_to);
                rook_move = Some((rook_from, rook_to));
            }
            None
        }
        MoveTag::Plain | MoveTag::DoubleAdvance | MoveTag::Promotion => {
            board.relocate(from, to).map(|piece| (to, piece))
        }
    };

    let piece_after = *board.piece_at(to)?;
    Some(BoardChange {
        piece_before,
        piece_after,
        captured,
        rook_move,
    })
}

#[cfg(test)]
mod tests {
    use super::apply_target;
    use crate::game_state::board::Board;
    use crate::game_state::board_location::Square;
    use crate::game_state::chess_types::{ActionKind, CastleSide, Color, PieceKind};
    use crate::game_state::piece_record::{Piece, PieceId};
    use crate::moves::move_descriptions::{MoveTag, Target};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn castling_moves_both_pieces() {
        let mut board = Board::empty();
        board
            .place(sq("e8"), Piece::new(PieceId(1), PieceKind::King, Color::Black))
            .expect("empty");
        board
            .place(sq("a8"), Piece::new(PieceId(2), PieceKind::Rook, Color::Black))
            .expect("empty");

        let target = Target::tagged(sq("c8"), MoveTag::Castle(CastleSide::Long));
        let change = apply_target(&mut board, sq("e8"), &target).expect("king on e8");

        assert_eq!(change.rook_move, Some((sq("a8"), sq("d8"))));
        assert_eq!(change.action(), ActionKind::Move);
        let rook = board.piece_at(sq("d8")).expect("rook castled to d8");
        assert_eq!(rook.moves_made, 1);
        assert_eq!(board.piece_at(sq("c8")).map(|p| p.moves_made), Some(1));
        assert!(board.is_empty_at(sq("a8")));
        assert!(board.is_empty_at(sq("e8")));
    }

    #[test]
    fn en_passant_removes_the_adjacent_pawn() {
        let mut board = Board::empty();
        board
            .place(sq("e5"), Piece::new(PieceId(1), PieceKind::Pawn, Color::White))
            .expect("empty");
        board
            .place(sq("d5"), Piece::new(PieceId(2), PieceKind::Pawn, Color::Black))
            .expect("empty");

        let target = Target::tagged(sq("d6"), MoveTag::EnPassant { captured: sq("d5") });
        let change = apply_target(&mut board, sq("e5"), &target).expect("pawn on e5");

        assert_eq!(change.action(), ActionKind::Take);
        assert_eq!(change.captured.map(|(square, piece)| (square, piece.id)), Some((sq("d5"), PieceId(2))));
        assert!(board.is_empty_at(sq("d5")));
        assert_eq!(board.piece_count(), 1);
        assert_eq!(board.location_of(PieceId(1)), Some(sq("d6")));
    }

    #[test]
    fn empty_origin_changes_nothing() {
        let mut board = Board::initial();
        assert!(apply_target(&mut board, sq("e4"), &Target::plain(sq("e5"))).is_none());
        assert_eq!(board, Board::initial());
    }
}
