//! Pawn geometry: pushes, diagonal captures, en passant and the promotion tag.

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_rules::{en_passant_rank, promotion_rank};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::piece_record::Piece;
use crate::moves::move_descriptions::{MoveTag, Target};

/// Squares a pawn of `color` on `from` attacks (its two forward diagonals).
pub fn pawn_attacks(from: Square, color: Color) -> Vec<Square> {
    let forward = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(|d_file| from.offset(forward, d_file))
        .collect()
}

/// Non-capturing pawn moves.
pub fn pawn_moves(board: &Board, from: Square, pawn: &Piece) -> Vec<Target> {
    let mut out = Vec::with_capacity(2);
    let forward = pawn.color.forward();

    let Some(one_step) = from.offset(forward, 0) else {
        return out;
    };
    if !board.is_empty_at(one_step) {
        return out;
    }
    out.push(Target::tagged(one_step, arrival_tag(one_step, pawn.color)));

    if pawn.moves_made == 0 {
        if let Some(two_step) = from.offset(2 * forward, 0) {
            if board.is_empty_at(two_step) {
                out.push(Target::tagged(two_step, MoveTag::DoubleAdvance));
            }
        }
    }

    out
}

/// Capturing pawn moves, including en passant.
///
/// En passant needs the previous ply: the adjacent enemy pawn must have made
/// exactly one move and that move must be the double advance just played.
pub fn pawn_takes(
    board: &Board,
    from: Square,
    pawn: &Piece,
    last_move: Option<&MoveRecord>,
) -> Vec<Target> {
    let mut out = Vec::with_capacity(2);

    for to in pawn_attacks(from, pawn.color) {
        if let Some(victim) = board.enemy_at(to, pawn.color) {
            if victim.kind != PieceKind::King {
                out.push(Target::tagged(to, arrival_tag(to, pawn.color)));
            }
        }
    }

    if from.rank() != en_passant_rank(pawn.color) {
        return out;
    }
    let Some(last_move) = last_move else {
        return out;
    };
    if !last_move.is_double_pawn_advance() {
        return out;
    }

    for d_file in [-1i8, 1] {
        let Some(beside) = from.offset(0, d_file) else {
            continue;
        };
        let Some(victim) = board.enemy_at(beside, pawn.color) else {
            continue;
        };
        if victim.kind != PieceKind::Pawn
            || victim.moves_made != 1
            || victim.id != last_move.piece.id
            || last_move.to != beside
        {
            continue;
        }
        if let Some(behind) = beside.offset(pawn.color.forward(), 0) {
            if board.is_empty_at(behind) {
                out.push(Target::tagged(behind, MoveTag::EnPassant { captured: beside }));
            }
        }
    }

    out
}

fn arrival_tag(to: Square, color: Color) -> MoveTag {
    if to.rank() == promotion_rank(color) {
        MoveTag::Promotion
    } else {
        MoveTag::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_moves, pawn_takes};
    use crate::game_state::board::Board;
    use crate::game_state::board_location::Square;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece_record::{Piece, PieceId};
    use crate::moves::move_descriptions::{MoveTag, Target};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn unmoved_pawn_may_advance_two() {
        let board = Board::initial();
        let pawn = *board.piece_at(sq("e2")).expect("e2 holds a pawn");
        let moves = pawn_moves(&board, sq("e2"), &pawn);
        assert_eq!(
            moves,
            vec![
                Target::plain(sq("e3")),
                Target::tagged(sq("e4"), MoveTag::DoubleAdvance)
            ]
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::initial();
        board.relocate(sq("e7"), sq("e3"));
        let pawn = *board.piece_at(sq("e2")).expect("e2 holds a pawn");
        assert!(pawn_moves(&board, sq("e2"), &pawn).is_empty());
    }

    #[test]
    fn moved_pawn_advances_one() {
        let mut board = Board::initial();
        board.relocate(sq("d7"), sq("d6"));
        let pawn = *board.piece_at(sq("d6")).expect("d6 holds a pawn");
        assert_eq!(pawn_moves(&board, sq("d6"), &pawn), vec![Target::plain(sq("d5"))]);
    }

    #[test]
    fn captures_only_enemies_and_never_kings() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceId(1), PieceKind::Pawn, Color::White);
        board.place(sq("d4"), pawn).expect("empty");
        board
            .place(sq("c5"), Piece::new(PieceId(2), PieceKind::Knight, Color::Black))
            .expect("empty");
        board
            .place(sq("e5"), Piece::new(PieceId(3), PieceKind::King, Color::Black))
            .expect("empty");

        assert_eq!(pawn_takes(&board, sq("d4"), &pawn, None), vec![Target::plain(sq("c5"))]);
    }

    #[test]
    fn last_rank_arrivals_are_tagged_for_promotion() {
        let mut board = Board::empty();
        let pawn = Piece::new(PieceId(1), PieceKind::Pawn, Color::Black);
        board.place(sq("b2"), pawn).expect("empty");
        board
            .place(sq("a1"), Piece::new(PieceId(2), PieceKind::Rook, Color::White))
            .expect("empty");

        assert_eq!(
            pawn_moves(&board, sq("b2"), &pawn),
            vec![Target::tagged(sq("b1"), MoveTag::Promotion)]
        );
        assert_eq!(
            pawn_takes(&board, sq("b2"), &pawn, None),
            vec![Target::tagged(sq("a1"), MoveTag::Promotion)]
        );
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        assert_eq!(pawn_attacks(sq("a2"), Color::White), vec![sq("b3")]);
        assert_eq!(pawn_attacks(sq("e7"), Color::Black), vec![sq("d6"), sq("f6")]);
        assert!(pawn_attacks(sq("c8"), Color::White).is_empty());
    }
}
