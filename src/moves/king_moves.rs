//! King geometry: single steps away from attacked squares, and castling.
//!
//! Both functions read the board's attacker counters, so they must run on a
//! board whose attack map is current.

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_rules::{castle_direction, castling_rook_file};
use crate::game_state::chess_types::{CastleSide, PieceKind};
use crate::game_state::piece_record::Piece;
use crate::moves::move_descriptions::{MoveTag, Target};
use crate::moves::ray_casting::{cast_rays, RayStop};

pub fn king_moves(board: &Board, from: Square, king: &Piece) -> Vec<Target> {
    let enemy = king.color.opposite();
    let mut out: Vec<Target> = cast_rays(board, from, PieceKind::King, RayStop::BeforeOccupant)
        .into_iter()
        .filter(|to| board.attackers(*to, enemy) == 0)
        .map(Target::plain)
        .collect();

    for side in [CastleSide::Short, CastleSide::Long] {
        if let Some(target) = castling_target(board, from, king, side) {
            out.push(target);
        }
    }

    out
}

pub fn king_takes(board: &Board, from: Square, king: &Piece) -> Vec<Target> {
    let enemy = king.color.opposite();
    cast_rays(board, from, PieceKind::King, RayStop::AtOccupant)
        .into_iter()
        .filter(|to| {
            board
                .enemy_at(*to, king.color)
                .is_some_and(|victim| victim.kind != PieceKind::King)
        })
        .filter(|to| board.attackers(*to, enemy) == 0)
        .map(Target::plain)
        .collect()
}

/// The king's destination for castling on `side`, if every condition holds:
/// neither king nor rook has moved, the king is not attacked, every square
/// between them is empty, and the two squares the king crosses and lands on
/// are not attacked. The square next to the long-side rook only has to be
/// empty.
pub fn castling_target(board: &Board, from: Square, king: &Piece, side: CastleSide) -> Option<Target> {
    let enemy = king.color.opposite();
    if king.has_moved() || board.attackers(from, enemy) > 0 {
        return None;
    }

    let rook_square = Square::new(from.rank() as i8, castling_rook_file(side) as i8)?;
    let rook = board.piece_at(rook_square)?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved() {
        return None;
    }

    let step = castle_direction(side);
    let mut between = from.offset(0, step)?;
    while between != rook_square {
        if !board.is_empty_at(between) {
            return None;
        }
        between = between.offset(0, step)?;
    }

    let crossed = from.offset(0, step)?;
    let landing = from.offset(0, 2 * step)?;
    if board.attackers(crossed, enemy) > 0 || board.attackers(landing, enemy) > 0 {
        return None;
    }

    Some(Target::tagged(landing, MoveTag::Castle(side)))
}
