//! Whole-board attack counting.
//!
//! `recompute_attacks` zeroes every counter and rebuilds them from scratch, so
//! calling it twice in a row leaves the board unchanged. It never touches the
//! check flags; the game tracker derives those from the counters.

use crate::game_state::board::{Board, CheckStatus};
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece_record::Piece;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::ray_casting::{cast_rays, RayStop};

/// Squares a piece on `from` attacks: pawns hit their forward diagonals,
/// everything else uses its movement table with rays ending on (and counting)
/// the first blocker of either color.
pub fn attacked_squares(board: &Board, from: Square, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        kind => cast_rays(board, from, kind, RayStop::AtOccupant),
    }
}

pub fn recompute_attacks(board: &mut Board) {
    board.reset_attackers();

    let reach: Vec<(Color, Vec<Square>)> = board
        .pieces()
        .map(|(from, piece)| (piece.color, attacked_squares(board, from, &piece)))
        .collect();

    for (color, squares) in reach {
        for square in squares {
            board.add_attacker(square, color);
        }
    }
}

/// True when the king of `color` stands on a square the other side attacks.
/// A side without a king is never in check.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|square| board.attackers(square, color.opposite()) > 0)
}

/// Check flags for both kings, read from the current counters.
pub fn check_status(board: &Board) -> CheckStatus {
    CheckStatus {
        white: is_king_attacked(board, Color::White),
        black: is_king_attacked(board, Color::Black),
    }
}
