//! Pseudo-legal destination generation.
//!
//! `moves_for` yields quiet destinations and `takes_for` capturing ones. Both
//! respect geometry and occupancy only; whether the move would leave the
//! mover's own king attacked is decided by `legal_move_filter`.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::piece_record::Piece;
use crate::moves::king_moves::{king_moves, king_takes};
use crate::moves::move_descriptions::{target_squares, Target};
use crate::moves::pawn_moves::{pawn_moves, pawn_takes};
use crate::moves::ray_casting::{cast_rays, RayStop};

/// Destinations of one piece, split the way a UI draws them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDestinations {
    pub moves: Vec<Target>,
    pub takes: Vec<Target>,
}

impl LegalDestinations {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.takes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len() + self.takes.len()
    }

    pub fn move_squares(&self) -> Vec<Square> {
        target_squares(&self.moves)
    }

    pub fn take_squares(&self) -> Vec<Square> {
        target_squares(&self.takes)
    }

    /// The generated target for `square`, searching moves before takes.
    pub fn find(&self, square: Square) -> Option<Target> {
        self.moves
            .iter()
            .chain(self.takes.iter())
            .find(|target| target.square == square)
            .copied()
    }

    pub fn contains(&self, square: Square) -> bool {
        self.find(square).is_some()
    }
}

/// Quiet destinations for `piece` standing on `from`.
///
/// King steps and castling consult the board's attacker counters, which must
/// be current.
pub fn moves_for(board: &Board, from: Square, piece: &Piece) -> Vec<Target> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece),
        PieceKind::King => king_moves(board, from, piece),
        kind => cast_rays(board, from, kind, RayStop::BeforeOccupant)
            .into_iter()
            .map(Target::plain)
            .collect(),
    }
}

/// Capturing destinations for `piece` standing on `from`. Never includes a
/// square holding a king or a piece of the mover's own color.
pub fn takes_for(
    board: &Board,
    from: Square,
    piece: &Piece,
    last_move: Option<&MoveRecord>,
) -> Vec<Target> {
    match piece.kind {
        PieceKind::Pawn => pawn_takes(board, from, piece, last_move),
        PieceKind::King => king_takes(board, from, piece),
        kind => cast_rays(board, from, kind, RayStop::AtOccupant)
            .into_iter()
            .filter(|to| {
                board
                    .enemy_at(*to, piece.color)
                    .is_some_and(|victim| victim.kind != PieceKind::King)
            })
            .map(Target::plain)
            .collect(),
    }
}

/// Both pseudo-legal sets at once.
pub fn pseudo_legal_destinations(
    board: &Board,
    from: Square,
    piece: &Piece,
    last_move: Option<&MoveRecord>,
) -> LegalDestinations {
    LegalDestinations {
        moves: moves_for(board, from, piece),
        takes: takes_for(board, from, piece, last_move),
    }
}
