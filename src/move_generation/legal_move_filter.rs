//! Legality filtering by scratch-board simulation.
//!
//! Each candidate is played on a throwaway clone of the board, the clone's
//! attack map is rebuilt, and the candidate survives only if the mover's king
//! is not attacked afterwards. This single rule covers moving into check,
//! failing to answer a check and moving a pinned piece. The clone is dropped
//! before the next candidate is tried.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::Color;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::piece_record::{Piece, PieceId};
use crate::move_generation::attack_map::{is_king_attacked, recompute_attacks};
use crate::move_generation::legal_move_apply::apply_target;
use crate::move_generation::move_generator::{pseudo_legal_destinations, LegalDestinations};
use crate::moves::move_descriptions::Target;

/// Keep the candidates for the piece on `from` that leave its own king safe.
/// Order is preserved, and filtering an already legal list returns it as is.
pub fn legal_subset(board: &Board, from: Square, candidates: &[Target]) -> Vec<Target> {
    let Some(mover) = board.piece_at(from).copied() else {
        return Vec::new();
    };

    candidates
        .iter()
        .filter(|target| {
            let safe = leaves_king_safe(board, from, &mover, target);
            if !safe {
                trace!(
                    "rejecting {} {} {from}->{}: king would be attacked",
                    mover.color,
                    mover.kind,
                    target.square
                );
            }
            safe
        })
        .copied()
        .collect()
}

fn leaves_king_safe(board: &Board, from: Square, mover: &Piece, target: &Target) -> bool {
    let mut scratch = board.clone();
    if apply_target(&mut scratch, from, target).is_none() {
        return false;
    }
    recompute_attacks(&mut scratch);
    !is_king_attacked(&scratch, mover.color)
}

/// Legal moves and takes for the piece on `from`.
pub fn legal_destinations_from(
    board: &Board,
    from: Square,
    piece: &Piece,
    last_move: Option<&MoveRecord>,
) -> LegalDestinations {
    let pseudo = pseudo_legal_destinations(board, from, piece, last_move);
    LegalDestinations {
        moves: legal_subset(board, from, &pseudo.moves),
        takes: legal_subset(board, from, &pseudo.takes),
    }
}

/// Legal destinations of every piece of `color`, in id order, skipping
/// pieces with nothing to do.
pub fn legal_moves_for_side(
    board: &Board,
    color: Color,
    last_move: Option<&MoveRecord>,
) -> Vec<(PieceId, Square, LegalDestinations)> {
    board
        .pieces_of(color)
        .map(|(from, piece)| (piece.id, from, legal_destinations_from(board, from, &piece, last_move)))
        .filter(|(_, _, destinations)| !destinations.is_empty())
        .collect()
}

/// True when `color` has at least one legal move. Stops at the first one.
pub fn side_has_legal_move(board: &Board, color: Color, last_move: Option<&MoveRecord>) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        let pseudo = pseudo_legal_destinations(board, from, &piece, last_move);
        pseudo
            .moves
            .iter()
            .chain(pseudo.takes.iter())
            .any(|target| leaves_king_safe(board, from, &piece, target))
    })
}
