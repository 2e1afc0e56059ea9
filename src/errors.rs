//! Errors used throughout the rules engine.
//!
//! `RulesError` is the single error type returned by every fallible engine
//! operation. Every variant is recoverable: a rejected request leaves the
//! live board untouched and the engine waiting for the next selection.
//!
//! Usage guidelines:
//! - Input problems (`OutOfBounds`, `InvalidAlgebraic`) come from coordinates
//!   supplied by a collaborator. Internal ray casting never produces them; an
//!   off-board probe is simply `None`.
//! - Request problems (`NoPieceAtOrigin`, `IllegalDestination`,
//!   `NotYourTurn`, `GameOver`) reject a move and change nothing.
//! - Promotion problems (`PromotionRequired`, `NoPromotionPending`,
//!   `PromotionPieceMismatch`, `InvalidPromotionKind`) guard the two-phase
//!   promotion protocol.
//! - `InvalidSetup` is only returned while building a custom position or
//!   restoring a board snapshot.

use thiserror::Error;

use crate::engine::game_status::TerminalStatus;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece_record::PieceId;

pub type RulesResult<T> = Result<T, RulesError>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A coordinate outside `1..=8` was supplied from outside the engine.
    #[error("coordinate rank {rank}, file {file} is off the board")]
    OutOfBounds { rank: i8, file: i8 },

    /// A square name such as `"e4"` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),

    /// No live piece carries the requested id.
    #[error("no piece with id {0} is on the board")]
    NoPieceAtOrigin(PieceId),

    /// The destination is not among the piece's legal moves or takes.
    #[error("piece {piece_id} cannot move to {destination}")]
    IllegalDestination {
        piece_id: PieceId,
        destination: Square,
    },

    /// A move or query was attempted while a pawn waits for its promotion.
    #[error("piece {piece_id} on {square} must be promoted first")]
    PromotionRequired { piece_id: PieceId, square: Square },

    /// `resolve_promotion` was called with nothing to resolve.
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// `resolve_promotion` named a different pawn than the pending one.
    #[error("promotion is pending for piece {expected}, not {requested}")]
    PromotionPieceMismatch {
        expected: PieceId,
        requested: PieceId,
    },

    /// Pawns may only become a queen, rook, knight or bishop.
    #[error("a pawn cannot be promoted to a {0}")]
    InvalidPromotionKind(PieceKind),

    /// The selected piece belongs to the side that is not on move.
    #[error("piece {piece_id} is {color} but it is {side_to_move}'s turn")]
    NotYourTurn {
        piece_id: PieceId,
        color: Color,
        side_to_move: Color,
    },

    /// The game already ended.
    #[error("the game is over: {0}")]
    GameOver(TerminalStatus),

    /// A custom position violates a board invariant.
    #[error("invalid position setup: {0}")]
    InvalidSetup(String),
}

#[cfg(test)]
mod tests {
    use super::RulesError;
    use crate::game_state::board_location::Square;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::piece_record::PieceId;

    #[test]
    fn messages_name_the_offending_values() {
        let e4 = Square::from_algebraic("e4").expect("e4 should parse");
        let err = RulesError::IllegalDestination {
            piece_id: PieceId(12),
            destination: e4,
        };
        assert_eq!(err.to_string(), "piece #12 cannot move to e4");
        assert_eq!(
            RulesError::InvalidPromotionKind(PieceKind::King).to_string(),
            "a pawn cannot be promoted to a king"
        );
    }
}
