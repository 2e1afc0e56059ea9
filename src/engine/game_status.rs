//! Game-level status values reported by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::Color;
use crate::game_state::engine_config::EngineConfig;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::piece_record::PieceId;
use crate::move_generation::legal_move_filter::side_has_legal_move;

/// Whether, and how, the game has ended.
///
/// `Stalemate` and `BareKings` are both draws but stay distinct: the first is
/// a side with no legal move while not in check, the second is the position
/// with nothing but the two kings left. Threefold repetition and the
/// fifty-move rule are not detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    #[default]
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    BareKings,
}

impl TerminalStatus {
    #[inline]
    pub const fn is_over(&self) -> bool {
        !matches!(self, TerminalStatus::Ongoing)
    }

    #[inline]
    pub const fn is_draw(&self) -> bool {
        matches!(self, TerminalStatus::Stalemate | TerminalStatus::BareKings)
    }

    pub const fn winner(&self) -> Option<Color> {
        match self {
            TerminalStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalStatus::Ongoing => write!(f, "game in progress"),
            TerminalStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            TerminalStatus::Stalemate => write!(f, "draw by stalemate"),
            TerminalStatus::BareKings => write!(f, "draw, only the kings remain"),
        }
    }
}

/// A pawn standing on its last rank, waiting for its new kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    pub piece_id: PieceId,
    pub square: Square,
}

/// Where the engine rests between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    AwaitingSelection,
    /// A pawn was placed on its last rank; only `resolve_promotion` is
    /// accepted until the choice is made.
    AwaitingPromotionChoice(PendingPromotion),
    GameOver(TerminalStatus),
}

/// Status of the position where `to_move` is about to reply.
///
/// Expects current attacker counters and check flags. Only detects; the
/// engine declares the result.
pub fn evaluate_terminal(
    board: &Board,
    to_move: Color,
    last_move: Option<&MoveRecord>,
    config: &EngineConfig,
) -> TerminalStatus {
    if config.declare_bare_kings_draw && board.only_kings_remain() {
        return TerminalStatus::BareKings;
    }
    if side_has_legal_move(board, to_move, last_move) {
        return TerminalStatus::Ongoing;
    }
    if board.check_status().is_checked(to_move) {
        TerminalStatus::Checkmate {
            winner: to_move.opposite(),
        }
    } else {
        TerminalStatus::Stalemate
    }
}
