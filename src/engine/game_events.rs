//! Notifications queued for collaborators (history panels, renderers).
//!
//! The engine never calls out; it appends events and a host drains them with
//! `GameEngine::drain_events` after each request.

use serde::{Deserialize, Serialize};

use crate::engine::game_status::{PendingPromotion, TerminalStatus};
use crate::game_state::board::CheckStatus;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::piece_record::PieceId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ply finished. Promotions report here once the new kind is chosen.
    MoveApplied(Box<MoveRecord>),
    PromotionPending(PendingPromotion),
    PromotionApplied { piece_id: PieceId, kind: PieceKind },
    CheckChanged(CheckStatus),
    GameOver(TerminalStatus),
}
