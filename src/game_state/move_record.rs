use serde::{Deserialize, Serialize};

use crate::engine::game_status::TerminalStatus;
use crate::game_state::board::{Board, CheckStatus};
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::{ActionKind, PieceKind};
use crate::game_state::piece_record::Piece;
use crate::moves::move_descriptions::MoveTag;

/// One completed ply, as handed to history collaborators.
///
/// `board` is the position after the move. For a promotion the record is
/// finalized when the choice is made: `promotion`, `board`, `check_after` and
/// `terminal_after` then describe the promoted piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub board: Board,
    /// The moving piece as it was before the move.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub action: ActionKind,
    pub tag: MoveTag,
    pub promotion: Option<PieceKind>,
    pub check_after: CheckStatus,
    pub terminal_after: TerminalStatus,
}

impl MoveRecord {
    /// True when this ply was a two-square advance by a pawn.
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }
}
