use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, PieceKind};

/// Identity of a piece instance, stable for the whole game (promotion keeps it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board.
/// `moves_made` gates the double pawn advance, castling and en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub moves_made: u16,
}

impl Piece {
    pub const fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            moves_made: 0,
        }
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.moves_made > 0
    }
}
