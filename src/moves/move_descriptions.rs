//! Destination descriptions produced by move generation.
//!
//! Every generated destination carries a tag telling the mutation step what
//! else has to happen besides relocating the piece: a castling rook to move,
//! an en passant victim to remove, or a promotion to wait for.

use serde::{Deserialize, Serialize};

use crate::game_state::board_location::Square;
use crate::game_state::chess_types::CastleSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTag {
    Plain,
    /// Pawn advance of two squares from its first move.
    DoubleAdvance,
    /// King move of two files; the rook on `side` jumps over it.
    Castle(CastleSide),
    /// Diagonal pawn capture onto an empty square; the victim stands on
    /// `captured`.
    EnPassant { captured: Square },
    /// Pawn lands on its last rank and must be promoted.
    Promotion,
}

/// A destination square plus the special handling it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub square: Square,
    pub tag: MoveTag,
}

impl Target {
    #[inline]
    pub const fn plain(square: Square) -> Self {
        Self {
            square,
            tag: MoveTag::Plain,
        }
    }

    #[inline]
    pub const fn tagged(square: Square, tag: MoveTag) -> Self {
        Self { square, tag }
    }
}

/// Squares of a target list, dropping tags.
pub fn target_squares(targets: &[Target]) -> Vec<Square> {
    targets.iter().map(|target| target.square).collect()
}
