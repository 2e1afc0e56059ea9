//! Canonical chess-rule constants.
//!
//! Home ranks, the standard back-rank order and the rank helpers used by pawn
//! and castling logic.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind};

/// Back-rank kinds from the a-file to the h-file.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_FILE: u8 = 5;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}

#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

/// Rank a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_rank(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 4,
    }
}

/// Farthest rank for a pawn of `color`; landing there promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 8,
        Color::Black => 1,
    }
}

/// File of the rook a king castles with.
#[inline]
pub const fn castling_rook_file(side: CastleSide) -> u8 {
    match side {
        CastleSide::Short => 8,
        CastleSide::Long => 1,
    }
}

/// File the castling rook lands on, next to the king on the inner side.
#[inline]
pub const fn castled_rook_file(side: CastleSide) -> u8 {
    match side {
        CastleSide::Short => 6,
        CastleSide::Long => 4,
    }
}

/// Signed file step from the king toward the castling rook.
#[inline]
pub const fn castle_direction(side: CastleSide) -> i8 {
    match side {
        CastleSide::Short => 1,
        CastleSide::Long => -1,
    }
}
