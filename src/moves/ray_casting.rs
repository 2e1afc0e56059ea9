//! Data-driven piece geometry.
//!
//! Rooks, bishops, queens, knights and kings are all described by one table
//! of `(directions, max_reach)` rules and walked by a single ray caster. The
//! caller picks how a ray ends: `BeforeOccupant` yields the quiet squares a
//! piece can move to, `AtOccupant` also yields the first blocker, which is
//! what both captures and attack counting need.

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::PieceKind;

/// A single rank/file step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_rank: i8,
    pub d_file: i8,
}

const fn dir(d_rank: i8, d_file: i8) -> Direction {
    Direction { d_rank, d_file }
}

pub const ORTHOGONAL: [Direction; 4] = [dir(1, 0), dir(-1, 0), dir(0, 1), dir(0, -1)];

pub const DIAGONAL: [Direction; 4] = [dir(1, 1), dir(1, -1), dir(-1, 1), dir(-1, -1)];

pub const KNIGHT_JUMPS: [Direction; 8] = [
    dir(2, 1),
    dir(2, -1),
    dir(-2, 1),
    dir(-2, -1),
    dir(1, 2),
    dir(-1, 2),
    dir(1, -2),
    dir(-1, -2),
];

/// Longest ray on an 8×8 board.
pub const SLIDER_REACH: u8 = 7;

/// Directions a piece travels in and how many steps it may take along each.
#[derive(Debug, Clone, Copy)]
pub struct MovementRule {
    pub directions: &'static [Direction],
    pub max_reach: u8,
}

const ROOK_RULES: [MovementRule; 1] = [MovementRule {
    directions: &ORTHOGONAL,
    max_reach: SLIDER_REACH,
}];

const BISHOP_RULES: [MovementRule; 1] = [MovementRule {
    directions: &DIAGONAL,
    max_reach: SLIDER_REACH,
}];

const QUEEN_RULES: [MovementRule; 2] = [
    MovementRule {
        directions: &ORTHOGONAL,
        max_reach: SLIDER_REACH,
    },
    MovementRule {
        directions: &DIAGONAL,
        max_reach: SLIDER_REACH,
    },
];

const KNIGHT_RULES: [MovementRule; 1] = [MovementRule {
    directions: &KNIGHT_JUMPS,
    max_reach: 1,
}];

const KING_RULES: [MovementRule; 2] = [
    MovementRule {
        directions: &ORTHOGONAL,
        max_reach: 1,
    },
    MovementRule {
        directions: &DIAGONAL,
        max_reach: 1,
    },
];

/// Movement table for every kind. Pawns are asymmetric and handled in
/// `pawn_moves`, so their entry is empty.
pub fn movement_rules(kind: PieceKind) -> &'static [MovementRule] {
    match kind {
        PieceKind::Pawn => &[],
        PieceKind::Rook => &ROOK_RULES,
        PieceKind::Knight => &KNIGHT_RULES,
        PieceKind::Bishop => &BISHOP_RULES,
        PieceKind::Queen => &QUEEN_RULES,
        PieceKind::King => &KING_RULES,
    }
}

/// How a ray ends when it meets a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayStop {
    /// Stop without including the occupied square.
    BeforeOccupant,
    /// Include the occupied square, then stop.
    AtOccupant,
}

/// Walk every ray of `kind` from `from` and collect the reached squares.
/// Squares past the board edge are skipped, never clamped.
pub fn cast_rays(board: &Board, from: Square, kind: PieceKind, stop: RayStop) -> Vec<Square> {
    let mut reached = Vec::with_capacity(28);

    for rule in movement_rules(kind) {
        for direction in rule.directions {
            let mut current = from;
            for _ in 0..rule.max_reach {
                let Some(next) = current.offset(direction.d_rank, direction.d_file) else {
                    break;
                };

                if !board.is_empty_at(next) {
                    if stop == RayStop::AtOccupant {
                        reached.push(next);
                    }
                    break;
                }

                reached.push(next);
                current = next;
            }
        }
    }

    reached
}
