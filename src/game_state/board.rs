//! The 8×8 board: square contents, per-square attacker counts and the
//! king-checked flags.
//!
//! A `Board` is either the live board owned by a `GameEngine` or a scratch
//! clone made by the legality filter. Both are the same type; a clone is a
//! full deep copy, so simulating a move on it can never disturb the original.
//!
//! Attacker counters and check flags are derived data. They are written only
//! by `move_generation::attack_map` and the game tracker respectively and are
//! stale after any mutation until the next recomputation.

use serde::{Deserialize, Serialize};

use crate::errors::{RulesError, RulesResult};
use crate::game_state::board_location::Square;
use crate::game_state::chess_rules::{back_rank, pawn_home_rank, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece_record::{Piece, PieceId};
use crate::game_state::piece_register::PieceRegister;

/// Contents of one square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSquare {
    pub occupant: Option<Piece>,
    pub white_attackers: u8,
    pub black_attackers: u8,
}

impl BoardSquare {
    /// Number of `color` pieces whose reach includes this square.
    #[inline]
    pub const fn attackers(&self, color: Color) -> u8 {
        match color {
            Color::White => self.white_attackers,
            Color::Black => self.black_attackers,
        }
    }
}

/// Which kings are currently attacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckStatus {
    pub white: bool,
    pub black: bool,
}

impl CheckStatus {
    #[inline]
    pub const fn is_checked(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub const fn any(&self) -> bool {
        self.white || self.black
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    squares: Vec<BoardSquare>,
    register: PieceRegister,
    check_status: CheckStatus,
}

/// Wire shape of a `Board`. A snapshot is only accepted when it has 64
/// squares and its register lists exactly the pieces found on them.
#[derive(Deserialize)]
struct RawBoard {
    squares: Vec<BoardSquare>,
    register: PieceRegister,
    check_status: CheckStatus,
}

impl TryFrom<RawBoard> for Board {
    type Error = RulesError;

    fn try_from(raw: RawBoard) -> RulesResult<Self> {
        if raw.squares.len() != 64 {
            return Err(RulesError::InvalidSetup(format!(
                "board snapshot has {} squares, expected 64",
                raw.squares.len()
            )));
        }

        let mut occupied = 0;
        for (square, cell) in Square::all().zip(raw.squares.iter()) {
            let Some(piece) = cell.occupant else {
                continue;
            };
            occupied += 1;
            if raw.register.location_of(piece.id) != Some(square) {
                return Err(RulesError::InvalidSetup(format!(
                    "piece {} on {square} is missing from the register",
                    piece.id
                )));
            }
        }
        if occupied != raw.register.len() {
            return Err(RulesError::InvalidSetup(
                "register lists pieces that are not on the board".to_string(),
            ));
        }

        Ok(Self {
            squares: raw.squares,
            register: raw.register,
            check_status: raw.check_status,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces.
    pub fn empty() -> Self {
        Self {
            squares: vec![BoardSquare::default(); 64],
            register: PieceRegister::new(),
            check_status: CheckStatus::default(),
        }
    }

    /// Standard 32-piece starting layout.
    ///
    /// Ids are assigned rank-major, white first: a1 is `#1`, h2 is `#16`,
    /// a7 is `#17` and h8 is `#32`. Attacker counters are left at zero; the
    /// engine recomputes them before the first query.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let mut next_id = 1u8;

        for color in [Color::White, Color::Black] {
            let mut ranks = [
                (back_rank(color), None),
                (pawn_home_rank(color), Some(PieceKind::Pawn)),
            ];
            if color == Color::Black {
                ranks.reverse();
            }

            for (rank, fill) in ranks {
                for file in 1..=8u8 {
                    let kind = fill.unwrap_or(BACK_RANK_ORDER[file as usize - 1]);
                    let square = Square::new(rank as i8, file as i8);
                    if let Some(square) = square {
                        board.put(square, Piece::new(PieceId(next_id), kind, color));
                    }
                    next_id += 1;
                }
            }
        }

        board
    }

    #[inline]
    pub fn square(&self, square: Square) -> &BoardSquare {
        &self.squares[square.index()]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index()].occupant.as_ref()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.squares[square.index()].occupant.is_none()
    }

    /// Enemy (relative to `color`) occupant of `square`, if any.
    #[inline]
    pub fn enemy_at(&self, square: Square, color: Color) -> Option<&Piece> {
        self.piece_at(square).filter(|piece| piece.color != color)
    }

    #[inline]
    pub fn location_of(&self, id: PieceId) -> Option<Square> {
        self.register.location_of(id)
    }

    /// Current record and square of the piece with `id`.
    pub fn find(&self, id: PieceId) -> Option<(Square, Piece)> {
        let square = self.register.location_of(id)?;
        self.piece_at(square).map(|piece| (square, *piece))
    }

    /// All live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.register
            .iter()
            .filter_map(|(_, square)| self.piece_at(square).map(|piece| (square, *piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Number of pieces tracked by the catalog.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.register.len()
    }

    /// Number of squares holding a piece.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|cell| cell.occupant.is_some())
            .count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn only_kings_remain(&self) -> bool {
        self.pieces().all(|(_, piece)| piece.kind == PieceKind::King)
    }

    #[inline]
    pub fn attackers(&self, square: Square, color: Color) -> u8 {
        self.squares[square.index()].attackers(color)
    }

    #[inline]
    pub fn check_status(&self) -> CheckStatus {
        self.check_status
    }

    pub(crate) fn set_check_status(&mut self, status: CheckStatus) {
        self.check_status = status;
    }

    /// Place a piece on an empty square. Used when building positions.
    pub fn place(&mut self, square: Square, piece: Piece) -> RulesResult<()> {
        if let Some(existing) = self.piece_at(square) {
            return Err(RulesError::InvalidSetup(format!(
                "{square} already holds {} {}",
                existing.color, existing.kind
            )));
        }
        if self.register.location_of(piece.id).is_some() {
            return Err(RulesError::InvalidSetup(format!(
                "piece id {} is already on the board",
                piece.id
            )));
        }
        self.put(square, piece);
        Ok(())
    }

    /// Remove and return the occupant of `square`, destroying its record.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.squares[square.index()].occupant.take()?;
        self.register.forget(piece.id);
        Some(piece)
    }

    /// Move the occupant of `from` to `to`, counting it as one completed move.
    /// Whatever stood on `to` is removed and returned.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.squares[from.index()].occupant.take()?;
        let captured = self.remove(to);
        piece.moves_made = piece.moves_made.saturating_add(1);
        self.put(to, piece);
        captured
    }

    /// Swap the kind of the occupant of `square`, keeping id, color and
    /// move count. Returns the updated record.
    pub(crate) fn replace_kind(&mut self, square: Square, kind: PieceKind) -> Option<Piece> {
        let cell = &mut self.squares[square.index()];
        let piece = cell.occupant.as_mut()?;
        piece.kind = kind;
        Some(*piece)
    }

    pub(crate) fn reset_attackers(&mut self) {
        for cell in &mut self.squares {
            cell.white_attackers = 0;
            cell.black_attackers = 0;
        }
    }

    pub(crate) fn add_attacker(&mut self, square: Square, color: Color) {
        let cell = &mut self.squares[square.index()];
        match color {
            Color::White => cell.white_attackers = cell.white_attackers.saturating_add(1),
            Color::Black => cell.black_attackers = cell.black_attackers.saturating_add(1),
        }
    }

    fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()].occupant = Some(piece);
        self.register.record(piece.id, square);
    }
}
