//! Custom starting positions.
//!
//! Pieces get ids in placement order starting at `#1`. Unless given
//! explicitly, move counts are inferred from home squares: a pawn on its
//! starting rank, a king on e1/e8 and a rook in its starting corner count as
//! unmoved, everything else as having moved once.

use crate::engine::game_engine::GameEngine;
use crate::errors::{RulesError, RulesResult};
use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_rules::{back_rank, castling_rook_file, pawn_home_rank, promotion_rank, KING_HOME_FILE};
use crate::game_state::chess_types::{CastleSide, Color, PieceKind};
use crate::game_state::engine_config::EngineConfig;
use crate::game_state::piece_record::{Piece, PieceId};
use crate::move_generation::attack_map::{is_king_attacked, recompute_attacks};

#[derive(Debug, Clone, Copy)]
struct Placement {
    square: Square,
    color: Color,
    kind: PieceKind,
    moves_made: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct PositionBuilder {
    placements: Vec<Placement>,
    side_to_move: Color,
    config: EngineConfig,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            side_to_move: Color::White,
            config: EngineConfig::default(),
        }
    }

    /// Add a piece on the square named `square` (e.g. `"e4"`).
    pub fn piece(self, color: Color, kind: PieceKind, square: &str) -> RulesResult<Self> {
        Ok(self.piece_on(color, kind, Square::from_algebraic(square)?))
    }

    pub fn piece_on(mut self, color: Color, kind: PieceKind, square: Square) -> Self {
        self.placements.push(Placement {
            square,
            color,
            kind,
            moves_made: None,
        });
        self
    }

    /// Add a piece with an explicit move count, e.g. a king on e1 that has
    /// already lost its castling right.
    pub fn piece_with_moves(
        self,
        color: Color,
        kind: PieceKind,
        square: &str,
        moves_made: u16,
    ) -> RulesResult<Self> {
        Ok(self.piece_on_with_moves(color, kind, Square::from_algebraic(square)?, moves_made))
    }

    pub fn piece_on_with_moves(mut self, color: Color, kind: PieceKind, square: Square, moves_made: u16) -> Self {
        self.placements.push(Placement {
            square,
            color,
            kind,
            moves_made: Some(moves_made),
        });
        self
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the position and hand it to a new engine.
    ///
    /// Rejects a square used twice, anything but exactly one king per color,
    /// pawns on the first or last rank, and a position where the side that
    /// just moved is still in check.
    pub fn build(self) -> RulesResult<GameEngine> {
        let mut board = Board::empty();
        for (index, placement) in self.placements.iter().enumerate() {
            if placement.kind == PieceKind::Pawn
                && (placement.square.rank() == promotion_rank(placement.color)
                    || placement.square.rank() == back_rank(placement.color))
            {
                return Err(RulesError::InvalidSetup(format!(
                    "{} pawn cannot stand on {}",
                    placement.color, placement.square
                )));
            }

            let id = u8::try_from(index + 1)
                .map_err(|_| RulesError::InvalidSetup("too many pieces".to_string()))?;
            let mut piece = Piece::new(PieceId(id), placement.kind, placement.color);
            piece.moves_made = placement
                .moves_made
                .unwrap_or_else(|| inferred_moves_made(placement.square, placement.color, placement.kind));
            board.place(placement.square, piece)?;
        }

        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(RulesError::InvalidSetup(format!(
                    "{color} has {kings} kings, expected exactly one"
                )));
            }
        }

        recompute_attacks(&mut board);
        let waiting = self.side_to_move.opposite();
        if is_king_attacked(&board, waiting) {
            return Err(RulesError::InvalidSetup(format!(
                "{waiting} is in check but {} is to move",
                self.side_to_move
            )));
        }

        Ok(GameEngine::from_parts(board, self.side_to_move, self.config))
    }
}

fn inferred_moves_made(square: Square, color: Color, kind: PieceKind) -> u16 {
    let on_back_rank = square.rank() == back_rank(color);
    let at_home = match kind {
        PieceKind::Pawn => square.rank() == pawn_home_rank(color),
        PieceKind::King => on_back_rank && square.file() == KING_HOME_FILE,
        PieceKind::Rook => {
            on_back_rank
                && [CastleSide::Short, CastleSide::Long]
                    .iter()
                    .any(|side| square.file() == castling_rook_file(*side))
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    };
    u16::from(!at_home)
}

#[cfg(test)]
mod tests {
    use super::PositionBuilder;
    use crate::engine::game_status::{EnginePhase, TerminalStatus};
    use crate::errors::RulesError;
    use crate::game_state::board_location::Square;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece_record::PieceId;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    #[test]
    fn ids_follow_placement_order_and_move_counts_are_inferred() {
        let engine = PositionBuilder::new()
            .piece(Color::White, PieceKind::King, "e1")
            .and_then(|b| b.piece(Color::White, PieceKind::Rook, "h1"))
            .and_then(|b| b.piece(Color::White, PieceKind::Pawn, "b5"))
            .and_then(|b| b.piece(Color::Black, PieceKind::King, "a5"))
            .and_then(|b| b.piece(Color::Black, PieceKind::Pawn, "c7"))
            .expect("squares should parse")
            .build()
            .expect("position should be valid");

        let board = engine.board();
        let moves = |name: &str| board.piece_at(sq(name)).map(|p| (p.id, p.moves_made));
        assert_eq!(moves("e1"), Some((PieceId(1), 0)));
        assert_eq!(moves("h1"), Some((PieceId(2), 0)));
        assert_eq!(moves("b5"), Some((PieceId(3), 1)));
        assert_eq!(moves("a5"), Some((PieceId(4), 1)));
        assert_eq!(moves("c7"), Some((PieceId(5), 0)));
        assert_eq!(engine.side_to_move(), Color::White);
    }

    #[test]
    fn invalid_positions_are_rejected() {
        let one_king = PositionBuilder::new()
            .piece(Color::White, PieceKind::King, "e1")
            .expect("e1 parses")
            .build();
        assert!(matches!(one_king, Err(RulesError::InvalidSetup(_))));

        let crowded = PositionBuilder::new()
            .piece(Color::White, PieceKind::King, "e1")
            .and_then(|b| b.piece(Color::Black, PieceKind::King, "e1"))
            .expect("squares parse")
            .build();
        assert!(matches!(crowded, Err(RulesError::InvalidSetup(_))));

        let pawn_on_last_rank = PositionBuilder::new()
            .piece(Color::White, PieceKind::King, "e1")
            .and_then(|b| b.piece(Color::Black, PieceKind::King, "e8"))
            .and_then(|b| b.piece(Color::White, PieceKind::Pawn, "a8"))
            .expect("squares parse")
            .build();
        assert!(matches!(pawn_on_last_rank, Err(RulesError::InvalidSetup(_))));

        let waiting_side_in_check = PositionBuilder::new()
            .piece(Color::White, PieceKind::King, "e1")
            .and_then(|b| b.piece(Color::White, PieceKind::Rook, "e2"))
            .and_then(|b| b.piece(Color::Black, PieceKind::King, "e8"))
            .expect("squares parse")
            .build();
        assert!(matches!(waiting_side_in_check, Err(RulesError::InvalidSetup(_))));

        assert!(matches!(
            PositionBuilder::new().piece(Color::White, PieceKind::King, "i9"),
            Err(RulesError::InvalidAlgebraic(_))
        ));
    }

    #[test]
    fn finished_positions_start_in_game_over() {
        let engine = PositionBuilder::new()
            .piece(Color::Black, PieceKind::King, "h8")
            .and_then(|b| b.piece(Color::White, PieceKind::Queen, "f7"))
            .and_then(|b| b.piece(Color::White, PieceKind::King, "a1"))
            .expect("squares parse")
            .side_to_move(Color::Black)
            .build()
            .expect("stalemate is a valid position");

        assert_eq!(engine.terminal_status(), TerminalStatus::Stalemate);
        assert_eq!(engine.phase(), EnginePhase::GameOver(TerminalStatus::Stalemate));
    }
}
