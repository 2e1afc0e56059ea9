//! The game tracker.
//!
//! `GameEngine` owns the live board and drives every ply through the same
//! sequence: validate the request against freshly generated legal
//! destinations, mutate, recompute attacks, evaluate checks, then either wait
//! for a promotion choice or evaluate the terminal status. A rejected request
//! returns an error before anything is mutated.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::engine::game_events::GameEvent;
use crate::engine::game_status::{evaluate_terminal, EnginePhase, PendingPromotion, TerminalStatus};
use crate::errors::{RulesError, RulesResult};
use crate::game_state::board::{Board, CheckStatus};
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::{ActionKind, Color, PieceKind};
use crate::game_state::engine_config::EngineConfig;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::piece_record::{Piece, PieceId};
use crate::move_generation::attack_map;
use crate::move_generation::legal_move_apply::apply_target;
use crate::move_generation::legal_move_filter::{legal_destinations_from, legal_moves_for_side};
use crate::move_generation::move_generator::LegalDestinations;
use crate::moves::move_descriptions::MoveTag;
use crate::utils::move_notation::move_label;

/// Outcome of a successful `apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub piece_id: PieceId,
    pub from: Square,
    pub to: Square,
    pub action: ActionKind,
    pub tag: MoveTag,
    pub captured: Option<Piece>,
    pub check_status: CheckStatus,
    /// Set when the pawn reached its last rank; the ply is not finished until
    /// `resolve_promotion` is called.
    pub promotion_pending: Option<PendingPromotion>,
    pub terminal: TerminalStatus,
}

/// Outcome of a successful `resolve_promotion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionApplied {
    pub piece: Piece,
    pub square: Square,
    pub check_status: CheckStatus,
    pub terminal: TerminalStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    config: EngineConfig,
    side_to_move: Color,
    phase: EnginePhase,
    history: Vec<MoveRecord>,
    events: Vec<GameEvent>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// A new game from the standard starting position, white to move.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            board: Board::initial(),
            config,
            side_to_move: Color::White,
            phase: EnginePhase::AwaitingSelection,
            history: Vec::new(),
            events: Vec::new(),
        };
        engine.refresh_board();
        engine
    }

    /// Engine over an arbitrary position. The position may already be
    /// finished, in which case the engine starts in `GameOver`.
    pub(crate) fn from_parts(board: Board, side_to_move: Color, config: EngineConfig) -> Self {
        let mut engine = Self {
            board,
            config,
            side_to_move,
            phase: EnginePhase::AwaitingSelection,
            history: Vec::new(),
            events: Vec::new(),
        };
        engine.refresh_board();
        let terminal = evaluate_terminal(&engine.board, side_to_move, None, &engine.config);
        if terminal.is_over() {
            engine.declare_terminal(terminal);
        }
        engine
    }

    /// Throw the current game away and set up the starting position again.
    /// The configuration is kept.
    pub fn restart(&mut self) {
        *self = Self::with_config(self.config);
        debug!("game restarted");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.board.find(id).map(|(_, piece)| piece)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    #[inline]
    pub fn check_status(&self) -> CheckStatus {
        self.board.check_status()
    }

    pub fn terminal_status(&self) -> TerminalStatus {
        match self.phase {
            EnginePhase::GameOver(status) => status,
            _ => TerminalStatus::Ongoing,
        }
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        match self.phase {
            EnginePhase::AwaitingPromotionChoice(pending) => Some(pending),
            _ => None,
        }
    }

    /// Completed plies, oldest first. A ply awaiting its promotion choice is
    /// already listed and is finalized in place once resolved.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Hand over the queued events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Legal moves and takes of the piece `id`.
    ///
    /// A finished game answers with an empty set for any piece still on the
    /// board. While a promotion is pending every query is refused.
    pub fn legal_destinations(&self, id: PieceId) -> RulesResult<LegalDestinations> {
        match self.phase {
            EnginePhase::GameOver(_) => {
                return self
                    .board
                    .find(id)
                    .map(|_| LegalDestinations::default())
                    .ok_or(RulesError::NoPieceAtOrigin(id))
            }
            EnginePhase::AwaitingPromotionChoice(pending) => {
                return Err(RulesError::PromotionRequired {
                    piece_id: pending.piece_id,
                    square: pending.square,
                })
            }
            EnginePhase::AwaitingSelection => {}
        }

        let (from, piece) = self.selectable_piece(id)?;
        Ok(legal_destinations_from(&self.board, from, &piece, self.last_move()))
    }

    /// Every legal destination of the side to move, in piece id order.
    /// Empty unless the engine is waiting for a selection.
    pub fn legal_moves_for_side_to_move(&self) -> Vec<(PieceId, Square, LegalDestinations)> {
        match self.phase {
            EnginePhase::AwaitingSelection => {
                legal_moves_for_side(&self.board, self.side_to_move, self.last_move())
            }
            _ => Vec::new(),
        }
    }

    /// Play piece `id` to `destination`.
    ///
    /// The destination is checked against freshly generated legal moves and
    /// takes, so hosts may submit untrusted input.
    pub fn apply_move(&mut self, id: PieceId, destination: Square) -> RulesResult<AppliedMove> {
        match self.phase {
            EnginePhase::GameOver(status) => return Err(RulesError::GameOver(status)),
            EnginePhase::AwaitingPromotionChoice(pending) => {
                return Err(RulesError::PromotionRequired {
                    piece_id: pending.piece_id,
                    square: pending.square,
                })
            }
            EnginePhase::AwaitingSelection => {}
        }

        let (from, piece) = self.selectable_piece(id)?;
        let target = legal_destinations_from(&self.board, from, &piece, self.last_move())
            .find(destination)
            .ok_or(RulesError::IllegalDestination {
                piece_id: id,
                destination,
            })?;

        let change =
            apply_target(&mut self.board, from, &target).ok_or(RulesError::NoPieceAtOrigin(id))?;
        let check_status = self.refresh_board();

        self.history.push(MoveRecord {
            board: self.board.clone(),
            piece: change.piece_before,
            from,
            to: destination,
            action: change.action(),
            tag: target.tag,
            promotion: None,
            check_after: check_status,
            terminal_after: TerminalStatus::Ongoing,
        });

        let mut applied = AppliedMove {
            piece_id: id,
            from,
            to: destination,
            action: change.action(),
            tag: target.tag,
            captured: change.captured.map(|(_, victim)| victim),
            check_status,
            promotion_pending: None,
            terminal: TerminalStatus::Ongoing,
        };

        if target.tag == MoveTag::Promotion {
            let pending = PendingPromotion {
                piece_id: id,
                square: destination,
            };
            debug!("{} pawn {id} reached {destination}, awaiting promotion choice", piece.color);
            self.phase = EnginePhase::AwaitingPromotionChoice(pending);
            self.events.push(GameEvent::PromotionPending(pending));
            applied.promotion_pending = Some(pending);
            return Ok(applied);
        }

        applied.terminal = self.finish_ply(piece.color);
        Ok(applied)
    }

    /// Turn the pending pawn into `kind`, keeping its id, color and move
    /// count, and finish the suspended ply.
    pub fn resolve_promotion(&mut self, id: PieceId, kind: PieceKind) -> RulesResult<PromotionApplied> {
        let pending = match self.phase {
            EnginePhase::AwaitingPromotionChoice(pending) => pending,
            EnginePhase::GameOver(status) => return Err(RulesError::GameOver(status)),
            EnginePhase::AwaitingSelection => return Err(RulesError::NoPromotionPending),
        };
        if pending.piece_id != id {
            return Err(RulesError::PromotionPieceMismatch {
                expected: pending.piece_id,
                requested: id,
            });
        }
        if !kind.is_promotion_choice() {
            return Err(RulesError::InvalidPromotionKind(kind));
        }

        let piece = self
            .board
            .replace_kind(pending.square, kind)
            .ok_or(RulesError::NoPieceAtOrigin(id))?;
        let check_status = self.refresh_board();

        if let Some(record) = self.history.last_mut() {
            record.promotion = Some(kind);
            record.board = self.board.clone();
            record.check_after = check_status;
        }
        self.phase = EnginePhase::AwaitingSelection;
        self.events.push(GameEvent::PromotionApplied { piece_id: id, kind });
        debug!("{} pawn {id} on {} promoted to {kind}", piece.color, pending.square);

        let terminal = self.finish_ply(piece.color);
        Ok(PromotionApplied {
            piece,
            square: pending.square,
            check_status,
            terminal,
        })
    }

    /// Locate `id` and make sure its side may act.
    fn selectable_piece(&self, id: PieceId) -> RulesResult<(Square, Piece)> {
        let (from, piece) = self.board.find(id).ok_or(RulesError::NoPieceAtOrigin(id))?;
        if self.config.enforce_turn_order && piece.color != self.side_to_move {
            return Err(RulesError::NotYourTurn {
                piece_id: id,
                color: piece.color,
                side_to_move: self.side_to_move,
            });
        }
        Ok((from, piece))
    }

    /// Rebuild attacker counters and the check flags after a mutation,
    /// queueing a `CheckChanged` event when the flags moved.
    fn refresh_board(&mut self) -> CheckStatus {
        let before = self.board.check_status();
        attack_map::recompute_attacks(&mut self.board);
        let after = attack_map::check_status(&self.board);
        self.board.set_check_status(after);
        if after != before {
            self.events.push(GameEvent::CheckChanged(after));
        }
        after
    }

    /// Close a ply played by `mover`: evaluate the reply position, finalize
    /// the history record and hand the turn over.
    fn finish_ply(&mut self, mover: Color) -> TerminalStatus {
        let replying = mover.opposite();
        let terminal = evaluate_terminal(&self.board, replying, self.history.last(), &self.config);

        if let Some(record) = self.history.last_mut() {
            record.terminal_after = terminal;
            debug!("{mover} played {}", move_label(record));
            self.events.push(GameEvent::MoveApplied(Box::new(record.clone())));
        }
        self.side_to_move = replying;

        if terminal.is_over() {
            self.declare_terminal(terminal);
        }
        terminal
    }

    fn declare_terminal(&mut self, terminal: TerminalStatus) {
        info!("{terminal}");
        trace!("final position:\n{}", self.board);
        self.phase = EnginePhase::GameOver(terminal);
        self.events.push(GameEvent::GameOver(terminal));
    }
}

#[cfg(test)]
mod tests {
    use super::GameEngine;
    use crate::engine::game_events::GameEvent;
    use crate::engine::game_status::{EnginePhase, TerminalStatus};
    use crate::errors::RulesError;
    use crate::game_state::board_location::Square;
    use crate::game_state::chess_types::{ActionKind, Color};
    use crate::game_state::engine_config::EngineConfig;
    use crate::game_state::piece_record::PieceId;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("test square should parse")
    }

    fn play(engine: &mut GameEngine, from: &str, to: &str) {
        let id = engine
            .board()
            .piece_at(sq(from))
            .map(|piece| piece.id)
            .expect("origin square should hold a piece");
        engine.apply_move(id, sq(to)).expect("move should be legal");
    }

    #[test]
    fn opening_move_updates_board_and_turn() {
        let mut engine = GameEngine::new();
        let e2_pawn = PieceId(13);

        let applied = engine.apply_move(e2_pawn, sq("e4")).expect("e2e4 is legal");
        assert_eq!(applied.action, ActionKind::Move);
        assert!(applied.promotion_pending.is_none());
        assert!(!applied.check_status.any());
        assert_eq!(engine.piece(e2_pawn).map(|p| p.moves_made), Some(1));
        assert_eq!(engine.side_to_move(), Color::Black);
        assert_eq!(engine.history().len(), 1);

        let events = engine.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::MoveApplied(_)]));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn rejected_requests_change_nothing() {
        let mut engine = GameEngine::new();
        let before = engine.clone();

        assert_eq!(
            engine.apply_move(PieceId(13), sq("e5")),
            Err(RulesError::IllegalDestination {
                piece_id: PieceId(13),
                destination: sq("e5"),
            })
        );
        assert!(matches!(
            engine.apply_move(PieceId(21), sq("e5")),
            Err(RulesError::NotYourTurn { .. })
        ));
        assert_eq!(
            engine.apply_move(PieceId(99), sq("e5")),
            Err(RulesError::NoPieceAtOrigin(PieceId(99)))
        );
        assert_eq!(engine, before);
        assert_eq!(engine.phase(), EnginePhase::AwaitingSelection);
    }

    #[test]
    fn turn_order_can_be_relaxed() {
        let mut engine = GameEngine::with_config(EngineConfig::new(false, true));
        play(&mut engine, "e7", "e5");
        play(&mut engine, "d7", "d5");
        assert_eq!(engine.side_to_move(), Color::White);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut engine = GameEngine::new();
        play(&mut engine, "f2", "f3");
        play(&mut engine, "e7", "e5");
        play(&mut engine, "g2", "g4");
        play(&mut engine, "d8", "h4");

        let mate = TerminalStatus::Checkmate { winner: Color::Black };
        assert_eq!(engine.terminal_status(), mate);
        assert!(engine.check_status().white);
        assert_eq!(engine.history().last().map(|r| r.terminal_after), Some(mate));
        assert_eq!(
            engine.apply_move(PieceId(1), sq("a3")),
            Err(RulesError::GameOver(mate))
        );
        assert!(engine
            .legal_destinations(PieceId(2))
            .expect("finished games still answer queries")
            .is_empty());
        assert_eq!(
            engine.legal_destinations(PieceId(99)),
            Err(RulesError::NoPieceAtOrigin(PieceId(99)))
        );
        assert!(engine
            .drain_events()
            .iter()
            .any(|event| *event == GameEvent::GameOver(mate)));
    }

    #[test]
    fn restart_discards_the_game() {
        let mut engine = GameEngine::new();
        play(&mut engine, "g1", "f3");
        engine.restart();

        assert_eq!(engine, GameEngine::new());
        assert!(engine.history().is_empty());
        assert_eq!(engine.side_to_move(), Color::White);
    }
}
