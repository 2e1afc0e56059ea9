//! Perft: exhaustive legal-move tree walks.
//!
//! Every line is played through `GameEngine::apply_move`, so the counts cover
//! the whole ply pipeline (generation, filtering, mutation, check and terminal
//! detection) and not just the generator. A promotion branches into one child
//! per promotion choice. Walk engines built with `EngineConfig::tree_walk()`
//! to compare against the published reference counts; the bare-kings draw
//! otherwise cuts lines short.

use crate::engine::game_engine::{AppliedMove, GameEngine, PromotionApplied};
use crate::errors::RulesResult;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::MoveTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn count_leaf(&mut self, engine: &GameEngine, applied: &AppliedMove, promotion: Option<&PromotionApplied>) {
        self.nodes += 1;

        if applied.captured.is_some() {
            self.captures += 1;
        }
        if matches!(applied.tag, MoveTag::EnPassant { .. }) {
            self.en_passant += 1;
        }
        if matches!(applied.tag, MoveTag::Castle(_)) {
            self.castles += 1;
        }
        if promotion.is_some() {
            self.promotions += 1;
        }

        let replying = engine.side_to_move();
        if engine.check_status().is_checked(replying) {
            self.checks += 1;
        }
        if engine.terminal_status().winner().is_some() {
            self.checkmates += 1;
        }
    }
}

/// Leaf nodes, with move-kind breakdown, `depth` plies below `engine`.
pub fn perft(engine: &GameEngine, depth: u8) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (piece_id, _, destinations) in engine.legal_moves_for_side_to_move() {
        for target in destinations.moves.iter().chain(destinations.takes.iter()) {
            let mut child = engine.clone();
            let applied = child.apply_move(piece_id, target.square)?;

            if applied.promotion_pending.is_none() {
                perft_recurse(&child, &applied, None, depth, &mut total)?;
                continue;
            }

            for kind in PieceKind::PROMOTION_CHOICES {
                let mut promoted = child.clone();
                let resolved = promoted.resolve_promotion(piece_id, kind)?;
                perft_recurse(&promoted, &applied, Some(&resolved), depth, &mut total)?;
            }
        }
    }

    Ok(total)
}

fn perft_recurse(
    child: &GameEngine,
    applied: &AppliedMove,
    promotion: Option<&PromotionApplied>,
    depth: u8,
    counts: &mut PerftCounts,
) -> RulesResult<()> {
    if depth == 1 {
        counts.count_leaf(child, applied, promotion);
        return Ok(());
    }

    counts.merge(perft(child, depth - 1)?);
    Ok(())
}
