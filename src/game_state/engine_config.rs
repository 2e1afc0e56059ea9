//! Rule switches for a game.

use serde::{Deserialize, Serialize};

/// Options fixed when a `GameEngine` is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Reject moves by the side that is not on move. Turned off by hosts that
    /// let a user drag any piece, e.g. analysis boards.
    pub enforce_turn_order: bool,

    /// End the game as a draw once only the two kings remain.
    pub declare_bare_kings_draw: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enforce_turn_order: true,
            declare_bare_kings_draw: true,
        }
    }
}

impl EngineConfig {
    pub fn new(enforce_turn_order: bool, declare_bare_kings_draw: bool) -> Self {
        Self {
            enforce_turn_order,
            declare_bare_kings_draw,
        }
    }

    /// Configuration for exhaustive tree walks: only checkmate and stalemate
    /// end a line.
    pub fn tree_walk() -> Self {
        Self {
            enforce_turn_order: true,
            declare_bare_kings_draw: false,
        }
    }
}
