//! Crate root module declarations for the Plum Rules chess engine.
//!
//! The crate is layered leaf-first: board and piece bookkeeping
//! (`game_state`), per-kind geometry (`moves`), pseudo-legal generation,
//! attack maps and the scratch-board legality filter (`move_generation`), and
//! the game tracker that owns a live board and drives each ply (`engine`).
//! Each layer only calls downward, except `move_generation::perft`, which
//! walks whole games through the engine. `utils` holds move labels and the
//! text diagram.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_location;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod engine_config;
    pub mod move_record;
    pub mod piece_record;
    pub mod piece_register;
}

pub mod moves {
    pub mod king_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod ray_casting;
}

pub mod move_generation {
    pub mod attack_map;
    pub mod legal_move_apply;
    pub mod legal_move_filter;
    pub mod move_generator;
    pub mod perft;
}

pub mod engine {
    pub mod game_engine;
    pub mod game_events;
    pub mod game_status;
    pub mod position_builder;
}

pub mod utils {
    pub mod move_notation;
    pub mod render_board;
}

pub use crate::engine::game_engine::{AppliedMove, GameEngine, PromotionApplied};
pub use crate::engine::game_events::GameEvent;
pub use crate::engine::game_status::{EnginePhase, PendingPromotion, TerminalStatus};
pub use crate::engine::position_builder::PositionBuilder;
pub use crate::errors::{RulesError, RulesResult};
pub use crate::game_state::board::{Board, CheckStatus};
pub use crate::game_state::board_location::Square;
pub use crate::game_state::chess_types::{ActionKind, CastleSide, Color, PieceKind};
pub use crate::game_state::engine_config::EngineConfig;
pub use crate::game_state::move_record::MoveRecord;
pub use crate::game_state::piece_record::{Piece, PieceId};
pub use crate::move_generation::move_generator::LegalDestinations;
pub use crate::moves::move_descriptions::{MoveTag, Target};
