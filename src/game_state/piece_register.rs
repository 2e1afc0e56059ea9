//! Piece catalog: where each live piece currently stands.
//!
//! The board squares own the piece records; the register only indexes them by
//! id so lookups do not scan all 64 squares. `Board` is the only writer and
//! keeps both sides in step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game_state::board_location::Square;
use crate::game_state::piece_record::PieceId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRegister {
    locations: BTreeMap<PieceId, Square>,
}

impl PieceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn location_of(&self, id: PieceId) -> Option<Square> {
        self.locations.get(&id).copied()
    }

    pub(crate) fn record(&mut self, id: PieceId, square: Square) {
        self.locations.insert(id, square);
    }

    pub(crate) fn forget(&mut self, id: PieceId) -> Option<Square> {
        self.locations.remove(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Live pieces in id order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        self.locations.iter().map(|(id, square)| (*id, *square))
    }
}

#[cfg(test)]
mod tests {
    use super::PieceRegister;
    use crate::game_state::board_location::Square;
    use crate::game_state::piece_record::PieceId;

    #[test]
    fn record_and_forget_pieces() {
        let mut register = PieceRegister::new();
        let a2 = Square::from_algebraic("a2").expect("a2 should parse");
        let a3 = Square::from_algebraic("a3").expect("a3 should parse");

        register.record(PieceId(1), a2);
        register.record(PieceId(1), a3);
        register.record(PieceId(7), a2);
        assert_eq!(register.len(), 2);
        assert_eq!(register.location_of(PieceId(1)), Some(a3));

        assert_eq!(register.forget(PieceId(1)), Some(a3));
        assert_eq!(register.forget(PieceId(1)), None);
        assert_eq!(register.location_of(PieceId(1)), None);
        assert_eq!(register.len(), 1);
    }
}
