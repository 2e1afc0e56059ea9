//! Board coordinates.
//!
//! A `Square` is always on the board: it can only be built through checked
//! constructors, and stepping off an edge yields `None` instead of wrapping or
//! clamping. Ray casting probes past the edges constantly, so "off-board" is
//! an ordinary answer here, not an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::Color;

/// A coordinate with `rank` and `file` both in `1..=8` (file 1 is the a-file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    rank: u8,
    file: u8,
}

/// Wire shape of a `Square`; deserialized values are range-checked.
#[derive(Deserialize)]
struct RawSquare {
    rank: i8,
    file: i8,
}

impl TryFrom<RawSquare> for Square {
    type Error = RulesError;

    fn try_from(raw: RawSquare) -> RulesResult<Self> {
        Self::try_new(raw.rank, raw.file)
    }
}

impl Square {
    /// Returns `None` for coordinates outside `1..=8`.
    #[inline]
    pub fn new(rank: i8, file: i8) -> Option<Self> {
        if (1..=8).contains(&rank) && (1..=8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(rank: i8, file: i8) -> RulesResult<Self> {
        Self::new(rank, file).ok_or(RulesError::OutOfBounds { rank, file })
    }

    /// Square for a `0..64` index in rank-major order (`0 == a1`, `63 == h8`).
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                rank: (index / 8) as u8 + 1,
                file: (index % 8) as u8 + 1,
            })
        } else {
            None
        }
    }

    /// Parse a coordinate such as `"e4"`.
    pub fn from_algebraic(text: &str) -> RulesResult<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(RulesError::InvalidAlgebraic(text.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(RulesError::InvalidAlgebraic(text.to_owned()));
        }

        Ok(Self {
            rank: rank - b'0',
            file: file - b'a' + 1,
        })
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Step by a rank/file delta; `None` once the step leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::new(self.rank as i8 + d_rank, self.file as i8 + d_file)
    }

    /// Checkerboard parity: a1 is a dark square.
    #[inline]
    pub const fn color(self) -> Color {
        if (self.rank + self.file) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn file_letter(self) -> char {
        char::from(b'a' + self.file - 1)
    }

    /// Iterate all 64 squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}
