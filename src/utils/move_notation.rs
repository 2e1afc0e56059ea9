//! Short algebraic labels for history entries.
//!
//! Pawn moves name only the destination (`e4`), pawn captures add the origin
//! file (`exd5`), other pieces lead with their letter (`Nf3`, `Bxc6`).
//! Castling is `O-O` / `O-O-O`, a promotion appends `=Q`, and the label ends
//! in `+` for check or `#` for mate. Disambiguation between two identical
//! pieces reaching the same square is not written.

use crate::engine::game_status::TerminalStatus;
use crate::game_state::chess_types::{ActionKind, CastleSide};
use crate::game_state::move_record::MoveRecord;
use crate::moves::move_descriptions::MoveTag;

pub fn move_label(record: &MoveRecord) -> String {
    let mut label = match record.tag {
        MoveTag::Castle(CastleSide::Short) => "O-O".to_string(),
        MoveTag::Castle(CastleSide::Long) => "O-O-O".to_string(),
        _ => {
            let capture = record.action == ActionKind::Take;
            match (record.piece.kind.letter(), capture) {
                (Some(letter), true) => format!("{letter}x{}", record.to),
                (Some(letter), false) => format!("{letter}{}", record.to),
                (None, true) => format!("{}x{}", record.from.file_letter(), record.to),
                (None, false) => record.to.to_string(),
            }
        }
    };

    if let Some(letter) = record.promotion.and_then(|kind| kind.letter()) {
        label.push('=');
        label.push(letter);
    }

    if matches!(record.terminal_after, TerminalStatus::Checkmate { .. }) {
        label.push('#');
    } else if record.check_after.is_checked(record.piece.color.opposite()) {
        label.push('+');
    }

    label
}
