//! FEN reader for reference positions in tests and benches.
//!
//! Reads the piece placement, side-to-move and castling fields into a
//! `PositionBuilder`. A missing castling right marks the corresponding corner
//! rook as moved. The en passant field is validated but not applied, since en
//! passant is derived from the previous ply. The two clock fields are optional
//! and ignored.

use plum_rules::game_state::chess_rules::{back_rank, castling_rook_file};
use plum_rules::{CastleSide, Color, PieceKind, PositionBuilder, RulesError, RulesResult, Square};

pub fn position_from_fen(fen: &str) -> RulesResult<PositionBuilder> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    if parts.count() > 2 {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let placements = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    if en_passant_part != "-" {
        Square::from_algebraic(en_passant_part)?;
    }

    let mut builder = PositionBuilder::new().side_to_move(side_to_move);
    for (square, color, kind) in placements {
        let loses_right = kind == PieceKind::Rook
            && square.rank() == back_rank(color)
            && [CastleSide::Short, CastleSide::Long].into_iter().any(|side| {
                square.file() == castling_rook_file(side) && !rights.contains(&(color, side))
            });

        builder = if loses_right {
            builder.piece_on_with_moves(color, kind, square, 1)
        } else {
            builder.piece_on(color, kind, square)
        };
    }

    Ok(builder)
}

fn invalid(message: &str) -> RulesError {
    RulesError::InvalidSetup(message.to_owned())
}

fn parse_board(board_part: &str) -> RulesResult<Vec<(Square, Color, PieceKind)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut placements = Vec::new();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as i8;
        // Next file to fill; 9 once the rank is complete.
        let mut file = 1u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(RulesError::InvalidSetup(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 9 {
                    return Err(RulesError::InvalidSetup(format!("rank {rank} has more than 8 files")));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| RulesError::InvalidSetup(format!("invalid piece character '{ch}'")))?;
            let square = Square::new(rank, file as i8)
                .ok_or_else(|| RulesError::InvalidSetup(format!("rank {rank} has more than 8 files")))?;
            placements.push((square, color, kind));
            file += 1;
        }

        if file != 9 {
            return Err(RulesError::InvalidSetup(format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(placements)
}

fn parse_side_to_move(side_part: &str) -> RulesResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(RulesError::InvalidSetup(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> RulesResult<Vec<(Color, CastleSide)>> {
    if castling_part == "-" {
        return Ok(Vec::new());
    }

    castling_part
        .chars()
        .map(|ch| match ch {
            'K' => Ok((Color::White, CastleSide::Short)),
            'Q' => Ok((Color::White, CastleSide::Long)),
            'k' => Ok((Color::Black, CastleSide::Short)),
            'q' => Ok((Color::Black, CastleSide::Long)),
            _ => Err(RulesError::InvalidSetup(format!("invalid castling rights character: {ch}"))),
        })
        .collect()
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
