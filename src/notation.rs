//! Coordinate notation: parsing user/GUI input like `e2e4` or `e7e8q`
//! into a fully flagged `Move`, and rendering a `Move` back to that
//! same text form for the PV printout and the xboard protocol.

use crate::basetypes::*;
use crate::engine::Engine;
use crate::error::MoveParseError;
use crate::moves::Move;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MOVE_TEXT: Regex = Regex::new(r"^([a-h])([1-8])([a-h])([1-8])([nbrq])?$").unwrap();
}

fn promotion_piece(c: char) -> Result<PieceType, MoveParseError> {
    match c {
        'n' => Ok(KNIGHT),
        'b' => Ok(BISHOP),
        'r' => Ok(ROOK),
        'q' => Ok(QUEEN),
        other => Err(MoveParseError::UnknownPromotion(other)),
    }
}

/// Parses coordinate notation and resolves it against `engine`'s
/// pseudo-legal moves at the current position, so the returned `Move`
/// carries the correct capture/castle/en-passant/promotion flags.
///
/// Note this only checks that the move is *pseudo-legal* (it exists in
/// the generated list); whether it leaves the mover's own king in check
/// is `makemove`'s job.
pub fn parse_move(engine: &mut Engine, text: &str) -> Result<Move, MoveParseError> {
    let caps = MOVE_TEXT.captures(text).ok_or_else(|| MoveParseError::Malformed(text.to_string()))?;
    let from_file = caps[1].chars().next().unwrap() as i8 - b'a' as i8;
    let from_rank = RANK_1 - (caps[2].chars().next().unwrap() as i8 - b'1' as i8);
    let to_file = caps[3].chars().next().unwrap() as i8 - b'a' as i8;
    let to_rank = RANK_1 - (caps[4].chars().next().unwrap() as i8 - b'1' as i8);
    let from = square(from_file, from_rank);
    let to = square(to_file, to_rank);
    let promote = match caps.get(5) {
        Some(m) => Some(promotion_piece(m.as_str().chars().next().unwrap())?),
        None => None,
    };

    let ply = engine.ply;
    engine.gen();
    let found = engine.move_stack[engine.first_move[ply]..engine.first_move[ply + 1]]
        .iter()
        .map(|sm| sm.mv)
        .find(|mv| mv.from == from && mv.to == to && (!mv.is_promotion() || Some(mv.promote) == promote));
    engine.first_move[ply + 1] = engine.first_move[ply];

    found.ok_or_else(|| MoveParseError::Malformed(text.to_string()))
}

/// Renders a move back to coordinate notation, e.g. `e7e8q`.
pub fn move_str(mv: Move) -> String {
    if mv.is_nil() {
        return String::from("(none)");
    }
    let mut s = String::with_capacity(5);
    s.push((b'a' + file(mv.from) as u8) as char);
    s.push((b'1' + (RANK_1 - rank(mv.from)) as u8) as char);
    s.push((b'a' + file(mv.to) as u8) as char);
    s.push((b'1' + (RANK_1 - rank(mv.to)) as u8) as char);
    if mv.is_promotion() {
        s.push(PIECE_CHARS[mv.promote as usize].to_ascii_lowercase());
    }
    s
}
