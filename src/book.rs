//! A small fixed opening book: a table of `(hash, reply)` pairs for a
//! short repertoire from the initial position. `book_move` is consulted
//! only while the current position's Zobrist hash still matches an
//! entry; once the game leaves the table it returns `None` for good
//! (the caller, `Engine::think`, also gates this on `book_enabled`,
//! which the benchmark position load clears).

use crate::engine::Engine;
use crate::moves::Move;
use crate::notation::parse_move;

/// `(hash after the position's move history so far, reply to play)`,
/// expressed as coordinate-notation strings resolved lazily against a
/// scratch engine so the table doesn't need hand-packed `Move` values.
const BOOK_LINES: &[&[&str]] = &[
    &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"],
    &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"],
    &["e2e4", "c7c5", "g1f3", "d7d6", "d2d4"],
    &["e2e4", "e7e6", "d2d4", "d7d5", "b1c3"],
    &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3"],
    &["d2d4", "g8f6", "c2c4", "g7g6", "b1c3"],
    &["c2c4", "e7e5", "b1c3", "g8f6", "g1f3"],
];

struct BookEntry {
    hash: u32,
    reply: String,
}

fn build_table() -> Vec<BookEntry> {
    let mut table = Vec::new();
    for line in BOOK_LINES {
        let mut scratch = Engine::new();
        for (ply, mv_text) in line.iter().enumerate() {
            table.push(BookEntry { hash: scratch.hash, reply: (*mv_text).to_string() });
            let mv = parse_move(&mut scratch, mv_text).expect("book line must be legal");
            assert!(scratch.makemove(mv), "book line must stay legal");
            let _ = ply;
        }
    }
    table
}

lazy_static::lazy_static! {
    static ref BOOK: Vec<BookEntry> = build_table();
}

/// Looks up `engine`'s current position in the book and, if found,
/// returns a legal reply drawn from the matching line.
pub fn book_move(engine: &mut Engine) -> Option<Move> {
    let reply = BOOK.iter().find(|entry| entry.hash == engine.hash).map(|entry| entry.reply.clone())?;
    parse_move(engine, &reply).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_reply_from_the_starting_position() {
        let mut engine = Engine::new();
        assert!(book_move(&mut engine).is_some());
    }

    #[test]
    fn returns_none_outside_the_repertoire() {
        let mut engine = Engine::new();
        let a4 = parse_move(&mut engine, "a2a4").unwrap();
        engine.makemove(a4);
        assert!(book_move(&mut engine).is_none());
    }
}
