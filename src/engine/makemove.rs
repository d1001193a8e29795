//! Applying and reversing a move on the board.
//!
//! `makemove` plays a pseudo-legal move and reports whether it was
//! actually legal (doesn't leave the mover's own king in check, and --
//! for castling -- doesn't pass through or land on an attacked square).
//! An illegal move is rejected by restoring the board exactly, via
//! `takeback`, before returning `false`. `takeback` is also how the
//! search backs out of a move it *did* want to keep, once the
//! recursive search below it returns.

use super::{Engine, HistEntry};
use crate::basetypes::*;
use crate::moves::Move;
use crate::tables::CASTLE_MASK;

/// The rook's `(from, to)` squares for a given castling destination.
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        SQ_G1 => (SQ_H1, SQ_F1),
        SQ_C1 => (SQ_A1, SQ_D1),
        SQ_G8 => (SQ_H8, SQ_F8),
        SQ_C8 => (SQ_A8, SQ_D8),
        _ => unreachable!("castling move with an unrecognized destination square"),
    }
}

impl Engine {
    /// Plays `m`. Returns `true` and leaves `self` at the resulting
    /// position if `m` is legal; returns `false` and leaves `self`
    /// completely unchanged otherwise.
    pub fn makemove(&mut self, m: Move) -> bool {
        if m.is_castle() {
            if self.in_check(self.side) || !self.castle_path_is_clear_and_safe(m.to) {
                return false;
            }
            let (rook_from, rook_to) = castle_rook_squares(m.to);
            self.color[rook_to as usize] = self.color[rook_from as usize];
            self.piece[rook_to as usize] = self.piece[rook_from as usize];
            // The source this engine is patterned on has a documented bug
            // here -- it bumps `piece[rook_from]` by one instead of
            // clearing the square. We clear it, matching `takeback`.
            self.color[rook_from as usize] = NO_COLOR;
            self.piece[rook_from as usize] = NO_PIECE;
        }

        self.hist_stack[self.hply] = HistEntry {
            mv: m,
            capture: self.piece[m.to as usize],
            castle: self.castle,
            ep: self.ep,
            fifty: self.fifty,
            hash: self.hash,
        };
        self.ply += 1;
        self.hply += 1;

        self.castle &= CASTLE_MASK[m.from as usize] & CASTLE_MASK[m.to as usize];
        if m.is_double_advance() {
            self.ep = if self.side == LIGHT { m.to + DELTA_S } else { m.to + DELTA_N };
        } else {
            self.ep = SQ_NIL;
        }
        if m.is_pawn_move() || m.is_capture() {
            self.fifty = 0;
        } else {
            self.fifty += 1;
        }

        self.color[m.to as usize] = self.side;
        self.piece[m.to as usize] = if m.is_promotion() { m.promote } else { self.piece[m.from as usize] };
        self.color[m.from as usize] = NO_COLOR;
        self.piece[m.from as usize] = NO_PIECE;

        if m.is_en_passant() {
            let captured = if self.side == LIGHT { m.to + DELTA_S } else { m.to + DELTA_N };
            self.color[captured as usize] = NO_COLOR;
            self.piece[captured as usize] = NO_PIECE;
        }

        self.side ^= 1;
        self.xside ^= 1;
        if self.in_check(self.xside) {
            self.takeback();
            return false;
        }
        self.set_hash();
        true
    }

    /// Exactly reverses the most recently played move.
    pub fn takeback(&mut self) {
        self.side ^= 1;
        self.xside ^= 1;
        self.ply -= 1;
        self.hply -= 1;
        let h = self.hist_stack[self.hply];
        let m = h.mv;
        self.castle = h.castle;
        self.ep = h.ep;
        self.fifty = h.fifty;
        self.hash = h.hash;

        self.color[m.from as usize] = self.side;
        self.piece[m.from as usize] = if m.is_promotion() { PAWN } else { self.piece[m.to as usize] };

        if h.capture == NO_PIECE {
            self.color[m.to as usize] = NO_COLOR;
            self.piece[m.to as usize] = NO_PIECE;
        } else {
            self.color[m.to as usize] = self.xside;
            self.piece[m.to as usize] = h.capture;
        }

        if m.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(m.to);
            self.color[rook_from as usize] = self.side;
            self.piece[rook_from as usize] = ROOK;
            self.color[rook_to as usize] = NO_COLOR;
            self.piece[rook_to as usize] = NO_PIECE;
        }

        if m.is_en_passant() {
            let captured = if self.side == LIGHT { m.to + DELTA_S } else { m.to + DELTA_N };
            self.color[captured as usize] = self.xside;
            self.piece[captured as usize] = PAWN;
        }
    }

    /// Checks the squares a castling king passes through/lands on:
    /// they must be empty and not attacked by the opponent.
    fn castle_path_is_clear_and_safe(&self, king_to: Square) -> bool {
        let empty = |sq: Square| self.color[sq as usize] == NO_COLOR;
        let safe = |sq: Square| !self.attack(sq, self.xside);
        match king_to {
            SQ_G1 => empty(SQ_F1) && empty(SQ_G1) && safe(SQ_F1) && safe(SQ_G1),
            SQ_C1 => empty(SQ_B1) && empty(SQ_C1) && empty(SQ_D1) && safe(SQ_C1) && safe(SQ_D1),
            SQ_G8 => empty(SQ_F8) && empty(SQ_G8) && safe(SQ_F8) && safe(SQ_G8),
            SQ_C8 => empty(SQ_B8) && empty(SQ_C8) && empty(SQ_D8) && safe(SQ_C8) && safe(SQ_D8),
            _ => unreachable!("castling move with an unrecognized destination square"),
        }
    }
}

const SQ_B1: Square = 57;
const SQ_B8: Square = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::moves::*;

    fn snapshot(engine: &Engine) -> (Vec<Color>, Vec<PieceType>, Color, Color, u8, Square, u32, u32, usize, usize) {
        (
            engine.color.to_vec(),
            engine.piece.to_vec(),
            engine.side,
            engine.xside,
            engine.castle,
            engine.ep,
            engine.fifty,
            engine.hash,
            engine.ply,
            engine.hply,
        )
    }

    #[test]
    fn make_then_unmake_restores_every_field() {
        let mut engine = Engine::new();
        engine.gen();
        let before = snapshot(&engine);
        let moves: Vec<Move> = engine.move_stack[engine.first_move[0]..engine.first_move[1]]
            .iter()
            .map(|sm| sm.mv)
            .collect();
        for mv in moves {
            if engine.makemove(mv) {
                engine.takeback();
                assert_eq!(snapshot(&engine), before);
            }
        }
    }

    #[test]
    fn hash_after_unmake_matches_a_full_recompute() {
        let mut engine = Engine::new();
        engine.gen();
        let e2e4 = Move::new(square(FILE_E, RANK_2), square(FILE_E, RANK_2 - 2), PAWN_DOUBLE_ADVANCE);
        assert!(engine.makemove(e2e4));
        engine.takeback();
        let incremental = engine.hash;
        engine.set_hash();
        assert_eq!(engine.hash, incremental);
    }

    #[test]
    fn castling_clears_the_rook_origin_square() {
        let mut engine = Engine::new();
        for sq in 0..SQUARE_COUNT {
            engine.color[sq] = NO_COLOR;
            engine.piece[sq] = NO_PIECE;
        }
        engine.color[SQ_E1 as usize] = LIGHT;
        engine.piece[SQ_E1 as usize] = KING;
        engine.color[SQ_H1 as usize] = LIGHT;
        engine.piece[SQ_H1 as usize] = ROOK;
        engine.color[SQ_E8 as usize] = DARK;
        engine.piece[SQ_E8 as usize] = KING;
        engine.side = LIGHT;
        engine.xside = DARK;
        engine.castle = CASTLE_WK;
        engine.set_hash();

        let castle_move = Move::new(SQ_E1, SQ_G1, crate::moves::CASTLE);
        assert!(engine.makemove(castle_move));
        assert_eq!(engine.color[SQ_H1 as usize], NO_COLOR);
        assert_eq!(engine.piece[SQ_H1 as usize], NO_PIECE);
        assert_eq!(engine.piece[SQ_F1 as usize], ROOK);

        engine.takeback();
        assert_eq!(engine.piece[SQ_H1 as usize], ROOK);
        assert_eq!(engine.color[SQ_F1 as usize], NO_COLOR);
    }

    #[test]
    fn castling_through_an_attacked_square_is_rejected_without_mutation() {
        let mut engine = Engine::new();
        for sq in 0..SQUARE_COUNT {
            engine.color[sq] = NO_COLOR;
            engine.piece[sq] = NO_PIECE;
        }
        engine.color[SQ_E1 as usize] = LIGHT;
        engine.piece[SQ_E1 as usize] = KING;
        engine.color[SQ_H1 as usize] = LIGHT;
        engine.piece[SQ_H1 as usize] = ROOK;
        engine.color[SQ_E8 as usize] = DARK;
        engine.piece[SQ_E8 as usize] = KING;
        // A black bishop on a6 attacks f1 along the a6-f1 diagonal.
        let a6 = square(FILE_A, 2);
        engine.color[a6 as usize] = DARK;
        engine.piece[a6 as usize] = BISHOP;
        engine.side = LIGHT;
        engine.xside = DARK;
        engine.castle = CASTLE_WK;
        engine.set_hash();
        let before = snapshot(&engine);

        let castle_move = Move::new(SQ_E1, SQ_G1, crate::moves::CASTLE);
        assert!(!engine.makemove(castle_move));
        assert_eq!(snapshot(&engine), before);
    }
}
