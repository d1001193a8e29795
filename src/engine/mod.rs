//! The engine's process-wide state: the board, the move-generation and
//! history stacks, and the search bookkeeping (principal variation,
//! history heuristic, node count, time control).
//!
//! Everything the search touches lives on one `Engine` value, matching
//! how the original program keeps a single set of module-level arrays;
//! here ownership is explicit instead of implicit. The engine is
//! single-threaded and all of its methods take `&mut self`.

mod attack;
mod makemove;
mod movegen;
pub mod search;

use crate::basetypes::*;
use crate::moves::{Move, ScoredMove};
use crate::zobrist::ZOBRIST;

/// Upper bound on the number of pseudo-legal moves that can be queued
/// across all plies at once.
pub const GEN_STACK: usize = 1120;
/// Maximum search depth in half-moves.
pub const MAX_PLY: usize = 32;
/// Upper bound on the number of halfmoves a single game can record.
pub const HIST_STACK: usize = 400;

/// The undo information needed to reverse a single played move.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistEntry {
    pub mv: Move,
    pub capture: PieceType,
    pub castle: u8,
    pub ep: Square,
    pub fifty: u32,
    pub hash: u32,
}

pub struct Engine {
    pub color: [Color; SQUARE_COUNT],
    pub piece: [PieceType; SQUARE_COUNT],
    pub side: Color,
    pub xside: Color,
    pub castle: u8,
    pub ep: Square,
    pub fifty: u32,
    pub hash: u32,
    pub ply: usize,
    pub hply: usize,

    pub move_stack: Vec<ScoredMove>,
    pub first_move: [usize; MAX_PLY + 1],

    pub hist_stack: Vec<HistEntry>,

    pub history: Vec<Vec<i32>>,
    pub pv: Vec<Vec<Move>>,
    pub pv_length: [usize; MAX_PLY],
    pub follow_pv: bool,

    pub nodes: u64,
    pub max_time: u64,
    pub max_depth: u32,
    pub start_time: u64,
    pub stop_time: u64,
    pub aborted: bool,

    /// Cleared once the game leaves the opening book's repertoire (or
    /// once a non-standard position, such as the benchmark, is loaded).
    pub book_enabled: bool,
}

impl Engine {
    /// Creates a new engine in the standard starting position.
    pub fn new() -> Engine {
        let mut engine = Engine {
            color: [NO_COLOR; SQUARE_COUNT],
            piece: [NO_PIECE; SQUARE_COUNT],
            side: LIGHT,
            xside: DARK,
            castle: CASTLE_NONE,
            ep: SQ_NIL,
            fifty: 0,
            hash: 0,
            ply: 0,
            hply: 0,
            move_stack: vec![ScoredMove::default(); GEN_STACK],
            first_move: [0; MAX_PLY + 1],
            hist_stack: vec![HistEntry::default(); HIST_STACK],
            history: vec![vec![0; SQUARE_COUNT]; SQUARE_COUNT],
            pv: vec![vec![Move::NIL; MAX_PLY]; MAX_PLY],
            pv_length: [0; MAX_PLY],
            follow_pv: false,
            nodes: 0,
            max_time: 1 << 25,
            max_depth: 4,
            start_time: 0,
            stop_time: 0,
            aborted: false,
            book_enabled: true,
        };
        engine.init_board();
        engine
    }

    /// Resets the board to the standard starting position and clears
    /// all per-game state. Does not touch search time/depth limits.
    pub fn init_board(&mut self) {
        self.color.copy_from_slice(&crate::tables::INIT_COLOR);
        self.piece.copy_from_slice(&crate::tables::INIT_PIECE);
        self.side = LIGHT;
        self.xside = DARK;
        self.castle = CASTLE_ALL;
        self.ep = SQ_NIL;
        self.fifty = 0;
        self.ply = 0;
        self.hply = 0;
        self.book_enabled = true;
        self.set_hash();
        self.first_move[0] = 0;
    }

    /// Loads an arbitrary position, used by the benchmark harness.
    /// Disables the opening book, since it is keyed to the standard
    /// opening and would otherwise offer nonsensical replies.
    pub fn load_position(
        &mut self,
        color: [Color; SQUARE_COUNT],
        piece: [PieceType; SQUARE_COUNT],
        side: Color,
        castle: u8,
    ) {
        self.color = color;
        self.piece = piece;
        self.side = side;
        self.xside = side ^ 1;
        self.castle = castle;
        self.ep = SQ_NIL;
        self.fifty = 0;
        self.ply = 0;
        self.hply = 0;
        self.book_enabled = false;
        self.set_hash();
        self.first_move[0] = 0;
    }

    /// Recomputes the Zobrist key from scratch. Used at initialization
    /// and as the authoritative check that the incrementally maintained
    /// hash hasn't drifted (see the `makemove`/`takeback` tests).
    pub fn set_hash(&mut self) {
        let mut hash = 0u32;
        for sq in 0..SQUARE_COUNT {
            if self.color[sq] != NO_COLOR {
                hash ^= ZOBRIST.piece[self.color[sq] as usize][self.piece[sq] as usize][sq];
            }
        }
        if self.side == DARK {
            hash ^= ZOBRIST.side;
        }
        if self.ep != SQ_NIL {
            hash ^= ZOBRIST.ep[self.ep as usize];
        }
        self.hash = hash;
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_and_piece_agree_on_emptiness() {
        let engine = Engine::new();
        for sq in 0..SQUARE_COUNT {
            assert_eq!(engine.color[sq] == NO_COLOR, engine.piece[sq] == NO_PIECE);
        }
    }

    #[test]
    fn recomputed_hash_matches_incremental_hash_at_start() {
        let mut engine = Engine::new();
        let incremental = engine.hash;
        engine.set_hash();
        assert_eq!(engine.hash, incremental);
    }
}
