//! Static board geometry: the 12x10 padded mailbox that turns
//! off-board detection into an array lookup, the per-piece direction
//! tables that drive both move generation and attack detection, the
//! castling-rights-clearing table, and the initial array setup.
//!
//! These are all fixed data, known at compile time, so unlike the
//! Zobrist tables (§`zobrist`) they need no runtime initialization.

use crate::basetypes::*;

pub const MAILBOX_LEN: usize = 120;
pub const OFFSET_LEN: usize = 8;

/// Maps a padded (12x10) index to a real square index, or `-1` if the
/// padded index is off the real board.
#[rustfmt::skip]
pub const MAILBOX: [i8; MAILBOX_LEN] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1,  0,  1,  2,  3,  4,  5,  6,  7, -1,
    -1,  8,  9, 10, 11, 12, 13, 14, 15, -1,
    -1, 16, 17, 18, 19, 20, 21, 22, 23, -1,
    -1, 24, 25, 26, 27, 28, 29, 30, 31, -1,
    -1, 32, 33, 34, 35, 36, 37, 38, 39, -1,
    -1, 40, 41, 42, 43, 44, 45, 46, 47, -1,
    -1, 48, 49, 50, 51, 52, 53, 54, 55, -1,
    -1, 56, 57, 58, 59, 60, 61, 62, 63, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

/// Maps a real square index to its padded-board index.
#[rustfmt::skip]
pub const MAILBOX64: [i8; SQUARE_COUNT] = [
    21, 22, 23, 24, 25, 26, 27, 28,
    31, 32, 33, 34, 35, 36, 37, 38,
    41, 42, 43, 44, 45, 46, 47, 48,
    51, 52, 53, 54, 55, 56, 57, 58,
    61, 62, 63, 64, 65, 66, 67, 68,
    71, 72, 73, 74, 75, 76, 77, 78,
    81, 82, 83, 84, 85, 86, 87, 88,
    91, 92, 93, 94, 95, 96, 97, 98,
];

/// `true` for pieces that slide (bishop, rook, queen), indexed by
/// [`PieceType`].
pub const SLIDE: [bool; PIECE_KINDS] = [false, false, true, true, true, false];

/// Number of directions each piece moves in, indexed by [`PieceType`].
/// Pawns are handled separately, so their entry is unused.
pub const OFFSETS: [usize; PIECE_KINDS] = [0, 8, 4, 4, 8, 8];

/// Padded-index deltas for each direction a piece can move in, indexed
/// by [`PieceType`] then direction (only the first `OFFSETS[piece]`
/// entries of each row are meaningful).
#[rustfmt::skip]
pub const OFFSET: [[i8; OFFSET_LEN]; PIECE_KINDS] = [
    [0, 0, 0, 0, 0, 0, 0, 0],                            // PAWN (unused)
    [-21, -19, -12, -8, 8, 12, 19, 21],                  // KNIGHT
    [-11, -9, 9, 11, 0, 0, 0, 0],                        // BISHOP
    [-10, -1, 1, 10, 0, 0, 0, 0],                        // ROOK
    [-11, -10, -9, -1, 1, 9, 10, 11],                    // QUEEN
    [-11, -10, -9, -1, 1, 9, 10, 11],                    // KING
];

/// ANDed with `castle` on every move: clears the castling right(s)
/// belonging to a king or rook home square when a piece moves from or
/// to it (including when a rook is captured on its home square).
#[rustfmt::skip]
pub const CASTLE_MASK: [u8; SQUARE_COUNT] = [
     7, 15, 15, 15,  3, 15, 15, 11,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15,
    13, 15, 15, 15, 12, 15, 15, 14,
];

#[rustfmt::skip]
pub const INIT_COLOR: [Color; SQUARE_COUNT] = [
    DARK, DARK, DARK, DARK, DARK, DARK, DARK, DARK,
    DARK, DARK, DARK, DARK, DARK, DARK, DARK, DARK,
    NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR,
    NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR,
    NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR,
    NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR,
    LIGHT, LIGHT, LIGHT, LIGHT, LIGHT, LIGHT, LIGHT, LIGHT,
    LIGHT, LIGHT, LIGHT, LIGHT, LIGHT, LIGHT, LIGHT, LIGHT,
];

#[rustfmt::skip]
pub const INIT_PIECE: [PieceType; SQUARE_COUNT] = [
    ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK,
    PAWN, PAWN, PAWN, PAWN, PAWN, PAWN, PAWN, PAWN,
    NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE,
    NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE,
    NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE,
    NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE,
    PAWN, PAWN, PAWN, PAWN, PAWN, PAWN, PAWN, PAWN,
    ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK,
];

/// Given `from` and a piece kind, walk one mailbox step in direction
/// `stride` and return the landing square, or `SQ_NIL` if it's off the
/// board. Shared by move generation and attack detection.
#[inline(always)]
pub fn mailbox_step(from: Square, piece: PieceType, stride: usize) -> Square {
    let padded = MAILBOX64[from as usize] as i16 + OFFSET[piece as usize][stride] as i16;
    MAILBOX[padded as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailbox_round_trips_every_real_square() {
        for sq in 0..SQUARE_COUNT {
            assert_eq!(MAILBOX[MAILBOX64[sq] as usize], sq as i8);
        }
    }

    #[test]
    fn castle_mask_clears_only_the_home_squares() {
        assert_eq!(CASTLE_MASK[SQ_E1 as usize], CASTLE_ALL & !(CASTLE_WK | CASTLE_WQ));
        assert_eq!(CASTLE_MASK[SQ_H1 as usize], CASTLE_ALL & !CASTLE_WK);
        assert_eq!(CASTLE_MASK[SQ_A1 as usize], CASTLE_ALL & !CASTLE_WQ);
        assert_eq!(CASTLE_MASK[SQ_E8 as usize], CASTLE_ALL & !(CASTLE_BK | CASTLE_BQ));
        for sq in 0..SQUARE_COUNT {
            if ![SQ_A1, SQ_E1, SQ_H1, SQ_A8, SQ_E8, SQ_H8].contains(&(sq as i8)) {
                assert_eq!(CASTLE_MASK[sq], CASTLE_ALL);
            }
        }
    }
}
