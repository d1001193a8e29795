//! Zobrist hashing: a position fingerprint maintained incrementally by
//! XORing together random words that correspond to features of the
//! position (piece-on-square, side to move, en-passant file).
//!
//! The random words are generated once, from a fixed seed, so that the
//! hash is reproducible across runs -- useful for tests and for the
//! `bench` harness, which needs the same search every time.

use crate::basetypes::{COLOR_KINDS, PIECE_KINDS, SQUARE_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// XORs 32 shifted draws from `rng` together, so the resulting word
/// covers all 32 bits evenly even when the underlying generator is
/// queried for narrow (here, 16-bit) values -- matching the technique
/// the original engine used to stay correct on platforms whose C
/// library `rand()` only returns 15 usable bits.
fn hash_rand(rng: &mut StdRng) -> u32 {
    let mut result: u32 = 0;
    for i in 0..32u32 {
        let draw = rng.gen::<u16>() as u32;
        result ^= draw.wrapping_shl(i);
    }
    result
}

pub struct ZobristTables {
    pub piece: [[[u32; SQUARE_COUNT]; PIECE_KINDS]; COLOR_KINDS],
    pub side: u32,
    pub ep: [u32; SQUARE_COUNT],
}

impl ZobristTables {
    /// Builds the tables from the fixed seed 0, as the invariant in
    /// the data model requires: two `ZobristTables` instances are
    /// always bit-for-bit identical.
    fn new() -> ZobristTables {
        let mut rng = StdRng::seed_from_u64(0);
        let mut piece = [[[0u32; SQUARE_COUNT]; PIECE_KINDS]; COLOR_KINDS];
        for color_table in piece.iter_mut() {
            for piece_table in color_table.iter_mut() {
                for slot in piece_table.iter_mut() {
                    *slot = hash_rand(&mut rng);
                }
            }
        }
        let side = hash_rand(&mut rng);
        let mut ep = [0u32; SQUARE_COUNT];
        for slot in ep.iter_mut() {
            *slot = hash_rand(&mut rng);
        }
        ZobristTables { piece, side, ep }
    }
}

lazy_static::lazy_static! {
    pub static ref ZOBRIST: ZobristTables = ZobristTables::new();
}
