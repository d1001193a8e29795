//! Static position evaluation, relative to the side to move.
//!
//! Material plus piece-square tables, pawn-structure terms (doubled,
//! isolated, backwards, passed) and rook/king-safety terms.
//!
//! The source this is patterned on carries a corrupted `piece_value`
//! table (`{900, 850, 250, 60, -150, -2700}` -- queen undervalued
//! against rook, pawn and king with nonsensical sign and magnitude).
//! That is not reproduced here; `PIECE_VALUE` below uses the
//! conventional centipawn scale, which is also what makes the
//! `piece_mat <= ENDGAME_MATERIAL` endgame-king-table gate meaningful.

use crate::basetypes::*;
use crate::engine::Engine;

const PIECE_VALUE: [i32; PIECE_KINDS] = [100, 300, 300, 500, 900, 0];

const DOUBLED_PAWN_PENALTY: i32 = 10;
const ISOLATED_PAWN_PENALTY: i32 = 20;
const BACKWARDS_PAWN_PENALTY: i32 = 8;
const PASSED_PAWN_BONUS: i32 = 20;
const ROOK_SEMI_OPEN_FILE_BONUS: i32 = 10;
const ROOK_OPEN_FILE_BONUS: i32 = 15;
const ROOK_ON_SEVENTH_BONUS: i32 = 20;
const ENDGAME_MATERIAL: i32 = 1200;

#[rustfmt::skip]
const PAWN_PCSQ: [i32; SQUARE_COUNT] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  15,  20,  20,  15,  10,   5,
     4,   8,  12,  16,  16,  12,   8,   4,
     3,   6,   9,  12,  12,   9,   6,   3,
     2,   4,   6,   8,   8,   6,   4,   2,
     1,   2,   3, -10, -10,   3,   2,   1,
     0,   0,   0, -40, -40,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PCSQ: [i32; SQUARE_COUNT] = [
    -10, -10, -10, -10, -10, -10, -10, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10, -30, -10, -10, -10, -10, -30, -10,
];

#[rustfmt::skip]
const BISHOP_PCSQ: [i32; SQUARE_COUNT] = [
    -10, -10, -10, -10, -10, -10, -10, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10, -10, -20, -10, -10, -20, -10, -10,
];

#[rustfmt::skip]
const KING_PCSQ: [i32; SQUARE_COUNT] = [
    -10, -10, -10, -10, -10, -10, -10, -10,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -10, -20, -40, -40, -40, -40, -20, -10,
    -10, -20, -40, -70, -70, -40, -20, -10,
    -10, -20, -40, -70, -70, -40, -20, -10,
    -10, -20, -40, -40, -40, -40, -20, -10,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -10, -10, -10, -10, -10, -10, -10, -10,
];

const KING_ENDGAME_PCSQ: [i32; SQUARE_COUNT] = KING_PCSQ;

/// `FLIP[sq]` mirrors a square top-to-bottom, so a Dark piece can reuse
/// the Light piece-square tables.
#[rustfmt::skip]
const FLIP: [usize; SQUARE_COUNT] = [
    56, 57, 58, 59, 60, 61, 62, 63,
    48, 49, 50, 51, 52, 53, 54, 55,
    40, 41, 42, 43, 44, 45, 46, 47,
    32, 33, 34, 35, 36, 37, 38, 39,
    24, 25, 26, 27, 28, 29, 30, 31,
    16, 17, 18, 19, 20, 21, 22, 23,
     8,  9, 10, 11, 12, 13, 14, 15,
     0,  1,  2,  3,  4,  5,  6,  7,
];

/// `pawn_rank[color][file+1]` is the rank of that color's least-advanced
/// pawn on `file`. The buffer files (`0` and `9`) and the "no pawn"
/// sentinels (rank `RANK_8` for Light, `RANK_1` for Dark -- i.e. as far
/// advanced as possible) let the isolated/backwards/passed checks below
/// skip special-casing empty files.
struct PawnRanks {
    light: [i8; 10],
    dark: [i8; 10],
}

fn file_index(sq: Square) -> usize {
    (file(sq) + 1) as usize
}

fn collect_pawn_ranks(engine: &Engine) -> PawnRanks {
    let mut ranks = PawnRanks { light: [RANK_8; 10], dark: [RANK_1; 10] };
    for sq in 0..SQUARE_COUNT as Square {
        if engine.piece[sq as usize] != PAWN {
            continue;
        }
        let f = file_index(sq);
        if engine.color[sq as usize] == LIGHT {
            if rank(sq) > ranks.light[f] {
                ranks.light[f] = rank(sq);
            }
        } else if engine.color[sq as usize] == DARK && rank(sq) < ranks.dark[f] {
            ranks.dark[f] = rank(sq);
        }
    }
    ranks
}

fn material(engine: &Engine) -> (i32, i32, i32, i32) {
    let (mut piece_mat_light, mut piece_mat_dark) = (0, 0);
    let (mut pawn_mat_light, mut pawn_mat_dark) = (0, 0);
    for sq in 0..SQUARE_COUNT {
        let color = engine.color[sq];
        if color == NO_COLOR {
            continue;
        }
        let value = PIECE_VALUE[engine.piece[sq] as usize];
        if engine.piece[sq] == PAWN {
            if color == LIGHT {
                pawn_mat_light += value;
            } else {
                pawn_mat_dark += value;
            }
        } else if color == LIGHT {
            piece_mat_light += value;
        } else {
            piece_mat_dark += value;
        }
    }
    (piece_mat_light, piece_mat_dark, pawn_mat_light, pawn_mat_dark)
}

fn eval_light_pawn(sq: Square, ranks: &PawnRanks) -> i32 {
    let f = file_index(sq);
    let r_rank = rank(sq);
    let mut r = PAWN_PCSQ[sq as usize];

    if ranks.light[f] > r_rank {
        r -= DOUBLED_PAWN_PENALTY;
    }
    if ranks.light[f - 1] == RANK_8 && ranks.light[f + 1] == RANK_8 {
        r -= ISOLATED_PAWN_PENALTY;
    } else if ranks.light[f - 1] < r_rank && ranks.light[f + 1] < r_rank {
        r -= BACKWARDS_PAWN_PENALTY;
    }
    if ranks.dark[f - 1] >= r_rank && ranks.dark[f] >= r_rank && ranks.dark[f + 1] >= r_rank {
        r += (RANK_1 - r_rank) as i32 * PASSED_PAWN_BONUS;
    }
    r
}

fn eval_dark_pawn(sq: Square, ranks: &PawnRanks) -> i32 {
    let f = file_index(sq);
    let r_rank = rank(sq);
    let mut r = PAWN_PCSQ[FLIP[sq as usize]];

    if ranks.dark[f] < r_rank {
        r -= DOUBLED_PAWN_PENALTY;
    }
    if ranks.dark[f - 1] == RANK_1 && ranks.dark[f + 1] == RANK_1 {
        r -= ISOLATED_PAWN_PENALTY;
    } else if ranks.dark[f - 1] > r_rank && ranks.dark[f + 1] > r_rank {
        r -= BACKWARDS_PAWN_PENALTY;
    }
    if ranks.light[f - 1] <= r_rank && ranks.light[f] <= r_rank && ranks.light[f + 1] <= r_rank {
        r += r_rank as i32 * PASSED_PAWN_BONUS;
    }
    r
}

/// Evaluates the pawn shield on file `f` in front of a castled Light
/// king: a near-untouched pawn scores best, a missing or advanced one
/// scores worse, and an open file facing it from the Dark side is
/// penalized further.
fn eval_light_king_pawn(f: usize, ranks: &PawnRanks) -> i32 {
    let mut r = 0;
    r += match ranks.light[f] {
        v if v == RANK_2 => 0,
        v if v == RANK_2 - 1 => -10,
        v if v == RANK_8 => -25,
        _ => -20,
    };
    r += match ranks.dark[f] {
        v if v == RANK_1 => -15,
        v if v == RANK_2 - 1 => -10,
        v if v == RANK_2 - 2 => -5,
        _ => 0,
    };
    r
}

fn eval_dark_king_pawn(f: usize, ranks: &PawnRanks) -> i32 {
    let mut r = 0;
    r += match ranks.dark[f] {
        v if v == RANK_7 => 0,
        v if v == RANK_7 + 1 => -10,
        v if v == RANK_1 => -25,
        _ => -20,
    };
    r += match ranks.light[f] {
        v if v == RANK_8 => -15,
        v if v == RANK_7 + 1 => -10,
        v if v == RANK_7 + 2 => -5,
        _ => 0,
    };
    r
}

fn eval_light_king(sq: Square, ranks: &PawnRanks, dark_piece_mat: i32) -> i32 {
    let f = file(sq);
    let mut r = KING_PCSQ[sq as usize];

    if f < 3 {
        r += eval_light_king_pawn(1, ranks);
        r += eval_light_king_pawn(2, ranks);
        r += eval_light_king_pawn(3, ranks) / 2;
    } else if f > 4 {
        r += eval_light_king_pawn(8, ranks);
        r += eval_light_king_pawn(7, ranks);
        r += eval_light_king_pawn(6, ranks) / 2;
    } else {
        for i in f..=(f + 2) {
            if ranks.light[i as usize] == RANK_8 && ranks.dark[i as usize] == RANK_1 {
                r -= 10;
            }
        }
    }
    r * dark_piece_mat / 3100
}

fn eval_dark_king(sq: Square, ranks: &PawnRanks, light_piece_mat: i32) -> i32 {
    let f = file(sq);
    let mut r = KING_PCSQ[FLIP[sq as usize]];

    if f < 3 {
        r += eval_dark_king_pawn(1, ranks);
        r += eval_dark_king_pawn(2, ranks);
        r += eval_dark_king_pawn(3, ranks) / 2;
    } else if f > 4 {
        r += eval_dark_king_pawn(8, ranks);
        r += eval_dark_king_pawn(7, ranks);
        r += eval_dark_king_pawn(6, ranks) / 2;
    } else {
        for i in f..=(f + 2) {
            if ranks.light[i as usize] == RANK_8 && ranks.dark[i as usize] == RANK_1 {
                r -= 10;
            }
        }
    }
    r * light_piece_mat / 3100
}

/// Returns the static score of `engine`'s current position, relative to
/// the side to move (matching the search's negamax convention).
pub fn eval(engine: &Engine) -> i32 {
    let ranks = collect_pawn_ranks(engine);
    let (piece_mat_light, piece_mat_dark, pawn_mat_light, pawn_mat_dark) = material(engine);

    let mut score_light = piece_mat_light + pawn_mat_light;
    let mut score_dark = piece_mat_dark + pawn_mat_dark;

    for sq in 0..SQUARE_COUNT as Square {
        let color = engine.color[sq as usize];
        if color == NO_COLOR {
            continue;
        }
        let piece = engine.piece[sq as usize];
        let f = file_index(sq);
        if color == LIGHT {
            score_light += match piece {
                PAWN => eval_light_pawn(sq, &ranks),
                KNIGHT => KNIGHT_PCSQ[sq as usize],
                BISHOP => BISHOP_PCSQ[sq as usize],
                ROOK => {
                    let mut bonus = 0;
                    if ranks.light[f] == RANK_8 {
                        bonus += if ranks.dark[f] == RANK_1 {
                            ROOK_OPEN_FILE_BONUS
                        } else {
                            ROOK_SEMI_OPEN_FILE_BONUS
                        };
                    }
                    if rank(sq) == RANK_7 {
                        bonus += ROOK_ON_SEVENTH_BONUS;
                    }
                    bonus
                }
                KING => {
                    if piece_mat_dark <= ENDGAME_MATERIAL {
                        KING_ENDGAME_PCSQ[sq as usize]
                    } else {
                        eval_light_king(sq, &ranks, piece_mat_dark)
                    }
                }
                _ => 0,
            };
        } else {
            score_dark += match piece {
                PAWN => eval_dark_pawn(sq, &ranks),
                KNIGHT => KNIGHT_PCSQ[FLIP[sq as usize]],
                BISHOP => BISHOP_PCSQ[FLIP[sq as usize]],
                ROOK => {
                    let mut bonus = 0;
                    if ranks.dark[f] == RANK_1 {
                        bonus += if ranks.light[f] == RANK_8 {
                            ROOK_OPEN_FILE_BONUS
                        } else {
                            ROOK_SEMI_OPEN_FILE_BONUS
                        };
                    }
                    if rank(sq) == RANK_2 {
                        bonus += ROOK_ON_SEVENTH_BONUS;
                    }
                    bonus
                }
                KING => {
                    if piece_mat_light <= ENDGAME_MATERIAL {
                        KING_ENDGAME_PCSQ[FLIP[sq as usize]]
                    } else {
                        eval_dark_king(sq, &ranks, piece_mat_light)
                    }
                }
                _ => 0,
            };
        }
    }

    if engine.side == LIGHT {
        score_light - score_dark
    } else {
        score_dark - score_light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_even() {
        let engine = Engine::new();
        assert_eq!(eval(&engine), 0);
    }

    #[test]
    fn an_extra_queen_is_worth_roughly_a_queen() {
        let mut engine = Engine::new();
        for sq in 0..SQUARE_COUNT {
            engine.color[sq] = NO_COLOR;
            engine.piece[sq] = NO_PIECE;
        }
        engine.color[SQ_E1 as usize] = LIGHT;
        engine.piece[SQ_E1 as usize] = KING;
        engine.color[SQ_E8 as usize] = DARK;
        engine.piece[SQ_E8 as usize] = KING;
        engine.color[SQ_D1 as usize] = LIGHT;
        engine.piece[SQ_D1 as usize] = QUEEN;
        engine.side = LIGHT;
        engine.xside = DARK;
        engine.set_hash();

        let score = eval(&engine);
        assert!((800..=1000).contains(&score), "expected roughly +900, got {score}");
    }
}
