//! Move-generator correctness oracle (`perft`) and node-rate benchmark
//! (`bench`), both grounded on TSCP's `main.c`.

use crate::basetypes::*;
use crate::engine::search::OutputMode;
use crate::engine::Engine;

/// Counts leaf nodes reachable from `engine`'s current position in
/// exactly `depth` legal (post-filter) half-moves.
pub fn perft(engine: &mut Engine, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    engine.gen();
    let first = engine.first_move[engine.ply];
    let last = engine.first_move[engine.ply + 1];
    let mut sum = 0;
    for i in first..last {
        let mv = engine.move_stack[i].mv;
        if !engine.makemove(mv) {
            continue;
        }
        sum += if depth == 1 { 1 } else { perft(engine, depth - 1) };
        engine.takeback();
    }
    sum
}

/// Move 17 of Fischer-Sherwin, New Jersey State Open Championship,
/// 1957-09-02 -- TSCP's fixed benchmark position.
#[rustfmt::skip]
const BENCH_COLOR: [Color; SQUARE_COUNT] = [
    NO_COLOR, DARK,     DARK,     NO_COLOR, NO_COLOR, DARK,     DARK,     NO_COLOR,
    DARK,     NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR, DARK,     DARK,     DARK,
    NO_COLOR, DARK,     NO_COLOR, DARK,     DARK,     NO_COLOR, DARK,     NO_COLOR,
    NO_COLOR, NO_COLOR, NO_COLOR, DARK,     NO_COLOR, NO_COLOR, LIGHT,    NO_COLOR,
    NO_COLOR, NO_COLOR, DARK,     LIGHT,    NO_COLOR, NO_COLOR, NO_COLOR, NO_COLOR,
    NO_COLOR, NO_COLOR, LIGHT,    NO_COLOR, NO_COLOR, NO_COLOR, LIGHT,    NO_COLOR,
    LIGHT,    LIGHT,    LIGHT,    NO_COLOR, NO_COLOR, LIGHT,    LIGHT,    LIGHT,
    LIGHT,    NO_COLOR, LIGHT,    NO_COLOR, LIGHT,    NO_COLOR, LIGHT,    NO_COLOR,
];

#[rustfmt::skip]
const BENCH_PIECE: [PieceType; SQUARE_COUNT] = [
    NO_PIECE, ROOK,     BISHOP,   NO_PIECE, NO_PIECE, ROOK,     KING,     NO_PIECE,
    PAWN,     NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE, PAWN,     PAWN,     PAWN,
    NO_PIECE, PAWN,     NO_PIECE, QUEEN,    PAWN,     NO_PIECE, KNIGHT,   NO_PIECE,
    NO_PIECE, NO_PIECE, NO_PIECE, KNIGHT,   NO_PIECE, NO_PIECE, KNIGHT,   NO_PIECE,
    NO_PIECE, NO_PIECE, PAWN,     PAWN,     NO_PIECE, NO_PIECE, NO_PIECE, NO_PIECE,
    NO_PIECE, NO_PIECE, PAWN,     NO_PIECE, NO_PIECE, NO_PIECE, PAWN,     NO_PIECE,
    PAWN,     PAWN,     QUEEN,    NO_PIECE, NO_PIECE, PAWN,     BISHOP,   PAWN,
    ROOK,     NO_PIECE, BISHOP,   NO_PIECE, ROOK,     NO_PIECE, KING,     NO_PIECE,
];

/// Loads the benchmark position, runs three 5-ply searches, and reports
/// the best trial's nodes-per-second.
pub fn bench(engine: &mut Engine) {
    engine.load_position(BENCH_COLOR, BENCH_PIECE, LIGHT, CASTLE_NONE);
    engine.max_time = 1 << 25;
    engine.max_depth = 5;

    let mut best_ms = u64::MAX;
    let mut nodes_at_best = 0;
    for _ in 0..3 {
        let start = crate::time::now_ms();
        engine.think(OutputMode::None);
        let elapsed = crate::time::now_ms() - start;
        println!("Time: {elapsed} ms");
        if elapsed < best_ms {
            best_ms = elapsed;
            nodes_at_best = engine.nodes;
        }
    }

    println!();
    println!("Nodes: {nodes_at_best}");
    println!("Best time: {best_ms} ms");
    if best_ms == 0 {
        println!("(invalid)");
    } else {
        let nps = nodes_at_best as f64 / best_ms as f64 * 1000.0;
        println!("Nodes per second: {}", nps as u64);
    }

    engine.init_board();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_matches_the_known_node_counts() {
        let expected = [1u64, 20, 400, 8902, 197281];
        let mut engine = Engine::new();
        for (depth, &want) in expected.iter().enumerate() {
            assert_eq!(perft(&mut engine, depth as u32), want, "perft({depth})");
        }
    }

    #[test]
    #[ignore = "several million nodes; run explicitly with --ignored"]
    fn perft_five_matches_the_known_node_count() {
        let mut engine = Engine::new();
        assert_eq!(perft(&mut engine, 5), 4_865_609);
    }
}
