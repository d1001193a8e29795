//! End-to-end scenarios run through the public API the way a front
//! end would: parse coordinate text, play it, inspect the resulting
//! position.

use tscp::basetypes::*;
use tscp::notation::parse_move;
use tscp::Engine;

/// `file` in `0..8` (a..h), `rank` in algebraic `1..8` (White's home = 1).
fn sq_alg(file: i8, rank: i8) -> Square {
    (8 - rank) * 8 + file
}

fn play(engine: &mut Engine, moves: &[&str]) {
    for text in moves {
        let mv = parse_move(engine, text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert!(engine.makemove(mv), "{text} was rejected as illegal");
        // A played game move resets to the root ply, the way the
        // console shell and GUI protocol loop do after every move.
        engine.ply = 0;
    }
}

/// No generated move can be legally made: the side to move is mated
/// or stalemated.
fn has_no_legal_move(engine: &mut Engine) -> bool {
    engine.gen();
    let first = engine.first_move[engine.ply];
    let last = engine.first_move[engine.ply + 1];
    let mut found = false;
    for i in first..last {
        let mv = engine.move_stack[i].mv;
        if engine.makemove(mv) {
            engine.takeback();
            found = true;
            break;
        }
    }
    engine.first_move[engine.ply + 1] = engine.first_move[engine.ply];
    !found
}

#[test]
fn fools_mate_leaves_white_checkmated() {
    let mut engine = Engine::new();
    play(&mut engine, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(engine.in_check(LIGHT));
    assert!(has_no_legal_move(&mut engine));
}

#[test]
fn king_and_pawn_vs_king_is_stalemate() {
    // White king f7, pawn g6, Black king h8, Black to move: f7 covers
    // g8/g7, the pawn covers h7, and h8 itself isn't attacked.
    let mut color = [NO_COLOR; SQUARE_COUNT];
    let mut piece = [NO_PIECE; SQUARE_COUNT];

    let wk = sq_alg(FILE_F, 7);
    let wp = sq_alg(FILE_G, 6);
    let bk = sq_alg(FILE_H, 8);
    color[wk as usize] = LIGHT;
    piece[wk as usize] = KING;
    color[wp as usize] = LIGHT;
    piece[wp as usize] = PAWN;
    color[bk as usize] = DARK;
    piece[bk as usize] = KING;

    let mut engine = Engine::new();
    engine.load_position(color, piece, DARK, CASTLE_NONE);

    assert!(!engine.in_check(DARK));
    assert!(has_no_legal_move(&mut engine));
}

#[test]
fn fifty_moves_without_a_pawn_move_or_capture_trips_the_rule() {
    let mut color = [NO_COLOR; SQUARE_COUNT];
    let mut piece = [NO_PIECE; SQUARE_COUNT];
    let wk = sq_alg(FILE_A, 1);
    let bk = sq_alg(FILE_A, 8);
    let wr = sq_alg(FILE_H, 1);
    color[wk as usize] = LIGHT;
    piece[wk as usize] = KING;
    color[bk as usize] = DARK;
    piece[bk as usize] = KING;
    color[wr as usize] = LIGHT;
    piece[wr as usize] = ROOK;

    let mut engine = Engine::new();
    engine.load_position(color, piece, LIGHT, CASTLE_NONE);

    // Shuffle the rook back and forth; nothing resets `fifty`.
    for _ in 0..25 {
        play(&mut engine, &["h1h2", "a8b8", "h2h1", "b8a8"]);
    }

    assert!(engine.fifty >= 100);
}

#[test]
fn en_passant_capture_is_available_and_removes_the_victim() {
    let mut engine = Engine::new();
    play(&mut engine, &["e2e4", "a7a6", "e4e5", "f7f5"]);

    let f6 = sq_alg(FILE_F, 6);
    assert_eq!(engine.ep, f6);

    let f5 = sq_alg(FILE_F, 5);
    assert_eq!(engine.piece[f5 as usize], PAWN);

    play(&mut engine, &["e5f6"]);
    assert_eq!(engine.piece[f5 as usize], NO_PIECE);
    assert_eq!(engine.color[f5 as usize], NO_COLOR);
}

#[test]
fn castling_through_check_is_rejected_without_mutating_the_board() {
    // White king e1, rook h1, king-side rights only. A Black bishop on
    // a6 attacks f1, the square the king must pass through.
    let mut color = [NO_COLOR; SQUARE_COUNT];
    let mut piece = [NO_PIECE; SQUARE_COUNT];
    let wk = SQ_E1;
    let wr = SQ_H1;
    let bk = SQ_E8;
    let bb = sq_alg(FILE_A, 6);

    color[wk as usize] = LIGHT;
    piece[wk as usize] = KING;
    color[wr as usize] = LIGHT;
    piece[wr as usize] = ROOK;
    color[bk as usize] = DARK;
    piece[bk as usize] = KING;
    color[bb as usize] = DARK;
    piece[bb as usize] = BISHOP;

    let mut engine = Engine::new();
    engine.load_position(color, piece, LIGHT, CASTLE_WK);

    let before_color = engine.color;
    let before_piece = engine.piece;

    engine.gen();
    let first = engine.first_move[engine.ply];
    let last = engine.first_move[engine.ply + 1];
    let castle_mv = (first..last)
        .map(|i| engine.move_stack[i].mv)
        .find(|mv| mv.is_castle())
        .expect("castle move should be pseudo-legally generated");

    assert!(!engine.makemove(castle_mv));
    assert_eq!(engine.color, before_color);
    assert_eq!(engine.piece, before_piece);
}

#[test]
fn a_pawn_on_the_seventh_promotes_to_all_four_pieces() {
    let mut color = [NO_COLOR; SQUARE_COUNT];
    let mut piece = [NO_PIECE; SQUARE_COUNT];
    let wk = sq_alg(FILE_A, 1);
    let bk = sq_alg(FILE_A, 8);
    let wp = sq_alg(FILE_E, 7);
    color[wk as usize] = LIGHT;
    piece[wk as usize] = KING;
    color[bk as usize] = DARK;
    piece[bk as usize] = KING;
    color[wp as usize] = LIGHT;
    piece[wp as usize] = PAWN;

    let mut engine = Engine::new();
    engine.load_position(color, piece, LIGHT, CASTLE_NONE);
    engine.gen();

    let first = engine.first_move[engine.ply];
    let last = engine.first_move[engine.ply + 1];
    let e8 = sq_alg(FILE_E, 8);
    let promos: Vec<PieceType> = (first..last)
        .map(|i| engine.move_stack[i].mv)
        .filter(|mv| mv.to == e8 && mv.is_promotion())
        .map(|mv| mv.promote)
        .collect();

    assert_eq!(promos.len(), 4);
    for want in [KNIGHT, BISHOP, ROOK, QUEEN] {
        assert!(promos.contains(&want), "missing promotion to piece {want}");
    }
}
