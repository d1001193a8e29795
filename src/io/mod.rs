//! Shared front-end plumbing: the board printout and the end-of-game
//! result check both the console shell and the GUI wire protocol use.

pub mod console;
pub mod xboard;

use crate::basetypes::*;
use crate::engine::Engine;
use crate::error::{IllegalMoveError, TimeControlError};
use crate::moves::Move;
use crate::notation::parse_move;

/// Parses `text` as coordinate notation and plays it against `engine`.
/// Reports (to stderr) and returns `IllegalMoveError` if the text parses
/// but isn't legal right now; a parse failure is reported by
/// `notation::parse_move`'s own `MoveParseError` instead, propagated
/// via `?`.
pub fn play_move_text(engine: &mut Engine, text: &str) -> Result<Move, crate::error::MoveParseError> {
    let mv = parse_move(engine, text)?;
    if engine.makemove(mv) {
        Ok(mv)
    } else {
        eprintln!("{}", IllegalMoveError);
        Err(crate::error::MoveParseError::Malformed(text.to_string()))
    }
}

/// Parses a command line's second whitespace-separated word as a
/// numeric argument to `st`/`sd`/`time`, reporting `TimeControlError`
/// (to stderr) on anything non-numeric.
pub fn numeric_arg(line: &str) -> Result<u64, TimeControlError> {
    let text = line.split_whitespace().nth(1).unwrap_or("");
    text.parse().map_err(|_| {
        let err = TimeControlError(text.to_string());
        eprintln!("{err}");
        err
    })
}

/// Whether `engine`'s side to move has at least one legal reply.
fn has_legal_move(engine: &mut Engine) -> bool {
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
    found
}

/// Checks for checkmate, stalemate, repetition and the fifty-move rule,
/// printing the appropriate termination string if the game is over.
pub fn print_result(engine: &mut Engine) {
    if !has_legal_move(engine) {
        if engine.in_check(engine.side) {
            if engine.side == LIGHT {
                println!("0-1 {{Black mates}}");
            } else {
                println!("1-0 {{White mates}}");
            }
        } else {
            println!("1/2-1/2 {{Stalemate}}");
        }
    } else if engine.reps() == 3 {
        println!("1/2-1/2 {{Draw by repetition}}");
    } else if engine.fifty >= 100 {
        println!("1/2-1/2 {{Draw by fifty move rule}}");
    }
}

/// Prints an 8x8 ASCII board, White pieces uppercase, Black lowercase.
pub fn print_board(engine: &Engine) {
    println!();
    print!("8 ");
    for sq in 0..SQUARE_COUNT as Square {
        match engine.color[sq as usize] {
            LIGHT => print!(" {}", PIECE_CHARS[engine.piece[sq as usize] as usize]),
            DARK => print!(" {}", PIECE_CHARS[engine.piece[sq as usize] as usize].to_ascii_lowercase()),
            _ => print!(" ."),
        }
        if file(sq) == FILE_H && sq != SQ_H1 {
            print!("\n{} ", RANK_1 - rank(sq));
        }
    }
    println!("\n\n   a b c d e f g h\n");
}
