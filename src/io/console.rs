//! The interactive `tscp>` command shell.

use crate::basetypes::NO_COLOR;
use crate::engine::search::OutputMode;
use crate::engine::Engine;
use crate::io::{numeric_arg, play_move_text};
use crate::notation::move_str;
use crate::perft;
use std::io::{self, BufRead, Write};

/// Runs the console shell to completion (`bye`) or until stdin closes.
/// Returns `true` if the user asked to switch to the GUI protocol.
pub fn run(engine: &mut Engine) -> io::Result<bool> {
    println!();
    println!("Tom Kerrigan's Simple Chess Program (TSCP)");
    println!();
    println!("\"help\" displays a list of commands.");
    println!();

    let mut computer_side = NO_COLOR;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if engine.side == computer_side {
            think_and_move(engine);
            continue;
        }

        print!("tscp> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(false),
        };
        let word = line.split_whitespace().next().unwrap_or("");

        match word {
            "on" => computer_side = engine.side,
            "off" => computer_side = NO_COLOR,
            "st" => {
                if let Ok(secs) = numeric_arg(&line) {
                    engine.max_time = secs * 1000;
                    engine.max_depth = 32;
                }
            }
            "sd" => {
                if let Ok(depth) = numeric_arg(&line) {
                    engine.max_depth = depth as u32;
                    engine.max_time = 1 << 25;
                }
            }
            "undo" => {
                if engine.hply > 0 {
                    computer_side = NO_COLOR;
                    engine.takeback();
                    engine.ply = 0;
                }
            }
            "new" => {
                computer_side = NO_COLOR;
                engine.init_board();
            }
            "d" => crate::io::print_board(engine),
            "bench" => {
                computer_side = NO_COLOR;
                perft::bench(engine);
            }
            "perft" => {
                if let Ok(depth) = numeric_arg(&line) {
                    let start = crate::time::now_ms();
                    let nodes = perft::perft(engine, depth as u32);
                    let elapsed = (crate::time::now_ms() - start).max(1);
                    let mhz = nodes as f64 / elapsed as f64 / 1000.0;
                    println!("perft({depth}): {nodes}   {mhz:.3} MHz");
                }
            }
            "bye" => {
                println!("Share and enjoy!");
                return Ok(false);
            }
            "xboard" => return Ok(true),
            "help" => print_help(),
            "" => {}
            _ => match play_move_text(engine, word) {
                Ok(_) => {
                    engine.ply = 0;
                    crate::io::print_result(engine);
                }
                Err(_) => println!("Illegal move."),
            },
        }
    }
}

fn think_and_move(engine: &mut Engine) {
    engine.think(OutputMode::Console);
    if engine.pv_length[0] == 0 {
        println!("(no legal moves)");
        return;
    }
    let mv = engine.pv[0][0];
    println!("Computer's move: {}", move_str(mv));
    engine.makemove(mv);
    engine.ply = 0;
    crate::io::print_result(engine);
}

fn print_help() {
    println!("on - computer plays for the side to move");
    println!("off - computer stops playing");
    println!("st n - search for n seconds per move");
    println!("sd n - search n ply per move");
    println!("undo - takes back a move");
    println!("new - starts a new game");
    println!("d - display the board");
    println!("bench - run the built-in benchmark");
    println!("perft n - count movepaths to depth n");
    println!("bye - exit the program");
    println!("xboard - switch to XBoard mode");
    println!("Enter moves in coordinate notation, e.g., e2e4, e7e8q");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn think_and_move_updates_the_game() {
        let mut engine = Engine::new();
        engine.max_depth = 1;
        engine.max_time = 1 << 20;
        let before = engine.hply;
        think_and_move(&mut engine);
        assert_eq!(engine.hply, before + 1);
    }
}
