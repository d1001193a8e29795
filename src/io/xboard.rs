//! The xboard/WinBoard wire protocol subset named in the external
//! interface spec: `new`, `quit`, `force`, `white`/`black`, `st`/`sd`,
//! `time`, `otim` (ignored), `go`, `hint`, `undo`, `remove`,
//! `post`/`nopost`, plus bare coordinate moves.

use crate::basetypes::{DARK, LIGHT, NO_COLOR};
use crate::engine::search::OutputMode;
use crate::engine::Engine;
use crate::io::{numeric_arg, play_move_text};
use crate::notation::move_str;
use std::io::{self, BufRead};

/// Runs the GUI protocol loop until `quit` or stdin closes. The
/// computer-side check runs at the top of every iteration, exactly as
/// in the console shell, so it fires as soon as a command (`go`,
/// `white`, an opponent's move, ...) hands the move to the engine --
/// not only after the next line is read.
pub fn run(engine: &mut Engine) -> io::Result<()> {
    println!();
    engine.init_board();

    let mut computer_side = NO_COLOR;
    let mut post = false;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if engine.side == computer_side {
            let output = if post { OutputMode::XBoard } else { OutputMode::None };
            engine.think(output);
            if engine.pv_length[0] == 0 {
                computer_side = NO_COLOR;
                continue;
            }
            let mv = engine.pv[0][0];
            println!("move {}", move_str(mv));
            engine.makemove(mv);
            engine.ply = 0;
            crate::io::print_result(engine);
            continue;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        if line.is_empty() {
            continue;
        }
        let command = line.split_whitespace().next().unwrap_or("");

        match command {
            "xboard" => {}
            "new" => {
                engine.init_board();
                computer_side = DARK;
            }
            "quit" => return Ok(()),
            "force" => computer_side = NO_COLOR,
            "white" => {
                engine.side = LIGHT;
                engine.xside = DARK;
                computer_side = DARK;
            }
            "black" => {
                engine.side = DARK;
                engine.xside = LIGHT;
                computer_side = LIGHT;
            }
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
            "time" => {
                if let Ok(centiseconds) = numeric_arg(&line) {
                    engine.max_time = centiseconds * 10 / 30;
                    engine.max_depth = 32;
                }
            }
            "otim" => {}
            "go" => computer_side = engine.side,
            "hint" => {
                engine.think(OutputMode::None);
                if engine.pv_length[0] > 0 {
                    println!("Hint: {}", move_str(engine.pv[0][0]));
                }
            }
            "undo" => {
                if engine.hply > 0 {
                    engine.takeback();
                    engine.ply = 0;
                }
            }
            "remove" => {
                if engine.hply >= 2 {
                    engine.takeback();
                    engine.takeback();
                    engine.ply = 0;
                }
            }
            "post" => post = true,
            "nopost" => post = false,
            _ => match play_move_text(engine, command) {
                Ok(_) => {
                    engine.ply = 0;
                    crate::io::print_result(engine);
                }
                Err(_) => println!("Error (unknown command): {command}"),
            },
        }
    }
}
