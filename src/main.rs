//! Entry point: runs the console shell, switching to the xboard wire
//! protocol if the shell requests it (typed `xboard`) or if invoked
//! with `--xboard` directly, the way WinBoard/XBoard launches engines.

use std::io;
use tscp::engine::Engine;
use tscp::io::{console, xboard};

fn main() -> io::Result<()> {
    let mut engine = Engine::new();

    if std::env::args().any(|a| a == "--xboard") {
        return xboard::run(&mut engine);
    }

    if console::run(&mut engine)? {
        xboard::run(&mut engine)?;
    }
    Ok(())
}
