use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use scacchi_core::{Board, Move};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("scacchi starting");

    let mut board = Board::starting_position();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", board.pretty());
    println!("enter moves as e2e4; commands: board, reset, quit");
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        debug!(%input, "read input");

        match input {
            "" => {}
            "quit" => break,
            "reset" => {
                board.reset();
                println!("{}", board.pretty());
            }
            "board" => println!("{board}"),
            _ => match Move::from_uci(input) {
                Some(mv) => apply(&mut board, mv),
                None => println!("unrecognized input: {input}"),
            },
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

/// Apply one candidate move, reporting captures and rejections.
fn apply(board: &mut Board, mv: Move) {
    match board.make_move(mv) {
        Ok(Some(captured)) => {
            println!("{mv} takes {captured:?}");
            println!("{}", board.pretty());
        }
        Ok(None) => println!("{}", board.pretty()),
        Err(err) => println!("{err}"),
    }
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("> ");
    stdout.flush()?;
    Ok(())
}
