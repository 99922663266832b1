//! Interactive help shell (`geociv tutor`).

pub mod commands;

use crate::error::BotError;
use commands::{respond, Flow, TutorCommand, WELCOME};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::debug;

const PROMPT: &str = "You: ";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Read lines until `exit`, `quit` or end of input.
pub fn run() -> Result<(), BotError> {
    let config = Config::builder()
        .auto_add_history(true)
        .max_history_size(500)?
        .history_ignore_space(true)
        .build();
    let mut rl = DefaultEditor::with_config(config)?;

    println!("{}", WELCOME);
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let command = TutorCommand::parse(&line);
                debug!(?command, "tutor command");

                let reply = respond(&command);
                match reply.flow {
                    Flow::Continue => {
                        if !reply.text.is_empty() {
                            println!("\n{}", reply.text);
                        }
                    }
                    Flow::Clear => {
                        print!("{}", CLEAR_SCREEN);
                        println!("{}", reply.text);
                    }
                    Flow::Exit => {
                        println!("\n{}", reply.text);
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Type 'exit' or press CTRL-D to leave the tutor");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
