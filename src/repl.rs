use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::interpreter::{self, eval_program, Environment};

const PROMPT: &str = ">> ";

/// The interactive driver: one environment for the whole session, so
/// bindings from earlier lines stay visible. Each line is parsed on its
/// own; parse errors are reported without evaluating and without
/// touching the environment.
pub fn start(config: &AppConfig) {
    println!("quill {}", env!("CARGO_PKG_VERSION"));
    println!("Exit with Ctrl+D, or type 'exit'.");

    let env = Environment::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                error_message(config, &format!("Error reading input: {}", error));
                break;
            }
            None => break,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let (program, errors) = interpreter::parse(&line);
        if !errors.is_empty() {
            for error in &errors {
                error_message(config, &format!("Parse error: {}", error));
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(value) => println!("{}", value),
            Err(error) => error_message(config, &format!("ERROR: {}", error)),
        }
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
