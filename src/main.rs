use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;

use quill::cli::{generate_completions, Args, Commands};
use quill::config::AppConfig;
use quill::interpreter::{self, eval_program, Environment};
use quill::repl;

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    match &args.script {
        Some(path) => run_file(path, &config),
        None => repl::start(&config),
    }
}

fn run_file(path: &Path, config: &AppConfig) {
    verbose_log(config, &format!("Reading script: {}", path.display()));

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            error_message(
                config,
                &format!("Failed to read {}: {}", path.display(), error),
            );
            std::process::exit(1);
        }
    };

    let (program, errors) = interpreter::parse(&source);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Parse error: {}", error);
        }
        std::process::exit(1);
    }

    verbose_log(
        config,
        &format!("Parsed {} statements", program.statements.len()),
    );

    let env = Environment::new();
    if let Err(error) = eval_program(&program, &env) {
        error_message(config, &format!("ERROR: {}", error));
        std::process::exit(1);
    }
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[quill:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
