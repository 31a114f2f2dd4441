use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};

use scicalc::{
    CalcError,
    repl::{LineOutcome, Repl},
};

#[derive(Parser)]
#[command(author, version, about = "Scientific expression calculator")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a file of expressions and calculator commands line by line
    Run { script: PathBuf },
    /// Start an interactive calculator session
    Repl,
    /// Evaluate a single expression or calculator command
    Eval { expression: String },
}

fn main() -> Result<(), CalcError> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Repl) {
        Command::Run { script } => run_script(script),
        Command::Repl => {
            let mut repl = Repl::new();
            repl.run()
        }
        Command::Eval { expression } => {
            let mut repl = Repl::new();
            repl.execute_line(expression.trim());
            Ok(())
        }
    }
}

fn run_script(path: PathBuf) -> Result<(), CalcError> {
    let source = fs::read_to_string(&path)?;
    let mut repl = Repl::new();
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if repl.execute_line(trimmed) == LineOutcome::Quit {
            break;
        }
    }
    Ok(())
}
