use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    diagnostics::{CalcError, Result},
    evaluator::{Evaluation, Evaluator},
};

const HELP_TEXT: &str = "\
Available commands and functions:
  - Basic arithmetic: +, -, *, /, ^
  - Trigonometric functions: sin(x), cos(x), tan(x)
  - Inverse trigonometric functions: asin(x), acos(x), atan(x)
  - Logarithmic functions: log(x) (natural), log10(x) (base 10)
  - Exponential function: exp(x)
  - Square root: sqrt(x)
  - Absolute value: abs(x)
  - Constants: PI, E (pi and e are accepted as aliases)
  - Memory: store(value), recall(index), clear
  - To quit, type 'exit'";

/// One line of session input, dispatched before any expression parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Help,
    Clear,
    Store(&'a str),
    Recall(i64),
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Splits a trimmed input line into a command. Literal commands are
    /// checked first; everything else is treated as an expression.
    pub fn parse(line: &'a str) -> Self {
        if line == "exit" {
            Command::Exit
        } else if line == "help" {
            Command::Help
        } else if line == "clear" {
            Command::Clear
        } else if let Some(rest) = line.strip_prefix("store(") {
            Command::Store(rest)
        } else if let Some(rest) = line.strip_prefix("recall(") {
            Command::Recall(parse_leading_int(rest))
        } else {
            Command::Evaluate(line)
        }
    }
}

/// Leading-integer parse: optional sign, then digits, ignoring everything
/// after them; no digits yields 0.
fn parse_leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if let Some(b'+' | b'-') = bytes.first().copied() {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    trimmed[..end].parse().unwrap_or(0)
}

/// Rewrites every standalone `pi` into `PI` and `e` into `E` in one forward
/// pass. Only whole identifiers match, so `exp(1)` and `1e3` are untouched.
pub fn expand_constant_aliases(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(ch) = input[pos..].chars().next() {
        if ch.is_alphabetic() {
            let start = pos;
            pos += ch.len_utf8();
            while let Some(next) = input[pos..].chars().next() {
                if next.is_alphanumeric() {
                    pos += next.len_utf8();
                } else {
                    break;
                }
            }
            match &input[start..pos] {
                "pi" => output.push_str("PI"),
                "e" => output.push_str("E"),
                other => output.push_str(other),
            }
        } else {
            output.push(ch);
            pos += ch.len_utf8();
        }
    }
    output
}

/// Whether the session should keep reading input after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

pub struct Repl {
    evaluator: Evaluator,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
        }
    }

    /// Executes one already-trimmed line: command dispatch, alias
    /// substitution, evaluation, and result printing. Recoverable errors are
    /// reported and never end the session.
    pub fn execute_line(&mut self, line: &str) -> LineOutcome {
        match Command::parse(line) {
            Command::Exit => return LineOutcome::Quit,
            Command::Help => println!("{HELP_TEXT}"),
            Command::Clear => {
                self.evaluator.clear_memory();
                println!("Memory cleared.");
            }
            Command::Store(expression) => {
                let evaluation = self.evaluate(expression);
                self.report(&evaluation);
                match self.evaluator.store(evaluation.value) {
                    Ok(()) => println!("Value stored in memory."),
                    Err(diagnostic) => eprintln!("Error: {}.", diagnostic.message),
                }
            }
            Command::Recall(index) => match self.evaluator.recall(index) {
                Ok(value) => println!("Recalled value: {value:.10}"),
                Err(diagnostic) => eprintln!("Error: {}.", diagnostic.message),
            },
            Command::Evaluate(expression) => {
                let evaluation = self.evaluate(expression);
                if self.report(&evaluation) {
                    if evaluation.value.is_finite() {
                        println!("Result: {:.10}", evaluation.value);
                    } else {
                        eprintln!("Error: Invalid result.");
                    }
                }
            }
        }
        LineOutcome::Continue
    }

    pub fn run(&mut self) -> Result<()> {
        println!("Scientific calculator. Type 'help' for a list of commands.");
        let mut editor = DefaultEditor::new().map_err(|err| {
            CalcError::from(std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    if self.execute_line(trimmed) == LineOutcome::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    return Err(CalcError::from(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        err,
                    )));
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, expression: &str) -> Evaluation {
        self.evaluator.evaluate(&expand_constant_aliases(expression))
    }

    /// Prints recorded diagnostics; returns true when there were none.
    fn report(&self, evaluation: &Evaluation) -> bool {
        for diagnostic in &evaluation.diagnostics {
            eprintln!("Error: {}.", diagnostic.message);
        }
        evaluation.is_ok()
    }
}
