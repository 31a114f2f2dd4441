//! Core library for the scicalc scientific calculator.
//! Implements expression scanning, recursive-descent evaluation, the
//! function registry and memory bank, and REPL utilities.

pub mod cursor;
pub mod diagnostics;
pub mod evaluator;
pub mod functions;
pub mod memory;
pub mod parser;
pub mod repl;

pub use diagnostics::{CalcError, Diagnostic, DiagnosticKind, SourceSpan};
pub use evaluator::{Evaluation, Evaluator};
pub use repl::Repl;
