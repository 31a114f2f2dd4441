use std::fmt;

use thiserror::Error;

/// Represents a byte span within an input expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Classification of a recoverable evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownFunction,
    DivisionByZero,
    InvalidMemoryIndex,
    MemoryFull,
    /// Classification of the literal scanner's failure mode. The lenient
    /// evaluator yields zero instead of emitting this; a strict caller can
    /// use it to classify rejected literals.
    MalformedNumber,
}

/// Diagnostic information surfaced to end users.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " ({}..{})", span.start, span.end)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Unified error type for the calculator toolchain.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
