use crate::{
    diagnostics::Diagnostic, functions::FunctionRegistry, memory::MemoryBank,
    parser::ExpressionParser,
};

/// Outcome of evaluating one expression: the numeric result plus any
/// diagnostics recorded while producing it.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub value: f64,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// True when no diagnostic was recorded. The value may still be
    /// non-finite from IEEE domain errors such as `log(0)`.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Public entry point: owns the function registry and the memory bank and
/// evaluates one expression string at a time.
pub struct Evaluator {
    registry: FunctionRegistry,
    memory: MemoryBank,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            registry: FunctionRegistry::new(),
            memory: MemoryBank::new(),
        }
    }

    /// Evaluates `text` over a fresh cursor. Trailing unconsumed characters
    /// are ignored. For arithmetic-only input this is a pure function of
    /// the text; memory state never participates.
    pub fn evaluate(&self, text: &str) -> Evaluation {
        let (value, diagnostics) = ExpressionParser::new(text, &self.registry).run();
        Evaluation { value, diagnostics }
    }

    pub fn store(&mut self, value: f64) -> Result<(), Diagnostic> {
        self.memory.store(value)
    }

    pub fn recall(&self, index: i64) -> Result<f64, Diagnostic> {
        self.memory.recall(index)
    }

    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    pub fn memory(&self) -> &MemoryBank {
        &self.memory
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }
}
