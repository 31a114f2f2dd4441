use std::f64::consts;

use indexmap::IndexMap;

/// A single registry entry: a unary transform applied to an argument, or a
/// niladic constant that ignores it.
#[derive(Clone, Copy)]
pub enum Operation {
    Unary(fn(f64) -> f64),
    Constant(f64),
}

impl Operation {
    pub fn apply(&self, argument: f64) -> f64 {
        match self {
            Operation::Unary(transform) => transform(argument),
            Operation::Constant(value) => *value,
        }
    }
}

/// Immutable table of named functions and constants, built once when the
/// evaluator is constructed. Names are case-sensitive and unique.
///
/// Math-domain errors (`asin` outside [-1, 1], `log` of a non-positive
/// number) are not validated here; IEEE NaN/infinity semantics propagate.
pub struct FunctionRegistry {
    entries: IndexMap<&'static str, Operation>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("sin", Operation::Unary(f64::sin));
        entries.insert("cos", Operation::Unary(f64::cos));
        entries.insert("tan", Operation::Unary(f64::tan));
        entries.insert("asin", Operation::Unary(f64::asin));
        entries.insert("acos", Operation::Unary(f64::acos));
        entries.insert("atan", Operation::Unary(f64::atan));
        entries.insert("log", Operation::Unary(f64::ln));
        entries.insert("log10", Operation::Unary(f64::log10));
        entries.insert("sqrt", Operation::Unary(f64::sqrt));
        entries.insert("exp", Operation::Unary(f64::exp));
        entries.insert("abs", Operation::Unary(f64::abs));
        entries.insert("PI", Operation::Constant(consts::PI));
        entries.insert("E", Operation::Constant(consts::E));
        Self { entries }
    }

    /// Exact string match, no aliasing.
    pub fn lookup(&self, name: &str) -> Option<Operation> {
        self.entries.get(name).copied()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
