use crate::{
    cursor::Cursor,
    diagnostics::{Diagnostic, DiagnosticKind, SourceSpan},
    functions::FunctionRegistry,
};

/// Direct-evaluating recursive descent over a single expression.
///
/// Recoverable errors are recorded as diagnostics and surface as NaN, which
/// poisons the surrounding arithmetic instead of aborting the parse.
pub struct ExpressionParser<'a> {
    cursor: Cursor<'a>,
    registry: &'a FunctionRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ExpressionParser<'a> {
    pub fn new(source: &'a str, registry: &'a FunctionRegistry) -> Self {
        Self {
            cursor: Cursor::new(source),
            registry,
            diagnostics: Vec::new(),
        }
    }

    /// Parses one term and returns the value together with every diagnostic
    /// recorded along the way. Trailing unconsumed input is tolerated.
    pub fn run(mut self) -> (f64, Vec<Diagnostic>) {
        let value = self.parse_term();
        (value, self.diagnostics)
    }

    /// term := factor { ('+' | '-') factor }
    ///
    /// Left-associative accumulation into a running total; the sole entry
    /// into factor parsing, which gives `*`, `/`, `^` higher precedence.
    fn parse_term(&mut self) -> f64 {
        let mut value = self.parse_factor();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat('+') {
                value += self.parse_factor();
            } else if self.cursor.eat('-') {
                value -= self.parse_factor();
            } else {
                break;
            }
        }
        value
    }

    /// factor := '(' term ')' | identifier [ '(' term ')' ] | number,
    /// followed by a `*`/`/`/`^` chain.
    ///
    /// Each chain operator takes a recursive `parse_factor` call as its
    /// right operand, so these operators bind to the factor immediately
    /// after them: `2^3^2` is `2^(3^2)` and `8/4/2` is `8/(4/2)`.
    fn parse_factor(&mut self) -> f64 {
        self.cursor.skip_whitespace();
        let mut value = if self.cursor.eat('(') {
            self.parse_grouped()
        } else if let Some((name, span)) = self.cursor.scan_identifier() {
            self.parse_application(name, span)
        } else {
            // A literal that fails to scan consumes nothing and counts as 0.
            self.cursor.scan_number().unwrap_or(0.0)
        };

        loop {
            self.cursor.skip_whitespace();
            let operator_at = self.cursor.pos();
            if self.cursor.eat('*') {
                value *= self.parse_factor();
            } else if self.cursor.eat('/') {
                let divisor = self.parse_factor();
                if divisor == 0.0 {
                    self.report(
                        DiagnosticKind::DivisionByZero,
                        "Division by zero",
                        SourceSpan::new(operator_at, operator_at + 1),
                    );
                    return f64::NAN;
                }
                value /= divisor;
            } else if self.cursor.eat('^') {
                value = value.powf(self.parse_factor());
            } else {
                break;
            }
        }
        value
    }

    /// Body of a parenthesized group, entered with `(` already consumed.
    /// A missing closing `)` is tolerated.
    fn parse_grouped(&mut self) -> f64 {
        let value = self.parse_term();
        self.cursor.skip_whitespace();
        self.cursor.eat(')');
        value
    }

    /// A named function application or constant reference. Without a
    /// parenthesized argument the name must resolve to a constant; the
    /// placeholder argument 0.0 is ignored by constant entries.
    fn parse_application(&mut self, name: &str, span: SourceSpan) -> f64 {
        self.cursor.skip_whitespace();
        let argument = if self.cursor.eat('(') {
            self.parse_grouped()
        } else {
            0.0
        };
        match self.registry.lookup(name) {
            Some(operation) => operation.apply(argument),
            None => {
                self.report(DiagnosticKind::UnknownFunction, "Invalid function", span);
                f64::NAN
            }
        }
    }

    fn report(&mut self, kind: DiagnosticKind, message: &str, span: SourceSpan) {
        self.diagnostics
            .push(Diagnostic::new(kind, message).with_span(span));
    }
}
