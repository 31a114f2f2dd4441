use crate::diagnostics::SourceSpan;

/// Read position within an expression during parsing.
///
/// The cursor only moves forward; the grammar needs no backtracking beyond
/// the bounded lookahead inside `scan_number`.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the next character if it matches `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// Scans an identifier: alphabetic start, alphanumeric continuation.
    /// Consumes nothing when the next character cannot start one.
    pub fn scan_identifier(&mut self) -> Option<(&'a str, SourceSpan)> {
        match self.peek() {
            Some(ch) if ch.is_alphabetic() => {}
            _ => return None,
        }
        let start = self.pos;
        self.bump();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                self.bump();
            } else {
                break;
            }
        }
        Some((
            &self.source[start..self.pos],
            SourceSpan::new(start, self.pos),
        ))
    }

    /// Scans a floating-point literal: optional sign, decimal digits with an
    /// optional fraction, and an exponent taken only when at least one digit
    /// follows it. A failed scan consumes nothing and returns `None`.
    pub fn scan_number(&mut self) -> Option<f64> {
        let bytes = self.source.as_bytes();
        let byte = |idx: usize| bytes.get(idx).copied();
        let start = self.pos;
        let mut pos = self.pos;

        if matches!(byte(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let mantissa_start = pos;
        while matches!(byte(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
        if matches!(byte(pos), Some(b'.')) {
            pos += 1;
            while matches!(byte(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        if !bytes[mantissa_start..pos].iter().any(u8::is_ascii_digit) {
            return None;
        }

        let mut end = pos;
        if matches!(byte(pos), Some(b'e' | b'E')) {
            let mut exp = pos + 1;
            if matches!(byte(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits_start = exp;
            while matches!(byte(exp), Some(b'0'..=b'9')) {
                exp += 1;
            }
            if exp > exp_digits_start {
                end = exp;
            }
        }

        let value = self.source[start..end].parse().ok()?;
        self.pos = end;
        Some(value)
    }
}
