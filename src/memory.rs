use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Number of scalar slots available to `store`.
pub const MEMORY_CAPACITY: usize = 10;

/// Ordered bank of stored scalar values, append-only with reset. Slots are
/// indexed 0-based by insertion order.
#[derive(Debug, Default)]
pub struct MemoryBank {
    slots: Vec<f64>,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Appends `value` if a slot is free; a full bank is left untouched.
    pub fn store(&mut self, value: f64) -> Result<(), Diagnostic> {
        if self.slots.len() >= MEMORY_CAPACITY {
            return Err(Diagnostic::new(DiagnosticKind::MemoryFull, "Memory is full"));
        }
        self.slots.push(value);
        Ok(())
    }

    /// Returns the value at `index`; indices outside `[0, len)` are invalid.
    pub fn recall(&self, index: i64) -> Result<f64, Diagnostic> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.slots.get(idx).copied())
            .ok_or_else(|| {
                Diagnostic::new(DiagnosticKind::InvalidMemoryIndex, "Invalid memory index")
            })
    }

    /// Empties every slot; succeeds unconditionally and is idempotent.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
