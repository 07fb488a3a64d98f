use crate::error::LineError;

/// The operand stack of the line being evaluated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Removes the most recently pushed value.
    ///
    /// # Errors
    /// [`LineError::NotEnoughOperands`] if the stack is empty.
    pub fn pop(&mut self) -> Result<f64, LineError> {
        self.values.pop().ok_or(LineError::NotEnoughOperands)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
