/// Represents all errors that abort the evaluation of a single line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// A leading variable was followed by something other than `=`, `~`, an
    /// operand or the end-of-line marker.
    #[error("Invalid expression: unexpected '{token}' after a leading variable")]
    InvalidExpression {
        /// The offending token text.
        token: String,
    },
    /// The lexer could not classify a character.
    #[error("Bad token: '{token}'")]
    BadToken {
        /// The offending token text.
        token: String,
    },
    /// An operator needed more values than the stack held.
    #[error("Not enough operands")]
    NotEnoughOperands,
    /// The end-of-line marker was reached with more than one value left.
    #[error("Too many operands: {count} values left on the stack")]
    TooManyOperands {
        /// How many values were on the stack.
        count: usize,
    },
}
