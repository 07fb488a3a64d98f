/// Line evaluation and the evaluator's state.
///
/// Holds the [`core::Evaluator`]: the lexer it drives, the operand stack, the
/// symbol table and the assignment target. Interprets one line of tokens per
/// call, including the leading-variable assignment forms.
pub mod core;

/// Error reporting with source context.
///
/// Prints the message, echoes the offending line with a caret under the
/// position where scanning stopped, and resynchronizes the lexer.
pub mod report;

/// The operand stack.
pub mod stack;
