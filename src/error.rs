/// Recoverable, per-line errors.
///
/// Everything that can go wrong while a single line is being scanned and
/// evaluated: malformed assignment prefixes, characters the lexer cannot
/// classify, and operand stacks that are too short or too long. These never
/// escape the line that produced them.
pub mod line_error;
/// Signals that end the session.
///
/// An explicit `exit`, the end of the input stream, or a failure of the
/// terminal itself. None of these are reported per line; they are handed up
/// to the read-eval-print loop.
pub mod halt;

pub use halt::Halt;
pub use line_error::LineError;

/// Anything evaluating a line can fail with.
///
/// Lets the evaluator use a single `?` chain for both recoverable line errors
/// and session-ending signals coming out of the lexer.
#[derive(thiserror::Error, Debug)]
pub enum EvalError {
    /// The line is malformed; report it and carry on with the next one.
    #[error(transparent)]
    Line(#[from] LineError),
    /// The session is over.
    #[error(transparent)]
    Halt(#[from] Halt),
}
