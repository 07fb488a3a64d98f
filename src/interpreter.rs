/// The evaluator module interprets token streams as postfix expressions.
///
/// It owns the operand stack, the symbol table and the assignment target,
/// drives the lexer, and reports malformed lines with source context before
/// resynchronizing to the next line.
///
/// # Responsibilities
/// - Evaluates one line per call, including the leading-variable forms.
/// - Stores each result under the current assignment target.
/// - Turns per-line errors into a printed report and "no value".
pub mod evaluator;
/// The lexer module tokenizes terminal input.
///
/// A hand-written scanner that pulls characters from the current line,
/// prompting for the next line when it runs out, and classifies them into
/// numbers, variables, operators, the `@` end-of-line marker and invalid
/// characters.
pub mod lexer;
/// The read-eval-print loop.
///
/// Evaluates lines until the user types `exit` or the input ends, printing
/// one outcome per line and a farewell at the end.
pub mod repl;
/// The terminal collaborator.
///
/// Abstracts the line-oriented input and text output a session uses, so the
/// same code runs against stdin/stdout and in-memory buffers.
pub mod terminal;
