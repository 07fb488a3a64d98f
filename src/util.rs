/// Numeric helpers shared by the evaluator and the read-eval-print loop.
///
/// Parses the literal text produced by the lexer and renders results the way
/// the calculator prints them.
pub mod num;
/// Diagnostic logging setup.
///
/// Installs a `tracing` subscriber that writes compact, level-prefixed lines
/// to stderr so the calculator's own transcript on stdout stays clean.
pub mod logger;
