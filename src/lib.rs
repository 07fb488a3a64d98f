//! # deskcalc
//!
//! deskcalc is an interactive reverse Polish desk calculator written in Rust.
//! It reads lines from a terminal, evaluates postfix expressions on an operand
//! stack, stores results in named variables, and prints one result per line.
//!
//! ```text
//! >> 3 4 + @
//! 7
//! >> rate = 2 10 / @
//! 5
//! >> rate it * @
//! 35
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    config::Config,
    interpreter::{evaluator::core::Evaluator, repl::Termination, terminal::Terminal},
};

/// Session settings.
///
/// Holds the prompt, the farewell message and the initial assignment target,
/// with defaults matching the interactive calculator.
pub mod config;
/// Provides the error types for evaluation and session control.
///
/// Separates recoverable per-line errors, which are reported and answered
/// with "no value", from the signals that end a session: `exit`, end of
/// input, and terminal failures.
///
/// # Responsibilities
/// - Defines the per-line error enum and its user-facing messages.
/// - Defines the session-ending signals returned by the lexer.
/// - Combines both so evaluation can use a single `?` chain.
pub mod error;
/// Orchestrates scanning, evaluation and the read-eval-print loop.
///
/// This module ties together the terminal, the lexer and the evaluator to
/// provide a complete calculator session.
///
/// # Responsibilities
/// - Converts terminal input into tokens.
/// - Evaluates postfix expressions and manages variables.
/// - Prints results, diagnostics and the farewell.
pub mod interpreter;
/// General utilities: number parsing and rendering, and logging setup.
pub mod util;

/// Runs a whole calculator session over `input` and `output`.
///
/// Lines are read from `input` until `exit` or the end of input; prompts,
/// results, diagnostics and the farewell are written to `output`.
///
/// # Errors
/// Returns an error if reading or writing fails.
///
/// # Examples
/// ```
/// use deskcalc::{config::Config, interpreter::repl::Termination, run_session};
///
/// let mut output = Vec::new();
/// let end = run_session("3 4 + @\n5 # @\nEXIT\n".as_bytes(), &mut output, Config::default()).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert_eq!(end, Termination::Exit);
/// assert!(transcript.starts_with(">> 7\n>> Bad token: '#'\n5 # @\n  ^\nno value\n"));
/// assert!(transcript.ends_with("\nBye\n"));
/// ```
pub fn run_session<R: BufRead, W: Write>(input: R,
                                         output: W,
                                         config: Config)
                                         -> io::Result<Termination> {
    Evaluator::with_config(Terminal::new(input, output), config).run()
}
