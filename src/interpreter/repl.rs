use std::io;

use tracing::info;

use crate::{
    error::Halt,
    interpreter::{evaluator::core::Evaluator, terminal::Console},
    util::num::format_number,
};

/// Printed for a line that produced no value.
pub const NO_VALUE: &str = "no value";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user typed `exit`.
    Exit,
    /// The input ran out.
    EndOfInput,
}

impl<C: Console> Evaluator<C> {
    /// Runs the read-eval-print loop until `exit` or the end of input.
    ///
    /// Every line prints exactly one outcome: its value, or `no value` after
    /// an error report. On termination the farewell is printed and the
    /// output flushed; ending the process is left to the caller.
    ///
    /// # Errors
    /// Returns the I/O error if the console fails.
    pub fn run(&mut self) -> io::Result<Termination> {
        info!("session started");
        loop {
            let termination = match self.evaluate() {
                Ok(Some(value)) => {
                    self.lexer.console_mut().write_line(&format_number(value))?;
                    continue;
                },
                Ok(None) => {
                    self.lexer.console_mut().write_line(NO_VALUE)?;
                    continue;
                },
                Err(Halt::Exit) => Termination::Exit,
                Err(Halt::EndOfInput) => Termination::EndOfInput,
                Err(Halt::Io(error)) => return Err(error),
            };

            info!(?termination, "session ended");
            let farewell = format!("\n{}", self.config.farewell);
            let console = self.lexer.console_mut();
            console.write_line(&farewell)?;
            console.flush()?;
            return Ok(termination);
        }
    }
}
