use tracing::debug;

use crate::{
    error::{Halt, LineError},
    interpreter::{evaluator::core::Evaluator, terminal::Console},
};

/// Marker printed under the offending character.
pub const CARET: char = '^';

/// Builds the line that points at the character before `position`.
///
/// `position` is one past the last character the lexer read, as returned by
/// [`Lexer::current_position`](crate::interpreter::lexer::Lexer::current_position).
///
/// ## Example
/// ```
/// use deskcalc::interpreter::evaluator::report::caret_line;
///
/// assert_eq!(caret_line(1), "^");
/// assert_eq!(caret_line(4), "   ^");
/// ```
#[must_use]
pub fn caret_line(position: usize) -> String {
    let mut line = " ".repeat(position.saturating_sub(1));
    line.push(CARET);
    line
}

impl<C: Console> Evaluator<C> {
    /// Prints `error`, the current line and a caret under the position where
    /// scanning stopped, then discards the rest of the line.
    pub(super) fn report(&mut self, error: &LineError) -> Result<(), Halt> {
        debug!(%error, position = self.lexer.current_position(), "line rejected");

        let source = self.lexer.current_line();
        let marker = caret_line(self.lexer.current_position());
        let console = self.lexer.console_mut();
        console.write_line(&error.to_string())?;
        console.write_line(&source)?;
        console.write_line(&marker)?;

        self.lexer.flush();
        Ok(())
    }
}
