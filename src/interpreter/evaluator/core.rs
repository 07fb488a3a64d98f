use std::collections::HashMap;

use tracing::debug;

use crate::{
    config::Config,
    error::{EvalError, Halt, LineError},
    interpreter::{
        evaluator::stack::OperandStack,
        lexer::{Lexer, Token, TokenKind},
        terminal::Console,
    },
    util::num::parse_literal,
};

/// Result type used while evaluating a line.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed as the first word of a line, in any letter case, ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Evaluates postfix expressions one line at a time.
///
/// Tokens come from the owned [`Lexer`]. Each line is evaluated on a fresh
/// operand stack; its single remaining value is stored in the symbol table
/// under the current assignment target and returned. Variables keep their
/// values for the lifetime of the evaluator, and unknown variables read as
/// `0`.
///
/// Operators pop their right operand last: `a b -` computes `b - a`, and
/// `a b /` computes `b / a`.
///
/// ## Example
/// ```
/// use deskcalc::interpreter::{evaluator::core::Evaluator, terminal::Terminal};
///
/// let input = "x = 2 3 * @\nx 1 - @\n";
/// let mut evaluator = Evaluator::new(Terminal::new(input.as_bytes(), Vec::new()));
///
/// assert_eq!(evaluator.evaluate().unwrap(), Some(6.0));
/// assert_eq!(evaluator.evaluate().unwrap(), Some(-5.0));
/// assert_eq!(evaluator.variable("x"), -5.0);
/// ```
#[derive(Debug)]
pub struct Evaluator<C> {
    pub(crate) lexer:  Lexer<C>,
    stack:             OperandStack,
    symbols:           HashMap<String, f64>,
    target:            String,
    pub(crate) config: Config,
}

impl<C: Console> Evaluator<C> {
    /// Creates an evaluator with the default prompt, farewell and target.
    pub fn new(console: C) -> Self {
        Self::with_config(console, Config::default())
    }

    pub fn with_config(console: C, config: Config) -> Self {
        Self { lexer: Lexer::new(console, config.prompt.clone()),
               stack: OperandStack::new(),
               symbols: HashMap::new(),
               target: config.default_target.clone(),
               config }
    }

    /// Evaluates one line.
    ///
    /// Line errors are reported on the console with source context and turn
    /// into `Ok(None)`; the lexer is resynchronized to the next line.
    ///
    /// # Returns
    /// - `Ok(Some(value))`: the line's value, also stored in the target.
    /// - `Ok(None)`: the line was malformed and has been reported.
    ///
    /// # Errors
    /// A [`Halt`] when the user typed `exit`, the input ran out, or the
    /// console failed.
    pub fn evaluate(&mut self) -> Result<Option<f64>, Halt> {
        self.stack.clear();
        match self.eval_line() {
            Ok(value) => {
                debug!(variable = %self.target, value, "line evaluated");
                Ok(Some(value))
            },
            Err(EvalError::Line(error)) => {
                self.stack.clear();
                self.report(&error)?;
                Ok(None)
            },
            Err(EvalError::Halt(halt)) => Err(halt),
        }
    }

    /// The value of `name`, or `0` if it was never assigned.
    #[must_use]
    pub fn variable(&self, name: &str) -> f64 {
        self.symbols.get(name).copied().unwrap_or(0.0)
    }

    /// The variable that receives the next result.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn into_console(self) -> C {
        self.lexer.into_console()
    }
}

impl<C: Console> Evaluator<C> {
    /// Interprets the tokens of one line.
    ///
    /// A leading variable gets special treatment for its second token:
    /// - `=`: the variable becomes the assignment target and the rest of the
    ///   line is its new value. An empty rest keeps the current value.
    /// - `~`: the variable's value is negated.
    /// - a number or variable: pushed as usual.
    /// - `@`: a bare read, the variable's value goes to the target.
    ///
    /// Anything else after a leading variable is an invalid expression.
    fn eval_line(&mut self) -> EvalResult<f64> {
        let mut token = self.lexer.next_token()?;

        if token.kind == TokenKind::Variable && token.text.eq_ignore_ascii_case(EXIT_COMMAND) {
            return Err(Halt::Exit.into());
        }

        if token.kind == TokenKind::Variable {
            let name = token.text;
            let value = self.variable(&name);
            self.stack.push(value);

            token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Assign => {
                    let current = self.stack.pop()?;
                    debug!(%name, "assignment target changed");
                    self.target = name;
                    token = self.lexer.next_token()?;
                    if token.kind == TokenKind::EndOfLine {
                        self.stack.push(current);
                    }
                },
                TokenKind::Negate => {
                    self.negate()?;
                    token = self.lexer.next_token()?;
                },
                TokenKind::Number | TokenKind::Variable => {
                    self.push_operand(&token)?;
                    token = self.lexer.next_token()?;
                },
                TokenKind::EndOfLine => return self.finish(),
                _ => {
                    return Err(LineError::InvalidExpression { token: token.text }.into());
                },
            }
        }

        loop {
            match token.kind {
                TokenKind::Number | TokenKind::Variable => self.push_operand(&token)?,
                TokenKind::Negate => self.negate()?,
                TokenKind::Add => self.apply_binary(|first, second| first + second)?,
                TokenKind::Subtract => self.apply_binary(|first, second| first - second)?,
                TokenKind::Multiply => self.apply_binary(|first, second| first * second)?,
                TokenKind::Divide => self.apply_binary(|first, second| first / second)?,
                TokenKind::EndOfLine => return self.finish(),
                TokenKind::Invalid => {
                    return Err(LineError::BadToken { token: token.text }.into());
                },
                // Only meaningful right after a leading variable.
                TokenKind::Assign => debug!("ignoring '=' inside an expression"),
            }
            token = self.lexer.next_token()?;
        }
    }

    fn push_operand(&mut self, token: &Token) -> EvalResult<()> {
        let value = match token.kind {
            TokenKind::Number => parse_literal(&token.text)?,
            _ => self.variable(&token.text),
        };
        self.stack.push(value);
        Ok(())
    }

    fn negate(&mut self) -> EvalResult<()> {
        let value = self.stack.pop()?;
        self.stack.push(-value);
        Ok(())
    }

    /// Pops `first`, then `second`, and pushes `op(first, second)`.
    fn apply_binary(&mut self, op: impl FnOnce(f64, f64) -> f64) -> EvalResult<()> {
        let first = self.stack.pop()?;
        let second = self.stack.pop()?;
        self.stack.push(op(first, second));
        Ok(())
    }

    /// Stores the line's single remaining value in the assignment target.
    fn finish(&mut self) -> EvalResult<f64> {
        let value = self.stack.pop()?;
        if !self.stack.is_empty() {
            return Err(LineError::TooManyOperands { count: self.stack.len() + 1 }.into());
        }
        self.symbols.insert(self.target.clone(), value);
        Ok(value)
    }
}
