use tracing::trace;

use crate::{error::Halt, interpreter::terminal::Console};

/// Appended to every line read so the scanner always sees a line boundary.
pub const LINE_TERMINATOR: char = '\n';

/// Classifies a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `~`, unary minus.
    Negate,
    /// `=`
    Assign,
    /// `@`, ends the expression.
    EndOfLine,
    /// Non-negative decimal literal such as `42` or `3.25`.
    Number,
    /// Identifier such as `x` or `total_2`.
    Variable,
    /// Any character the scanner cannot classify.
    Invalid,
}

impl TokenKind {
    /// Classifies a character that starts neither a number nor an identifier.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Self {
        match ch {
            '+' => Self::Add,
            '-' => Self::Subtract,
            '*' => Self::Multiply,
            '/' => Self::Divide,
            '=' => Self::Assign,
            '@' => Self::EndOfLine,
            '~' => Self::Negate,
            _ => Self::Invalid,
        }
    }
}

/// A classified lexical unit and the source text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

/// Turns lines from a [`Console`] into tokens, one per call.
///
/// The lexer owns the current line and a cursor into it. Whenever the cursor
/// runs off the end of the line it prints the prompt and reads the next one,
/// so callers never see line boundaries, only the `@` end-of-line token.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     lexer::{Lexer, TokenKind},
///     terminal::Terminal,
/// };
///
/// let mut lexer = Lexer::new(Terminal::new("12.5 rate*".as_bytes(), Vec::new()), ">> ");
///
/// let number = lexer.next_token().unwrap();
/// assert_eq!((number.kind, number.text.as_str()), (TokenKind::Number, "12.5"));
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Variable);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Multiply);
/// ```
#[derive(Debug)]
pub struct Lexer<C> {
    console:    C,
    prompt:     String,
    /// The current line, terminator included.
    line:       Vec<char>,
    /// Index of the next character to read.
    cursor:     usize,
    /// Set by every read, cleared by `unread`; guards single-character
    /// pushback.
    can_unread: bool,
}

impl<C: Console> Lexer<C> {
    /// Creates a lexer that has not read any line yet; the first call to
    /// [`Lexer::next_token`] prompts.
    pub fn new(console: C, prompt: impl Into<String>) -> Self {
        Self { console,
               prompt: prompt.into(),
               line: Vec::new(),
               cursor: 0,
               can_unread: false }
    }

    /// Scans the next token, reading and prompting for new lines as needed.
    ///
    /// # Errors
    /// - [`Halt::EndOfInput`] when the input runs out before a token starts or
    ///   while the lexer is waiting for a new line.
    /// - [`Halt::Io`] when the console fails.
    pub fn next_token(&mut self) -> Result<Token, Halt> {
        let mut ch = self.next_char()?;
        while ch.is_whitespace() {
            ch = self.next_char()?;
        }

        let token = if ch.is_ascii_digit() {
            self.number(ch)?
        } else if ch.is_alphabetic() {
            self.identifier(ch)?
        } else {
            Token::new(TokenKind::from_symbol(ch), ch)
        };

        trace!(kind = ?token.kind, text = %token.text, "scanned token");
        Ok(token)
    }

    /// Discards the rest of the current line; the next read prompts for a new
    /// one.
    pub fn flush(&mut self) {
        self.cursor = self.line.len();
        self.can_unread = false;
    }

    /// The current line without its terminator.
    #[must_use]
    pub fn current_line(&self) -> String {
        let end = self.line.len().saturating_sub(1);
        self.line[..end].iter().collect()
    }

    /// One past the index of the last character read on the current line.
    #[must_use]
    pub const fn current_position(&self) -> usize {
        self.cursor
    }

    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console> Lexer<C> {
    /// Fetches the next character, prompting for a new line when the current
    /// one is exhausted.
    fn next_char(&mut self) -> Result<char, Halt> {
        if self.cursor >= self.line.len() {
            self.read_line()?;
        }
        let ch = self.line[self.cursor];
        self.cursor += 1;
        self.can_unread = true;
        Ok(ch)
    }

    fn read_line(&mut self) -> Result<(), Halt> {
        if !self.prompt.is_empty() {
            self.console.write(&self.prompt)?;
        }
        self.console.flush()?;

        let text = self.console.read_line()?.ok_or(Halt::EndOfInput)?;
        self.line = text.chars().chain(std::iter::once(LINE_TERMINATOR)).collect();
        self.cursor = 0;
        Ok(())
    }

    /// Puts the last character back. Only one character can be pushed back
    /// between reads.
    fn unread(&mut self) {
        debug_assert!(self.can_unread, "unread called twice without a read in between");
        self.cursor -= 1;
        self.can_unread = false;
    }

    /// Scans digits with at most one decimal point; `first` is already
    /// consumed.
    fn number(&mut self, first: char) -> Result<Token, Halt> {
        let mut text = String::new();
        let mut ch = first;
        while ch.is_ascii_digit() {
            text.push(ch);
            ch = self.next_char()?;
        }
        if ch == '.' {
            text.push(ch);
            ch = self.next_char()?;
            while ch.is_ascii_digit() {
                text.push(ch);
                ch = self.next_char()?;
            }
        }
        self.unread();
        Ok(Token::new(TokenKind::Number, text))
    }

    /// Scans a letter followed by letters, digits and underscores; `first` is
    /// already consumed.
    fn identifier(&mut self, first: char) -> Result<Token, Halt> {
        let mut text = String::new();
        let mut ch = first;
        while ch.is_alphabetic() || ch.is_ascii_digit() || ch == '_' {
            text.push(ch);
            ch = self.next_char()?;
        }
        self.unread();
        Ok(Token::new(TokenKind::Variable, text))
    }
}
