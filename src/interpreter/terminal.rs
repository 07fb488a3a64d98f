use std::io::{self, BufRead, Write};

/// The line-oriented input and text output a session talks to.
///
/// The lexer reads lines through it and writes the prompt; the evaluator
/// writes results and diagnostics. Implemented by [`Terminal`] for any
/// reader/writer pair.
pub trait Console {
    /// Reads the next line without its terminator.
    ///
    /// # Returns
    /// - `Ok(Some(line))`: another line was available.
    /// - `Ok(None)`: the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes `text` as is.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Pushes buffered output to the sink.
    fn flush(&mut self) -> io::Result<()>;
}

/// A [`Console`] over a buffered reader and a writer.
///
/// # Example
/// ```
/// use deskcalc::interpreter::terminal::{Console, Terminal};
///
/// let mut terminal = Terminal::new("1 2 +\r\n".as_bytes(), Vec::new());
/// assert_eq!(terminal.read_line().unwrap().as_deref(), Some("1 2 +"));
/// assert_eq!(terminal.read_line().unwrap(), None);
///
/// terminal.write_line("3").unwrap();
/// assert_eq!(terminal.output(), b"3\n");
/// ```
#[derive(Debug)]
pub struct Terminal<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far, for sinks that keep it.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Splits the terminal back into its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, which the
    /// lexer classifies as an invalid token.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
