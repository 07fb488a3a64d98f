use std::io;

/// Ends a session instead of a single line.
#[derive(thiserror::Error, Debug)]
pub enum Halt {
    /// The user typed `exit`.
    #[error("exit requested")]
    Exit,
    /// The input stream has no more lines.
    #[error("end of input")]
    EndOfInput,
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
