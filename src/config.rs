/// Prompt printed before every line the lexer reads.
pub const DEFAULT_PROMPT: &str = ">> ";
/// Message printed when the session ends.
pub const DEFAULT_FAREWELL: &str = "Bye";
/// Variable that receives results until an assignment names another one.
pub const DEFAULT_TARGET: &str = "it";

/// Presentation settings for a calculator session.
///
/// The binary builds one from its command line; library users usually start
/// from [`Config::default`] and override single fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Printed before each input line. Empty for piped, prompt-less sessions.
    pub prompt:         String,
    /// Printed on `exit` and at the end of input.
    pub farewell:       String,
    /// Initial assignment target.
    pub default_target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { prompt:         DEFAULT_PROMPT.to_string(),
               farewell:       DEFAULT_FAREWELL.to_string(),
               default_target: DEFAULT_TARGET.to_string(), }
    }
}

impl Config {
    /// Returns the same configuration without a prompt.
    ///
    /// # Example
    /// ```
    /// use deskcalc::config::Config;
    ///
    /// let config = Config::default().quiet();
    /// assert!(config.prompt.is_empty());
    /// assert_eq!(config.farewell, "Bye");
    /// ```
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.prompt.clear();
        self
    }
}
