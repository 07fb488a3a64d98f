use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// How much the calculator logs to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maps the number of `-v` flags to a level, starting from `Warn`.
    ///
    /// ## Example
    /// ```
    /// use deskcalc::util::logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_verbosity(0), LogLevel::Warn);
    /// assert_eq!(LogLevel::from_verbosity(2), LogLevel::Debug);
    /// assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
    /// ```
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Installs the global subscriber: `LEVEL message` lines on stderr, no
/// timestamps, no module paths.
///
/// Call once, at startup.
pub fn init(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
                                                .without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .compact()
                                                .with_filter(filter);

    Registry::default().with(layer).init();
}
