use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use deskcalc::{
    config::{Config, DEFAULT_PROMPT},
    run_session,
    util::logger::{self, LogLevel},
};

/// deskcalc is an interactive reverse Polish calculator. End each expression
/// with `@`; type `exit` to leave.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from this file instead of standard input.
    file: Option<PathBuf>,

    /// Suppresses the prompt, for piped input.
    #[arg(short, long)]
    quiet: bool,

    /// Text printed before each input line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Logs more to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        let config = Config { prompt: self.prompt.clone(),
                              ..Config::default() };
        if self.quiet { config.quiet() } else { config }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(LogLevel::from_verbosity(args.verbose));

    let config = args.config();
    let output = io::stdout().lock();
    let outcome = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => run_session(BufReader::new(file), output, config),
            Err(e) => {
                eprintln!("Failed to open '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => run_session(io::stdin().lock(), output, config),
    };

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("deskcalc: {e}");
            ExitCode::FAILURE
        },
    }
}
