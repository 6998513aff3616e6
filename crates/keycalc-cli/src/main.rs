//! Keycalc CLI: keypad calculator driven by key labels
//!
//! ## Usage
//!
//! ```bash
//! keycalc 5 + 3 =             # Prints 8
//! keycalc --trace 2 * 3 % =   # Display after every key
//! keycalc --script keys.txt   # Replay labels from a file
//! keycalc                     # Interactive session on stdin
//! ```

use clap::Parser;
use keycalc_cli::{
    collect_keys, load_engine_config, logging, Cli, CliConfig, CliResult, ColorChoice, KeyRunner,
    Verbosity,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let color = config.color.should_color();
    console::set_colors_enabled(color);
    logging::init(config.verbosity, color && io::stderr().is_terminal());
    debug!(?config, "configuration loaded");

    let keys = collect_keys(&cli.keys, cli.script.as_deref())?;
    let interactive = keys.is_empty() && cli.script.is_none();

    let mut runner = KeyRunner::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if interactive {
        runner.interactive(io::stdin().lock(), &mut out)
    } else {
        runner.replay(&keys, &mut out)
    }
}

/// Merges flags, the YAML config file and `--digits` into one config
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut engine = match &cli.config {
        Some(path) => load_engine_config(path)?,
        None => keycalc::config::EngineConfig::default(),
    };
    if let Some(digits) = cli.digits {
        engine = engine.with_significant_digits(digits);
    }
    engine.validate()?;

    Ok(CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(ColorChoice::from(cli.color))
        .with_trace(cli.trace)
        .with_json(cli.json)
        .with_strict(cli.strict)
        .with_engine(engine))
}
