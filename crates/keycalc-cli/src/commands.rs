//! CLI command definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Keycalc: keypad calculator driven by key labels
///
/// Keys are the labels printed on a calculator keypad: 0-9, 00, ., +, -, *,
/// /, =, %, C and AC. Without keys or a script, keys are read interactively
/// from stdin.
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Key labels to replay, e.g. `5 + 3 =`
    pub keys: Vec<String>,

    /// Read whitespace-separated key labels from a file
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Engine configuration file (YAML)
    #[arg(short, long, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Significant digits shown on the display
    #[arg(long)]
    pub digits: Option<usize>,

    /// Print the display after every key
    #[arg(short, long)]
    pub trace: bool,

    /// Print the final engine snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail on unknown key labels instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_keys() {
        let cli = Cli::try_parse_from(["keycalc", "5", "+", "3", "="]).unwrap();
        assert_eq!(cli.keys, vec!["5", "+", "3", "="]);
        assert!(!cli.trace);
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_minus_is_a_key_not_a_flag() {
        let cli = Cli::try_parse_from(["keycalc", "8", "-", "5", "="]).unwrap();
        assert_eq!(cli.keys, vec!["8", "-", "5", "="]);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "keycalc", "--trace", "--json", "--strict", "--digits", "8", "-vv", "1",
        ])
        .unwrap();
        assert!(cli.trace);
        assert!(cli.json);
        assert!(cli.strict);
        assert_eq!(cli.digits, Some(8));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.keys, vec!["1"]);
    }

    #[test]
    fn test_color_arg_conversion() {
        use crate::config::ColorChoice;
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
    }
}
