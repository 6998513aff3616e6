//! CLI configuration

use crate::error::{CliError, CliResult};
use keycalc::config::EngineConfig;
use std::path::Path;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - info logs
    Verbose,
    /// Debug - one line per key
    Debug,
    /// Trace - everything, including ignored keys
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Print the display after every key
    pub trace: bool,
    /// Print the final snapshot as JSON
    pub json: bool,
    /// Unknown keys are errors
    pub strict: bool,
    /// Engine settings
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            trace: false,
            json: false,
            strict: false,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set per-key tracing
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set JSON output
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Set strict key checking
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set engine settings
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

/// Parses engine settings from YAML text; missing keys keep their defaults
pub fn parse_engine_config(yaml: &str) -> CliResult<EngineConfig> {
    if yaml.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    let config: EngineConfig = serde_yaml_ng::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Loads engine settings from a YAML file
pub fn load_engine_config(path: &Path) -> CliResult<EngineConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CliError::config(format!("cannot read {}: {e}", path.display()))
    })?;
    parse_engine_config(&text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags() {
            assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
            assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(false, 9), Verbosity::Trace);
        }

        #[test]
        fn test_filter_directive() {
            assert_eq!(Verbosity::Quiet.filter_directive(), "error");
            assert_eq!(Verbosity::Normal.filter_directive(), "warn");
            assert_eq!(Verbosity::Debug.filter_directive(), "debug");
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_default_color() {
            assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        }

        #[test]
        fn test_should_color_always() {
            assert!(ColorChoice::Always.should_color());
        }

        #[test]
        fn test_should_color_never() {
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod config_tests {
        use super::*;
        use std::io::Write;

        #[test]
        fn test_default_config() {
            let config = CliConfig::default();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert!(!config.trace);
            assert!(!config.json);
            assert!(!config.strict);
            assert_eq!(config.engine, EngineConfig::default());
        }

        #[test]
        fn test_builders() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_color(ColorChoice::Never)
                .with_trace(true)
                .with_json(true)
                .with_strict(true)
                .with_engine(EngineConfig::new().with_significant_digits(6));
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.color, ColorChoice::Never);
            assert!(config.trace && config.json && config.strict);
            assert_eq!(config.engine.significant_digits, 6);
        }

        #[test]
        fn test_parse_engine_config_partial() {
            let config = parse_engine_config("significant_digits: 10\nerror_text: \"E\"\n").unwrap();
            assert_eq!(config.significant_digits, 10);
            assert_eq!(config.error_text, "E");
            assert_eq!(config.tape_capacity, 100);
        }

        #[test]
        fn test_parse_engine_config_empty() {
            assert_eq!(parse_engine_config("").unwrap(), EngineConfig::default());
        }

        #[test]
        fn test_parse_engine_config_invalid_value() {
            let err = parse_engine_config("significant_digits: 40\n").unwrap_err();
            assert!(matches!(err, CliError::Calc(_)));
        }

        #[test]
        fn test_parse_engine_config_bad_yaml() {
            let err = parse_engine_config("significant_digits: [").unwrap_err();
            assert!(matches!(err, CliError::Yaml(_)));
        }

        #[test]
        fn test_load_engine_config_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "tape_capacity: 3").unwrap();
            let config = load_engine_config(file.path()).unwrap();
            assert_eq!(config.tape_capacity, 3);
        }

        #[test]
        fn test_load_engine_config_missing_file() {
            let err = load_engine_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
            assert!(matches!(err, CliError::Config { .. }));
        }
    }
}
