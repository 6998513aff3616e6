//! Keycalc CLI Library
//!
//! Command-line front end for the keycalc engine: key replay, scripts,
//! an interactive session, YAML engine settings and log setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, ColorArg};
pub use config::{load_engine_config, parse_engine_config, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{collect_keys, KeyRunner};
