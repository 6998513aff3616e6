//! Key replay and interactive sessions

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use console::style;
use keycalc::engine::CalculatorEngine;
use keycalc::key::KeyEvent;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// Words that end an interactive session
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Gathers labels from the command line, then from the script file
pub fn collect_keys(keys: &[String], script: Option<&Path>) -> CliResult<Vec<String>> {
    let mut labels = keys.to_vec();
    if let Some(path) = script {
        let text = std::fs::read_to_string(path)?;
        labels.extend(text.split_whitespace().map(str::to_string));
        info!(path = %path.display(), count = labels.len(), "loaded key script");
    }
    Ok(labels)
}

/// Drives one engine from CLI input
#[derive(Debug)]
pub struct KeyRunner {
    engine: CalculatorEngine,
    config: CliConfig,
    color: bool,
    pressed: usize,
}

impl KeyRunner {
    /// Creates a runner; the engine configuration is validated here
    pub fn new(config: CliConfig) -> CliResult<Self> {
        let engine = CalculatorEngine::try_with_config(config.engine.clone())?;
        let color = config.color.should_color();
        Ok(Self {
            engine,
            config,
            color,
            pressed: 0,
        })
    }

    /// The engine being driven
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Number of labels handled so far
    #[must_use]
    pub fn pressed(&self) -> usize {
        self.pressed
    }

    /// Presses one label.
    ///
    /// Returns the new display, or `None` if the label was ignored. In
    /// strict mode an unknown label is an error.
    pub fn press(&mut self, label: &str) -> CliResult<Option<String>> {
        self.pressed += 1;
        if self.config.strict && KeyEvent::from_label(label).is_err() {
            return Err(CliError::unknown_key(label, self.pressed));
        }
        let display = self.engine.press(label).map(str::to_string);
        if display.is_none() {
            warn!(label, position = self.pressed, "ignoring unknown key");
        }
        Ok(display)
    }

    /// Replays `labels`, then writes the final display (or JSON snapshot)
    pub fn replay<W: Write>(&mut self, labels: &[String], out: &mut W) -> CliResult<()> {
        for label in labels {
            let shown = self.press(label)?;
            if self.config.trace {
                let text = shown.unwrap_or_else(|| "(ignored)".to_string());
                writeln!(out, "{label}\t{}", self.paint(&text))?;
            }
        }
        self.finish(out)
    }

    /// Reads labels line by line until EOF or a quit word, writing the
    /// display after every line
    pub fn interactive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if QUIT_WORDS.contains(&line) {
                break;
            }
            for label in line.split_whitespace() {
                if let Err(err) = self.press(label) {
                    writeln!(out, "{err}")?;
                }
            }
            writeln!(out, "{}", self.paint(self.engine.display()))?;
        }
        if self.config.json {
            self.finish(out)?;
        }
        Ok(())
    }

    fn finish<W: Write>(&self, out: &mut W) -> CliResult<()> {
        if self.config.json {
            writeln!(out, "{}", self.engine.snapshot().to_json()?)?;
        } else if !self.config.trace {
            writeln!(out, "{}", self.paint(self.engine.display()))?;
        }
        Ok(())
    }

    fn paint(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        if text == self.engine.config().error_text {
            style(text).red().bold().to_string()
        } else {
            style(text).bold().to_string()
        }
    }
}
