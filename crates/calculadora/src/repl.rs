//! Line-oriented harness driving the expression engine
//!
//! Each stdin line is one harness command: a keypad action (`digit 5`,
//! `op +`, `eval`), a state query (`total`, `current`, `state`), or
//! `quit`. Keypad actions echo both display lines afterwards unless the
//! session is quiet, so a scripted transcript reads like the calculator
//! screen. Engine errors and unknown commands are diagnostics on stderr,
//! never session failures.

use std::io::{self, BufRead, Write};

use calcular::core::{EvalError, Operator};
use calcular::engine::ExpressionEngine;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, Reporter};

/// One line of the harness command language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessCommand {
    /// Append a digit or decimal point to the entry
    Digit(char),
    /// Commit the entry with an operator
    Op(Operator),
    /// Reset both expression lines
    Clear,
    /// Square the entry
    Square,
    /// Square root of the entry
    Sqrt,
    /// Evaluate the accumulated expression
    Eval,
    /// Print the total line
    Total,
    /// Print the current line
    Current,
    /// Print both display lines
    State,
    /// End the session
    Quit,
}

impl HarnessCommand {
    /// Parse one line of harness input
    ///
    /// Keywords are case-insensitive. Blank lines parse to `None`; an
    /// unrecognized command or argument is returned as a diagnostic
    /// message for the caller to report.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many arguments: '{}'", line.trim()));
        }

        let keyword = keyword.to_ascii_lowercase();
        let command = match (keyword.as_str(), arg) {
            ("digit", Some(value)) => parse_digit(value)?,
            ("op", Some(value)) => parse_operator(value)?,
            ("digit" | "op", None) => return Err(format!("{keyword} expects an argument")),
            ("clear", None) => Self::Clear,
            ("square", None) => Self::Square,
            ("sqrt", None) => Self::Sqrt,
            ("eval" | "=", None) => Self::Eval,
            ("total", None) => Self::Total,
            ("current", None) => Self::Current,
            ("state", None) => Self::State,
            ("quit" | "exit", None) => Self::Quit,
            (
                "clear" | "square" | "sqrt" | "eval" | "=" | "total" | "current" | "state"
                | "quit" | "exit",
                Some(extra),
            ) => return Err(format!("{keyword} takes no argument, got '{extra}'")),
            (other, _) => return Err(format!("unknown command: '{other}'")),
        };
        Ok(Some(command))
    }
}

fn parse_digit(value: &str) -> Result<HarnessCommand, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ ('0'..='9' | '.')), None) => Ok(HarnessCommand::Digit(c)),
        _ => Err(format!("digit expects 0-9 or '.', got '{value}'")),
    }
}

fn parse_operator(value: &str) -> Result<HarnessCommand, String> {
    value
        .parse::<Operator>()
        .map(HarnessCommand::Op)
        .map_err(|_| format!("op expects one of + - * /, got '{value}'"))
}

/// Result of applying one harness command
#[derive(Debug, Default)]
pub struct CommandOutcome {
    /// Lines to print on stdout
    pub lines: Vec<String>,
    /// Engine error to report as a diagnostic
    pub error: Option<EvalError>,
    /// Session should end
    pub quit: bool,
}

/// Harness session: one engine plus the output policy around it
#[derive(Debug)]
pub struct ReplSession {
    engine: ExpressionEngine,
    config: CliConfig,
}

impl ReplSession {
    /// Create a session with a cleared engine
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        Self {
            engine: ExpressionEngine::new(),
            config,
        }
    }

    /// Read access to the engine for assertions and shells
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Apply one command and collect what it should print
    pub fn apply(&mut self, command: HarnessCommand) -> CommandOutcome {
        let mut outcome = CommandOutcome::default();
        match command {
            HarnessCommand::Digit(value) => {
                self.engine.push_digit(value);
                self.echo_state(&mut outcome);
            }
            HarnessCommand::Op(op) => {
                self.engine.push_operator(op);
                self.echo_state(&mut outcome);
            }
            HarnessCommand::Clear => {
                self.engine.clear();
                self.echo_state(&mut outcome);
            }
            HarnessCommand::Square => {
                outcome.error = self.engine.square().err();
                self.echo_state(&mut outcome);
            }
            HarnessCommand::Sqrt => {
                outcome.error = self.engine.sqrt().err();
                self.echo_state(&mut outcome);
            }
            HarnessCommand::Eval => {
                outcome.error = self.engine.evaluate().err();
                self.echo_state(&mut outcome);
            }
            HarnessCommand::Total => outcome.lines.push(self.engine.total_display()),
            HarnessCommand::Current => outcome.lines.push(self.engine.current_display()),
            HarnessCommand::State => self.push_state(&mut outcome),
            HarnessCommand::Quit => outcome.quit = true,
        }
        outcome
    }

    fn echo_state(&self, outcome: &mut CommandOutcome) {
        if !self.config.verbosity.is_quiet() {
            self.push_state(outcome);
        }
    }

    fn push_state(&self, outcome: &mut CommandOutcome) {
        match self.config.format {
            OutputFormat::Text => {
                outcome
                    .lines
                    .push(format!("total: {}", self.engine.total_display()));
                outcome
                    .lines
                    .push(format!("current: {}", self.engine.current_display()));
            }
            OutputFormat::Json => {
                let state = serde_json::json!({
                    "total": self.engine.total_display(),
                    "current": self.engine.current_display(),
                });
                outcome.lines.push(state.to_string());
            }
        }
    }
}

/// Run the harness loop over `input` until EOF or `quit`
///
/// Diagnostics never end the session; only an I/O failure does.
pub fn run<R: BufRead>(config: CliConfig, input: R) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    if config.verbosity.is_verbose() {
        reporter.info("reading harness commands from stdin (quit or EOF ends the session)");
    }

    let mut session = ReplSession::new(config);
    let mut out = io::stdout().lock();

    for line in input.lines() {
        let line = line?;
        let command = match HarnessCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                reporter.warning(&message);
                continue;
            }
        };
        if config.verbosity.is_debug() {
            reporter.info(&format!("applying {command:?}"));
        }

        let outcome = session.apply(command);
        for text in &outcome.lines {
            writeln!(out, "{text}")?;
        }
        out.flush()?;
        if let Some(error) = outcome.error {
            reporter.failure(&error.to_string());
        }
        if outcome.quit {
            break;
        }
    }
    Ok(())
}
