//! Calculadora CLI library
//!
//! Command-line harness for the calcular expression engine: one-shot
//! evaluation, a line-oriented REPL over stdin, and the terminal keypad
//! shell behind the `tui` feature.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
mod output;
pub mod repl;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Reporter};
pub use repl::{CommandOutcome, HarnessCommand, ReplSession};
