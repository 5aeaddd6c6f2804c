//! Runtime configuration resolved from the command line.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// How much the harness says on stderr.
///
/// Levels are ordered, so "at least verbose" is an ordinary comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Suppress the state echo and informational output
    Quiet,
    /// Default output
    #[default]
    Normal,
    /// Extra output
    Verbose,
    /// Maximum output
    Debug,
}

impl Verbosity {
    /// Resolves the `-v` count and `--quiet` flag into a level.
    ///
    /// Quiet wins over any number of `-v`s.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub fn is_quiet(self) -> bool {
        self == Self::Quiet
    }

    /// Check if verbose or higher
    #[must_use]
    pub fn is_verbose(self) -> bool {
        self >= Self::Verbose
    }

    /// Check if debug mode
    #[must_use]
    pub fn is_debug(self) -> bool {
        self == Self::Debug
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when stdout feeds a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the actual output stream
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Settings shared by every subcommand, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Output format for state and results
    pub format: OutputFormat,
}
