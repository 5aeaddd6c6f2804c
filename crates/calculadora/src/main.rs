//! Calculadora CLI: command-line harness for the calcular expression engine
//!
//! ## Usage
//!
//! ```bash
//! calculadora eval "2+3*4"         # One-shot evaluation
//! calculadora repl < session.calc  # Line-oriented harness on stdin
//! calculadora tui                  # Terminal keypad
//! ```

use calcular::core::evaluator::evaluate_str;
use calcular::engine::format_value;
use calculadora::{Cli, CliConfig, CliResult, Commands, EvalArgs, OutputFormat, Verbosity};
use clap::Parser;
use std::process::ExitCode;

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

    // Build configuration from CLI args
    let config = build_config(&cli);

    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args),
        Commands::Repl => calculadora::repl::run(config, std::io::stdin().lock()),
        Commands::Tui => run_tui(),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig {
        verbosity: Verbosity::from_flags(cli.verbose, cli.quiet),
        color: cli.color.into(),
        format: cli.format.into(),
    }
}

fn run_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let value = evaluate_str(&args.expression)?;

    match config.format {
        OutputFormat::Text => println!("{}", format_value(value)),
        OutputFormat::Json => {
            let line = serde_json::json!({
                "expression": args.expression,
                "result": value,
            });
            println!("{line}");
        }
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui() -> CliResult<()> {
    calcular::tui::run().map_err(|e| calculadora::CliError::terminal(e.to_string()))
}

#[cfg(not(feature = "tui"))]
fn run_tui() -> CliResult<()> {
    Err(calculadora::CliError::terminal(
        "terminal keypad not built in. Rebuild with --features tui",
    ))
}
