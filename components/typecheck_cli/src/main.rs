//! Type-check CLI
//!
//! Entry point for the `typecheck` binary. Parses CLI arguments and
//! delegates to the Checker.

use std::process::ExitCode;

use clap::Parser as ClapParser;
use type_checks::NumericMode;
use typecheck_cli::{Checker, Cli, CliResult};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every `--only` check passed (always true without one)
fn run(cli: Cli) -> CliResult<bool> {
    let mut checker = Checker::new(NumericMode::from(cli.strict))
        .with_formats(cli.formats)
        .with_json(cli.json);

    if cli.repl {
        typecheck_cli::repl::run_repl(&mut checker)?;
        return Ok(true);
    }

    if cli.values.is_empty() {
        println!("Usage:");
        println!("  typecheck <VALUE>...          Classify values as strings");
        println!("  typecheck --json <JSON>...    Classify JSON values");
        println!("  typecheck --repl              Start interactive session");
        println!();
        println!("Run 'typecheck --help' for more options.");
        return Ok(true);
    }

    let mut all_passed = true;
    for raw in &cli.values {
        match cli.only {
            Some(check) => {
                let value = checker.parse_input(raw)?;
                let passed = checker.check(&value, check);
                println!("{}\t{}", raw, passed);
                all_passed &= passed;
            }
            None => println!("{}", checker.report(raw)?),
        }
    }
    Ok(all_passed)
}
